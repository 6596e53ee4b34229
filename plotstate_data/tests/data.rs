// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `plotstate_data` crate.
//!
//! These cover the two properties the interaction layer leans on: color
//! assignment that depends only on first-seen order, and structural equality
//! that is reflexive, symmetric and strict about key sets.

use plotstate_data::{
    BaseColor, CategoryColorMap, DataPoint, Dataset, Palette, Value, deep_equal, records_equal,
};

#[test]
fn color_assignment_depends_only_on_first_seen_order() {
    let palette = Palette::new(["a", "b", "c"]).unwrap();

    let once = CategoryColorMap::build(["x", "y", "z", "w"], &palette);
    let repeated = CategoryColorMap::build(["x", "x", "y", "x", "z", "y", "w", "w"], &palette);

    for name in ["x", "y", "z", "w"] {
        assert_eq!(once.get(name), repeated.get(name), "color of {name}");
    }
    assert_eq!(once.get("x"), Some(&"a"));
    assert_eq!(once.get("y"), Some(&"b"));
    assert_eq!(once.get("z"), Some(&"c"));
    assert_eq!(once.get("w"), Some(&"a"));
    assert_eq!(repeated.len(), 4);
}

#[test]
fn color_assignment_is_not_sorted() {
    let palette = Palette::new([BaseColor::Blue, BaseColor::Cyan]).unwrap();
    let colors = CategoryColorMap::build(["zeta", "alpha"], &palette);
    assert_eq!(colors.get("zeta"), Some(&BaseColor::Blue));
    assert_eq!(colors.get("alpha"), Some(&BaseColor::Cyan));
}

#[test]
fn rebuilding_with_a_new_order_reassigns() {
    let palette = Palette::default();
    let before = CategoryColorMap::build(["sales", "profit"], &palette);
    let after = CategoryColorMap::build(["profit", "sales"], &palette);
    assert_eq!(before.get("sales"), after.get("profit"));
    assert_eq!(before.get("profit"), after.get("sales"));
}

fn samples() -> Vec<Value> {
    vec![
        Value::Null,
        Value::from(true),
        Value::from(0),
        Value::from(f64::NAN),
        Value::from("Jan"),
        Value::List(vec![Value::from(1), Value::Null]),
        Value::from(DataPoint::new().with("m", "Jan").with("v", 10)),
        Value::from(DataPoint::new().with("m", "Jan").with("v", Value::Null)),
        Value::from(DataPoint::new().with("m", "Jan")),
    ]
}

#[test]
fn deep_equal_is_reflexive() {
    for v in samples() {
        assert!(deep_equal(&v, &v), "{v:?} should equal itself");
        assert!(deep_equal(&v, &v.clone()), "{v:?} should equal its clone");
    }
}

#[test]
fn deep_equal_is_symmetric() {
    let values = samples();
    for a in &values {
        for b in &values {
            assert_eq!(deep_equal(a, b), deep_equal(b, a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn different_key_sets_are_unequal_even_when_shared_keys_match() {
    let a = DataPoint::new().with("m", "Jan").with("v", 10);
    let b = DataPoint::new()
        .with("m", "Jan")
        .with("v", 10)
        .with("extra", Value::Null);
    assert!(!records_equal(&a, &b));
    assert!(!records_equal(&b, &a));
}

#[test]
fn dataset_flat_series_rule() {
    let data = Dataset::new(vec![
        DataPoint::new().with("m", "Jan").with("v", 10),
        DataPoint::new().with("m", "Feb").with("v", 10),
    ]);
    assert!(data.has_single_distinct_value("v"));
    assert!(!data.has_single_distinct_value("m"));
}

#[cfg(feature = "serde")]
#[test]
fn records_and_palettes_load_from_json() {
    let row: DataPoint = serde_json::from_str(r#"{"m":"Jan","v":10,"note":null}"#).unwrap();
    assert_eq!(row.get("v"), Some(&Value::from(10)));
    assert_eq!(row.get("note"), Some(&Value::Null));

    let palette: Palette<BaseColor> = serde_json::from_str(r#"["emerald","rose"]"#).unwrap();
    assert_eq!(palette.first(), &BaseColor::Emerald);

    assert!(serde_json::from_str::<Palette<BaseColor>>("[]").is_err());
}
