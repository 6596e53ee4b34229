// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural equality for values and records.
//!
//! This is what decides whether a clicked shape is "the active point". It never
//! panics: absent fields, nulls and mismatched shapes simply compare unequal.

use crate::value::{DataPoint, Value};

/// Structural equality over [`Value`]s.
///
/// - Primitives compare by value. Numbers use `==`, except that `NaN` equals
///   `NaN` so that the relation stays reflexive.
/// - Lists are equal when they have the same length and pairwise equal items.
/// - Records are equal when they have identical key sets and every value is
///   recursively equal.
/// - Values of different kinds are never equal (`Null` is not `false`, `"1"` is
///   not `1`).
#[must_use]
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::List(a), Value::List(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| deep_equal(a, b))
        }
        (Value::Record(a), Value::Record(b)) => records_equal(a, b),
        _ => false,
    }
}

/// Structural equality over records.
///
/// Key sets must match exactly; a key present on one side only makes the
/// records unequal even if all shared keys agree.
#[must_use]
pub fn records_equal(a: &DataPoint, b: &DataPoint) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().all(|(key, left)| match b.get(key) {
        Some(right) => deep_equal(left, right),
        None => false,
    })
}

/// Structural equality over optional records, where `None` is "nothing active".
///
/// Two `None`s are equal; `None` never equals a record.
#[must_use]
pub fn points_equal(a: Option<&DataPoint>, b: Option<&DataPoint>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => records_equal(a, b),
        _ => false,
    }
}
