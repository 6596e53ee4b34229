// Copyright 2025 the Plotstate Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::category::Category;
use crate::equal::deep_equal;
use crate::value::{DataPoint, Value};

/// The rows a chart is drawn from.
///
/// Rows are kept in input order; nothing here sorts or reindexes them.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dataset {
    rows: Vec<DataPoint>,
}

impl Dataset {
    /// Wraps a list of rows.
    #[must_use]
    pub fn new(rows: Vec<DataPoint>) -> Self {
        Self { rows }
    }

    /// The rows in input order.
    #[must_use]
    pub fn rows(&self) -> &[DataPoint] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.rows.get(index)
    }

    /// Distinct values of `key`, first-seen, over the rows that have the field.
    ///
    /// Rows without the field are skipped; an explicit `null` counts as a value.
    #[must_use]
    pub fn distinct_values(&self, key: &str) -> Vec<&Value> {
        let mut seen: Vec<&Value> = Vec::new();
        for value in self.rows.iter().filter_map(|row| row.get(key)) {
            if !seen.iter().any(|known| deep_equal(known, value)) {
                seen.push(value);
            }
        }
        seen
    }

    /// The flat-series rule: `true` if `key` takes at most one distinct value.
    ///
    /// A flat series renders as a single visual level, so its one point and
    /// its legend entry are treated as the same selectable thing.
    #[must_use]
    pub fn has_single_distinct_value(&self, key: &str) -> bool {
        let mut first: Option<&Value> = None;
        for value in self.rows.iter().filter_map(|row| row.get(key)) {
            match first {
                None => first = Some(value),
                Some(known) if deep_equal(known, value) => {}
                Some(_) => return false,
            }
        }
        true
    }

    /// Sum of the numeric values of `key`; non-numeric and absent fields are skipped.
    #[must_use]
    pub fn sum(&self, key: &str) -> f64 {
        self.rows
            .iter()
            .filter_map(|row| row.get(key).and_then(Value::as_f64))
            .sum()
    }

    /// First-seen distinct string values of `key`, as categories.
    ///
    /// Numbers and booleans are rendered with their display form so that
    /// numeric labels still name a slice.
    #[must_use]
    pub fn first_seen(&self, key: &str) -> Vec<Category> {
        let mut out: Vec<Category> = Vec::new();
        for row in &self.rows {
            let Some(name) = row.get(key).and_then(category_name) else {
                continue;
            };
            if !out.iter().any(|c| c.as_str() == name) {
                out.push(Category::new(name));
            }
        }
        out
    }
}

impl From<Vec<DataPoint>> for Dataset {
    fn from(rows: Vec<DataPoint>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<DataPoint> for Dataset {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Display name of a value when it is used as a category label.
///
/// Returns `None` for null and structured values.
#[must_use]
pub fn category_name(value: &Value) -> Option<String> {
    use alloc::string::ToString;

    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::List(_) | Value::Record(_) => None,
    }
}
