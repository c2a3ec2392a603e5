use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Scalar results keyed by scenario label, e.g. `h_RR_modeII`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabeledValues {
    values: BTreeMap<String, f64>,
}

impl LabeledValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: f64) {
        self.values.insert(label.into(), value);
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.values.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(label, value)| (label.as_str(), *value))
    }

    /// Smallest value and its label; `None` when empty.
    pub fn min(&self) -> Option<(&str, f64)> {
        self.iter().min_by(|lhs, rhs| lhs.1.total_cmp(&rhs.1))
    }

    /// Largest value and its label; `None` when empty.
    pub fn max(&self) -> Option<(&str, f64)> {
        self.iter().max_by(|lhs, rhs| lhs.1.total_cmp(&rhs.1))
    }

    /// Applies `f` to every value, keeping the labels.
    pub fn map_values(&self, f: impl Fn(f64) -> f64) -> Self {
        self.iter().map(|(label, value)| (label, f(value))).collect()
    }
}

impl<'a> FromIterator<(&'a str, f64)> for LabeledValues {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(label, value)| (label.to_string(), value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_and_max_report_labels() {
        let values: LabeledValues = [("b", 2.0), ("a", 5.0), ("c", -1.0)].into_iter().collect();
        assert_eq!(values.min(), Some(("c", -1.0)));
        assert_eq!(values.max(), Some(("a", 5.0)));
    }

    #[test]
    fn empty_has_no_extrema() {
        let values = LabeledValues::new();
        assert!(values.min().is_none());
        assert!(values.max().is_none());
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut values = LabeledValues::new();
        values.insert("h_modeII", 1.5);
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"{"h_modeII":1.5}"#);
    }
}
