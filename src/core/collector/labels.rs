//! Correlates table row indices into per-interface label sets.

use std::collections::HashMap;

/// Number of label dimensions gathered from the label-table walks
/// (interface name, interface description).
pub const LABEL_DIMENSIONS: usize = 2;

/// Label values accumulated per interface row index during one poll.
///
/// Rows are created lazily on the first label-table hit for an index, with
/// every dimension defaulted to the empty string; later hits fill their
/// positional slot. Dimensions may arrive in any order and each write is
/// idempotent per (index, dimension).
///
/// Correlation relies on the device using identical trailing row indices in
/// every walked table within a single poll. This is assumed, not validated;
/// a device renumbering interfaces mid-poll can attribute labels to the
/// wrong interface.
#[derive(Debug, Default)]
pub struct InterfaceLabels {
    rows: HashMap<String, Vec<String>>,
}

impl InterfaceLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` at slot `dimension` for `row_index`. Out-of-range
    /// dimensions are ignored.
    pub fn record(&mut self, row_index: &str, dimension: usize, value: String) {
        let row = self
            .rows
            .entry(row_index.to_string())
            .or_insert_with(|| vec![String::new(); LABEL_DIMENSIONS]);

        if let Some(slot) = row.get_mut(dimension) {
            *slot = value;
        }
    }

    /// Returns the full label set for `row_index`. An index never seen in a
    /// label walk yields all-empty labels of the fixed arity, never a
    /// missing set.
    pub fn lookup(&self, row_index: &str) -> Vec<String> {
        self.rows
            .get(row_index)
            .cloned()
            .unwrap_or_else(|| vec![String::new(); LABEL_DIMENSIONS])
    }

    /// Number of distinct row indices seen so far.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creates_row_with_defaults() {
        let mut labels = InterfaceLabels::new();
        labels.record("9", 0, "ge-0/0/0".to_string());

        assert_eq!(labels.lookup("9"), vec!["ge-0/0/0".to_string(), String::new()]);
    }

    #[test]
    fn test_dimensions_fill_independently_in_any_order() {
        let mut labels = InterfaceLabels::new();
        labels.record("9", 1, "uplink".to_string());
        labels.record("9", 0, "ge-0/0/0".to_string());

        assert_eq!(
            labels.lookup("9"),
            vec!["ge-0/0/0".to_string(), "uplink".to_string()]
        );
    }

    #[test]
    fn test_lookup_unseen_index_yields_empty_labels() {
        let labels = InterfaceLabels::new();
        assert_eq!(labels.lookup("528"), vec![String::new(), String::new()]);
    }

    #[test]
    fn test_distinct_indices_never_share_slots() {
        let mut labels = InterfaceLabels::new();
        labels.record("1", 0, "lo0".to_string());
        labels.record("2", 0, "ge-0/0/1".to_string());

        assert_eq!(labels.len(), 2);
        assert_eq!(labels.lookup("1")[0], "lo0");
        assert_eq!(labels.lookup("2")[0], "ge-0/0/1");
    }

    #[test]
    fn test_repeated_write_is_idempotent() {
        let mut labels = InterfaceLabels::new();
        labels.record("9", 0, "ge-0/0/0".to_string());
        labels.record("9", 0, "ge-0/0/0".to_string());

        assert_eq!(labels.len(), 1);
        assert_eq!(labels.lookup("9")[0], "ge-0/0/0");
    }

    #[test]
    fn test_out_of_range_dimension_is_ignored() {
        let mut labels = InterfaceLabels::new();
        labels.record("9", LABEL_DIMENSIONS, "junk".to_string());

        assert_eq!(labels.lookup("9"), vec![String::new(), String::new()]);
    }
}
