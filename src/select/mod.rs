//! Key-column selection.
//!
//! A run accepts one or more column groups ("colsets"), each naming the
//! attribute columns whose combined values identify a zone category. Groups
//! arrive from an input source (the interactive prompt or `--columns` flags),
//! are validated against the dataset's columns, and are flattened into one
//! deduplicated projection list for missing-value normalization.

mod collector;
mod prompt;

pub use collector::{ColumnCollector, Offer};
pub use prompt::collect_interactive;

use crate::error::{Error, Result};
use crate::record::RecordSet;

/// An ordered group of key columns, validated against a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGroup(Vec<String>);

impl ColumnGroup {
    pub fn columns(&self) -> &[String] {
        &self.0
    }
}

/// Validates that every candidate column exists in the dataset.
///
/// Returns the candidates unchanged as an accepted group; order is preserved
/// and duplicates are kept (dedup happens only when flattening for
/// projection). Pure: no state is recorded here.
pub fn validate(set: &RecordSet, candidates: &[String]) -> Result<ColumnGroup> {
    let unknown: Vec<String> = candidates
        .iter()
        .filter(|c| !set.has_column(c))
        .cloned()
        .collect();

    if unknown.is_empty() {
        Ok(ColumnGroup(candidates.to_vec()))
    } else {
        Err(Error::UnknownColumn(unknown))
    }
}

/// Flattens all accepted groups into one projection column list, removing
/// later duplicates and keeping first-occurrence order.
pub fn flatten_projection_columns(colsets: &[ColumnGroup]) -> Vec<String> {
    let mut flat: Vec<String> = Vec::new();
    for colset in colsets {
        for column in colset.columns() {
            if !flat.contains(column) {
                flat.push(column.clone());
            }
        }
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordSet;

    fn dataset(columns: &[&str]) -> RecordSet {
        RecordSet::new(columns.iter().map(|c| c.to_string()).collect(), vec![])
    }

    #[test]
    fn test_validate_accepts_known_columns_in_order() {
        let set = dataset(&["ZONE", "DISTRICT", "CLASS"]);
        let group = validate(&set, &["CLASS".into(), "ZONE".into()]).unwrap();
        assert_eq!(group.columns(), ["CLASS", "ZONE"]);
    }

    #[test]
    fn test_validate_reports_all_unknown_columns() {
        let set = dataset(&["ZONE"]);
        let err = validate(&set, &["ZONE".into(), "BOGUS".into(), "NOPE".into()]).unwrap_err();
        match err {
            crate::error::Error::UnknownColumn(names) => {
                assert_eq!(names, vec!["BOGUS".to_string(), "NOPE".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_flatten_dedups_keeping_first_occurrence() {
        let set = dataset(&["A", "B", "C"]);
        let g1 = validate(&set, &["B".into(), "A".into()]).unwrap();
        let g2 = validate(&set, &["A".into(), "C".into(), "B".into()]).unwrap();
        assert_eq!(flatten_projection_columns(&[g1, g2]), ["B", "A", "C"]);
    }

    #[test]
    fn test_flatten_of_nothing_is_empty() {
        assert!(flatten_projection_columns(&[]).is_empty());
    }
}
