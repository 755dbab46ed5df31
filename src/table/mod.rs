//! Zone specification table building.
//!
//! One block per colset: a header of key columns plus variable names, then a
//! row per distinct key tuple with blank variable cells for a human to fill
//! in later.

mod variables;

pub use variables::{UnitSystem, VariableRegistry, VariableSchema, ZONE_VARIABLE};

use crate::record::{KeyTuple, RecordSet};
use crate::select::ColumnGroup;
use std::collections::BTreeSet;

/// Builds the rows of one spec-table block.
///
/// The first row is the header (key columns, then variable names resolved
/// under `units`); each following row is one distinct key tuple in ascending
/// lexicographic order, padded with one empty cell per variable. Every row
/// has the same width as the header. Deterministic: identical inputs produce
/// identical rows.
pub fn build(
    set: &RecordSet,
    colset: &ColumnGroup,
    schema: &VariableSchema,
    units: UnitSystem,
) -> Vec<Vec<String>> {
    let columns = colset.columns();

    let keys: BTreeSet<KeyTuple> = set
        .records()
        .iter()
        .map(|record| KeyTuple::of(record, columns))
        .collect();

    let mut header: Vec<String> = columns.to_vec();
    header.extend(schema.resolved(units));

    let mut rows = Vec::with_capacity(keys.len() + 1);
    rows.push(header);
    for KeyTuple(parts) in keys {
        let mut row: Vec<String> = parts.iter().map(|v| v.to_string()).collect();
        row.extend(std::iter::repeat(String::new()).take(schema.len()));
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{AttrValue, Record};
    use crate::select::validate;

    fn record(zone: &str) -> Record {
        let mut r = Record::new(None);
        r.attributes.insert("Z".to_string(), AttrValue::text(zone));
        r
    }

    fn dataset(zone_values: &[&str]) -> RecordSet {
        RecordSet::new(
            vec!["Z".into()],
            zone_values.iter().map(|z| record(z)).collect(),
        )
    }

    fn schema_of(names: &[&str]) -> VariableSchema {
        VariableSchema::from_registry(&VariableRegistry::new(
            names.iter().map(|n| n.to_string()).collect(),
        ))
    }

    #[test]
    fn test_one_row_per_distinct_key_in_sorted_order() {
        let set = dataset(&["A", "A", "B", "C"]);
        let colset = validate(&set, &["Z".into()]).unwrap();
        let schema = schema_of(&["zone", "maxHeightMeters"]);

        let rows = build(&set, &colset, &schema, UnitSystem::Metric);
        assert_eq!(rows.len(), 4); // header + 3 keys
        assert_eq!(rows[0], vec!["Z", "maxHeightMeters"]);
        assert_eq!(rows[1], vec!["A", ""]);
        assert_eq!(rows[2], vec!["B", ""]);
        assert_eq!(rows[3], vec!["C", ""]);
    }

    #[test]
    fn test_imperial_flag_renames_header_variables() {
        let set = dataset(&["A"]);
        let colset = validate(&set, &["Z".into()]).unwrap();
        let schema = schema_of(&["zone", "maxHeightMeters"]);

        let rows = build(&set, &colset, &schema, UnitSystem::Imperial);
        assert_eq!(rows[0], vec!["Z", "maxHeightFeet"]);
    }

    #[test]
    fn test_header_width_equals_every_row_width() {
        let set = dataset(&["B", "A", "C", "A"]);
        let colset = validate(&set, &["Z".into()]).unwrap();
        let schema = VariableSchema::from_registry(&VariableRegistry::builtin());

        let rows = build(&set, &colset, &schema, UnitSystem::Metric);
        let width = rows[0].len();
        assert!(rows.iter().all(|r| r.len() == width));
    }

    #[test]
    fn test_empty_record_set_yields_header_only() {
        let set = dataset(&[]);
        let colset = validate(&set, &["Z".into()]).unwrap();
        let schema = schema_of(&["zone", "maxFar"]);

        let rows = build(&set, &colset, &schema, UnitSystem::Metric);
        assert_eq!(rows, vec![vec!["Z".to_string(), "maxFar".to_string()]]);
    }

    #[test]
    fn test_multi_column_keys_dedupe_by_tuple() {
        let mut r1 = record("A");
        r1.attributes.insert("K".into(), AttrValue::Number(2.0));
        let mut r2 = record("A");
        r2.attributes.insert("K".into(), AttrValue::Number(10.0));
        let mut r3 = record("A");
        r3.attributes.insert("K".into(), AttrValue::Number(2.0));
        let set = RecordSet::new(vec!["Z".into(), "K".into()], vec![r1, r2, r3]);
        let colset = validate(&set, &["Z".into(), "K".into()]).unwrap();

        let rows = build(&set, &colset, &schema_of(&["zone"]), UnitSystem::Metric);
        // Numbers sort numerically: 2 before 10.
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["A", "2"]);
        assert_eq!(rows[2], vec!["A", "10"]);
    }
}
