//! In-memory record model for zoning datasets.
//!
//! A `RecordSet` is the tabular form of a parsed shapefile: one `Record` per
//! feature, each carrying an optional polygon geometry and a map of attribute
//! values. All downstream stages (column selection, area filtering, table
//! building) consume this model; none of them touch the shapefile again.

mod value;

pub use value::AttrValue;

use geo_types::MultiPolygon;
use std::collections::HashMap;

/// One geographic feature: a geometry plus its attribute values.
#[derive(Debug, Clone)]
pub struct Record {
    /// Feature geometry. `None` for null shapes or non-polygon features.
    pub geometry: Option<MultiPolygon<f64>>,
    /// Attribute name -> value.
    pub attributes: HashMap<String, AttrValue>,
}

impl Record {
    pub fn new(geometry: Option<MultiPolygon<f64>>) -> Self {
        Self {
            geometry,
            attributes: HashMap::new(),
        }
    }

    /// Returns the value for `column`, treating a missing entry as the
    /// empty-string sentinel.
    pub fn value(&self, column: &str) -> AttrValue {
        self.attributes
            .get(column)
            .cloned()
            .unwrap_or_else(AttrValue::empty)
    }
}

/// The value tuple identifying one zone category under a column group.
///
/// Equality and ordering are componentwise over the underlying values, so
/// sorting key tuples gives the lexicographic order used in the output table.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KeyTuple(pub Vec<AttrValue>);

impl KeyTuple {
    /// Extracts the key tuple of `record` under `columns`.
    pub fn of(record: &Record, columns: &[String]) -> Self {
        Self(columns.iter().map(|c| record.value(c)).collect())
    }
}

/// An ordered collection of records sharing one attribute-name universe.
///
/// Never mutated in place after creation: filtering and normalization produce
/// a new `RecordSet`.
#[derive(Debug, Clone)]
pub struct RecordSet {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// The attribute-name universe, in first-occurrence order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns a copy of this set with missing values in `columns` replaced
    /// by the empty-string sentinel.
    ///
    /// Applied once, before key extraction, so that key-tuple equality is
    /// total without per-access null checks.
    pub fn normalized(mut self, columns: &[String]) -> Self {
        for record in &mut self.records {
            for column in columns {
                record
                    .attributes
                    .entry(column.clone())
                    .or_insert_with(AttrValue::empty);
            }
        }
        self
    }

    /// Returns a new set containing only the records matching `keep`.
    pub fn retain<F>(&self, keep: F) -> Self
    where
        F: Fn(&Record) -> bool,
    {
        Self {
            columns: self.columns.clone(),
            records: self.records.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}
