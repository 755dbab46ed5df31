//! Small-zone filtering.
//!
//! Zones are dissolved by key tuple in an equal-area frame; any key whose
//! combined area does not exceed the threshold is dropped, along with every
//! record carrying it.

use crate::error::Result;
use crate::geo::GeometryOps;
use crate::record::{AttrValue, KeyTuple, RecordSet};
use crate::select::ColumnGroup;
use geo_types::MultiPolygon;
use log::info;
use std::collections::{BTreeMap, BTreeSet};

/// Applies the minimum-area filter to a record set.
///
/// Known limitation, preserved from the original tool: when multiple colsets
/// are supplied, only the **first** one drives the filter grouping; the
/// remaining colsets are enumerated over the already-filtered records.
pub fn apply_min_area<O: GeometryOps>(
    set: RecordSet,
    colsets: &[ColumnGroup],
    min_area_sq_m: f64,
    ops: &O,
) -> Result<RecordSet> {
    match colsets.first() {
        Some(colset) => filter(&set, colset, min_area_sq_m, ops),
        None => Ok(set),
    }
}

/// Removes every record whose key tuple (under `colset`) has a dissolved
/// area of at most `min_area_sq_m` square meters.
///
/// Records without geometry never contribute area; a key that appears only
/// on geometry-less records is therefore never retained.
pub fn filter<O: GeometryOps>(
    set: &RecordSet,
    colset: &ColumnGroup,
    min_area_sq_m: f64,
    ops: &O,
) -> Result<RecordSet> {
    let columns = colset.columns();

    // Dissolve projected geometries by key.
    let mut dissolved: BTreeMap<KeyTuple, MultiPolygon<f64>> = BTreeMap::new();
    for record in set.records() {
        let Some(geometry) = &record.geometry else {
            continue;
        };
        let projected = ops.project(geometry)?;
        let key = KeyTuple::of(record, columns);
        match dissolved.remove(&key) {
            Some(existing) => {
                dissolved.insert(key, ops.union(&existing, &projected)?);
            }
            None => {
                dissolved.insert(key, projected);
            }
        }
    }

    let total = dissolved.len();
    let retained: BTreeSet<KeyTuple> = dissolved
        .into_iter()
        .filter(|(_, shape)| ops.area(shape) > min_area_sq_m)
        .map(|(key, _)| key)
        .collect();

    info!("Removed {} small zones", total - retained.len());

    // Tuple membership for multi-column keys, scalar membership for a single
    // column. Behaviorally equivalent; both paths exist because the
    // comparisons differ mechanically.
    let filtered = if columns.len() == 1 {
        let values: BTreeSet<AttrValue> = retained
            .into_iter()
            .map(|KeyTuple(mut parts)| parts.remove(0))
            .collect();
        set.retain(|record| values.contains(&record.value(&columns[0])))
    } else {
        set.retain(|record| retained.contains(&KeyTuple::of(record, columns)))
    };

    Ok(filtered)
}
