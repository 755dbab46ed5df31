//! Shapefile to record-set conversion.

use crate::error::Result;
use crate::record::{AttrValue, Record, RecordSet};
use geo_types::MultiPolygon;
use log::debug;
use shapefile::dbase::FieldValue;
use shapefile::Shape;
use std::path::Path;

/// Reads a shapefile (and its dbf sidecar) into a record set.
///
/// Polygon shapes become multipolygon geometries; null and non-polygon
/// shapes become records without geometry. The column universe is the union
/// of dbf field names, sorted for a stable prompt (the parsed records do not
/// preserve dbf field order).
pub fn read_shapefile(path: &Path) -> Result<RecordSet> {
    let mut reader = shapefile::Reader::from_path(path)?;

    let mut columns: Vec<String> = Vec::new();
    let mut records: Vec<Record> = Vec::new();

    for result in reader.iter_shapes_and_records() {
        let (shape, dbf_record) = result?;
        let mut record = Record::new(convert_shape(shape));
        for (name, value) in dbf_record {
            if !columns.contains(&name) {
                columns.push(name.clone());
            }
            record.attributes.insert(name, convert_field(value));
        }
        records.push(record);
    }

    columns.sort();
    Ok(RecordSet::new(columns, records))
}

fn convert_shape(shape: Shape) -> Option<MultiPolygon<f64>> {
    match shape {
        Shape::Polygon(polygon) => Some(MultiPolygon::<f64>::from(polygon)),
        Shape::NullShape => None,
        _ => {
            debug!("ignoring non-polygon shape");
            None
        }
    }
}

/// Maps a dbf field value onto the attribute model. Nulls of any type become
/// the empty-string sentinel.
fn convert_field(value: FieldValue) -> AttrValue {
    match value {
        FieldValue::Character(Some(s)) => AttrValue::Text(s),
        FieldValue::Character(None) => AttrValue::empty(),
        FieldValue::Numeric(Some(n)) => AttrValue::Number(n),
        FieldValue::Numeric(None) => AttrValue::empty(),
        FieldValue::Float(Some(f)) => AttrValue::Number(f as f64),
        FieldValue::Float(None) => AttrValue::empty(),
        FieldValue::Integer(i) => AttrValue::Number(i as f64),
        FieldValue::Double(d) => AttrValue::Number(d),
        FieldValue::Currency(c) => AttrValue::Number(c),
        FieldValue::Logical(Some(b)) => AttrValue::text(if b { "true" } else { "false" }),
        FieldValue::Logical(None) => AttrValue::empty(),
        FieldValue::Date(Some(d)) => AttrValue::text(d.to_string()),
        FieldValue::Date(None) => AttrValue::empty(),
        FieldValue::Memo(s) => AttrValue::Text(s),
        other => AttrValue::text(format!("{:?}", other)),
    }
}
