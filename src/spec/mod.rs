//! Spec-file serialization.
//!
//! The output is a CSV a human edits afterwards: a fixed documentation and
//! metadata preamble, then one table block per colset. Lines whose first
//! cell starts with `//`, cells starting with `#`, and blank rows are all
//! ignorable by downstream consumers.

use crate::error::Result;
use std::io::Write;

/// Writes the assembled spec table in the fixed file layout.
pub struct SpecWriter<W: Write> {
    inner: W,
}

impl<W: Write> SpecWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes the full file: preamble, key-column rows, conventions, then
    /// one block per colset.
    pub fn write_spec(
        mut self,
        timestamp: &str,
        key_columns: &[String],
        blocks: &[Vec<Vec<String>>],
    ) -> Result<()> {
        self.write_documentation(timestamp)?;
        self.write_metadata()?;
        self.write_key_columns(key_columns)?;
        self.write_conventions()?;
        for block in blocks {
            self.write_rows(block)?;
            self.write_blank()?;
        }
        self.inner.flush()?;
        Ok(())
    }

    fn write_documentation(&mut self, timestamp: &str) -> Result<()> {
        self.write_rows(&[
            vec!["// This is a spec file to parse zoning, generated by the autogeneration tool"
                .to_string()],
            vec!["// Any line with a first cell starting with // will be ignored, \
                  as will any cell starting with #, and any blank row"
                .to_string()],
            vec![format!("// Generated: {timestamp}")],
        ])
    }

    fn write_metadata(&mut self) -> Result<()> {
        let rows: Vec<Vec<String>> = [
            ("jurisdiction", "# Jurisdiction represented by this zoning"),
            (
                "data",
                "# URL for the data (not a direct download link, but the page describing the data)",
            ),
            ("year", "# Year the data was generated"),
            ("code", "# URL of the zoning code used to fill out this file"),
        ]
        .iter()
        .map(|(name, note)| vec![name.to_string(), String::new(), note.to_string()])
        .collect();
        self.write_rows(&rows)
    }

    fn write_key_columns(&mut self, key_columns: &[String]) -> Result<()> {
        let rows: Vec<Vec<String>> = key_columns
            .iter()
            .map(|column| {
                vec![
                    "column".to_string(),
                    column.clone(),
                    "# Columns specifying unique zones".to_string(),
                ]
            })
            .collect();
        self.write_rows(&rows)
    }

    fn write_conventions(&mut self) -> Result<()> {
        self.write_blank()?;
        self.write_rows(&[
            vec!["// Each table below contains one component of the zone designator".to_string()],
            vec!["// They will be applied in order, so information from later tables \
                  will override information from previous tables"
                .to_string()],
            vec!["// These are the canonical forms of variables. Anything ending in \
                  meters can also be expressed in feet, hectares can"
                .to_string()],
            vec!["// also be expressed in acres or square feet, and \
                  minLotSizePerUnit{Hectares|Acres|SqFt} will be"
                .to_string()],
            vec!["// converted to maxUnitsPerHectare, by simply changing the variable names"
                .to_string()],
        ])
    }

    fn write_rows(&mut self, rows: &[Vec<String>]) -> Result<()> {
        // Rows have different widths by design (comments, metadata,
        // per-colset tables), so the writer must be flexible.
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(&mut self.inner);
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Blank separator row. Written to the sink directly: the csv writer
    /// would quote a lone empty field, and the file format wants a truly
    /// empty line.
    fn write_blank(&mut self) -> Result<()> {
        self.inner.write_all(b"\n")?;
        Ok(())
    }
}
