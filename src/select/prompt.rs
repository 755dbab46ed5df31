//! Interactive column-selection prompt.
//!
//! Drives a `ColumnCollector` over line-based input. Generic over the reader
//! and writer so tests can run it against in-memory buffers instead of a
//! terminal.

use super::{ColumnCollector, ColumnGroup, Offer};
use crate::record::RecordSet;
use std::io::{BufRead, Write};

/// Prompts for column groups until the user enters `done`.
///
/// Unknown columns produce a diagnostic and a re-prompt; they never record a
/// group. End of input behaves like `done`.
pub fn collect_interactive<R: BufRead, W: Write>(
    set: &RecordSet,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<Vec<ColumnGroup>> {
    let mut collector = ColumnCollector::new();
    let mut line = String::new();

    while !collector.is_done() {
        writeln!(output, "Available columns: {}", set.columns().join(", "))?;
        write!(
            output,
            "Enter the columns to match on, separated by commas (done if finished)>"
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match collector.offer(line.trim_end_matches(['\r', '\n']), set) {
            Offer::Accepted | Offer::Finished => {}
            Offer::Rejected(_) => {
                writeln!(output, "some columns not found")?;
            }
        }
    }

    Ok(collector.into_groups())
}
