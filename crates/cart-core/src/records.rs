//! # CSV Records
//!
//! Splits cart text into records with the `csv` crate. Validation, line
//! parsing and the loader all read through [`read_rows`], so a document is
//! split the same way everywhere.
//!
//! ## Reader Settings
//! - No header handling: the header is just the first record
//! - Flexible: rows of any length come through, so length defects can be
//!   reported instead of aborting the read
//! - No quoting: a comma always separates cells
//!
//! Blank lines are skipped. Row numbers are physical line indices with the
//! first line as row 0, so they still count skipped lines.

use csv::{ReaderBuilder, StringRecord};

use crate::error::CoreResult;

/// One non-blank record and the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// Physical line index, first line = 0.
    pub row: usize,
    pub cells: StringRecord,
}

impl CsvRow {
    /// The cells joined back into one line.
    pub fn line(&self) -> String {
        self.cells.iter().collect::<Vec<_>>().join(",")
    }
}

/// Reads every non-blank record of `content`, header included.
pub fn read_rows(content: &str) -> CoreResult<Vec<CsvRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let cells = result?;
        if is_blank(&cells) {
            continue;
        }
        let row = physical_row(content, &cells);
        rows.push(CsvRow { row, cells });
    }

    Ok(rows)
}

/// Data records of a document: everything after the header.
pub fn data_rows(content: &str) -> CoreResult<Vec<CsvRow>> {
    Ok(read_rows(content)?.into_iter().skip(1).collect())
}

/// Line index where `record` starts.
///
/// The reader's position marks where it started reading, which sits before
/// any blank lines it skipped, so those are stepped over here.
fn physical_row(content: &str, record: &StringRecord) -> usize {
    let start = record.position().map_or(0, |pos| pos.byte() as usize);
    let rest = content.get(start..).unwrap_or_default();
    let skipped = rest.len() - rest.trim_start_matches(['\r', '\n']).len();
    content
        .get(..start + skipped)
        .unwrap_or(content)
        .matches('\n')
        .count()
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).map_or(true, |cell| cell.trim().is_empty())
}
