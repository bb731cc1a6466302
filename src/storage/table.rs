//! Fixture table output.
//!
//! Comma-separated, header row first, no index column. The file is
//! replaced on every run and always written, even with zero rows.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::debug;

use crate::types::FixtureRecord;

const SEP: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row, quoting cells that need it.
fn write_row<W: Write, S: AsRef<str>>(w: &mut W, row: &[S]) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{SEP}")?;
        }
        let cell = cell.as_ref();
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Write the header and one row per fixture to any writer.
pub fn write_table<W: Write>(mut w: W, records: &[FixtureRecord]) -> io::Result<()> {
    write_row(&mut w, &FixtureRecord::HEADERS)?;
    for record in records {
        write_row(&mut w, &record.to_row())?;
    }
    w.flush()
}

/// Render the table to a string.
pub fn to_csv_string(records: &[FixtureRecord]) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_table(&mut buf, records);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Overwrite `path` with the table. Returns the number of data rows.
pub fn write_fixtures(path: &str, records: &[FixtureRecord]) -> Result<usize> {
    let file = File::create(path).with_context(|| format!("Failed to create {path}"))?;
    write_table(BufWriter::new(file), records)
        .with_context(|| format!("Failed to write fixtures to {path}"))?;

    debug!(path, rows = records.len(), "Fixture table written");
    Ok(records.len())
}
