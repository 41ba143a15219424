// src/report.rs
// =============================================================================
// Prints the final word table.
//
// Two formats:
// - text (default): a header line, then one "[word]<TAB>count" line per word
// - JSON (--json): {"items": N, "words": {"word": count, ...}}
//
// Both write to any std::io::Write so tests can capture the output in a Vec.
// =============================================================================

use crate::tally::WordTable;
use serde::Serialize;
use std::io::{self, Write};
use tracing::trace;

// Shape of the --json output
#[derive(Serialize)]
struct JsonReport<'a> {
    items: usize,
    words: &'a WordTable,
}

/// Writes the text report: header, then every word in ascending order.
pub fn write_report<W: Write>(table: &WordTable, out: &mut W) -> io::Result<()> {
    trace!("Printing table with {} entries", table.len());

    write!(out, "\n========There are {} items in the map========\n", table.len())?;
    for (word, count) in table.iter() {
        writeln!(out, "[{}]\t{}", word, count)?;
    }
    out.flush()
}

/// Writes the table as pretty-printed JSON.
pub fn write_json<W: Write>(table: &WordTable, out: &mut W) -> io::Result<()> {
    let report = JsonReport {
        items: table.len(),
        words: table,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    out.flush()
}
