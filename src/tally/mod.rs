// src/tally/mod.rs
// =============================================================================
// The word tally: download each text file and count its words.
//
// How it works:
// 1. Open the next address through the Source (one HTTP GET)
// 2. Read it one line at a time
// 3. Split each line into lowercase words and add them to the shared table
// 4. Close the stream, move on to the next address
//
// Files are processed strictly in order and all of them feed the same table.
// The first file that fails stops the whole tally: we return the error and
// the caller does not get a partial table.
//
// Submodules:
// - tokenize: line -> words
// - table: the sorted word -> count map
// =============================================================================

mod table;
mod tokenize;

pub use table::WordTable;
pub use tokenize::words;

use crate::error::{FetchError, TallyError};
use crate::fetch::Source;
use std::io::BufRead;
use tracing::{debug, info, trace};

/// Counts the words of every address in `urls`, in order, into one table.
pub fn tally_urls(source: &dyn Source, urls: &[String]) -> Result<WordTable, TallyError> {
    trace!("Tallying words from {} url(s)", urls.len());

    let mut table = WordTable::new();
    for url in urls {
        tally_url(source, url, &mut table).map_err(|err| TallyError {
            url: url.clone(),
            source: err,
        })?;
    }

    Ok(table)
}

/// Counts the words of a single address into `table`.
pub fn tally_url(source: &dyn Source, url: &str, table: &mut WordTable) -> Result<(), FetchError> {
    trace!("Scraping words from {}", url);

    let reader = source.open(url)?;
    let lines = tally_lines(reader, table).map_err(|err| FetchError::Read {
        url: url.to_string(),
        source: err,
    })?;

    info!("Read {} line(s) from {}; {} distinct words so far", lines, url, table.len());
    Ok(())
}

// Reads `reader` to the end, adding every word to `table`
//
// Lines are split on '\n' and decoded lossily, so odd bytes never abort a
// file; only real I/O errors do. Returns the number of lines read.
fn tally_lines(mut reader: Box<dyn BufRead>, table: &mut WordTable) -> std::io::Result<usize> {
    let mut buf = Vec::new();
    let mut lines = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;

        let line = String::from_utf8_lossy(&buf);
        let line_words: Vec<String> = words(&line).collect();
        debug!("Adding line {:?} to table", line_words);

        for word in &line_words {
            table.add(word);
        }
        debug!("Added line. There are now {} words in the table.", table.len());
    }

    Ok(lines)
}
