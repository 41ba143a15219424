// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The program takes one positional argument, the address of the page that
// links to the text files:
//
//   txt-tally https://example.com/books/
//   txt-tally https://example.com/books/ --json
//   txt-tally https://example.com/books/ --log-file tally.log
//
// Rust concepts:
// - Derive macros: #[derive(Parser)] generates the parsing code
// - Option<T>: an argument that may be missing
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "txt-tally",
    version,
    about = "Count the words in every .txt file linked from a webpage",
    long_about = "txt-tally downloads a webpage, follows every link ending in .txt \
                  (appended verbatim to the page address), and prints how often each \
                  word appears across all of those files, in alphabetical order."
)]
pub struct Cli {
    /// Address of the page to scan (e.g., https://example.com/books/)
    ///
    /// Optional for clap so that a missing address is reported by txt-tally
    /// itself (exit code 1) instead of clap's usage error
    pub seed_url: Option<String>,

    /// Output the word table as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Append the structured log to this file instead of stderr
    ///
    /// The log level is controlled with RUST_LOG (e.g. RUST_LOG=trace)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
