// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap and set up logging
// 2. Collect the .txt links from the seed page
// 3. Download every text file and count its words
// 4. Print the word table
// 5. Exit with proper code (0 = success, 1 = error)
//
// Not every failure is treated the same way:
// - seed page unreachable -> warn, carry on with zero links, still print
// - a text file unreachable or cut off -> stop right away, no report
//
// Everything runs on one thread, one request at a time.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod error;    // src/error.rs - error kinds for each step
mod fetch;    // src/fetch/ - HTTP access
mod links;    // src/links/ - .txt link collection
mod logging;  // src/logging.rs - tracing setup
mod report;   // src/report.rs - printing the table
mod tally;    // src/tally/ - word counting

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::Cli;
use fetch::HttpSource;
use std::io;
use tracing::{error, info, trace};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref());

    info!("Program started");

    let exit_code = match run(cli) {
        Ok(()) => {
            info!("Exiting program");
            0
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    trace!("Inside run");

    // Checked before anything touches the network
    let Some(seed_url) = cli.seed_url else {
        bail!("could not read url from command line: missing argument <SEED_URL>");
    };

    let source = HttpSource::new().context("failed to build HTTP client")?;

    // A bad seed page is not fatal: we just have nothing to count
    let urls = match links::collect_links(&source, &seed_url) {
        Ok(urls) => urls,
        Err(e) => {
            error!("Could not collect links from {}: {}", seed_url, e);
            eprintln!("Warning: could not collect links from {}: {}", seed_url, e);
            Vec::new()
        }
    };
    info!("There are {} urls in the list.", urls.len());

    // A bad text file is fatal: the error goes up to main and nothing is printed
    let table = tally::tally_urls(&source, &urls)?;
    info!(
        "There are {} words in the table ({} occurrences).",
        table.len(),
        table.total()
    );

    if table.is_empty() {
        info!("No words were found.");
    }

    let mut out = io::stdout().lock();
    let printed = if cli.json {
        report::write_json(&table, &mut out)
    } else {
        report::write_report(&table, &mut out)
    };
    printed.context("failed to print report")?;
    info!("Map has been printed.");

    Ok(())
}
