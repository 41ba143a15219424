// src/error.rs
// =============================================================================
// Error kinds for the three network steps of the program.
//
// Each step returns its own error type so that main.rs can decide what to do:
// - CollectError: the seed page failed -> we carry on with zero links
// - TallyError: a text file failed -> the whole run stops with exit code 1
//
// Rust concepts:
// - thiserror: derive macro that writes the Display/Error impls for us
// - #[from]: lets the ? operator convert one error type into another
// - #[source]: keeps the underlying cause so {:#} can print the whole chain
// =============================================================================

use thiserror::Error;

// Something went wrong while fetching or reading a single address
#[derive(Debug, Error)]
pub enum FetchError {
    /// The address is not a valid absolute URL
    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request could not be sent or no response came back
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered, but not with a 2xx status
    #[error("request to {url} failed with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The connection broke while we were reading the body
    #[error("error reading {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

// The seed page could not be turned into a list of links
#[derive(Debug, Error)]
pub enum CollectError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The CSS selector was rejected by scraper
    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

// A text file failed while we were counting its words
//
// This one is fatal: main.rs prints it and exits without a report.
#[derive(Debug, Error)]
#[error("failed to tally words from {url}")]
pub struct TallyError {
    pub url: String,
    #[source]
    pub source: FetchError,
}
