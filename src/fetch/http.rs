// src/fetch/http.rs
// =============================================================================
// The real `Source`: plain HTTP(S) GET requests with reqwest's blocking client.
//
// Why blocking and not async?
// - We fetch exactly one resource at a time, in order
// - Each body is read line by line and closed before the next request
// - A blocking client gives us a std::io::Read we can wrap in a BufReader
//
// What we deliberately do NOT configure:
// - No timeout (reqwest's defaults apply)
// - No custom headers, no authentication
// - No redirect policy beyond reqwest's default
//
// Rust concepts:
// - impl Trait for Type: implementing our Source trait for a concrete client
// - map_err: converting one error type into another
// =============================================================================

use super::Source;
use crate::error::FetchError;
use reqwest::blocking::Client;
use std::io::{BufRead, BufReader};
use tracing::trace;
use url::Url;

// A Source backed by a reqwest blocking client
//
// The client is reused for every request so connections can be pooled
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Builds a client with reqwest's default settings.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }
}

impl Source for HttpSource {
    fn open(&self, url: &str) -> Result<Box<dyn BufRead>, FetchError> {
        // Validate first so a bad href shows up as a clear "invalid url"
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .send()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        trace!("Connected to {} ({})", url, status);

        // reqwest's blocking Response implements std::io::Read,
        // so the body is streamed instead of loaded all at once
        Ok(Box::new(BufReader::new(response)))
    }
}
