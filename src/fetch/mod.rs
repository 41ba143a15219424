// src/fetch/mod.rs
// =============================================================================
// This module is the only place that talks to the network.
//
// Everything else in the program asks a `Source` for an address and gets back
// a stream it can read line by line. That keeps the link collector and the
// word tally testable without a real web server.
//
// Submodules:
// - http: the real implementation, a blocking reqwest client
//
// Rust concepts:
// - Traits: a shared interface (like an interface in Java or Go)
// - Box<dyn Trait>: a value whose concrete type is only known at runtime
// - Default methods: trait methods with a body that implementors inherit
// =============================================================================

mod http;

pub use http::HttpSource;

use crate::error::FetchError;
use std::io::{BufRead, Read};

/// Something that can open an address and hand back its body as a stream.
pub trait Source {
    /// Opens `url` and returns a buffered reader over the response body.
    ///
    /// The connection lives as long as the returned reader; dropping the
    /// reader closes it.
    fn open(&self, url: &str) -> Result<Box<dyn BufRead>, FetchError>;

    /// Opens `url` and reads the whole body into a string.
    ///
    /// Invalid UTF-8 is replaced rather than treated as an error.
    fn read_to_string(&self, url: &str) -> Result<String, FetchError> {
        let mut reader = self.open(url)?;
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| FetchError::Read {
                url: url.to_string(),
                source,
            })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MemorySource;
    use super::*;

    #[test]
    fn test_read_to_string_replaces_invalid_utf8() {
        struct Bytes;
        impl Source for Bytes {
            fn open(&self, _url: &str) -> Result<Box<dyn BufRead>, FetchError> {
                Ok(Box::new(std::io::Cursor::new(vec![b'h', b'i', 0xff])))
            }
        }

        let text = Bytes.read_to_string("http://example.com/").unwrap();
        assert_eq!(text, "hi\u{fffd}");
    }

    #[test]
    fn test_read_to_string_reports_read_errors() {
        let source = MemorySource::new().with_broken("http://example.com/", "<html>");
        let err = source.read_to_string("http://example.com/").unwrap_err();
        assert!(matches!(err, FetchError::Read { .. }));
    }
}
