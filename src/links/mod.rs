// src/links/mod.rs
// =============================================================================
// The link collector: fetch one HTML page and list the `.txt` files it links.
//
// Submodules:
// - html: the pure HTML -> links step (no network)
//
// This module only reports failures through its return value. Deciding that a
// broken seed page is "zero links, keep going" is main.rs's job.
// =============================================================================

mod html;

pub use html::extract_txt_links;

use crate::error::CollectError;
use crate::fetch::Source;
use tracing::{info, trace};

/// Fetches the page at `address` and returns every `.txt` link on it,
/// each formed as `address + href`.
pub fn collect_links(source: &dyn Source, address: &str) -> Result<Vec<String>, CollectError> {
    trace!("Collecting links from {}", address);

    let html = source.read_to_string(address)?;
    info!("Connected to {}", address);

    extract_txt_links(&html, address)
}
