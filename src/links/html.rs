// src/links/html.rs
// =============================================================================
// This module pulls `.txt` links out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Unlike a browser, we do NOT resolve relative links. Each href is glued onto
// the page address exactly as written:
//   base = "http://example.com/files/", href = "a.txt"
//   -> "http://example.com/files/a.txt"
// =============================================================================

use crate::error::CollectError;
use scraper::{Html, Selector};
use tracing::debug;

// Every anchor, with or without href; a missing href is skipped below
const ANCHOR_SELECTOR: &str = "a";

// Only hrefs ending in exactly this suffix are kept (case-sensitive)
const TEXT_SUFFIX: &str = ".txt";

// Extracts the text-file links from HTML content
//
// Parameters:
//   html: the HTML content to parse
//   base: the address of the page, prepended verbatim to each href
//
// Returns: the links in document order, duplicates included
pub fn extract_txt_links(html: &str, base: &str) -> Result<Vec<String>, CollectError> {
    let selector = Selector::parse(ANCHOR_SELECTOR).map_err(|e| CollectError::Selector {
        selector: ANCHOR_SELECTOR.to_string(),
        message: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let href = element.value().attr("href").unwrap_or("");

        if href.ends_with(TEXT_SUFFIX) {
            let link = format!("{}{}", base, href);
            debug!("Added url: {}", link);
            links.push(link);
        } else {
            debug!("Did not create url from href: {}", href);
        }
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://example.com/files/";

    #[test]
    fn test_keeps_only_txt_links() {
        let html = r#"
            <a href="a.txt">A</a>
            <a href="b.csv">B</a>
            <a href="c.txt">C</a>
        "#;
        let links = extract_txt_links(html, BASE).unwrap();
        assert_eq!(
            links,
            vec![
                "http://example.com/files/a.txt",
                "http://example.com/files/c.txt",
            ]
        );
    }

    #[test]
    fn test_keeps_duplicates_in_document_order() {
        let html = r#"
            <p><a href="z.txt">Z</a></p>
            <a href="a.txt">A</a>
            <div><a href="z.txt">Z again</a></div>
        "#;
        let links = extract_txt_links(html, BASE).unwrap();
        assert_eq!(
            links,
            vec![
                "http://example.com/files/z.txt",
                "http://example.com/files/a.txt",
                "http://example.com/files/z.txt",
            ]
        );
    }

    #[test]
    fn test_skips_anchors_without_href() {
        let html = r#"<a name="top">Top</a><a>Nothing</a><a href="">Empty</a>"#;
        let links = extract_txt_links(html, BASE).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let html = r#"<a href="A.TXT">A</a><a href="b.txt.gz">B</a><a href="c.Txt">C</a>"#;
        let links = extract_txt_links(html, BASE).unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_href_is_concatenated_verbatim() {
        let html = r#"
            <a href="/root.txt">Root</a>
            <a href="../up.txt">Up</a>
            <a href="https://other.org/x.txt">Absolute</a>
        "#;
        let links = extract_txt_links(html, "http://example.com/page").unwrap();
        assert_eq!(
            links,
            vec![
                "http://example.com/page/root.txt",
                "http://example.com/page../up.txt",
                "http://example.com/pagehttps://other.org/x.txt",
            ]
        );
    }

    #[test]
    fn test_non_anchor_elements_are_ignored() {
        let html = r#"<link href="style.txt"><img src="pic.txt"><a href="ok.txt">ok</a>"#;
        let links = extract_txt_links(html, BASE).unwrap();
        assert_eq!(links, vec!["http://example.com/files/ok.txt"]);
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_txt_links("", BASE).unwrap().is_empty());
    }
}
