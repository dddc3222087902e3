// src/extract/anchors.rs
// =============================================================================
// Looks only at <a href="..."> elements; the rest of the DOM is ignored.
//
// For each anchor:
// - an href starting with "mailto:" yields the address after the prefix,
//   kept verbatim (no decoding, "?subject=..." suffixes included)
// - any non-empty href is resolved to an absolute URL against the base URL
//   (mailto: hrefs too; they simply have no host and get filtered later)
// =============================================================================

use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use super::PageScan;

const MAILTO_PREFIX: &str = "mailto:";

// "a[href]" is a constant, valid selector
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid anchor selector"));

pub(super) fn scan_anchors(document: &Html, base: &Url) -> PageScan {
    let mut scan = PageScan::default();

    for element in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(address) = mailto_address(href) {
            scan.emails.push(address.to_string());
        }

        if href.is_empty() {
            continue;
        }

        // Unparseable hrefs (e.g. "http://[bad") are just skipped
        if let Ok(url) = base.join(href) {
            scan.links.push(url);
        }
    }

    scan
}

// Returns whatever follows "mailto:" verbatim, or None if the href is not a
// mailto: link. A bare "mailto:" yields an empty string.
//
// Example:
//   "mailto:info@example.com?subject=hi" -> Some("info@example.com?subject=hi")
pub fn mailto_address(href: &str) -> Option<&str> {
    href.strip_prefix(MAILTO_PREFIX)
}
