// src/extract/mod.rs
// =============================================================================
// This module pulls the interesting bits out of a downloaded HTML page.
//
// Submodules:
// - anchors: mailto: addresses and link targets from <a href="..."> elements
// - text: optional best-effort scan for addresses written in the page text
//
// The page is parsed once here and handed to both extractors.
// =============================================================================

mod anchors;
mod text;

use scraper::Html;
use url::Url;

// Everything found on one page
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageScan {
    /// Addresses in the order they appear on the page (may contain repeats)
    pub emails: Vec<String>,
    /// Every non-empty href, resolved to an absolute URL against `base`
    pub links: Vec<Url>,
}

// Parses `html` and collects addresses and links.
//
// Parameters:
//   html: the response body (malformed markup is fine, it is parsed leniently)
//   base: URL that relative hrefs are resolved against
//   scan_text: also run the text extractor over the page content
pub fn scan_page(html: &str, base: &Url, scan_text: bool) -> PageScan {
    let document = Html::parse_document(html);

    let mut scan = anchors::scan_anchors(&document, base);
    if scan_text {
        scan.emails.extend(text::find_text_emails(&document));
    }
    scan
}
