// src/extract/text.rs
// Best-effort search for addresses written out in the page text.
// Only used when the crawl is configured with `scan_text`.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}")
        .expect("valid email pattern")
});

pub(super) fn find_text_emails(document: &Html) -> Vec<String> {
    // Join text nodes with a space so "<b>a</b>b@x.org" doesn't fuse words
    let text = document.root_element().text().collect::<Vec<_>>().join(" ");

    EMAIL_PATTERN
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(html: &str) -> Vec<String> {
        find_text_emails(&Html::parse_document(html))
    }

    #[test]
    fn test_finds_addresses_in_text() {
        let emails = find("<p>Contact sales@shop.example or support@help.shop.example.</p>");
        assert_eq!(emails, vec!["sales@shop.example", "support@help.shop.example"]);
    }

    #[test]
    fn test_ignores_non_addresses() {
        assert!(find("<p>user@localhost and @handle and a@b</p>").is_empty());
    }

    #[test]
    fn test_attribute_values_are_not_text() {
        assert!(find(r#"<a href="mailto:x@y.example">write us</a>"#).is_empty());
    }
}
