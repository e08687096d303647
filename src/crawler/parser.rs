//! HTML link extraction
//!
//! Collects every `<a href>` on a page as an absolute URL. Filtering by site
//! and priority happens in the session, not here.

use crate::url::resolve_link;
use scraper::{Html, Selector};
use url::Url;

/// Extracts all followable links from a parsed document
///
/// Hrefs are resolved against `base_url` and stripped of fragments;
/// `javascript:`, `mailto:`, `tel:`, `data:` and fragment-only hrefs are
/// dropped. Document order is preserved and duplicates are kept.
///
/// # Example
///
/// ```
/// use scraper::Html;
/// use shop_harvest::crawler::extract_links;
/// use url::Url;
///
/// let html = Html::parse_document(r#"<a href="/shop/page/2/">2</a>"#);
/// let base = Url::parse("https://scrapeme.live/shop/").unwrap();
/// assert_eq!(extract_links(&html, &base), vec!["https://scrapeme.live/shop/page/2/"]);
/// ```
pub fn extract_links(document: &Html, base_url: &Url) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(absolute_url) = resolve_link(href, base_url) {
                    links.push(absolute_url);
                }
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://scrapeme.live/shop/").unwrap()
    }

    fn links(html: &str) -> Vec<String> {
        extract_links(&Html::parse_document(html), &base_url())
    }

    #[test]
    fn test_extract_absolute_link() {
        let found = links(r#"<html><body><a href="https://other.com/page">Link</a></body></html>"#);
        assert_eq!(found, vec!["https://other.com/page"]);
    }

    #[test]
    fn test_extract_relative_link() {
        let found = links(r#"<html><body><a href="page/2/">Next</a></body></html>"#);
        assert_eq!(found, vec!["https://scrapeme.live/shop/page/2/"]);
    }

    #[test]
    fn test_anchor_without_href_ignored() {
        let found = links(r#"<html><body><a name="top">Top</a></body></html>"#);
        assert!(found.is_empty());
    }

    #[test]
    fn test_skip_non_page_links() {
        let html = r##"
            <html>
            <body>
                <a href="/shop/page/2/">Valid</a>
                <a href="javascript:void(0)">Invalid</a>
                <a href="mailto:test@example.com">Invalid</a>
                <a href="#main">Invalid</a>
                <a href="/cart/">Valid</a>
            </body>
            </html>
        "##;
        assert_eq!(
            links(html),
            vec![
                "https://scrapeme.live/shop/page/2/",
                "https://scrapeme.live/cart/"
            ]
        );
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let html = r#"
            <a href="/b/">b</a>
            <a href="/a/">a</a>
            <a href="/b/">b again</a>
        "#;
        assert_eq!(
            links(html),
            vec![
                "https://scrapeme.live/b/",
                "https://scrapeme.live/a/",
                "https://scrapeme.live/b/"
            ]
        );
    }

    #[test]
    fn test_links_outside_body_sections() {
        let html = r#"
            <html>
            <body>
                <nav><a href="/shop/">Shop</a></nav>
                <footer><a href="https://woocommerce.com/">Woo</a></footer>
            </body>
            </html>
        "#;
        assert_eq!(links(html).len(), 2);
    }
}
