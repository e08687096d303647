//! URL handling module for Shop-Harvest
//!
//! This module provides link resolution, host extraction and the same-site
//! check used to keep the crawl on a single shop.

mod matcher;
mod normalize;

use url::Url;

// Re-export main functions
pub use matcher::host_matches_site;
pub use normalize::resolve_link;

/// Extracts the lowercase host from a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use shop_harvest::url::extract_domain;
///
/// let url = Url::parse("https://Scrapeme.LIVE/shop/").unwrap();
/// assert_eq!(extract_domain(&url), Some("scrapeme.live".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns true if `url` is an http(s) URL on `site_domain` or a subdomain
///
/// Unparseable strings are never same-site.
pub fn is_same_site(url: &str, site_domain: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }

    extract_domain(&parsed).is_some_and(|host| host_matches_site(site_domain, &host))
}
