//! Page classification
//!
//! Decides whether a URL is a product-listing page, whether it belongs to the
//! crawled site, and which frontier priority it gets.

use crate::config::SiteConfig;
use crate::crawler::frontier::Priority;
use crate::url::{extract_domain, is_same_site};
use crate::ConfigError;
use regex::Regex;
use url::Url;

/// Classifies URLs relative to one site
#[derive(Debug, Clone)]
pub struct PageClassifier {
    /// `^<shop root>/page/<digits>/?$`
    listing_pattern: Regex,

    /// Lowercase host of the shop root
    site_domain: String,
}

impl PageClassifier {
    /// Builds a classifier for the site rooted at `site.base_url`
    ///
    /// With the default base URL the listing pattern is
    /// `^https://scrapeme\.live/shop/page/\d+/?$`.
    pub fn new(site: &SiteConfig) -> Result<Self, ConfigError> {
        let base = Url::parse(&site.base_url).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", site.base_url, e))
        })?;
        let site_domain = extract_domain(&base).ok_or_else(|| {
            ConfigError::InvalidUrl(format!("base-url '{}' has no host", site.base_url))
        })?;

        // Match against the normalized form, which is how links are discovered
        let root = base.as_str().trim_end_matches('/');
        let listing_pattern = Regex::new(&format!(r"^{}/page/\d+/?$", regex::escape(root)))
            .map_err(|e| ConfigError::Validation(format!("Invalid listing pattern: {}", e)))?;

        Ok(Self {
            listing_pattern,
            site_domain,
        })
    }

    /// Returns true if `url` is a paginated product-listing page
    pub fn is_product_listing_page(&self, url: &str) -> bool {
        self.listing_pattern.is_match(url)
    }

    /// Returns true if `url` is on the site's domain or one of its subdomains
    pub fn is_same_site(&self, url: &str) -> bool {
        is_same_site(url, &self.site_domain)
    }

    /// Frontier priority for a discovered URL
    pub fn priority_for(&self, url: &str) -> Priority {
        if self.is_product_listing_page(url) {
            Priority::ProductListing
        } else {
            Priority::Ordinary
        }
    }

    pub fn site_domain(&self) -> &str {
        &self.site_domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> PageClassifier {
        PageClassifier::new(&SiteConfig::default()).unwrap()
    }

    #[test]
    fn test_listing_pages_match() {
        let c = classifier();
        for url in [
            "https://scrapeme.live/shop/page/1/",
            "https://scrapeme.live/shop/page/2",
            "https://scrapeme.live/shop/page/48/",
            "https://scrapeme.live/shop/page/1234567",
        ] {
            assert!(c.is_product_listing_page(url), "{}", url);
        }
    }

    #[test]
    fn test_other_urls_do_not_match() {
        let c = classifier();
        for url in [
            "https://scrapeme.live/shop/",
            "https://scrapeme.live/shop/page/",
            "https://scrapeme.live/shop/page/two/",
            "https://scrapeme.live/shop/page/2/extra",
            "https://scrapeme.live/shop/page/2//",
            "https://scrapeme.live/shop/page/2/?orderby=price",
            "https://scrapeme.live/shop/Bulbasaur/",
            "http://scrapeme.live/shop/page/2/",
            "https://www.scrapeme.live/shop/page/2/",
            "https://scrapemeXlive/shop/page/2/",
            "see https://scrapeme.live/shop/page/2/",
        ] {
            assert!(!c.is_product_listing_page(url), "{}", url);
        }
    }

    #[test]
    fn test_priority_for() {
        let c = classifier();
        assert_eq!(
            c.priority_for("https://scrapeme.live/shop/page/5/"),
            Priority::ProductListing
        );
        assert_eq!(
            c.priority_for("https://scrapeme.live/product/pikachu/"),
            Priority::Ordinary
        );
    }

    #[test]
    fn test_same_site() {
        let c = classifier();
        assert_eq!(c.site_domain(), "scrapeme.live");
        assert!(c.is_same_site("https://scrapeme.live/cart/"));
        assert!(c.is_same_site("https://blog.scrapeme.live/"));
        assert!(!c.is_same_site("https://wordpress.org/"));
    }

    #[test]
    fn test_custom_base_url() {
        let site = SiteConfig {
            base_url: "http://127.0.0.1:4321/store".to_string(),
        };
        let c = PageClassifier::new(&site).unwrap();

        assert_eq!(c.site_domain(), "127.0.0.1");
        assert!(c.is_product_listing_page("http://127.0.0.1:4321/store/page/7/"));
        assert!(!c.is_product_listing_page("http://127.0.0.1:4321/shop/page/7/"));
    }

    #[test]
    fn test_base_url_normalized() {
        let site = SiteConfig {
            base_url: "HTTPS://ScrapeMe.live/shop".to_string(),
        };
        let c = PageClassifier::new(&site).unwrap();

        assert!(c.is_product_listing_page("https://scrapeme.live/shop/page/3/"));
        assert!(!c.is_product_listing_page("HTTPS://ScrapeMe.live/shop/page/3/"));
    }

    #[test]
    fn test_invalid_base_url() {
        let site = SiteConfig {
            base_url: "::::".to_string(),
        };
        assert!(matches!(
            PageClassifier::new(&site),
            Err(ConfigError::InvalidUrl(_))
        ));
    }
}
