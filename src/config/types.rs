use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Shop-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
    pub selectors: SelectorConfig,
}

/// The site being harvested
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Shop root; seeds the frontier and anchors the listing-page pattern
    #[serde(rename = "base-url")]
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://scrapeme.live/shop/".to_string(),
        }
    }
}

/// Crawl budgets and fetch behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Wall-clock budget in minutes; unbounded when absent
    #[serde(rename = "time-limit")]
    pub time_limit: Option<u64>,

    /// Maximum number of successfully fetched pages; unbounded when absent
    #[serde(rename = "page-limit")]
    pub page_limit: Option<u64>,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout")]
    pub request_timeout: u64,

    /// Maximum number of fetches in flight
    pub concurrency: u32,
}

impl CrawlerConfig {
    /// Time budget as a duration; saturates instead of overflowing
    pub fn time_limit_duration(&self) -> Option<Duration> {
        self.time_limit
            .map(|minutes| Duration::from_secs(minutes.saturating_mul(60)))
    }

    pub fn request_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            time_limit: None,
            page_limit: None,
            request_timeout: 10,
            concurrency: 1,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the products CSV file
    #[serde(rename = "products-path")]
    pub products_path: String,

    /// Path to the append-only error log
    #[serde(rename = "error-log-path")]
    pub error_log_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            products_path: "products.csv".to_string(),
            error_log_path: "scrape_errors.log".to_string(),
        }
    }
}

/// CSS selectors used by the product extractor
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub image: String,
    pub title: String,
    pub price: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            image: ".wp-post-image".to_string(),
            title: ".woocommerce-loop-product__title".to_string(),
            price: ".price".to_string(),
        }
    }
}
