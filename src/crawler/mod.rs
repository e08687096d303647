//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with randomized user agents
//! - The prioritized crawl frontier
//! - Page classification, link extraction and product extraction
//! - The session controller that ties them together

mod classifier;
mod extractor;
mod fetcher;
mod frontier;
mod parser;
mod session;

pub use classifier::PageClassifier;
pub use extractor::ProductExtractor;
pub use fetcher::{
    build_http_client, fetch_url, random_user_agent, FetchedPage, HttpFetcher, PageFetcher,
    USER_AGENTS,
};
pub use frontier::{Frontier, FrontierEntry, Priority};
pub use parser::extract_links;
pub use session::{CrawlOutcome, Session};

use crate::config::Config;
use crate::HarvestError;

/// Runs a complete crawl over HTTP
///
/// Builds a session from `config`, seeds the base URL and crawls until the
/// frontier empties or a budget is spent. Writing the results is left to
/// the caller.
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Products and counters of the finished crawl
/// * `Err(HarvestError)` - Invalid configuration or HTTP client failure
pub async fn crawl(config: &Config) -> Result<CrawlOutcome, HarvestError> {
    let mut session = Session::new(config)?;
    session.run().await
}
