//! Crawl session controller - main crawl loop
//!
//! The session owns the frontier and drives each URL through
//! fetch → link discovery → product extraction until the frontier is empty
//! or a budget runs out:
//!
//! 1. Check the budgets (wall-clock time, pages scraped)
//! 2. Dequeue the highest-precedence URL (it is now visited)
//! 3. Fetch it; a failure is logged and the loop moves on
//! 4. Enqueue every same-site link with its priority
//! 5. If the URL is a product-listing page, extract a product record
//!
//! With `concurrency > 1` up to that many fetches are in flight at once.
//! Dispatching stops as soon as a budget is spent; fetches already in flight
//! drain and their pages are still processed.

use crate::config::{validate, Config};
use crate::crawler::classifier::PageClassifier;
use crate::crawler::extractor::ProductExtractor;
use crate::crawler::fetcher::{FetchedPage, HttpFetcher, PageFetcher};
use crate::crawler::frontier::{Frontier, Priority};
use crate::crawler::parser::extract_links;
use crate::state::{CrawlLimits, ProductRecord, SessionState, SessionStatus, StopReason};
use crate::HarvestError;
use chrono::{DateTime, Utc};
use futures::stream::{FuturesUnordered, StreamExt};
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Everything a finished crawl hands to the output stage
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Extracted products in the order they were accumulated
    pub products: Vec<ProductRecord>,
    pub pages_scraped: u64,
    pub fetch_failures: u64,
    pub extraction_faults: u64,
    pub urls_visited: usize,
    pub frontier_remaining: usize,
    pub stop_reason: StopReason,
    pub elapsed: Duration,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Crawl session controller
pub struct Session<F> {
    fetcher: F,
    classifier: PageClassifier,
    extractor: ProductExtractor,
    frontier: Frontier,
    limits: CrawlLimits,
    concurrency: usize,
}

impl Session<HttpFetcher> {
    /// Creates a session that fetches over HTTP
    ///
    /// # Returns
    ///
    /// * `Ok(Session)` - Ready to run, with the seed URL queued
    /// * `Err(HarvestError)` - Invalid configuration or HTTP client failure
    pub fn new(config: &Config) -> Result<Self, HarvestError> {
        let fetcher = HttpFetcher::new(config.crawler.request_timeout_duration())?;
        Self::with_fetcher(config, fetcher)
    }
}

impl<F: PageFetcher> Session<F> {
    /// Creates a session with a caller-supplied page source
    ///
    /// The base URL is seeded into the frontier at listing-page priority, in
    /// the same normalized form as discovered links.
    pub fn with_fetcher(config: &Config, fetcher: F) -> Result<Self, HarvestError> {
        validate(config)?;

        let classifier = PageClassifier::new(&config.site)?;
        let extractor = ProductExtractor::new(&config.selectors)?;

        let mut frontier = Frontier::new();
        let seed = Url::parse(&config.site.base_url)?;
        frontier.enqueue(seed.to_string(), Priority::ProductListing);

        let limits = CrawlLimits {
            time_limit: config.crawler.time_limit_duration(),
            page_limit: config.crawler.page_limit,
        };

        Ok(Self {
            fetcher,
            classifier,
            extractor,
            frontier,
            limits,
            concurrency: config.crawler.concurrency as usize,
        })
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    pub fn limits(&self) -> &CrawlLimits {
        &self.limits
    }

    /// Runs the crawl loop until the frontier empties or a budget is spent
    ///
    /// The budgets start counting when this is called.
    pub async fn run(&mut self) -> Result<CrawlOutcome, HarvestError> {
        let mut state = SessionState::new();
        let fetcher = &self.fetcher;
        let mut in_flight = FuturesUnordered::new();

        tracing::info!(
            "Starting crawl: {} URL(s) queued, time limit {:?}, page limit {:?}, concurrency {}",
            self.frontier.len(),
            self.limits.time_limit,
            self.limits.page_limit,
            self.concurrency
        );

        loop {
            while in_flight.len() < self.concurrency && !self.frontier.is_empty() {
                if let Some(reason) = state.budget_exhausted(&self.limits, in_flight.len() as u64)
                {
                    if in_flight.is_empty() {
                        state.stop(reason);
                    }
                    break;
                }

                let entry = self.frontier.dequeue()?;
                tracing::debug!("Fetching {} (priority {})", entry.url, entry.priority);

                in_flight.push(async move {
                    let result = fetcher.fetch(&entry.url).await;
                    (entry, result)
                });
            }

            let Some((entry, result)) = in_flight.next().await else {
                break;
            };

            match result {
                Ok(page) => {
                    process_page(
                        &self.classifier,
                        &self.extractor,
                        &mut self.frontier,
                        &mut state,
                        &page,
                    );

                    if state.pages_scraped() % 10 == 0 {
                        let rate = state.pages_scraped() as f64 / state.elapsed().as_secs_f64();
                        tracing::info!(
                            "Progress: {} pages scraped, {} products, {} in frontier, {:.2} pages/sec",
                            state.pages_scraped(),
                            state.products().len(),
                            self.frontier.len(),
                            rate
                        );
                    }
                }
                Err(e) => {
                    state.record_fetch_failure();
                    tracing::error!("Skipping {} due to errors: {}", entry.url, e);
                }
            }
        }

        let stop_reason = match state.status() {
            SessionStatus::Stopped(reason) => reason,
            SessionStatus::Running => {
                state.stop(StopReason::FrontierExhausted);
                StopReason::FrontierExhausted
            }
        };

        let elapsed = state.elapsed();
        tracing::info!(
            "Crawl stopped ({}): {} pages scraped, {} products in {:?}",
            stop_reason,
            state.pages_scraped(),
            state.products().len(),
            elapsed
        );

        Ok(CrawlOutcome {
            pages_scraped: state.pages_scraped(),
            fetch_failures: state.fetch_failures(),
            extraction_faults: state.extraction_faults(),
            urls_visited: self.frontier.visited_count(),
            frontier_remaining: self.frontier.len(),
            stop_reason,
            elapsed,
            started_at: state.started_at(),
            finished_at: Utc::now(),
            products: state.into_products(),
        })
    }
}

/// Handles one successfully fetched page
///
/// Counts the page, enqueues its same-site links, and extracts a product if
/// the requested URL is a product-listing page.
fn process_page(
    classifier: &PageClassifier,
    extractor: &ProductExtractor,
    frontier: &mut Frontier,
    state: &mut SessionState,
    page: &FetchedPage,
) {
    state.record_page();
    let document = Html::parse_document(&page.body);

    match Url::parse(&page.final_url).or_else(|_| Url::parse(&page.url)) {
        Ok(base_url) => {
            let mut discovered = 0;
            for link in extract_links(&document, &base_url) {
                if !classifier.is_same_site(&link) {
                    continue;
                }

                let priority = classifier.priority_for(&link);
                if frontier.enqueue(link, priority) {
                    discovered += 1;
                }
            }
            tracing::debug!("{} new URL(s) queued from {}", discovered, page.url);
        }
        Err(e) => {
            tracing::warn!("Cannot resolve links on {}: {}", page.url, e);
        }
    }

    if classifier.is_product_listing_page(&page.url) {
        match extractor.extract(&document, &page.url) {
            Ok(product) => {
                tracing::debug!("Extracted {}", product);
                state.push_product(product);
            }
            Err(e) => {
                state.record_extraction_fault();
                tracing::error!("Error extracting product data: {}", e);
            }
        }
    }
}
