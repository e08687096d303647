/// Crawl session state and budgets
///
/// The session state is owned by the controller for the lifetime of one crawl
/// and consumed once at the end to produce output.
use crate::state::product::ProductRecord;
use chrono::{DateTime, Utc};
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

/// Why a crawl session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// No URLs left to fetch
    FrontierExhausted,

    /// The wall-clock budget ran out
    TimeLimitReached,

    /// The page budget ran out
    PageLimitReached,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::FrontierExhausted => "frontier exhausted",
            Self::TimeLimitReached => "time limit reached",
            Self::PageLimitReached => "page limit reached",
        };
        write!(f, "{}", s)
    }
}

/// Lifecycle of a crawl session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Stopped(StopReason),
}

/// Time and page budgets; `None` means unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlLimits {
    pub time_limit: Option<Duration>,
    pub page_limit: Option<u64>,
}

impl CrawlLimits {
    /// True once `elapsed` has reached the time budget
    pub fn time_exhausted(&self, elapsed: Duration) -> bool {
        self.time_limit.is_some_and(|limit| elapsed >= limit)
    }

    /// True once `pages` has reached the page budget
    pub fn pages_exhausted(&self, pages: u64) -> bool {
        self.page_limit.is_some_and(|limit| pages >= limit)
    }
}

/// Mutable state of one crawl session
#[derive(Debug)]
pub struct SessionState {
    started: Instant,
    started_at: DateTime<Utc>,
    pages_scraped: u64,
    fetch_failures: u64,
    extraction_faults: u64,
    products: Vec<ProductRecord>,
    status: SessionStatus,
}

impl SessionState {
    /// Starts the session clock
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            started_at: Utc::now(),
            pages_scraped: 0,
            fetch_failures: 0,
            extraction_faults: 0,
            products: Vec::new(),
            status: SessionStatus::Running,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn pages_scraped(&self) -> u64 {
        self.pages_scraped
    }

    pub fn fetch_failures(&self) -> u64 {
        self.fetch_failures
    }

    pub fn extraction_faults(&self) -> u64 {
        self.extraction_faults
    }

    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Counts a successfully fetched page
    pub fn record_page(&mut self) {
        self.pages_scraped += 1;
    }

    pub fn record_fetch_failure(&mut self) {
        self.fetch_failures += 1;
    }

    pub fn record_extraction_fault(&mut self) {
        self.extraction_faults += 1;
    }

    pub fn push_product(&mut self, product: ProductRecord) {
        self.products.push(product);
    }

    /// Checks the budgets, treating `in_flight` dispatched fetches as pages
    /// that may still be counted
    ///
    /// The time budget is checked first.
    pub fn budget_exhausted(&self, limits: &CrawlLimits, in_flight: u64) -> Option<StopReason> {
        if limits.time_exhausted(self.elapsed()) {
            return Some(StopReason::TimeLimitReached);
        }

        if limits.pages_exhausted(self.pages_scraped + in_flight) {
            return Some(StopReason::PageLimitReached);
        }

        None
    }

    /// Moves the session to `Stopped`; the first reason recorded wins
    pub fn stop(&mut self, reason: StopReason) {
        if self.status == SessionStatus::Running {
            self.status = SessionStatus::Stopped(reason);
        }
    }

    /// Consumes the state, returning the products in insertion order
    pub fn into_products(self) -> Vec<ProductRecord> {
        self.products
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
