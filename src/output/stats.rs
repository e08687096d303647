//! End-of-crawl summary
//!
//! This module turns a `CrawlOutcome` into the figures reported to the
//! operator on stdout.

use crate::crawler::CrawlOutcome;
use crate::state::StopReason;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Wall-clock time measured by the session
    pub elapsed: Duration,

    /// Pages fetched successfully
    pub pages_scraped: u64,

    /// Product records written
    pub products: usize,

    pub fetch_failures: u64,
    pub extraction_faults: u64,

    /// URLs dequeued for a fetch attempt
    pub urls_visited: usize,

    /// URLs still queued when the crawl stopped
    pub frontier_remaining: usize,

    pub stop_reason: StopReason,
}

impl CrawlSummary {
    pub fn from_outcome(outcome: &CrawlOutcome) -> Self {
        Self {
            started_at: outcome.started_at,
            finished_at: outcome.finished_at,
            elapsed: outcome.elapsed,
            pages_scraped: outcome.pages_scraped,
            products: outcome.products.len(),
            fetch_failures: outcome.fetch_failures,
            extraction_faults: outcome.extraction_faults,
            urls_visited: outcome.urls_visited,
            frontier_remaining: outcome.frontier_remaining,
            stop_reason: outcome.stop_reason,
        }
    }

    /// Elapsed time in minutes
    pub fn elapsed_minutes(&self) -> f64 {
        self.elapsed.as_secs_f64() / 60.0
    }

    /// The one-line result message
    pub fn headline(&self) -> String {
        format!(
            "The crawl ran for {:.2} minutes and processed {} pages.",
            self.elapsed_minutes(),
            self.pages_scraped
        )
    }

    /// Returns the share of fetch attempts that succeeded as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempts = self.pages_scraped + self.fetch_failures;
        if attempts == 0 {
            return 0.0;
        }
        (self.pages_scraped as f64 / attempts as f64) * 100.0
    }
}

/// Prints the summary to stdout in a formatted manner
pub fn print_summary(summary: &CrawlSummary) {
    println!("{}", summary.headline());
    println!();

    println!("=== Crawl Summary ===");
    println!(
        "  Started:  {}",
        summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "  Finished: {}",
        summary.finished_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Stopped because: {}", summary.stop_reason);
    println!();

    println!("  Pages scraped: {}", summary.pages_scraped);
    println!(
        "  Fetch failures: {} ({:.1}% success)",
        summary.fetch_failures,
        summary.success_rate()
    );
    println!("  Products extracted: {}", summary.products);
    println!("  Extraction faults: {}", summary.extraction_faults);
    println!("  URLs visited: {}", summary.urls_visited);
    println!("  URLs left in frontier: {}", summary.frontier_remaining);
}
