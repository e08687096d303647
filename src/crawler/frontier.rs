//! Crawl frontier: the priority queue of URLs still to fetch
//!
//! The frontier owns de-duplication. A URL is either queued, visited, or
//! unknown; it is never queued twice and never queued once visited. Dequeuing
//! marks a URL visited before its fetch outcome is known, so a URL whose
//! fetch fails is not retried.

use crate::HarvestError;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::fmt;

/// Fetch precedence of a frontier entry
///
/// Variants are declared in dequeue order: product-listing pages first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// A product-listing page, or the seed URL (score 0.5)
    ProductListing,

    /// Any other same-site page (score 1)
    Ordinary,
}

impl Priority {
    /// Numeric score; lower is dequeued sooner
    pub fn score(&self) -> f64 {
        match self {
            Self::ProductListing => 0.5,
            Self::Ordinary => 1.0,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score())
    }
}

/// A URL queued for fetching with its priority
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub priority: Priority,
    pub url: String,
}

// BinaryHeap is a max-heap: reverse the comparison so the lowest priority
// pops first, and among equal priorities the lexically smallest URL.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.url.cmp(&self.url))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority work queue plus visited set
#[derive(Debug, Default)]
pub struct Frontier {
    /// Pending entries, lowest priority on top
    queue: BinaryHeap<FrontierEntry>,

    /// URLs currently in `queue`, kept in step with every push and pop
    queued: HashSet<String>,

    /// URLs that have been dequeued for a fetch attempt
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a URL unless it is already queued or visited
    ///
    /// # Returns
    ///
    /// `true` if the URL was inserted
    pub fn enqueue(&mut self, url: impl Into<String>, priority: Priority) -> bool {
        let url = url.into();
        if self.visited.contains(&url) || self.queued.contains(&url) {
            return false;
        }

        self.queued.insert(url.clone());
        self.queue.push(FrontierEntry { priority, url });
        true
    }

    /// Removes the highest-precedence entry and marks its URL visited
    ///
    /// # Returns
    ///
    /// * `Ok(FrontierEntry)` - The next URL to fetch
    /// * `Err(HarvestError::EmptyFrontier)` - Nothing left to fetch
    pub fn dequeue(&mut self) -> Result<FrontierEntry, HarvestError> {
        let entry = self.queue.pop().ok_or(HarvestError::EmptyFrontier)?;
        self.queued.remove(&entry.url);
        self.visited.insert(entry.url.clone());
        Ok(entry)
    }

    /// Returns the number of URLs waiting in the frontier
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_queued(&self, url: &str) -> bool {
        self.queued.contains(url)
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of URLs dequeued so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Pending entries in no particular order
    pub fn entries(&self) -> impl Iterator<Item = &FrontierEntry> {
        self.queue.iter()
    }
}
