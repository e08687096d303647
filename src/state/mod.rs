//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `ProductRecord` / `Field`: one extracted product and its tagged fields
//! - `SessionState`: counters, accumulated records and lifecycle of a crawl
//! - `CrawlLimits` / `StopReason`: the two budgets and why a crawl ended

mod product;
mod session_state;

// Re-export main types
pub use product::{Field, ProductRecord, NO_IMAGE, NO_PRICE, NO_TITLE};
pub use session_state::{CrawlLimits, SessionState, SessionStatus, StopReason};
