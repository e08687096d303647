//! Output module for crawl results
//!
//! This module handles:
//! - Writing product records to CSV
//! - Recording fetch failures and extraction faults in the error log
//! - Summarising a finished crawl for the operator

mod csv_output;
mod error_log;
pub mod stats;
mod traits;

pub use csv_output::{write_products_csv, CsvSink, CSV_HEADER};
pub use error_log::{error_log_layer, open_error_log};
pub use stats::{print_summary, CrawlSummary};
pub use traits::{OutputError, OutputResult, ProductSink};
