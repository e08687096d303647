//! Output sink traits and error types

use crate::state::ProductRecord;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for the products of a finished crawl
pub trait ProductSink {
    /// Writes every record, in order, after a header row
    ///
    /// # Arguments
    ///
    /// * `products` - The records accumulated by the session
    fn write_products(&mut self, products: &[ProductRecord]) -> OutputResult<()>;
}
