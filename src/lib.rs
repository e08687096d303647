//! Shop-Harvest: a single-site product crawler
//!
//! This crate crawls one e-commerce site, prioritising product-listing pages,
//! extracts product records from them and writes the results to CSV.

pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Shop-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Frontier is empty")]
    EmptyFrontier,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// A page that could not be fetched
///
/// Never fatal: the session logs it and moves on to the next URL.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Failed to read body of {url}: {message}")]
    Body { url: String, message: String },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Timeout { url }
            | Self::Status { url, .. }
            | Self::Transport { url, .. }
            | Self::Body { url, .. } => url,
        }
    }
}

/// Structural fault while reading a product page
#[derive(Debug, Error)]
pub enum ExtractionFault {
    #[error("Element matching '{selector}' on {url} has no '{attribute}' attribute")]
    MissingAttribute {
        url: String,
        selector: String,
        attribute: &'static str,
    },
}

/// Result type alias for Shop-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{CrawlOutcome, Frontier, PageClassifier, ProductExtractor, Session};
pub use state::{Field, ProductRecord, StopReason};
