//! Configuration module for Shop-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every key has a default, so the crawler also runs without a file.
//!
//! # Example
//!
//! ```no_run
//! use shop_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Crawling {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, SelectorConfig, SiteConfig};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, MAX_CONCURRENCY, MAX_TIME_LIMIT_MINUTES};

pub(crate) use validation::compile_selector;
