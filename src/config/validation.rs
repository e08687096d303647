use crate::config::types::{Config, CrawlerConfig, OutputConfig, SelectorConfig, SiteConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Upper bound on in-flight fetches
pub const MAX_CONCURRENCY: u32 = 64;

/// Upper bound on the time budget: one year, in minutes
pub const MAX_TIME_LIMIT_MINUTES: u64 = 60 * 24 * 365;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    validate_selector_config(&config.selectors)?;
    Ok(())
}

/// Validates the site section: the base URL must be an absolute http(s) URL
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", config.base_url, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' has no host",
            config.base_url
        )));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    // Zero limits are legal: they describe an empty budget
    if let Some(minutes) = config.time_limit {
        if minutes > MAX_TIME_LIMIT_MINUTES {
            return Err(ConfigError::Validation(format!(
                "time-limit must be at most {} minutes, got {}",
                MAX_TIME_LIMIT_MINUTES, minutes
            )));
        }
    }

    if config.request_timeout < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout must be >= 1 second, got {}",
            config.request_timeout
        )));
    }

    if config.concurrency < 1 || config.concurrency > MAX_CONCURRENCY {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and {}, got {}",
            MAX_CONCURRENCY, config.concurrency
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.products_path.is_empty() {
        return Err(ConfigError::Validation(
            "products-path cannot be empty".to_string(),
        ));
    }

    if config.error_log_path.is_empty() {
        return Err(ConfigError::Validation(
            "error-log-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every extractor selector compiles
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    for selector in [&config.image, &config.title, &config.price] {
        compile_selector(selector)?;
    }
    Ok(())
}

/// Compiles a CSS selector, mapping parse failures into a config error
pub(crate) fn compile_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}
