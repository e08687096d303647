//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with a fixed request timeout
//! - Picking a fresh browser user agent for every request
//! - Mapping transport failures and non-success statuses to `FetchError`
//!
//! There is no retry logic here; a failed page is reported once and the
//! session decides what to do with it.

use crate::FetchError;
use rand::Rng;
use reqwest::header::USER_AGENT;
use reqwest::{redirect::Policy, Client};
use std::future::Future;
use std::time::Duration;

/// Browser user agents rotated across requests
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.0.0",
];

/// Returns a randomly chosen browser user agent
pub fn random_user_agent() -> &'static str {
    let i = rand::rng().random_range(0..USER_AGENTS.len());
    USER_AGENTS[i]
}

/// A successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// The URL that was requested
    pub url: String,

    /// Final URL after redirects
    pub final_url: String,

    /// HTTP status code
    pub status_code: u16,

    /// Page body content
    pub body: String,
}

/// Source of pages for a crawl session
///
/// `HttpFetcher` is the production implementation; tests drive the session
/// with in-memory fetchers.
pub trait PageFetcher {
    /// Fetches a single URL
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

/// Builds an HTTP client with the given request timeout
///
/// The user agent is not set here; each request carries its own.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages over HTTP with a randomized user agent per request
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(timeout)?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        fetch_url(&self.client, url).await
    }
}

/// Fetches a URL, requiring a 2xx status
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with readable body | `Ok(FetchedPage)` |
/// | Non-2xx status | `FetchError::Status` |
/// | Timeout | `FetchError::Timeout` |
/// | Other transport error | `FetchError::Transport` |
/// | Body read failure | `FetchError::Body` |
pub async fn fetch_url(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let user_agent = random_user_agent();
    tracing::trace!("GET {} as {}", url, user_agent);

    let response = client
        .get(url)
        .header(USER_AGENT, user_agent)
        .send()
        .await
        .map_err(|e| classify_transport_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();
    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    })?;

    Ok(FetchedPage {
        url: url.to_string(),
        final_url,
        status_code: status.as_u16(),
        body,
    })
}

fn classify_transport_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Transport {
            url: url.to_string(),
            source: error,
        }
    }
}
