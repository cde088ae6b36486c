//! HTTP client for fetching pages with a browser request identity.
//!
//! A fetch is a single GET with a fixed deadline. 4xx responses are read and
//! classified here so callers get a specific reason; 5xx and transport
//! failures surface as network errors.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Desktop browser identity used unless configured otherwise.
/// Many servers reject requests without one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Real browser user agents for impersonate mode.
const IMPERSONATE_USER_AGENTS: &[&str] = &[
    // Chrome on Windows
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    // Chrome on Mac
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    // Firefox on Windows
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    // Firefox on Mac
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
    // Safari on Mac
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.1 Safari/605.1.15",
    // Edge on Windows
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36 Edg/131.0.0.0",
];

/// Why a page could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),
    #[error("Page not found (404)")]
    NotFound,
    #[error("Access forbidden (403)")]
    Forbidden,
    #[error("Request timeout")]
    Timeout,
    #[error("Network error: {0}")]
    Network(String),
    #[error("No content received")]
    EmptyResponse,
}

impl FetchError {
    /// Classify a reqwest failure that happened before a usable response.
    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Anything that can turn a URL into page HTML.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Get a random user agent for impersonate mode.
fn random_user_agent() -> &'static str {
    use std::time::SystemTime;
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_nanos() as usize)
        .unwrap_or(0);
    IMPERSONATE_USER_AGENTS[nanos % IMPERSONATE_USER_AGENTS.len()]
}

/// Resolve user agent from config value.
/// - None => default desktop browser user agent
/// - "impersonate" => random real browser user agent
/// - other => custom user agent string
pub fn resolve_user_agent(config: Option<&str>) -> String {
    match config {
        None => DEFAULT_USER_AGENT.to_string(),
        Some("impersonate") => random_user_agent().to_string(),
        Some(custom) => custom.to_string(),
    }
}

/// Parse a URL and require an http(s) scheme.
pub fn validate_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl(format!(
            "unsupported scheme '{other}', only http and https are supported"
        ))),
    }
}

/// Map a response status to a fetch failure, if it is one.
///
/// 404 and 403 get their own reasons, 5xx counts as a transport failure and
/// every other status is handed to extraction.
pub fn classify_status(status: StatusCode) -> Result<(), FetchError> {
    if status == StatusCode::NOT_FOUND {
        Err(FetchError::NotFound)
    } else if status == StatusCode::FORBIDDEN {
        Err(FetchError::Forbidden)
    } else if status.is_server_error() {
        Err(FetchError::Network(format!(
            "server responded with status {}",
            status.as_u16()
        )))
    } else {
        Ok(())
    }
}

/// HTTP client for single-attempt page fetches.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with the default browser identity.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(timeout, None)
    }

    /// Create a new HTTP client with custom user agent configuration.
    /// - None: Use default browser user agent
    /// - Some("impersonate"): Use random real browser user agent
    /// - Some(custom): Use custom user agent string
    pub fn with_user_agent(
        timeout: Duration,
        user_agent_config: Option<&str>,
    ) -> Result<Self, reqwest::Error> {
        let user_agent = resolve_user_agent(user_agent_config);
        let client = Client::builder()
            .user_agent(&user_agent)
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client, user_agent })
    }

    /// User agent this client sends.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl PageFetcher for HttpClient {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let url = validate_url(url)?;

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, ACCEPT_HTML)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "request failed");
                FetchError::from_transport(e)
            })?;

        let status = response.status();
        debug!(url = %url, status = status.as_u16(), "received response");
        classify_status(status)?;

        let body = response.text().await.map_err(FetchError::from_transport)?;
        if body.is_empty() {
            return Err(FetchError::EmptyResponse);
        }

        Ok(body)
    }
}
