//! # JSON Client
//!
//! The single network primitive: GET a URL and parse the body as JSON.
//!
//! ```text
//! fetch_json(url)
//!   ├── transport fails      → FetchError::Transport
//!   ├── status not 2xx       → FetchError::HttpStatus { status }
//!   ├── body is not JSON     → FetchError::Parse
//!   └── ok                   → serde_json::Value
//! ```
//!
//! One call, one request. No retries, no caching, no timeout.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

/// Errors that can occur while fetching a resource.
///
/// The distinction is for logs and tests; views only show the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, reset).
    Transport(String),
    /// The server answered with a non-success status.
    HttpStatus { status: u16 },
    /// The body was not JSON, or not the expected shape.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "network error: {msg}"),
            FetchError::HttpStatus { status } => write!(f, "HTTP error! status: {status}"),
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait JsonClient: Send + Sync {
    /// Performs one GET against `url` and parses the response body as JSON.
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// reqwest-backed client for the real upstream API.
pub struct RestClient {
    client: reqwest::Client,
}

impl RestClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JsonClient for RestClient {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        info!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        debug!("Response status for {}: {}", url, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Upstream returned HTTP {} for {}", status, url);
            return Err(FetchError::HttpStatus { status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| {
            warn!("Malformed JSON from {}: {}", url, e);
            FetchError::Parse(e.to_string())
        })
    }
}
