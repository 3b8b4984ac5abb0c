//! HTTP transport seam.
//!
//! Collectors only ever see the [`Transport`] trait. Every failure comes back
//! as a [`FetchError`] value so the caller can substitute its fallback; the
//! transport never retries.

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Client identification sent with every request.
pub const USER_AGENT: &str = "GRID-Monitor/1.0";

/// Per-call timeout used when the caller does not pick one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("offline mode: network access disabled")]
    Offline,

    #[error("no canned response for {0}")]
    NoCannedResponse(String),
}

/// Blocking fetch of a URL as text.
pub trait Transport {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;

    /// Timeout applied by [`Transport::fetch_text`] and [`Transport::fetch_json`].
    fn default_timeout(&self) -> Duration {
        DEFAULT_TIMEOUT
    }

    /// Fetch with the default timeout, logging and swallowing failures.
    fn fetch_text(&self, url: &str) -> Option<String> {
        match self.fetch(url, self.default_timeout()) {
            Ok(body) => Some(body),
            Err(e) => {
                warn!(url = %redact_url(url), error = %e, "fetch failed");
                None
            }
        }
    }

    /// Fetch and parse a JSON document; `None` on any failure.
    fn fetch_json(&self, url: &str) -> Option<Value> {
        let body = self.fetch_text(url)?;
        match serde_json::from_str(&body) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(url = %redact_url(url), error = %e, "response is not valid JSON");
                None
            }
        }
    }
}

/// Mask API credentials embedded in query strings before logging a URL.
pub fn redact_url(url: &str) -> String {
    static KEY_PARAM: OnceLock<Regex> = OnceLock::new();
    let re = KEY_PARAM.get_or_init(|| {
        Regex::new(r"(?i)(api_?key=)[^&]*").expect("static regex is valid")
    });
    re.replace_all(url, "${1}***").into_owned()
}

// ─── reqwest ─────────────────────────────────────────────────────────

/// Live transport over a blocking reqwest client.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, timeout })
    }
}

impl Transport for HttpTransport {
    fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        debug!(url = %redact_url(url), "GET");
        let resp = self.client.get(url).timeout(timeout).send().map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        resp.text().map_err(|e| FetchError::Body(e.to_string()))
    }

    fn default_timeout(&self) -> Duration {
        self.timeout
    }
}

// ─── offline / canned ────────────────────────────────────────────────

/// Transport that refuses every request. Drives `--offline` runs, which
/// exercise every fallback path.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineTransport;

impl Transport for OfflineTransport {
    fn fetch(&self, _url: &str, _timeout: Duration) -> Result<String, FetchError> {
        Err(FetchError::Offline)
    }
}

/// Transport answering from fixed bodies keyed by URL fragment.
///
/// The first registered fragment contained in the requested URL wins.
/// Unmatched URLs fail with [`FetchError::NoCannedResponse`]. Every request
/// is recorded in call order.
#[derive(Debug, Default)]
pub struct CannedTransport {
    routes: Vec<(String, String)>,
    requests: Mutex<Vec<String>>,
}

impl CannedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, fragment: impl Into<String>, body: impl Into<String>) -> Self {
        self.routes.push((fragment.into(), body.into()));
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Transport for CannedTransport {
    fn fetch(&self, url: &str, _timeout: Duration) -> Result<String, FetchError> {
        if let Ok(mut log) = self.requests.lock() {
            log.push(url.to_string());
        }
        self.routes
            .iter()
            .find(|(fragment, _)| url.contains(fragment.as_str()))
            .map(|(_, body)| body.clone())
            .ok_or_else(|| FetchError::NoCannedResponse(url.to_string()))
    }
}

// ─── pacing ──────────────────────────────────────────────────────────

/// Minimum spacing between consecutive calls to one upstream.
#[derive(Debug, Clone, Copy)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn pause(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}
