//! Authenticated Riot API client with timeout and error mapping.
//!
//! # Responsibilities
//! - Build request URLs from a routing host (or a base-URL override)
//! - Attach the `X-Riot-Token` header to every call
//! - Bound every call with a fixed timeout
//! - Classify failures as transport, upstream status, or decode errors
//!
//! # Design Decisions
//! - One attempt per call; no retries
//! - The override is fixed at construction, never global state

use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use url::Url;

use crate::config::RiotConfig;
use crate::observability::metrics;
use crate::riot::types::{RiotError, RiotResult};

/// Header carrying the API key.
pub const RIOT_TOKEN_HEADER: &str = "X-Riot-Token";

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Riot API client wrapper.
#[derive(Clone)]
pub struct RiotClient {
    http: reqwest::Client,
    api_key: String,
    base_url_override: Option<Url>,
}

impl RiotClient {
    /// Create a client that talks to the real regional hosts.
    pub fn new(api_key: impl Into<String>) -> RiotResult<Self> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> RiotClientBuilder {
        RiotClientBuilder {
            api_key: api_key.into(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build a client from the `[riot]` config section.
    pub fn from_config(config: &RiotConfig) -> RiotResult<Self> {
        let mut builder = Self::builder(config.api_key.clone())
            .timeout(Duration::from_secs(config.timeout_secs));
        if let Some(base_url) = config.base_url.as_deref().filter(|u| !u.is_empty()) {
            builder = builder.base_url(base_url);
        }
        builder.build()
    }

    pub fn base_url_override(&self) -> Option<&Url> {
        self.base_url_override.as_ref()
    }

    /// Full endpoint URL for `host` + path `segments`, each segment percent-encoded.
    pub fn endpoint(&self, host: &str, segments: &[&str]) -> RiotResult<Url> {
        let mut url = match &self.base_url_override {
            Some(base) => base.clone(),
            None => Url::parse(&format!("https://{host}"))
                .map_err(|e| RiotError::InvalidUrl(format!("{host}: {e}")))?,
        };

        if url.cannot_be_a_base() {
            return Err(RiotError::InvalidUrl(url.to_string()));
        }
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }

        Ok(url)
    }

    /// Issue a GET and decode the JSON body into `T`.
    ///
    /// `endpoint` is a low-cardinality label for metrics and logs.
    pub async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &'static str, url: Url) -> RiotResult<T> {
        let start = Instant::now();
        let result = self.execute(url).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.kind(),
        };
        metrics::record_upstream_call(endpoint, outcome, start);

        result
    }

    async fn execute<T: DeserializeOwned>(&self, url: Url) -> RiotResult<T> {
        tracing::debug!(url = %url, "Riot API request");

        let response = self
            .http
            .get(url)
            .header(RIOT_TOKEN_HEADER, &self.api_key)
            .send()
            .await
            .map_err(RiotError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(RiotError::Transport)?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "Riot API returned error status");
            return Err(RiotError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Construction-time options for `RiotClient`.
pub struct RiotClientBuilder {
    api_key: String,
    base_url: Option<String>,
    timeout: Duration,
}

impl RiotClientBuilder {
    /// Send every request to `base_url` instead of the regional hosts.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> RiotResult<RiotClient> {
        if self.api_key.is_empty() {
            tracing::warn!("Riot API key is empty; upstream calls will be rejected");
        }

        let base_url_override = self
            .base_url
            .map(|raw| Url::parse(&raw).map_err(|e| RiotError::InvalidUrl(format!("{raw}: {e}"))))
            .transpose()?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(RiotError::Transport)?;

        Ok(RiotClient {
            http,
            api_key: self.api_key,
            base_url_override,
        })
    }
}
