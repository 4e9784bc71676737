//! HTTP client for the CO data API.
//!
//! Works on native targets and in the browser (reqwest uses `fetch` on
//! `wasm32`). No retries: a failed request is surfaced immediately.

use crate::error::{FetchError, Result};
use crate::models::{AnnualMapResponse, TimeSeriesResponse};
use crate::source::{DataSource, Resource};
use crate::year::Year;
use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Base URL used when nothing else is configured: the reference backend's
/// default local bind address.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Environment variable carrying the API base URL.
pub const BASE_URL_ENV: &str = "MCO_API_BASE_URL";

/// Connection settings for [`HttpSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Only honoured on native targets.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL without a trailing slash.
    pub fn base(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Full request URL for a resource and year.
    pub fn url_for(&self, resource: Resource, year: Year) -> String {
        format!("{}{}?year={}", self.base(), resource.path(), year)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::new(DEFAULT_BASE_URL)
    }
}

/// [`DataSource`] backed by the remote data API.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    config: ClientConfig,
}

impl HttpSource {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, resource: Resource, year: Year) -> Result<T> {
        let url = self.config.url_for(resource, year);
        info!("Requesting {} from {}", resource, url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            // The backend explains itself in {"error": "..."}; keep it for the log only.
            let detail = response.text().await.unwrap_or_default();
            warn!("Bad response status for {} ({}): {} {}", resource, year, status, detail.trim());
            return Err(FetchError::ResourceUnavailable {
                resource,
                year,
                status: Some(status.as_u16()),
            });
        }

        let body = response.text().await?;
        debug!("Received {} bytes of {} for {}", body.len(), resource, year);
        Ok(serde_json::from_str(&body)?)
    }
}

impl DataSource for HttpSource {
    async fn fetch_time_series(&self, year: Year) -> Result<TimeSeriesResponse> {
        self.get_json(Resource::TimeSeries, year).await
    }

    async fn fetch_annual_map(&self, year: Year) -> Result<AnnualMapResponse> {
        self.get_json(Resource::AnnualMap, year).await
    }
}
