//! HTTP client for the scan service
//!
//! The service exposes one endpoint: `POST /scan` with a JSON
//! [`ScanRequest`] body, answering with a JSON [`ScanResponse`]. Any
//! non-2xx status is treated as unconditional failure regardless of the
//! response body.

use crate::error::{Result, SubscoutError};
use crate::models::{ScanRequest, ScanResponse};
use std::time::Duration;

/// Client for the remote subdomain-scan service.
#[derive(Debug, Clone)]
pub struct ScanClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ScanClient {
    /// Build a client for the given service endpoint.
    ///
    /// `request_timeout` of zero means no client-side timeout at all; the
    /// scan may legitimately run for minutes, so the default transport
    /// behaviour is to wait for the service.
    pub fn new(endpoint: &str, request_timeout: Duration) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if !request_timeout.is_zero() {
            builder = builder.timeout(request_timeout);
        }
        let http = builder.build().map_err(SubscoutError::Http)?;

        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Issue exactly one scan request and await the full response.
    pub async fn scan(&self, request: &ScanRequest) -> Result<ScanResponse> {
        let url = format!("{}/scan", self.endpoint);

        tracing::debug!(domain = %request.domain, threads = request.threads, "sending scan request");

        let response = self
            .http
            .post(&url)
            .header("User-Agent", concat!("subscout/", env!("CARGO_PKG_VERSION")))
            .json(request)
            .send()
            .await
            .map_err(SubscoutError::Http)?;

        if !response.status().is_success() {
            return Err(SubscoutError::Service(format!(
                "scan request failed with status: {}",
                response.status()
            )));
        }

        let text = response.text().await.map_err(SubscoutError::Http)?;

        serde_json::from_str(&text)
            .map_err(|e| SubscoutError::Parse(format!("failed to parse scan response: {}", e)))
    }
}
