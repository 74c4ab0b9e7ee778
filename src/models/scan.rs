//! Wire types for the scan service
//!
//! The scan service exposes a single `POST /scan` endpoint taking a
//! [`ScanRequest`] and answering with a [`ScanResponse`]. Field defaults
//! mirror what the service fills in for probes that carry no server or
//! title header, so deserialization never fails on sparse entries.

use serde::{Deserialize, Serialize};

/// Upper bound the service enforces on worker threads; clamped client-side
/// too so the request never asks for more than it can get.
pub const MAX_THREADS: u32 = 200;

/// Upper bound on the per-probe timeout accepted from user input, seconds.
pub const MAX_TIMEOUT_SECS: u64 = 60;

/// Parameters for one scan, built from form or CLI input at submit time.
#[derive(Debug, Clone, Serialize)]
pub struct ScanRequest {
    pub domain: String,
    pub threads: u32,
    pub timeout: u64,
}

impl ScanRequest {
    /// Build a request, clamping threads and timeout into the ranges the
    /// service accepts.
    pub fn new(domain: &str, threads: u32, timeout: u64) -> Self {
        Self {
            domain: domain.to_string(),
            threads: threads.clamp(1, MAX_THREADS),
            timeout: timeout.clamp(1, MAX_TIMEOUT_SECS),
        }
    }
}

/// Subject fields of a probed TLS certificate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SslSubject {
    #[serde(rename = "commonName")]
    pub common_name: Option<String>,
}

/// Issuer fields of a probed TLS certificate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SslIssuer {
    #[serde(rename = "organizationName")]
    pub organization_name: Option<String>,
}

/// TLS certificate metadata observed while probing an HTTPS endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SslInfo {
    #[serde(default)]
    pub subject: Option<SslSubject>,
    #[serde(default)]
    pub issuer: Option<SslIssuer>,
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub not_after: Option<String>,
}

/// One probed subdomain's observed HTTP/TLS metadata. Immutable once
/// received.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub subdomain: String,
    pub url: String,
    pub status_code: u16,
    /// Round-trip time in seconds, when the probe measured one.
    #[serde(default)]
    pub response_time: Option<f64>,
    /// Body size in bytes, when the probe read the body.
    #[serde(default)]
    pub content_length: Option<u64>,
    #[serde(default = "default_server")]
    pub server: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub final_url: Option<String>,
    #[serde(default)]
    pub ssl_info: Option<SslInfo>,
}

fn default_server() -> String {
    "Unknown".to_string()
}

fn default_title() -> String {
    "No title".to_string()
}

impl ScanResult {
    /// Response time converted to whole milliseconds.
    pub fn response_time_ms(&self) -> Option<u64> {
        self.response_time.map(|secs| (secs * 1000.0).round() as u64)
    }

    /// The URL the probe ended up at after redirects, falling back to the
    /// requested URL.
    pub fn effective_url(&self) -> &str {
        self.final_url.as_deref().unwrap_or(&self.url)
    }

    pub fn content_type_display(&self) -> &str {
        self.content_type.as_deref().unwrap_or("Unknown")
    }
}

/// Everything the service returns for one scan. Supersedes any prior
/// session's results entirely; there is no merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    #[serde(default)]
    pub domain: String,
    pub subdomains: Vec<ScanResult>,
    pub wordlist_size: usize,
    pub total_checked: usize,
    pub found_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_clamps_threads_and_timeout() {
        let req = ScanRequest::new("example.com", 5000, 0);
        assert_eq!(req.threads, MAX_THREADS);
        assert_eq!(req.timeout, 1);
    }

    #[test]
    fn response_time_rounds_to_millis() {
        let mut result = sample();
        result.response_time = Some(0.2345);
        assert_eq!(result.response_time_ms(), Some(235));
        result.response_time = None;
        assert_eq!(result.response_time_ms(), None);
    }

    #[test]
    fn effective_url_prefers_final() {
        let mut result = sample();
        assert_eq!(result.effective_url(), "https://www.example.com");
        result.final_url = Some("https://www.example.com/home".into());
        assert_eq!(result.effective_url(), "https://www.example.com/home");
    }

    fn sample() -> ScanResult {
        ScanResult {
            subdomain: "www.example.com".into(),
            url: "https://www.example.com".into(),
            status_code: 200,
            response_time: None,
            content_length: None,
            server: "nginx".into(),
            content_type: None,
            title: "Example".into(),
            final_url: None,
            ssl_info: None,
        }
    }
}
