//! Application settings configuration
//!
//! Defines the scan-service endpoint, scan defaults, and console tuning.

use crate::error::SubscoutError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Scan service connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    /// Base URL of the scan service.
    pub endpoint: String,
    /// Whole-request timeout in seconds; 0 leaves the transport default,
    /// which waits for the service however long the scan takes.
    #[serde(default)]
    pub request_timeout_secs: u64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000".to_string(),
            request_timeout_secs: 0,
        }
    }
}

impl ServiceSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Defaults for the scan parameters the form is seeded with
#[derive(Debug, Clone, Deserialize)]
pub struct ScanDefaults {
    pub threads: u32,
    pub timeout_secs: u64,
}

impl Default for ScanDefaults {
    fn default() -> Self {
        Self {
            threads: 100,
            timeout_secs: 8,
        }
    }
}

/// Console presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleSettings {
    /// Seconds a notification toast stays on screen.
    pub notification_secs: u64,
    /// Filename prefix for CSV exports.
    pub export_prefix: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            notification_secs: 4,
            export_prefix: crate::export::DEFAULT_PREFIX.to_string(),
        }
    }
}

impl ConsoleSettings {
    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_secs(self.notification_secs)
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,
    #[serde(default)]
    pub scan: ScanDefaults,
    #[serde(default)]
    pub console: ConsoleSettings,
}

impl Settings {
    /// Load settings from the default config file, falling back to
    /// built-in defaults when none exists.
    pub fn load_default() -> Result<Self, SubscoutError> {
        let config_path = Path::new("config/default.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SubscoutError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| {
            SubscoutError::Config(format!("configuration file not found: {}", path.display()))
        })?;

        toml::from_str(&content).map_err(|e| SubscoutError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service() {
        let settings = Settings::default();
        assert_eq!(settings.service.endpoint, "http://127.0.0.1:5000");
        assert_eq!(settings.scan.threads, 100);
        assert_eq!(settings.scan.timeout_secs, 8);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [service]
            endpoint = "https://scan.internal:8443"
            "#,
        )
        .unwrap();
        assert_eq!(settings.service.endpoint, "https://scan.internal:8443");
        assert_eq!(settings.service.request_timeout_secs, 0);
        assert_eq!(settings.scan.threads, 100);
    }
}
