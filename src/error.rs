//! Unified error types for subscout

use thiserror::Error;

/// Main error type for subscout operations
#[derive(Error, Debug)]
pub enum SubscoutError {
    #[error("Scan service error: {0}")]
    Service(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SubscoutError>;
