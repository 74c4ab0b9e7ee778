//! subscout - terminal results console for a remote subdomain-scan service
//!
//! The scan engine (wordlists, DNS resolution, probing) runs behind a
//! single `POST /scan` endpoint; this crate is the client that collects
//! scan parameters, issues one request, and renders the results with
//! client-side filtering, sorting, and CSV export.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod models;
pub mod output;
pub mod session;
pub mod tui;

// Re-export commonly used types
pub use cli::Cli;
pub use client::ScanClient;
pub use config::Settings;
pub use error::{Result, SubscoutError};
pub use models::{ScanRequest, ScanResponse, ScanResult};
pub use session::{ResultFilter, ScanSession, SortKey};
