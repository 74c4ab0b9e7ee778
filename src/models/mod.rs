//! Data model for scan requests and results

mod scan;

pub use scan::{ScanRequest, ScanResponse, ScanResult, SslInfo, SslIssuer, SslSubject};
