//! CSV export of scan results
//!
//! The filtered view serializes to a CSV with a fixed header row; the
//! artifact lands next to the console as `<prefix>-<ISO date>.csv`.

use crate::error::{Result, SubscoutError};
use crate::models::ScanResult;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Header row, in column order.
pub const CSV_HEADERS: [&str; 9] = [
    "Subdomain",
    "URL",
    "Status Code",
    "Response Time (ms)",
    "Content Length",
    "Server",
    "Content Type",
    "Title",
    "Final URL",
];

/// Default filename prefix for exported artifacts.
pub const DEFAULT_PREFIX: &str = "subdomains";

/// Generate the artifact filename: `<prefix>-<ISO date>.csv`.
pub fn generate_filename(prefix: &str) -> String {
    let date = Utc::now().format("%Y-%m-%d");
    format!("{}-{}.csv", prefix, date)
}

/// Quote a field when it needs it, doubling internal quotes.
fn csv_field(value: &str) -> String {
    if value.contains('"') || value.contains(',') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Build the CSV document for a set of results. Row count is always
/// `results.len() + 1` for the header.
pub fn build_csv(results: &[ScanResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for result in results {
        let response_time = result
            .response_time_ms()
            .map(|ms| ms.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let content_length = result
            .content_length
            .map(|len| len.to_string())
            .unwrap_or_default();

        let row = [
            csv_field(&result.subdomain),
            csv_field(&result.url),
            result.status_code.to_string(),
            response_time,
            content_length,
            csv_field(&result.server),
            csv_field(result.content_type_display()),
            csv_field(&result.title),
            csv_field(result.effective_url()),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Write the filtered view to `<dir>/<prefix>-<date>.csv`.
///
/// Exporting an empty view is an error; no file is created.
pub fn export_csv(results: &[ScanResult], dir: &Path, prefix: &str) -> Result<PathBuf> {
    if results.is_empty() {
        return Err(SubscoutError::Export("no results to export".to_string()));
    }

    let path = dir.join(generate_filename(prefix));
    std::fs::write(&path, build_csv(results))
        .map_err(|e| SubscoutError::Export(format!("failed to write {}: {}", path.display(), e)))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_carries_prefix_and_date() {
        let name = generate_filename("subdomains");
        assert!(name.starts_with("subdomains-"));
        assert!(name.ends_with(".csv"));
        // subdomains-YYYY-MM-DD.csv
        assert_eq!(name.len(), "subdomains-".len() + 10 + 4);
    }

    #[test]
    fn fields_with_quotes_are_doubled() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
