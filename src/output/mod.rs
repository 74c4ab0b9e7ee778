//! Styled terminal output for one-shot mode
//!
//! Rendering helpers shared by the `scan` command: section headers, stat
//! lines, result cards, and status icons.

use crate::models::ScanResult;
use crate::session::ScanStats;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a simple spinner for the in-flight scan request
pub fn create_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Print a section header
pub fn print_header(title: &str) {
    println!();
    println!("{}", style(title).cyan().bold());
    println!("{}", style("─".repeat(title.len().max(40))).dim());
}

/// Print a success status line
pub fn print_success(message: &str) {
    println!("  {} {}", style("✓").green(), message);
}

/// Print a failure status line
pub fn print_error(message: &str) {
    eprintln!("  {} {}", style("✗").red(), message);
}

/// Print an info status line
pub fn print_info(message: &str) {
    println!("  {} {}", style("ℹ").cyan(), message);
}

/// Print the aggregate counters for a finished scan
pub fn print_stats(stats: &ScanStats) {
    print_header("Scan Summary");
    println!(
        "  {:<18} {}",
        "Wordlist size:",
        style(stats.wordlist_size).bold()
    );
    println!(
        "  {:<18} {}",
        "Checked:",
        style(stats.total_checked).bold()
    );
    println!(
        "  {:<18} {}",
        "Found:",
        style(stats.found_count).green().bold()
    );
    println!(
        "  {:<18} {}",
        "Success rate:",
        style(stats.success_rate_display()).bold()
    );
}

/// Print one result card
pub fn print_result(result: &ScanResult) {
    let status = match result.status_code {
        200..=299 => style(result.status_code).green().bold(),
        300..=399 => style(result.status_code).cyan().bold(),
        400..=499 => style(result.status_code).yellow().bold(),
        _ => style(result.status_code).red().bold(),
    };

    println!(
        "  {} [{}]",
        style(&result.subdomain).bold(),
        status
    );
    println!("    {}", style(result.effective_url()).dim());

    let response_time = result
        .response_time_ms()
        .map(|ms| format!("{}ms", ms))
        .unwrap_or_else(|| "N/A".to_string());
    let size = result
        .content_length
        .map(format_bytes)
        .unwrap_or_else(|| "N/A".to_string());

    println!(
        "    {}  {}  {}  {}",
        response_time,
        size,
        result.server,
        result.content_type_display()
    );

    if result.title != "No title" {
        println!("    {}", style(&result.title).italic());
    }

    if let Some(ref ssl) = result.ssl_info {
        let subject = ssl
            .subject
            .as_ref()
            .and_then(|s| s.common_name.as_deref())
            .unwrap_or("N/A");
        let issuer = ssl
            .issuer
            .as_ref()
            .and_then(|i| i.organization_name.as_deref())
            .unwrap_or("N/A");
        let expires = ssl.not_after.as_deref().unwrap_or("N/A");
        println!(
            "    {} {} · issued by {}, expires {}",
            style("TLS").magenta(),
            subject,
            issuer,
            expires
        );
    }

    println!();
}

/// Format a byte count for display: `0 B`, `12.50 KB`, `3.20 MB`.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let exponent = (bytes as f64).log(1024.0).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024f64.powi(exponent as i32);

    if exponent == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.2} {}", value, UNITS[exponent])
    }
}

/// Print results as pretty JSON
pub fn print_json<T: serde::Serialize>(value: &T) -> crate::error::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| crate::error::SubscoutError::Parse(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_format_with_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
    }
}
