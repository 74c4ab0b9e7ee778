//! One-shot scan command
//!
//! Validates the target before anything touches the network, issues the
//! single scan request, renders the session, and optionally exports CSV.

use crate::cli::OutputFormat;
use crate::client::ScanClient;
use crate::config::Settings;
use crate::error::Result;
use crate::models::ScanRequest;
use crate::session::ScanSession;
use crate::{domain, export, output};
use std::path::Path;

/// Run one scan end to end and print the results.
pub async fn run_scan(
    target: &str,
    threads: u32,
    timeout: u64,
    settings: &Settings,
    format: OutputFormat,
    export_dir: Option<&Path>,
) -> Result<()> {
    // Validation failures must never reach the service.
    let domain = domain::parse_target(target)?;

    let client = ScanClient::new(
        &settings.service.endpoint,
        settings.service.request_timeout(),
    )?;
    let request = ScanRequest::new(&domain, threads, timeout);

    let spinner = output::create_spinner(&format!("Scanning {}...", domain));
    let response = client.scan(&request).await;
    spinner.finish_and_clear();

    let response = response?;

    let mut session = ScanSession::new();
    session.load(response);

    match format {
        OutputFormat::Json => {
            output::print_json(&serde_json::json!({
                "domain": session.domain(),
                "wordlist_size": session.stats().wordlist_size,
                "total_checked": session.stats().total_checked,
                "found_count": session.stats().found_count,
                "success_rate": session.stats().success_rate_display(),
                "subdomains": session.filtered(),
            }))?;
        }
        OutputFormat::Table => {
            let stats = session.stats();
            output::print_stats(&stats);

            output::print_header(&format!(
                "{} active subdomains found",
                stats.found_count
            ));

            if session.filtered().is_empty() {
                output::print_info("No active subdomains found with the current wordlist");
            } else {
                for result in session.filtered() {
                    output::print_result(result);
                }
            }
        }
    }

    if let Some(dir) = export_dir {
        match export::export_csv(
            session.filtered(),
            dir,
            &settings.console.export_prefix,
        ) {
            Ok(path) => output::print_success(&format!(
                "Exported {} results to {}",
                session.filtered().len(),
                path.display()
            )),
            Err(e) => output::print_error(&e.to_string()),
        }
    }

    Ok(())
}
