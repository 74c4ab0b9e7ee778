//! subscout - terminal results console for a remote subdomain-scan service
//!
//! Two front-ends over one session core:
//! - `subscout example.com` runs one scan and prints the results
//! - `subscout` (or `--interactive`) launches the full-screen console

use clap::Parser;
use console::style;
use subscout::cli::Cli;
use subscout::config::Settings;
use subscout::error::Result;
use subscout::{commands, tui};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let mut settings = match cli.config {
        Some(ref path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };

    if let Some(ref url) = cli.service_url {
        settings.service.endpoint = url.clone();
    }

    // One-shot mode when a domain is given and interactive wasn't forced
    if let Some(ref domain) = cli.domain {
        if !cli.interactive {
            return commands::run_scan(
                domain,
                cli.threads.unwrap_or(settings.scan.threads),
                cli.timeout.unwrap_or(settings.scan.timeout_secs),
                &settings,
                cli.format,
                cli.export.as_deref(),
            )
            .await;
        }
    }

    // Interactive console
    let mut runner = tui::TuiRunner::new(&settings, cli.domain.as_deref())?;
    runner.run().await
}
