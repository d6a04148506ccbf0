//! Shared components for CLI commands

use crate::cli::args::Args;
use crate::config::GapFillConfig;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr, keeping stdout for command output
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("meteo_gapfill={log_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load and parse a gap filling configuration file
pub fn load_configuration(path: &Path) -> Result<GapFillConfig> {
    info!("Loading configuration {}", path.display());
    GapFillConfig::from_file(path)
        .with_context(|| format!("Invalid configuration {}", path.display()))
}

/// Create a progress bar counting stations
pub fn create_progress_bar(total: u64, operation: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
    ) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(operation.to_string());
    pb
}

/// Format a value for text output, leaving the nodata sentinel recognizable
pub fn format_value(value: f64) -> String {
    if crate::constants::is_nodata(value) {
        format!("{}", crate::constants::NODATA)
    } else {
        format!("{value:.3}")
    }
}
