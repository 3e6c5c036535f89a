//! Shared components for CLI commands
//!
//! Common utilities used across the command implementations: logging setup,
//! progress-bar styling, and sample-identifier handling.

use crate::app::models::Record;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("static pattern"));

/// Set up structured logging to stderr
///
/// A second call is a no-op so commands can be driven programmatically.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("loki_processor={}", log_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .try_init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .expect("static template")
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

/// Derive the sample identifier `<STATION>_<HAUL>` from a parsed LOG
/// record. Both components are reduced to characters safe for archive file
/// names before joining.
pub fn sample_id_from_log(log: &Record, log_path: &Path) -> Result<String> {
    let field = |name: &str| {
        log.get(name)
            .map(|value| sanitize_component(&value.to_string()))
            .ok_or_else(|| {
                Error::configuration(format!(
                    "log file '{}' has no {} field",
                    log_path.display(),
                    name
                ))
            })
    };

    let sample_id = format!("{}_{}", field("STATION")?, field("HAUL")?);
    if sample_id == "_" {
        return Err(Error::configuration(format!(
            "log file '{}' yields an empty sample id",
            log_path.display()
        )));
    }
    Ok(sample_id)
}

/// Replace runs of path-hostile characters with `_`
pub fn sanitize_component(raw: &str) -> String {
    UNSAFE_CHARS
        .replace_all(raw, "_")
        .trim_matches('_')
        .to_string()
}
