use crate::config::Settings;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Overrides the level derived from `--debug`, e.g. `GALLERY_LOG_LEVEL=address_gallery=trace`.
pub const LOG_LEVEL_ENV: &str = "GALLERY_LOG_LEVEL";

/// Routes `tracing` output to the configured log file. The terminal belongs to the UI.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_file)
        .map_err(|e| eyre!("Failed to open log file {}: {e}", settings.log_file.display()))?;

    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("Failed to install logger: {e}"))
}
