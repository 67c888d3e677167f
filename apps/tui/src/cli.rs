use crate::config::{DEFAULT_API_BASE, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT_MS};
use clap::builder::FalseyValueParser;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "address-gallery",
    version,
    about = "Browse the image assets owned by a wallet address"
)]
pub struct CliArgs {
    /// Look up this address once, print the result and exit
    #[arg(long, value_name = "ADDRESS")]
    pub address: Option<String>,

    /// Print headless results as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging (`DEBUG=1` also works)
    #[arg(long, env = "DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,

    /// Marketplace API base URL
    #[arg(long, env = "GALLERY_API_BASE", default_value = DEFAULT_API_BASE, value_name = "URL")]
    pub api_base: String,

    /// Marketplace API key, sent as X-API-KEY
    #[arg(long, env = "GALLERY_API_KEY", hide_env_values = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, env = "GALLERY_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS, value_name = "MS")]
    pub timeout_ms: u64,

    /// Log file path
    #[arg(long, env = "GALLERY_LOG", default_value = DEFAULT_LOG_FILE, value_name = "PATH")]
    pub log_file: PathBuf,
}

impl CliArgs {
    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
