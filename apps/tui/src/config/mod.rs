use crate::cli::CliArgs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "https://testnets-api.opensea.io/api/v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_LOG_FILE: &str = "address-gallery.log";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL must start with http:// or https://, got {0:?}")]
    InvalidApiBase(String),
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}

/// Runtime settings resolved from `.env`, the environment and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            debug: false,
        }
    }
}

impl Settings {
    /// Builds settings from parsed CLI arguments. Clap has already merged in
    /// the `GALLERY_*` environment variables, so `.env` must be loaded first.
    pub fn from_cli(args: &CliArgs) -> Result<Self, ConfigError> {
        let api_base = args.api_base.trim().to_string();
        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(ConfigError::InvalidApiBase(api_base));
        }

        if args.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        let api_key = args
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(ToString::to_string);

        Ok(Self {
            api_base,
            api_key,
            timeout: Duration::from_millis(args.timeout_ms),
            log_file: args.log_file.clone(),
            debug: args.debug,
        })
    }

    pub const fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

/// Loads `.env` from the working directory, if present.
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> CliArgs {
        let mut argv = vec!["address-gallery"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn explicit_flags_build_settings() {
        let settings = Settings::from_cli(&parse(&[
            "--api-base",
            "http://localhost:8080/api/v1",
            "--api-key",
            " key ",
            "--timeout-ms",
            "250",
            "--log-file",
            "/tmp/gallery.log",
            "--debug",
        ]))
        .unwrap();

        assert_eq!(
            settings,
            Settings {
                api_base: "http://localhost:8080/api/v1".to_string(),
                api_key: Some("key".to_string()),
                timeout: Duration::from_millis(250),
                log_file: PathBuf::from("/tmp/gallery.log"),
                debug: true,
            }
        );
        assert_eq!(settings.log_level(), "debug");
    }

    #[test]
    fn defaults_apply_without_flags_or_environment() {
        for var in [
            "GALLERY_API_BASE",
            "GALLERY_API_KEY",
            "GALLERY_TIMEOUT_MS",
            "GALLERY_LOG",
            "DEBUG",
        ] {
            std::env::remove_var(var);
        }

        let settings = Settings::from_cli(&parse(&[])).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timeout, Duration::from_millis(5000));
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert_eq!(settings.log_level(), "info");
    }

    #[test]
    fn rejects_non_http_base() {
        let err = Settings::from_cli(&parse(&["--api-base", "ftp://example"])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidApiBase("ftp://example".to_string()));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = Settings::from_cli(&parse(&[
            "--api-base",
            DEFAULT_API_BASE,
            "--timeout-ms",
            "0",
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::ZeroTimeout);
    }

    #[test]
    fn blank_api_key_is_ignored() {
        let settings = Settings::from_cli(&parse(&[
            "--api-base",
            DEFAULT_API_BASE,
            "--api-key",
            "   ",
        ]))
        .unwrap();
        assert_eq!(settings.api_key, None);
    }
}
