//! Command-line configuration.

use crate::catalog::graphql::DEFAULT_ENDPOINT;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Smallest dropdown that still shows one whole item.
pub const MIN_LIST_HEIGHT: u16 = 2;

/// Search the Rick and Morty catalog and pick characters.
///
/// The picked characters are printed to stdout on exit, one `id<TAB>name`
/// line each, so the command composes in shell pipelines.
#[derive(Debug, Parser)]
#[command(name = "mselect", version, about, long_about = None)]
pub struct Cli {
    /// GraphQL endpoint of the character catalog.
    #[arg(long, env = "MSELECT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Dropdown height in rows (two rows per character).
    #[arg(long, default_value_t = 16)]
    pub list_height: u16,

    /// Write logs to this file. RUST_LOG sets the level (default: info).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the selection as a JSON array.
    #[arg(long)]
    pub json: bool,

    /// HTTP request timeout in seconds.
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint {url:?}: {reason}")]
    Endpoint { url: String, reason: String },

    #[error("list height must be at least {MIN_LIST_HEIGHT} rows, got {0}")]
    ListHeight(u16),

    #[error("timeout must be at least one second")]
    Timeout,
}

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub list_height: u16,
    pub log_file: Option<PathBuf>,
    pub output: OutputFormat,
    pub timeout: Duration,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let url = reqwest::Url::parse(&cli.endpoint).map_err(|err| ConfigError::Endpoint {
            url: cli.endpoint.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Endpoint {
                url: cli.endpoint,
                reason: format!("unsupported scheme {:?}", url.scheme()),
            });
        }
        if cli.list_height < MIN_LIST_HEIGHT {
            return Err(ConfigError::ListHeight(cli.list_height));
        }
        if cli.timeout_secs == 0 {
            return Err(ConfigError::Timeout);
        }

        Ok(Self {
            endpoint: cli.endpoint,
            list_height: cli.list_height,
            log_file: cli.log_file,
            output: if cli.json {
                OutputFormat::Json
            } else {
                OutputFormat::Lines
            },
            timeout: Duration::from_secs(cli.timeout_secs),
        })
    }
}
