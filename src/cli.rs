//! Command-line flags layered over the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::movies::SourceStyle;

#[derive(Debug, Parser)]
#[command(
    name = "moviedeck",
    version,
    about = "Browse, add and delete movies from a remote JSON endpoint"
)]
pub struct Cli {
    /// Config file (default: ~/.config/moviedeck/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the listing endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Override the endpoint style
    #[arg(long, value_enum)]
    pub style: Option<SourceStyle>,

    /// Override the retry period in milliseconds
    #[arg(long, value_name = "MS")]
    pub retry_interval_ms: Option<u64>,
}

impl Cli {
    /// Load the config file and apply flag overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(style) = self.style {
            config.source.style = style;
        }
        if let Some(interval_ms) = self.retry_interval_ms {
            config.retry.interval_ms = interval_ms;
        }

        config.validate()?;
        Ok(config)
    }
}
