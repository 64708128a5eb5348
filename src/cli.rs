use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "uptime-board", version, about = "Live uptime dashboard for a remote site inventory")]
pub struct Cli {
    /// Config file (default: ~/.config/uptime-board/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override api.base_url
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Log state changes instead of drawing the terminal UI
    #[arg(long)]
    pub headless: bool,

    /// Override logging.level
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the config file, apply command-line overrides, validate.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
