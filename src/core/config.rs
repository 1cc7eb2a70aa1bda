use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::core::constants::DEFAULT_ENDPOINT;

/// Optional on-disk settings, read once at startup and never written back.
/// CLI flags win over the file, the file over the built-in defaults.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Base URL of the chat backend.
    pub endpoint: Option<String>,
    /// Start with the panel already open instead of just the toggle badge.
    pub open_on_start: Option<bool>,
}

impl Config {
    pub fn load() -> Result<Config, Box<dyn std::error::Error>> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn load_from_path(config_path: &PathBuf) -> Result<Config, Box<dyn std::error::Error>> {
        if config_path.exists() {
            let contents = fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Endpoint with the CLI > file > default precedence applied.
    pub fn resolve_endpoint(&self, cli_endpoint: Option<String>) -> String {
        cli_endpoint
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn resolve_open_on_start(&self, cli_open: bool) -> bool {
        cli_open || self.open_on_start.unwrap_or(false)
    }

    fn config_path() -> PathBuf {
        let proj_dirs = ProjectDirs::from("org", "permacommons", "bulle")
            .expect("Failed to determine config directory");
        proj_dirs.config_dir().join("config.toml")
    }
}
