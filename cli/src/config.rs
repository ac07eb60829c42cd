//! Host configuration, read from an optional TOML file.
//!
//! ```toml
//! prompt = "tclb> "
//! log_level = "debug"
//! history = "/home/me/.tclb_history"
//! packages = ["calc", "json"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub prompt: String,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    /// REPL history file. No history is kept when unset.
    pub history: Option<PathBuf>,
    /// Packages loaded at start-up, in order.
    pub packages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: "tclb> ".to_string(),
            log_level: "warn".to_string(),
            history: None,
            packages: vec!["calc".to_string(), "json".to_string(), "monitor".to_string()],
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }
}

/// Read the configuration at `path`. No path, or a path that does not
/// exist, gives the defaults.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    Config::from_toml(&text).with_context(|| format!("In {}", path.display()))
}
