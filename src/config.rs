//! Optional JSON configuration.
//!
//! A missing config file is not an error; the defaults apply and command-line
//! flags still take precedence over anything loaded here.
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "PAIRRANK_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RankConfig {
    pub schema_version: u32,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Header default when neither `--header` nor `--no-header` is given; set,
    /// it also skips the prompt.
    #[serde(default)]
    pub header: Option<bool>,
    #[serde(default = "default_show_header")]
    pub show_header: bool,
}

impl RankConfig {
    /// The delimiter as the single byte the CSV reader and writer expect.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            return Err(anyhow!(
                "delimiter must be a single ASCII character (got {:?})",
                self.delimiter
            ));
        }
        Ok(self.delimiter as u8)
    }
}

fn default_delimiter() -> char {
    ','
}

fn default_show_header() -> bool {
    true
}

pub fn default_config() -> RankConfig {
    RankConfig {
        schema_version: CONFIG_SCHEMA_VERSION,
        delimiter: default_delimiter(),
        header: None,
        show_header: default_show_header(),
    }
}

/// Load and validate a config, or fall back to defaults when none exists.
pub fn load_config_optional(path: Option<&Path>) -> Result<RankConfig> {
    let Some(path) = path else {
        return Ok(default_config());
    };
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "config not found, using defaults");
        return Ok(default_config());
    }
    let config = load_config(path)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<RankConfig> {
    let bytes = fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let config: RankConfig = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON {}", path.display()))?;
    Ok(config)
}

pub fn validate_config(config: &RankConfig) -> Result<()> {
    if config.schema_version != CONFIG_SCHEMA_VERSION {
        return Err(anyhow!(
            "unsupported config schema_version {}",
            config.schema_version
        ));
    }
    let delimiter = config.delimiter_byte()?;
    if matches!(delimiter, b'"' | b'\n' | b'\r') {
        return Err(anyhow!(
            "delimiter cannot be a quote or line break (got {:?})",
            config.delimiter
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
