//! Configuration loading from TOML files

mod settings;

pub use settings::{DatasetConfig, HammerConfig, ScenarioConfig};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate a config file
pub fn load_config(path: &Path) -> Result<HammerConfig, ConfigError> {
    let config: HammerConfig = load_toml(path)?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate a config string
pub fn parse_config(content: &str) -> Result<HammerConfig, ConfigError> {
    let config: HammerConfig = parse_toml(content)?;
    config.validate()?;
    Ok(config)
}

/// Get the built-in configuration
pub fn default_config() -> HammerConfig {
    let toml = include_str!("../../config/default.toml");
    parse_config(toml).unwrap_or_default()
}
