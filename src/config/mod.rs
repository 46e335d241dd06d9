//! Configuration module
//!
//! Handles loading and saving of the daytracker TOML configuration.
//! Defines Config, Totals, and Display types.

mod types;

#[allow(unused_imports)]
pub use types::{Config, Display, Totals};

use crate::error::{Result, TrackerError};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the configuration file
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("daytracker")
        .join("config.toml")
}

/// Resolve the configuration for a run.
///
/// An explicitly passed path must exist. Without one, the default location is
/// tried and built-in defaults are used when nothing is there.
pub fn resolve(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None => {
            let path = default_path();
            if path.exists() {
                load(&path)
            } else {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
        }
    }
}

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        TrackerError::Config(format!(
            "Cannot read config from '{}': {}. Run 'dt config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| TrackerError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
