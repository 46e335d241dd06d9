use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Daytracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the YAML data file holding entries, todos and the log time
    pub data_file: PathBuf,

    /// Settings for the reported total
    #[serde(default)]
    pub totals: Totals,

    /// Display settings
    #[serde(default)]
    pub display: Display,
}

/// Which entries count towards the reported total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    /// Entry names left out of the total (non-working time)
    pub excluded: Vec<String>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Display {
    /// Allow coloured output (still subject to TTY and NO_COLOR detection)
    pub color: bool,
}

impl Config {
    /// Whether an entry with this name is left out of the total
    pub fn is_excluded(&self, name: &str) -> bool {
        self.totals
            .excluded
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(name))
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_file = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".daily-tracker.yaml");

        Self {
            data_file,
            totals: Totals::default(),
            display: Display::default(),
        }
    }
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            excluded: vec!["lunch".to_string(), "me time".to_string()],
        }
    }
}

impl Default for Display {
    fn default() -> Self {
        Self { color: true }
    }
}
