//! Data file persistence module
//!
//! Reads and rewrites the whole YAML data file on every run. Unversioned
//! files are upgraded in memory before any mutation runs; the next save
//! writes the current schema.

mod legacy;

use std::fs;
use std::path::Path;

use crate::error::{Result, TrackerError};
use crate::models::record::CURRENT_VERSION;
use crate::models::Record;
use crate::tracker::time;
use legacy::LegacyRecord;

/// Load and validate the record at `path`
pub fn load(path: &Path) -> Result<Record> {
    let content = fs::read_to_string(path).map_err(|e| {
        TrackerError::Record(format!(
            "Cannot read data file '{}': {}. Run 'dt init' to create one.",
            path.display(),
            e
        ))
    })?;

    let record = parse(&content)?;
    validate(&record)?;
    tracing::debug!(
        path = %path.display(),
        entries = record.entries.len(),
        todos = record.todos.len(),
        "loaded data file"
    );
    Ok(record)
}

/// Parse a data file, sniffing the schema version
pub fn parse(content: &str) -> Result<Record> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    let version = value.get("version").map(serde_yaml::Value::as_u64);

    match version {
        None => {
            tracing::info!("upgrading unversioned data file");
            let legacy: LegacyRecord = serde_yaml::from_value(value)?;
            legacy.upgrade()
        }
        Some(Some(version)) if version == u64::from(CURRENT_VERSION) => {
            Ok(serde_yaml::from_value(value)?)
        }
        Some(_) => Err(TrackerError::Record(format!(
            "Unsupported data file version (this build reads version {})",
            CURRENT_VERSION
        ))),
    }
}

/// Check the invariants mutations rely on
fn validate(record: &Record) -> Result<()> {
    time::validate_format(&record.format)?;
    time::log_time(record)?;
    if !(1..=60).contains(&record.block_size) {
        return Err(TrackerError::InvalidBlockSize(record.block_size.to_string()));
    }
    Ok(())
}

/// Overwrite the data file with `record`
pub fn save(record: &Record, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(record)?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, yaml)?;
    tracing::debug!(path = %path.display(), "saved data file");
    Ok(())
}

/// Write a fresh record, refusing to replace an existing file
pub fn create(path: &Path) -> Result<Record> {
    if path.exists() {
        return Err(TrackerError::Record(format!(
            "Data file already exists at '{}'",
            path.display()
        )));
    }

    let record = Record::new();
    save(&record, path)?;
    Ok(record)
}
