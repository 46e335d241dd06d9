use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::state;

/// Create a fresh data file at the configured location
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = config::resolve(config_path.as_deref())?;
    let record = state::create(&config.data_file)?;

    println!("Data file created: {}", config.data_file.display());
    println!(
        "Block size is {} minutes and the day starts at {}.",
        record.block_size, record.time
    );
    println!("\nNext steps:");
    println!("1. Run 'dt new work' to add your first entry");
    println!("2. Run 'dt start' when you begin the day");

    Ok(())
}
