use crate::config::{self, Config};
use crate::error::Result;
use std::path::PathBuf;

/// Initialize the configuration file
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(config::default_path);

    // Check if file already exists
    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        eprintln!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    let config = Config::default();
    config::save(&config, &config_path)?;

    println!("Configuration file created: {}", config_path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to choose where the data file lives",
        config_path.display()
    );
    println!("2. Run 'dt init' to create the data file");

    Ok(())
}
