//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;
use std::path::Path;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "verification.threshold_km")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs, config_path: &Path) -> Result<()> {
    if args.path {
        println!("{}", config_path.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save_to(config_path)?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load_from(config_path)?;

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            show_all_config(&config);
        }

        // Key only: show that value
        (Some(key), None) => match config.get(key) {
            Some(value) => println!("{}", value),
            None => {
                let keys = Config::available_keys().join("\n  ");
                return Err(Error::Config(format!(
                    "Unknown config key: {}\n\nAvailable keys:\n  {}",
                    key, keys
                )));
            }
        },

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save_to(config_path)?;
            println!("{} = {}", key, value);
        }

        // Value without key: not valid
        (None, Some(_)) => {
            return Err(Error::Config("Must specify a key to set a value".to_string()));
        }
    }

    Ok(())
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[verification]");
    println!("threshold_km = {}", config.verification.threshold_km);
    println!("points = {}", config.verification.points);
    println!();

    println!("[catalog]");
    if config.catalog.path.is_empty() {
        println!("path = \"\" # built-in catalog");
    } else {
        println!("path = \"{}\"", config.catalog.path);
    }
    println!();

    println!("[ledger]");
    if config.ledger.path.is_empty() {
        println!("path = \"\" # default data directory");
    } else {
        println!("path = \"{}\"", config.ledger.path);
    }
    println!();

    println!("[output]");
    println!("format = \"{}\"", config.output.format);
}
