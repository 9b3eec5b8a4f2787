//! Places command handler
//!
//! Lists the configured catalog.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Places command arguments
#[derive(Args)]
pub struct PlacesArgs {
    /// Print the catalog as TOML (usable as a catalog file)
    #[arg(long)]
    pub toml: bool,
}

/// Run the places command
pub fn run(args: PlacesArgs, config: &Config) -> Result<()> {
    let catalog = config.load_catalog()?;

    if args.toml {
        print!("{}", catalog.to_toml()?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!("No places in catalog.");
        return Ok(());
    }

    println!("Places ({}):\n", catalog.len());
    for place in catalog.places() {
        println!(
            "  {} [{}]\n    ({:.4}, {:.4})\n    {}\n",
            place.name, place.category, place.lat, place.lon, place.description
        );
    }

    Ok(())
}
