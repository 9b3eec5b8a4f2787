//! Locate command handler
//!
//! Prints the GPS position of a photo and its distance to each place.

use crate::config::Config;
use crate::coord::{distance_km, is_within_km};
use crate::error::Result;
use crate::photo::{ExifLocationExtractor, LocationExtractor};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Locate command arguments
#[derive(Args)]
pub struct LocateArgs {
    /// Photo to inspect
    pub photo: PathBuf,
}

/// Run the locate command
pub fn run(args: LocateArgs, config: &Config) -> Result<()> {
    let image = fs::read(&args.photo)?;
    let threshold = config.verification.threshold_km;

    let coord = match ExifLocationExtractor::new().extract(&image) {
        Ok(coord) => coord,
        Err(e) => {
            println!("{}: {}", args.photo.display(), e);
            return Ok(());
        }
    };

    println!("Location: {}", coord);

    let catalog = config.load_catalog()?;
    let mut distances: Vec<_> = catalog
        .places()
        .iter()
        .map(|p| (p, distance_km(p.coordinate(), coord)))
        .collect();
    distances.sort_by(|a, b| a.1.total_cmp(&b.1));

    println!();
    for (place, distance) in distances {
        let marker = if is_within_km(coord, place.coordinate(), threshold) {
            " *"
        } else {
            ""
        };
        println!("  {:>10.2} km  {}{}", distance, place.name, marker);
    }

    Ok(())
}
