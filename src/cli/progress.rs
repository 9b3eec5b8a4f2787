//! Progress command handler
//!
//! Shows a user's points, achievements and credited visits.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Progress command arguments
#[derive(Args)]
pub struct ProgressArgs {
    /// Username
    #[arg(long, short = 'u')]
    pub user: String,

    /// Also list every credited visit
    #[arg(long)]
    pub visits: bool,
}

/// Run the progress command
pub fn run(args: ProgressArgs, config: &Config) -> Result<()> {
    let ledger = config.open_ledger()?;
    let user = ledger.user_by_name(&args.user)?;
    let catalog = config.load_catalog()?;

    println!("{}: {} travel points\n", user.username, user.progress.travel_points);

    println!("Achievements:");
    for place in catalog.places() {
        let mark = if user.progress.has_visited(&place.name) { "x" } else { " " };
        println!("  [{}] {}", mark, place.name);
    }

    // Achievements for places no longer in the catalog
    for (name, achieved) in &user.progress.achievements {
        if *achieved && catalog.find(name).is_none() {
            println!("  [x] {} (not in catalog)", name);
        }
    }

    if args.visits {
        println!("\nVisits:");
        if user.visits.is_empty() {
            println!("  (none)");
        }
        for visit in &user.visits {
            println!(
                "  {}  {:<20} +{}",
                visit.credited_at.format("%Y-%m-%d %H:%M"),
                visit.place,
                visit.points
            );
        }
    }

    Ok(())
}
