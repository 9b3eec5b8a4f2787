//! Leaderboard command handler

use crate::config::defaults::DEFAULT_LEADERBOARD_SIZE;
use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Leaderboard command arguments
#[derive(Args)]
pub struct LeaderboardArgs {
    /// Number of entries to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_LEADERBOARD_SIZE)]
    pub count: usize,
}

/// Run the leaderboard command
pub fn run(args: LeaderboardArgs, config: &Config) -> Result<()> {
    let ledger = config.open_ledger()?;
    let entries = ledger.leaderboard(args.count)?;

    if entries.is_empty() {
        println!("No users registered.");
        return Ok(());
    }

    println!("{:>4}  {:<20} {:>8} {:>7}", "Rank", "User", "Points", "Places");
    for entry in entries {
        println!(
            "{:>4}  {:<20} {:>8} {:>7}",
            entry.rank, entry.username, entry.travel_points, entry.places_visited
        );
    }

    Ok(())
}
