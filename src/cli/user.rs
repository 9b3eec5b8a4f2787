//! User command handler
//!
//! Register and list ledger users.

use crate::config::Config;
use crate::error::Result;
use clap::{Args, Subcommand};

/// User command arguments
#[derive(Args)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommand {
    /// Register a new user
    Add {
        /// Unique username
        username: String,
    },
    /// List registered users
    List,
}

/// Run the user command
pub fn run(args: UserArgs, config: &Config) -> Result<()> {
    let ledger = config.open_ledger()?;

    match args.command {
        UserCommand::Add { username } => {
            let id = ledger.register(&username)?;
            println!("Registered {} (id {})", username.trim(), id);
        }
        UserCommand::List => {
            let users = ledger.users()?;
            if users.is_empty() {
                println!("No users registered.");
                return Ok(());
            }
            for user in users {
                println!(
                    "  {:>4}  {:<20} {} points",
                    user.id, user.username, user.progress.travel_points
                );
            }
        }
    }

    Ok(())
}
