//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod export;
pub mod leaderboard;
pub mod locate;
pub mod places;
pub mod progress;
pub mod user;
pub mod verify;

use crate::config::Config;
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Verify travel photos and track travel points
#[derive(Parser)]
#[command(name = "travel-verify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use this config file instead of the default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the places that can be visited
    Places(places::PlacesArgs),

    /// Show the location embedded in a photo
    Locate(locate::LocateArgs),

    /// Verify a visit with a photo and credit points
    Verify(verify::VerifyArgs),

    /// Manage users
    User(user::UserArgs),

    /// Show a user's points and achievements
    Progress(progress::ProgressArgs),

    /// Rank users by travel points
    Leaderboard(leaderboard::LeaderboardArgs),

    /// Export a user's achievements as CSV
    Export(export::ExportArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    let load = || Config::load_from(&config_path);

    match cli.command {
        Commands::Places(args) => places::run(args, &load()?),
        Commands::Locate(args) => locate::run(args, &load()?),
        Commands::Verify(args) => verify::run(args, &load()?),
        Commands::User(args) => user::run(args, &load()?),
        Commands::Progress(args) => progress::run(args, &load()?),
        Commands::Leaderboard(args) => leaderboard::run(args, &load()?),
        Commands::Export(args) => export::run(args, &load()?),
        Commands::Config(args) => config::run(args, &config_path),
    }
}

/// Initialize logging to stderr
///
/// `RUST_LOG` wins when set; otherwise verbosity flags pick the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}
