//! Export command handler
//!
//! Writes a user's achievements as CSV.

use crate::config::Config;
use crate::error::Result;
use crate::ledger::export::write_achievements_csv;
use clap::Args;
use std::fs::File;
use std::io;
use std::path::PathBuf;

/// Export command arguments
#[derive(Args)]
pub struct ExportArgs {
    /// Username
    #[arg(long, short = 'u')]
    pub user: String,

    /// Write CSV to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Run the export command
pub fn run(args: ExportArgs, config: &Config) -> Result<()> {
    let ledger = config.open_ledger()?;
    let user = ledger.user_by_name(&args.user)?;

    match args.output {
        Some(path) => {
            write_achievements_csv(&user.progress, File::create(&path)?)?;
            eprintln!("Achievements written to {}", path.display());
        }
        None => write_achievements_csv(&user.progress, io::stdout().lock())?,
    }

    Ok(())
}
