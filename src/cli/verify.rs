//! Verify command handler
//!
//! Checks a photo against a claimed place and credits the user.

use crate::config::Config;
use crate::error::Result;
use crate::format::{get_formatter, unknown_format, VerificationReport};
use crate::photo::ExifLocationExtractor;
use crate::verify::VisitVerifier;
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Verify command arguments
#[derive(Args)]
pub struct VerifyArgs {
    /// Photo taken at the place
    pub photo: PathBuf,

    /// Name of the place being claimed
    #[arg(long, short = 'p')]
    pub place: String,

    /// Username to credit
    #[arg(long, short = 'u')]
    pub user: String,

    /// Output format (text or json)
    #[arg(long, short = 'f')]
    pub format: Option<String>,
}

/// Run the verify command
pub fn run(args: VerifyArgs, config: &Config) -> Result<()> {
    let format = args.format.unwrap_or_else(|| config.output.format.clone());
    let formatter = get_formatter(&format).ok_or_else(|| unknown_format(&format))?;

    let image = fs::read(&args.photo)?;
    let ledger = config.open_ledger()?;
    let user = ledger.user_by_name(&args.user)?;

    let verifier = VisitVerifier::new(
        config.load_catalog()?,
        config.policy()?,
        ExifLocationExtractor::new(),
        &ledger,
    );
    let outcome = verifier.verify_visit(&args.place, &image, user.id)?;

    let report = VerificationReport::new(user.username, args.place, outcome);
    println!("{}", formatter.format(&report)?);

    Ok(())
}
