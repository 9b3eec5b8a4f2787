//! travel-verify: Photo-Based Visit Verification
//!
//! A library and CLI tool for checking that a photo was taken at a claimed
//! place and crediting travel points for verified visits.
//!
//! ## Features
//!
//! - EXIF GPS extraction with hemisphere handling
//! - Great-circle (haversine) distance between coordinates
//! - Configurable acceptance radius and point award
//! - File-backed score ledger with leaderboard and CSV export
//!
//! ## Quick Start
//!
//! ```rust
//! use travel_verify::{Catalog, ExifLocationExtractor, VerificationPolicy, VisitVerifier};
//! use travel_verify::ledger::InMemoryLedger;
//!
//! let ledger = InMemoryLedger::with_users([1]);
//! let verifier = VisitVerifier::new(
//!     Catalog::builtin(),
//!     VerificationPolicy::default(),
//!     ExifLocationExtractor::new(),
//!     &ledger,
//! );
//!
//! // Not an image: nothing is credited
//! let outcome = verifier.verify_visit("Munnar", b"not a photo", 1).unwrap();
//! assert!(!outcome.is_accepted());
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod ledger;
pub mod photo;
pub mod verify;

// Re-export commonly used types
pub use catalog::{Catalog, Place};
pub use config::Config;
pub use coord::GeoCoordinate;
pub use error::{Error, Result};
pub use ledger::{ScoreLedger, UserProgress};
pub use photo::{ExifLocationExtractor, LocationExtractor};
pub use verify::{VerificationOutcome, VerificationPolicy, VisitVerifier};
