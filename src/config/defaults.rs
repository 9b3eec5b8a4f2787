//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default maximum distance between photo and place, in kilometres
pub const DEFAULT_THRESHOLD_KM: f64 = 25.0;

/// Default points credited per verified visit
pub const DEFAULT_POINTS: u32 = 20;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default number of leaderboard rows
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;
