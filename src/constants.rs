//! Centralized constants for the travel-verify crate

/// Geographic constants
pub mod geo {
    /// Mean Earth radius in kilometres
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    /// Valid latitude range in decimal degrees
    pub const MAX_LATITUDE: f64 = 90.0;

    /// Valid longitude range in decimal degrees
    pub const MAX_LONGITUDE: f64 = 180.0;
}

/// Filesystem locations
pub mod paths {
    /// Application directory name (for XDG paths)
    pub const APP_DIR_NAME: &str = "travel-verify";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Ledger file name
    pub const LEDGER_FILE_NAME: &str = "ledger.json";
}
