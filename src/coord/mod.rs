//! Geographic coordinates and distance math
//!
//! This module handles:
//! - The `GeoCoordinate` value type and its range invariant
//! - Great-circle distance between two coordinates

pub mod distance;

use crate::constants::geo::{MAX_LATITUDE, MAX_LONGITUDE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub use distance::{distance_km, is_within_km};

/// A geographic coordinate in decimal degrees (WGS-84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

impl GeoCoordinate {
    /// Create new coordinates without range checking
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Create coordinates, rejecting values outside the valid ranges
    pub fn try_new(lat: f64, lon: f64) -> Result<Self> {
        let coord = Self::new(lat, lon);
        coord.validate()?;
        Ok(coord)
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> Result<()> {
        if !(-MAX_LATITUDE..=MAX_LATITUDE).contains(&self.lat) {
            return Err(Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !(-MAX_LONGITUDE..=MAX_LONGITUDE).contains(&self.lon) {
            return Err(Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lon
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_in_range() {
        assert!(GeoCoordinate::new(10.0889, 77.0582).validate().is_ok());
        assert!(GeoCoordinate::new(-90.0, 180.0).validate().is_ok());
        assert!(GeoCoordinate::new(90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        assert!(GeoCoordinate::new(90.5, 0.0).validate().is_err());
        assert!(GeoCoordinate::new(0.0, -180.1).validate().is_err());
        assert!(GeoCoordinate::try_new(-91.0, 10.0).is_err());
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(GeoCoordinate::new(f64::NAN, 0.0).validate().is_err());
        assert!(GeoCoordinate::new(0.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_display() {
        let coord = GeoCoordinate::new(10.1541, 76.3147);
        assert_eq!(coord.to_string(), "(10.154100, 76.314700)");
    }
}
