//! Great-circle distance
//!
//! Haversine distance on a sphere of fixed radius. Pure functions only.

use crate::constants::geo::EARTH_RADIUS_KM;
use crate::coord::GeoCoordinate;

/// Calculate the distance between two points in kilometres (Haversine formula)
///
/// # Arguments
/// * `a` - First point
/// * `b` - Second point
///
/// # Returns
/// Distance in kilometres, never negative
pub fn distance_km(a: GeoCoordinate, b: GeoCoordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1] for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Check if a point lies within `radius_km` of `center` (inclusive)
pub fn is_within_km(point: GeoCoordinate, center: GeoCoordinate, radius_km: f64) -> bool {
    distance_km(point, center) <= radius_km
}
