//! Photo location extraction
//!
//! This module defines the `LocationExtractor` trait and the EXIF-backed
//! implementation used to recover where a photo was taken.
//!
//! Every failure is reported as an `ExtractionError`; malformed input never
//! panics.

pub mod gps;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::coord::GeoCoordinate;
use thiserror::Error;

pub use gps::ExifLocationExtractor;

/// Why a location could not be read from an image
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The image carries no EXIF block, or the block has no GPS position
    #[error("no GPS data found in the image")]
    NoLocationData,

    /// The image container or its GPS fields could not be understood
    #[error("malformed image: {0}")]
    MalformedImage(String),
}

/// Trait for sources of photo locations
///
/// Implementations must be thread-safe (Send + Sync) and free of side
/// effects beyond reading the supplied bytes.
pub trait LocationExtractor: Send + Sync {
    /// Recover the coordinate at which the image was taken
    fn extract(&self, image: &[u8]) -> Result<GeoCoordinate, ExtractionError>;
}

impl<T: LocationExtractor + ?Sized> LocationExtractor for &T {
    fn extract(&self, image: &[u8]) -> Result<GeoCoordinate, ExtractionError> {
        (**self).extract(image)
    }
}
