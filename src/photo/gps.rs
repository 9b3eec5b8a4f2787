//! EXIF GPS extraction
//!
//! Reads the GPS sub-block of an image's EXIF metadata and converts the
//! degrees/minutes/seconds triples to signed decimal degrees.

use crate::coord::GeoCoordinate;
use crate::photo::{ExtractionError, LocationExtractor};
use exif::{Exif, Field, In, Tag, Value};
use std::io::Cursor;
use tracing::debug;

/// Location extractor backed by the image's EXIF GPS tags
///
/// Understands every container kamadak-exif does: JPEG, TIFF, PNG, WebP
/// and HEIF.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifLocationExtractor;

impl ExifLocationExtractor {
    /// Create a new EXIF extractor
    pub fn new() -> Self {
        Self
    }
}

impl LocationExtractor for ExifLocationExtractor {
    fn extract(&self, image: &[u8]) -> Result<GeoCoordinate, ExtractionError> {
        let exif = read_exif(image)?;

        let (Some(lat_field), Some(lon_field)) = (
            exif.get_field(Tag::GPSLatitude, In::PRIMARY),
            exif.get_field(Tag::GPSLongitude, In::PRIMARY),
        ) else {
            debug!("EXIF block has no GPS position");
            return Err(ExtractionError::NoLocationData);
        };

        let lat = dms_to_decimal(&lat_field.value, "latitude")?
            * hemisphere_sign(
                exif.get_field(Tag::GPSLatitudeRef, In::PRIMARY),
                Hemisphere::LATITUDE,
            )?;
        let lon = dms_to_decimal(&lon_field.value, "longitude")?
            * hemisphere_sign(
                exif.get_field(Tag::GPSLongitudeRef, In::PRIMARY),
                Hemisphere::LONGITUDE,
            )?;

        let coord = GeoCoordinate::try_new(lat, lon)
            .map_err(|e| ExtractionError::MalformedImage(e.to_string()))?;
        debug!("Extracted photo location {}", coord);
        Ok(coord)
    }
}

/// Parse the EXIF block out of any supported container
fn read_exif(image: &[u8]) -> Result<Exif, ExtractionError> {
    let mut cursor = Cursor::new(image);
    exif::Reader::new()
        .read_from_container(&mut cursor)
        .map_err(|e| match e {
            exif::Error::NotFound(container) => {
                debug!("No EXIF data in {} container", container);
                ExtractionError::NoLocationData
            }
            other => ExtractionError::MalformedImage(other.to_string()),
        })
}

/// Convert an EXIF rational triple to decimal degrees
///
/// `decimal = degrees + minutes / 60 + seconds / 3600`
pub fn dms_to_decimal(value: &Value, axis: &str) -> Result<f64, ExtractionError> {
    let Value::Rational(parts) = value else {
        return Err(ExtractionError::MalformedImage(format!(
            "GPS {} is not a rational triple",
            axis
        )));
    };
    if parts.len() < 3 {
        return Err(ExtractionError::MalformedImage(format!(
            "GPS {} has {} components, expected 3",
            axis,
            parts.len()
        )));
    }
    if parts[..3].iter().any(|r| r.denom == 0) {
        return Err(ExtractionError::MalformedImage(format!(
            "GPS {} has a zero denominator",
            axis
        )));
    }

    let degrees = parts[0].to_f64();
    let minutes = parts[1].to_f64();
    let seconds = parts[2].to_f64();
    Ok(degrees + minutes / 60.0 + seconds / 3600.0)
}

/// Markers for one coordinate axis
#[derive(Debug, Clone, Copy)]
struct Hemisphere {
    axis: &'static str,
    positive: &'static [u8],
    negative: &'static [u8],
}

impl Hemisphere {
    const LATITUDE: Self = Self {
        axis: "latitude",
        positive: b"N",
        negative: b"S",
    };
    const LONGITUDE: Self = Self {
        axis: "longitude",
        positive: b"E",
        negative: b"W",
    };
}

/// Sign implied by a hemisphere reference field
///
/// Only the exact markers are accepted. A missing reference, or anything
/// other than the two expected markers, is treated as malformed rather than
/// defaulting to either hemisphere.
fn hemisphere_sign(field: Option<&Field>, hemisphere: Hemisphere) -> Result<f64, ExtractionError> {
    let Some(field) = field else {
        return Err(ExtractionError::MalformedImage(format!(
            "GPS {} reference is missing",
            hemisphere.axis
        )));
    };

    let marker = match &field.value {
        Value::Ascii(strings) => strings.first().map(Vec::as_slice),
        _ => None,
    };

    match marker {
        Some(m) if m == hemisphere.positive => Ok(1.0),
        Some(m) if m == hemisphere.negative => Ok(-1.0),
        _ => Err(ExtractionError::MalformedImage(format!(
            "GPS {} reference {} is not {} or {}",
            hemisphere.axis,
            field.display_value(),
            String::from_utf8_lossy(hemisphere.positive),
            String::from_utf8_lossy(hemisphere.negative),
        ))),
    }
}
