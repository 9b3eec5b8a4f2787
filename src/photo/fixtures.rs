//! Geotagged images for tests
//!
//! EXIF blocks are encoded with `little_exif` and spliced into a minimal
//! JFIF image, or stripped down to the bare TIFF payload.

use little_exif::exif_tag::ExifTag;
use little_exif::filetype::FileExtension;
use little_exif::metadata::Metadata;
use little_exif::rational::uR64;

type Dms = [(u32, u32); 3];

/// FF E1 marker, 2-byte length, "Exif\0\0"
const APP1_HEADER_SIZE: usize = 10;

/// Builder for an EXIF block with (optionally) a GPS position
#[derive(Debug, Clone)]
pub(crate) struct GpsFixture {
    gps: bool,
    lat_ref: Option<String>,
    lat: Option<Dms>,
    lon_ref: Option<String>,
    lon: Option<Dms>,
}

impl GpsFixture {
    /// 10°9'14.8"N 76°18'52.8"E
    pub fn my_home() -> Self {
        Self {
            gps: true,
            lat_ref: Some("N".to_string()),
            lat: Some([(10, 1), (9, 1), (148, 10)]),
            lon_ref: Some("E".to_string()),
            lon: Some([(76, 1), (18, 1), (528, 10)]),
        }
    }

    /// A GPS position at the given decimal coordinate
    pub fn at(lat: f64, lon: f64) -> Self {
        Self {
            gps: true,
            lat_ref: Some(if lat < 0.0 { "S" } else { "N" }.to_string()),
            lat: Some(decimal_to_dms(lat.abs())),
            lon_ref: Some(if lon < 0.0 { "W" } else { "E" }.to_string()),
            lon: Some(decimal_to_dms(lon.abs())),
        }
    }

    /// An EXIF block with camera tags only
    pub fn without_gps() -> Self {
        Self {
            gps: false,
            lat_ref: None,
            lat: None,
            lon_ref: None,
            lon: None,
        }
    }

    pub fn with_lat_ref(mut self, marker: Option<&str>) -> Self {
        self.lat_ref = marker.map(str::to_string);
        self
    }

    pub fn with_lon_ref(mut self, marker: Option<&str>) -> Self {
        self.lon_ref = marker.map(str::to_string);
        self
    }

    pub fn with_latitude(mut self, dms: Dms) -> Self {
        self.lat = Some(dms);
        self
    }

    pub fn without_longitude(mut self) -> Self {
        self.lon = None;
        self.lon_ref = None;
        self
    }

    fn metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.set_tag(ExifTag::Make("TestCam".to_string()));

        if !self.gps {
            return metadata;
        }

        if let Some(marker) = &self.lat_ref {
            metadata.set_tag(ExifTag::GPSLatitudeRef(marker.clone()));
        }
        if let Some(dms) = &self.lat {
            metadata.set_tag(ExifTag::GPSLatitude(rationals(dms)));
        }
        if let Some(marker) = &self.lon_ref {
            metadata.set_tag(ExifTag::GPSLongitudeRef(marker.clone()));
        }
        if let Some(dms) = &self.lon {
            metadata.set_tag(ExifTag::GPSLongitude(rationals(dms)));
        }
        metadata
    }

    /// The EXIF block as a JPEG APP1 segment
    fn app1_segment(&self) -> Vec<u8> {
        self.metadata()
            .as_u8_vec(FileExtension::JPEG)
            .expect("encode EXIF")
    }

    /// Serialize as a bare TIFF (the payload of an EXIF APP1 segment)
    pub fn to_tiff(&self) -> Vec<u8> {
        self.app1_segment()[APP1_HEADER_SIZE..].to_vec()
    }

    /// Serialize as a JPEG carrying the EXIF block right after SOI
    pub fn to_jpeg(&self) -> Vec<u8> {
        let jfif = plain_jpeg();
        let mut out = jfif[..2].to_vec();
        out.extend(self.app1_segment());
        out.extend(&jfif[2..]);
        out
    }
}

/// A JPEG with a JFIF header and no EXIF block
pub(crate) fn plain_jpeg() -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    out.extend(b"JFIF\0");
    out.extend([0x01, 0x01, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x00]);
    out.extend([0xFF, 0xD9]);
    out
}

fn rationals(dms: &Dms) -> Vec<uR64> {
    dms.iter()
        .map(|&(nominator, denominator)| uR64 {
            nominator,
            denominator,
        })
        .collect()
}

fn decimal_to_dms(decimal: f64) -> Dms {
    let degrees = decimal.floor();
    let minutes_decimal = (decimal - degrees) * 60.0;
    let minutes = minutes_decimal.floor();
    let seconds = (minutes_decimal - minutes) * 60.0;
    [
        (degrees as u32, 1),
        (minutes as u32, 1),
        ((seconds * 10_000.0).round() as u32, 10_000),
    ]
}
