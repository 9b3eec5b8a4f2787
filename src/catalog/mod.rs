//! Place catalog
//!
//! The immutable list of destinations a visit can be claimed against.
//! Loaded once (built-in or from a TOML file) and injected into the
//! verifier.

use crate::coord::GeoCoordinate;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Kind of destination (informational only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A tourist destination
    Tourist,
    /// The user's home
    Home,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tourist => write!(f, "tourist"),
            Self::Home => write!(f, "home"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tourist" => Ok(Self::Tourist),
            "home" => Ok(Self::Home),
            _ => Err(format!("Unknown place category: {}", s)),
        }
    }
}

/// A destination that can be visited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub category: Category,
}

impl Place {
    /// Create a new place
    pub fn new(
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
            description: description.into(),
            category,
        }
    }

    /// The place's position
    pub fn coordinate(&self) -> GeoCoordinate {
        GeoCoordinate::new(self.lat, self.lon)
    }
}

/// On-disk catalog layout: a list of `[[places]]` tables
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    places: Vec<Place>,
}

/// Immutable, name-unique set of places
#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and invalid coordinates
    pub fn new(places: Vec<Place>) -> Result<Self> {
        let mut seen = HashSet::new();
        for place in &places {
            if !seen.insert(place.name.as_str()) {
                return Err(Error::Catalog(format!("Duplicate place name: {}", place.name)));
            }
            place.coordinate().validate().map_err(|e| {
                Error::Catalog(format!("Place '{}': {}", place.name, e))
            })?;
        }
        Ok(Self { places })
    }

    /// The built-in Kerala catalog
    pub fn builtin() -> Self {
        Self {
            places: vec![
                Place::new(
                    "Munnar",
                    10.0889,
                    77.0582,
                    "A picturesque hill station known for tea plantations.",
                    Category::Tourist,
                ),
                Place::new(
                    "Alleppey",
                    9.5000,
                    76.3500,
                    "Famous for backwaters and houseboat cruises.",
                    Category::Tourist,
                ),
                Place::new(
                    "Wayanad",
                    11.6827,
                    75.2913,
                    "Known for waterfalls, caves, and wildlife sanctuaries.",
                    Category::Tourist,
                ),
                Place::new(
                    "My Home",
                    10.1541,
                    76.3147,
                    "This is my home. Coordinates: 10°09'14.8\"N 76°18'52.8\"E",
                    Category::Home,
                ),
            ],
        }
    }

    /// Parse a catalog from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| Error::Catalog(format!("Failed to parse catalog: {}", e)))?;
        Self::new(file.places)
    }

    /// Load a catalog from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Catalog(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_toml(&content)?;
        debug!("Loaded {} places from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Serialize the catalog as TOML
    pub fn to_toml(&self) -> Result<String> {
        let file = CatalogFile {
            places: self.places.clone(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| Error::Catalog(format!("Failed to serialize catalog: {}", e)))
    }

    /// Look up a place by exact name
    pub fn find(&self, name: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.name == name)
    }

    /// All places in catalog order
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Number of places
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
