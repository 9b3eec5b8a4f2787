//! Output formatters
//!
//! Provides trait-based output formatting for verification results.

pub mod json;
pub mod text;

use crate::error::{Error, Result};
use crate::verify::VerificationOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A verification outcome with the context it was produced in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub user: String,
    pub place: String,
    pub outcome: VerificationOutcome,
    pub timestamp: DateTime<Utc>,
}

impl VerificationReport {
    /// Create a report stamped with the current time
    pub fn new(user: impl Into<String>, place: impl Into<String>, outcome: VerificationOutcome) -> Self {
        Self {
            user: user.into(),
            place: place.into(),
            outcome,
            timestamp: Utc::now(),
        }
    }
}

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a verification report
    fn format(&self, report: &VerificationReport) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// Error for a format name with no formatter, listing the known formats
pub fn unknown_format(name: &str) -> Error {
    let known: Vec<String> = available_formats()
        .into_iter()
        .map(|f| format!("{} ({})", f.name, f.description))
        .collect();
    Error::Config(format!(
        "Unknown format: {}\n\nAvailable formats:\n  {}",
        name,
        known.join("\n  ")
    ))
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "json".to_string(),
            description: "Full JSON report".to_string(),
        },
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable message".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_formatter() {
        assert!(get_formatter("json").is_some());
        assert!(get_formatter("text").is_some());
        assert!(get_formatter("gpx").is_none());
    }

    #[test]
    fn test_get_formatter_case_insensitive() {
        assert!(get_formatter("JSON").is_some());
        assert!(get_formatter("Text").is_some());
    }

    #[test]
    fn test_unknown_format_lists_available_formats() {
        let message = unknown_format("gpx").to_string();
        assert!(message.contains("Unknown format: gpx"));
        assert!(message.contains("json (Full JSON report)"));
        assert!(message.contains("text (Human-readable message)"));
    }

    #[test]
    fn test_available_formats_match_registry() {
        let formats = available_formats();
        assert_eq!(formats.len(), 2);
        for info in formats {
            let formatter = get_formatter(&info.name).unwrap();
            assert_eq!(formatter.name(), info.name);
        }
    }
}
