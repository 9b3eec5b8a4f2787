//! JSON output formatter

use crate::error::Result;
use crate::format::{OutputFormatter, VerificationReport};

/// JSON formatter - outputs the full report as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON report"
    }

    fn format(&self, report: &VerificationReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerificationOutcome;

    #[test]
    fn test_json_format() {
        let report = VerificationReport::new(
            "alice",
            "Munnar",
            VerificationOutcome::Accepted {
                distance_km: 2.5,
                points_awarded: 20,
            },
        );

        let output = JsonFormatter.format(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["user"], "alice");
        assert_eq!(parsed["place"], "Munnar");
        assert_eq!(parsed["outcome"]["status"], "accepted");
        assert_eq!(parsed["outcome"]["points_awarded"], 20);
        assert!(parsed.get("timestamp").is_some());
    }

    #[test]
    fn test_json_round_trips_report() {
        let report = VerificationReport::new(
            "bob",
            "Wayanad",
            VerificationOutcome::RejectedMalformedImage {
                reason: "Broken JPEG file".to_string(),
            },
        );

        let output = JsonFormatter.format(&report).unwrap();
        let parsed: VerificationReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.outcome, report.outcome);
        assert_eq!(parsed.timestamp, report.timestamp);
    }
}
