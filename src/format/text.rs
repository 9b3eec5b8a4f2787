//! Human-readable text formatter

use crate::error::Result;
use crate::format::{OutputFormatter, VerificationReport};
use crate::verify::VerificationOutcome;

/// Text formatter - one-line message plus distance details
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable message"
    }

    fn format(&self, report: &VerificationReport) -> Result<String> {
        let mut out = report.outcome.message(&report.place);

        match &report.outcome {
            VerificationOutcome::Accepted { distance_km, .. } => {
                out.push_str(&format!("\n  Distance: {:.2} km", distance_km));
            }
            VerificationOutcome::RejectedTooFar {
                distance_km,
                threshold_km,
            } => {
                out.push_str(&format!(
                    "\n  Distance: {:.2} km (limit {} km)",
                    distance_km, threshold_km
                ));
            }
            _ => {}
        }

        Ok(out)
    }
}
