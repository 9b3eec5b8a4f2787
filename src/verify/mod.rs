//! Visit verification
//!
//! Decides whether a photo proves a visit to a catalog place and credits
//! the user when it does.

pub mod verifier;

use crate::config::defaults::{DEFAULT_POINTS, DEFAULT_THRESHOLD_KM};
use crate::error::{Error, Result};
use crate::ledger::UserId;
use serde::{Deserialize, Serialize};

pub use verifier::VisitVerifier;

/// A user's claim to have visited a place, backed by a photo
#[derive(Debug, Clone, Copy)]
pub struct VisitClaim<'a> {
    pub place_name: &'a str,
    pub image: &'a [u8],
    pub user_id: UserId,
}

impl<'a> VisitClaim<'a> {
    /// Create a new claim
    pub fn new(place_name: &'a str, image: &'a [u8], user_id: UserId) -> Self {
        Self {
            place_name,
            image,
            user_id,
        }
    }
}

/// Result of one verification attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// The photo was taken close enough; points were credited
    Accepted { distance_km: f64, points_awarded: u32 },
    /// The photo was taken too far from the place
    RejectedTooFar { distance_km: f64, threshold_km: f64 },
    /// The photo carries no GPS position
    RejectedNoLocationData,
    /// The claimed place is not in the catalog
    RejectedUnknownPlace,
    /// The photo or its GPS fields could not be read
    RejectedMalformedImage { reason: String },
}

impl VerificationOutcome {
    /// Whether the visit was credited
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Distance between photo and place, when one was computed
    pub fn distance_km(&self) -> Option<f64> {
        match self {
            Self::Accepted { distance_km, .. } | Self::RejectedTooFar { distance_km, .. } => {
                Some(*distance_km)
            }
            _ => None,
        }
    }

    /// Short machine-friendly status name
    pub fn status(&self) -> &'static str {
        match self {
            Self::Accepted { .. } => "accepted",
            Self::RejectedTooFar { .. } => "rejected_too_far",
            Self::RejectedNoLocationData => "rejected_no_location_data",
            Self::RejectedUnknownPlace => "rejected_unknown_place",
            Self::RejectedMalformedImage { .. } => "rejected_malformed_image",
        }
    }

    /// Human-readable message for the user
    pub fn message(&self, place: &str) -> String {
        match self {
            Self::Accepted { points_awarded, .. } => {
                format!("You have visited {} and earned {} points!", place, points_awarded)
            }
            Self::RejectedTooFar { distance_km, .. } => format!(
                "The photo's location is {:.2} km away from {}. Please upload a valid photo.",
                distance_km, place
            ),
            Self::RejectedNoLocationData => {
                "No GPS data found in the image. Please upload a valid photo.".to_string()
            }
            Self::RejectedUnknownPlace => format!("Unknown place: {}", place),
            Self::RejectedMalformedImage { reason } => {
                format!("Error processing the image: {}", reason)
            }
        }
    }
}

/// Distance threshold and reward applied to every claim
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerificationPolicy {
    /// Maximum photo-to-place distance (inclusive) in kilometres
    pub threshold_km: f64,
    /// Points credited per accepted visit
    pub points: u32,
}

impl VerificationPolicy {
    /// Create a validated policy
    pub fn new(threshold_km: f64, points: u32) -> Result<Self> {
        let policy = Self { threshold_km, points };
        policy.validate()?;
        Ok(policy)
    }

    /// Threshold must be a positive, finite distance
    pub fn validate(&self) -> Result<()> {
        if !self.threshold_km.is_finite() || self.threshold_km <= 0.0 {
            return Err(Error::InvalidPolicy(format!(
                "Threshold {} km must be a positive distance",
                self.threshold_km
            )));
        }
        Ok(())
    }
}

impl Default for VerificationPolicy {
    fn default() -> Self {
        Self {
            threshold_km: DEFAULT_THRESHOLD_KM,
            points: DEFAULT_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = VerificationPolicy::default();
        assert_eq!(policy.threshold_km, 25.0);
        assert_eq!(policy.points, 20);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_invalid_policy() {
        assert!(VerificationPolicy::new(0.0, 20).is_err());
        assert!(VerificationPolicy::new(-5.0, 20).is_err());
        assert!(VerificationPolicy::new(f64::NAN, 20).is_err());
        assert!(VerificationPolicy::new(f64::INFINITY, 20).is_err());
        assert!(VerificationPolicy::new(10.0, 0).is_ok());
    }

    #[test]
    fn test_outcome_messages() {
        let accepted = VerificationOutcome::Accepted {
            distance_km: 1.2,
            points_awarded: 20,
        };
        assert_eq!(
            accepted.message("Munnar"),
            "You have visited Munnar and earned 20 points!"
        );

        let too_far = VerificationOutcome::RejectedTooFar {
            distance_km: 30.004,
            threshold_km: 25.0,
        };
        assert_eq!(
            too_far.message("Munnar"),
            "The photo's location is 30.00 km away from Munnar. Please upload a valid photo."
        );

        assert!(VerificationOutcome::RejectedNoLocationData
            .message("Munnar")
            .starts_with("No GPS data"));
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = VerificationOutcome::RejectedTooFar {
            distance_km: 30.0,
            threshold_km: 25.0,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "rejected_too_far");
        assert_eq!(json["threshold_km"], 25.0);

        let json = serde_json::to_value(VerificationOutcome::RejectedUnknownPlace).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "rejected_unknown_place" }));
    }

    #[test]
    fn test_status_matches_serialized_tag() {
        let outcomes = [
            VerificationOutcome::Accepted {
                distance_km: 0.0,
                points_awarded: 20,
            },
            VerificationOutcome::RejectedNoLocationData,
            VerificationOutcome::RejectedMalformedImage {
                reason: "bad".to_string(),
            },
        ];
        for outcome in outcomes {
            let json = serde_json::to_value(&outcome).unwrap();
            assert_eq!(json["status"], outcome.status());
        }
    }

    #[test]
    fn test_outcome_accessors() {
        let accepted = VerificationOutcome::Accepted {
            distance_km: 3.5,
            points_awarded: 20,
        };
        assert!(accepted.is_accepted());
        assert_eq!(accepted.distance_km(), Some(3.5));

        assert!(!VerificationOutcome::RejectedUnknownPlace.is_accepted());
        assert_eq!(VerificationOutcome::RejectedUnknownPlace.distance_km(), None);
    }
}
