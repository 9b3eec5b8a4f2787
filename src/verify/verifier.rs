//! The visit verifier
//!
//! Pipeline for one claim:
//! 1. Look the claimed place up in the catalog (exact name)
//! 2. Extract the photo's GPS position
//! 3. Compute the great-circle distance to the place
//! 4. Accept when the distance is within the policy threshold
//! 5. On acceptance, credit the ledger exactly once
//!
//! Every accepted claim is credited, including repeat visits to a place the
//! user has already achieved. Ledger failures are returned to the caller
//! and never retried, so an ambiguous failure cannot double-credit.

use crate::catalog::Catalog;
use crate::coord::distance_km;
use crate::ledger::{LedgerError, ScoreLedger, UserId};
use crate::photo::{ExtractionError, LocationExtractor};
use crate::verify::{VerificationOutcome, VerificationPolicy, VisitClaim};
use tracing::{debug, info, warn};

/// Verifies visit claims against an injected catalog and policy
#[derive(Debug)]
pub struct VisitVerifier<E, L> {
    catalog: Catalog,
    policy: VerificationPolicy,
    extractor: E,
    ledger: L,
}

impl<E: LocationExtractor, L: ScoreLedger> VisitVerifier<E, L> {
    /// Create a new verifier
    pub fn new(catalog: Catalog, policy: VerificationPolicy, extractor: E, ledger: L) -> Self {
        Self {
            catalog,
            policy,
            extractor,
            ledger,
        }
    }

    /// Verify a claim by its parts
    pub fn verify_visit(
        &self,
        place_name: &str,
        image: &[u8],
        user_id: UserId,
    ) -> Result<VerificationOutcome, LedgerError> {
        self.verify(&VisitClaim::new(place_name, image, user_id))
    }

    /// Verify a claim, crediting the ledger on acceptance
    ///
    /// # Returns
    /// The outcome of the check, or the ledger's error if an accepted visit
    /// could not be credited
    pub fn verify(&self, claim: &VisitClaim<'_>) -> Result<VerificationOutcome, LedgerError> {
        let Some(place) = self.catalog.find(claim.place_name) else {
            warn!("Claim by user {} names unknown place {:?}", claim.user_id, claim.place_name);
            return Ok(VerificationOutcome::RejectedUnknownPlace);
        };

        let photo_location = match self.extractor.extract(claim.image) {
            Ok(coord) => coord,
            Err(ExtractionError::NoLocationData) => {
                warn!("Photo for {} has no GPS data", place.name);
                return Ok(VerificationOutcome::RejectedNoLocationData);
            }
            Err(ExtractionError::MalformedImage(reason)) => {
                warn!("Photo for {} is malformed: {}", place.name, reason);
                return Ok(VerificationOutcome::RejectedMalformedImage { reason });
            }
        };

        let distance = distance_km(place.coordinate(), photo_location);
        debug!(
            "Photo at {} is {:.3} km from {} (threshold {} km)",
            photo_location, distance, place.name, self.policy.threshold_km
        );

        if distance > self.policy.threshold_km {
            warn!(
                "Rejected claim for {}: {:.2} km away (threshold {} km)",
                place.name, distance, self.policy.threshold_km
            );
            return Ok(VerificationOutcome::RejectedTooFar {
                distance_km: distance,
                threshold_km: self.policy.threshold_km,
            });
        }

        self.ledger
            .credit(claim.user_id, &place.name, self.policy.points)?;
        info!(
            "Accepted visit to {} by user {} ({:.2} km)",
            place.name, claim.user_id, distance
        );

        Ok(VerificationOutcome::Accepted {
            distance_km: distance,
            points_awarded: self.policy.points,
        })
    }
}
