//! Score ledger
//!
//! This module defines the `ScoreLedger` trait, the boundary through which
//! verified visits are turned into points and achievements.
//!
//! ## Contract
//! `credit` must apply the point increment and the achievement flag as one
//! atomic update per user: concurrent credits for the same user may not lose
//! updates, and a failed credit leaves the record unchanged.

pub mod export;
pub mod file;
pub mod memory;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

pub use file::FileLedger;
pub use memory::InMemoryLedger;

/// Identifier of a user record in the ledger
pub type UserId = u64;

/// A user's accumulated score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgress {
    /// Total travel points
    pub travel_points: u64,

    /// Place name to achieved flag
    #[serde(default)]
    pub achievements: BTreeMap<String, bool>,
}

impl UserProgress {
    /// Whether the place has been marked as visited
    pub fn has_visited(&self, place: &str) -> bool {
        self.achievements.get(place).copied().unwrap_or(false)
    }

    /// Apply a credit in place; leaves the progress untouched on overflow
    pub(crate) fn apply_credit(&mut self, place: &str, points: u32) -> Result<(), LedgerError> {
        self.travel_points = self
            .travel_points
            .checked_add(u64::from(points))
            .ok_or_else(|| LedgerError::Storage("travel points overflow".to_string()))?;
        self.achievements.insert(place.to_string(), true);
        Ok(())
    }
}

/// Failures reported by a ledger
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("user {0} not found")]
    UserNotFound(UserId),

    #[error("no user named {0}")]
    UnknownUsername(String),

    #[error("username already taken: {0}")]
    UsernameTaken(String),

    #[error("invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Trait for user score stores
///
/// Implementations must be thread-safe (Send + Sync).
pub trait ScoreLedger: Send + Sync {
    /// Current progress of a user
    fn progress(&self, user: UserId) -> Result<UserProgress, LedgerError>;

    /// Atomically add `points` and mark `place` as achieved
    fn credit(&self, user: UserId, place: &str, points: u32) -> Result<(), LedgerError>;
}

impl<T: ScoreLedger + ?Sized> ScoreLedger for &T {
    fn progress(&self, user: UserId) -> Result<UserProgress, LedgerError> {
        (**self).progress(user)
    }

    fn credit(&self, user: UserId, place: &str, points: u32) -> Result<(), LedgerError> {
        (**self).credit(user, place, points)
    }
}

impl<T: ScoreLedger + ?Sized> ScoreLedger for Arc<T> {
    fn progress(&self, user: UserId) -> Result<UserProgress, LedgerError> {
        (**self).progress(user)
    }

    fn credit(&self, user: UserId, place: &str, points: u32) -> Result<(), LedgerError> {
        (**self).credit(user, place, points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_credit() {
        let mut progress = UserProgress::default();
        assert!(!progress.has_visited("Munnar"));

        progress.apply_credit("Munnar", 20).unwrap();
        progress.apply_credit("Munnar", 20).unwrap();

        assert_eq!(progress.travel_points, 40);
        assert!(progress.has_visited("Munnar"));
        assert_eq!(progress.achievements.len(), 1);
    }

    #[test]
    fn test_apply_credit_overflow_leaves_progress_unchanged() {
        let mut progress = UserProgress {
            travel_points: u64::MAX - 5,
            ..Default::default()
        };

        let result = progress.apply_credit("Munnar", 20);
        assert!(matches!(result, Err(LedgerError::Storage(_))));
        assert_eq!(progress.travel_points, u64::MAX - 5);
        assert!(!progress.has_visited("Munnar"));
    }

    #[test]
    fn test_progress_serialization() {
        let mut progress = UserProgress::default();
        progress.apply_credit("Wayanad", 20).unwrap();

        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(json, r#"{"travel_points":20,"achievements":{"Wayanad":true}}"#);

        let parsed: UserProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, progress);
    }
}
