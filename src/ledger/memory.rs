//! In-memory ledger
//!
//! A mutex-guarded map of user records. Useful for tests and for embedding
//! the verifier in a process that persists scores elsewhere.

use crate::ledger::{LedgerError, ScoreLedger, UserId, UserProgress};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::info;

/// Ledger holding all progress in process memory
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    users: Mutex<HashMap<UserId, UserProgress>>,
}

impl InMemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with the given users, all starting from zero
    pub fn with_users(users: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            users: Mutex::new(
                users
                    .into_iter()
                    .map(|user| (user, UserProgress::default()))
                    .collect(),
            ),
        }
    }

    /// Add a user with empty progress (no-op if already present)
    pub fn add_user(&self, user: UserId) -> Result<(), LedgerError> {
        self.lock()?.entry(user).or_default();
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<UserId, UserProgress>>, LedgerError> {
        self.users
            .lock()
            .map_err(|_| LedgerError::Storage("ledger lock poisoned".to_string()))
    }
}

impl ScoreLedger for InMemoryLedger {
    fn progress(&self, user: UserId) -> Result<UserProgress, LedgerError> {
        self.lock()?
            .get(&user)
            .cloned()
            .ok_or(LedgerError::UserNotFound(user))
    }

    fn credit(&self, user: UserId, place: &str, points: u32) -> Result<(), LedgerError> {
        let mut users = self.lock()?;
        let progress = users.get_mut(&user).ok_or(LedgerError::UserNotFound(user))?;
        progress.apply_credit(place, points)?;
        info!(
            "Credited user {} with {} points for {} (total {})",
            user, points, place, progress.travel_points
        );
        Ok(())
    }
}
