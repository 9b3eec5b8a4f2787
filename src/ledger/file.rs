//! File-backed ledger
//!
//! Stores user records as a JSON document in the XDG data directory
//! (~/.local/share/travel-verify/ledger.json).
//!
//! Every mutation is persisted before it is acknowledged. The document is
//! written to a sibling temp file and renamed over the original, and the
//! in-memory state is rolled back if persisting fails, so a credit is
//! either fully recorded or not at all. Atomicity holds within one process;
//! concurrent processes sharing a file are not coordinated.

use crate::constants::paths::{APP_DIR_NAME, LEDGER_FILE_NAME};
use crate::ledger::{LedgerError, ScoreLedger, UserId, UserProgress};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// One credited visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub place: String,
    pub points: u32,
    pub credited_at: DateTime<Utc>,
}

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,

    #[serde(flatten)]
    pub progress: UserProgress,

    /// Credited visits, oldest first
    #[serde(default)]
    pub visits: Vec<VisitRecord>,
}

/// A row of the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based rank; users with equal points share a rank
    pub rank: usize,
    pub username: String,
    pub travel_points: u64,
    pub places_visited: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct LedgerData {
    #[serde(default = "first_user_id")]
    next_id: UserId,

    #[serde(default)]
    users: Vec<UserRecord>,
}

fn first_user_id() -> UserId {
    1
}

impl Default for LedgerData {
    fn default() -> Self {
        Self {
            next_id: first_user_id(),
            users: Vec::new(),
        }
    }
}

/// Ledger persisted to a JSON file
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    data: Mutex<LedgerData>,
}

impl FileLedger {
    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf, LedgerError> {
        dirs::data_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| LedgerError::Storage("Could not determine data directory".to_string()))
    }

    /// Get the default ledger file path
    pub fn default_path() -> Result<PathBuf, LedgerError> {
        Ok(Self::data_dir()?.join(LEDGER_FILE_NAME))
    }

    /// Load the ledger from the default path
    pub fn load() -> Result<Self, LedgerError> {
        Self::load_from(Self::default_path()?)
    }

    /// Load the ledger from a specific path
    ///
    /// A missing file yields an empty ledger; it is created on first write.
    pub fn load_from(path: PathBuf) -> Result<Self, LedgerError> {
        let data = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| {
                LedgerError::Storage(format!("Failed to read ledger file: {}", e))
            })?;

            serde_json::from_str(&content).map_err(|e| {
                LedgerError::Storage(format!("Failed to parse ledger file: {}", e))
            })?
        } else {
            LedgerData::default()
        };

        debug!("Loaded ledger from {}", path.display());
        Ok(Self {
            path,
            data: Mutex::new(data),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register a new user with empty progress
    pub fn register(&self, username: &str) -> Result<UserId, LedgerError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LedgerError::InvalidUsername(username.to_string()));
        }

        let mut data = self.lock()?;
        if data.users.iter().any(|u| u.username == username) {
            return Err(LedgerError::UsernameTaken(username.to_string()));
        }

        let id = data.next_id;
        data.next_id += 1;
        data.users.push(UserRecord {
            id,
            username: username.to_string(),
            progress: UserProgress::default(),
            visits: Vec::new(),
        });

        if let Err(e) = persist(&self.path, &data) {
            data.users.pop();
            data.next_id = id;
            return Err(e);
        }

        info!("Registered user {} with id {}", username, id);
        Ok(id)
    }

    /// Find a user by username, ignoring surrounding whitespace
    pub fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, LedgerError> {
        let username = username.trim();
        Ok(self
            .lock()?
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    /// Get a user by username, failing if absent
    pub fn user_by_name(&self, username: &str) -> Result<UserRecord, LedgerError> {
        self.find_by_username(username)?
            .ok_or_else(|| LedgerError::UnknownUsername(username.to_string()))
    }

    /// Get a user by id
    pub fn user(&self, id: UserId) -> Result<UserRecord, LedgerError> {
        self.lock()?
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(LedgerError::UserNotFound(id))
    }

    /// All users in registration order
    pub fn users(&self) -> Result<Vec<UserRecord>, LedgerError> {
        Ok(self.lock()?.users.clone())
    }

    /// Users ranked by travel points, highest first
    ///
    /// Ties are ordered by username and share a rank.
    pub fn leaderboard(&self, count: usize) -> Result<Vec<LeaderboardEntry>, LedgerError> {
        let mut users = self.users()?;
        users.sort_by(|a, b| {
            b.progress
                .travel_points
                .cmp(&a.progress.travel_points)
                .then_with(|| a.username.cmp(&b.username))
        });

        let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(users.len().min(count));
        for (i, user) in users.into_iter().take(count).enumerate() {
            let rank = match entries.last() {
                Some(prev) if prev.travel_points == user.progress.travel_points => prev.rank,
                _ => i + 1,
            };
            entries.push(LeaderboardEntry {
                rank,
                places_visited: user.progress.achievements.values().filter(|v| **v).count(),
                travel_points: user.progress.travel_points,
                username: user.username,
            });
        }
        Ok(entries)
    }

    fn lock(&self) -> Result<MutexGuard<'_, LedgerData>, LedgerError> {
        self.data
            .lock()
            .map_err(|_| LedgerError::Storage("ledger lock poisoned".to_string()))
    }
}

impl ScoreLedger for FileLedger {
    fn progress(&self, user: UserId) -> Result<UserProgress, LedgerError> {
        Ok(self.user(user)?.progress)
    }

    fn credit(&self, user: UserId, place: &str, points: u32) -> Result<(), LedgerError> {
        let mut data = self.lock()?;
        let idx = data
            .users
            .iter()
            .position(|u| u.id == user)
            .ok_or(LedgerError::UserNotFound(user))?;

        let before = data.users[idx].clone();
        let record = &mut data.users[idx];
        record.progress.apply_credit(place, points)?;
        record.visits.push(VisitRecord {
            place: place.to_string(),
            points,
            credited_at: Utc::now(),
        });
        let total = record.progress.travel_points;

        if let Err(e) = persist(&self.path, &data) {
            warn!("Rolling back credit for user {}: {}", user, e);
            data.users[idx] = before;
            return Err(e);
        }

        info!(
            "Credited user {} with {} points for {} (total {})",
            user, points, place, total
        );
        Ok(())
    }
}

/// Write the whole document via temp file + rename
fn persist(path: &Path, data: &LedgerData) -> Result<(), LedgerError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!("Failed to create ledger directory: {}", e))
        })?;
    }

    let content = serde_json::to_string_pretty(data)
        .map_err(|e| LedgerError::Storage(format!("Failed to serialize ledger: {}", e)))?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)
        .map_err(|e| LedgerError::Storage(format!("Failed to write ledger file: {}", e)))?;
    fs::rename(&tmp, path)
        .map_err(|e| LedgerError::Storage(format!("Failed to replace ledger file: {}", e)))?;

    Ok(())
}
