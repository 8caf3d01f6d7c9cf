use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line in the global activity feed.
///
/// Distinct from per-export audit entries: the feed spans every entity and
/// carries a single human-readable action line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user: String,
    pub action: String,
}

impl ActivityLogEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        user: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            user: user.into(),
            action: action.into(),
        }
    }
}
