use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::preferences::entities::UserPreferences;

/// Where a save ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaveOutcome {
    /// Remote store accepted the write; the local cache mirrors it.
    Synced,
    /// Remote store failed; only the local cache holds the write.
    CachedOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPreferences {
    pub preferences: UserPreferences,
    pub outcome: SaveOutcome,
}

impl SavedPreferences {
    pub fn is_synced(&self) -> bool {
        self.outcome == SaveOutcome::Synced
    }
}
