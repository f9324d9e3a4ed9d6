use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, food_safety::matchers::normalize_tag};

/// A user's allergy and dietary-preference lists.
///
/// Both lists behave as case-insensitive sets; the stored spelling is the one
/// the user chose and is what analysis results echo back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserPreferences {
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
}

impl UserPreferences {
    pub fn new(allergies: Vec<String>, dietary_preferences: Vec<String>) -> Self {
        Self {
            allergies,
            dietary_preferences,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.allergies.is_empty() && self.dietary_preferences.is_empty()
    }

    /// Trims entries, drops blank ones and case-insensitive duplicates.
    /// The first spelling of a duplicate wins.
    pub fn sanitized(self) -> Self {
        Self {
            allergies: sanitize_entries(self.allergies),
            dietary_preferences: sanitize_entries(self.dietary_preferences),
        }
    }
}

fn sanitize_entries(entries: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();

    entries
        .into_iter()
        .filter_map(|entry| {
            let trimmed = entry.trim();
            if trimmed.is_empty() || !seen.insert(normalize_tag(trimmed)) {
                return None;
            }
            Some(trimmed.to_string())
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoredPreferences {
    pub user_id: Uuid,
    pub preferences: UserPreferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredPreferences {
    pub fn new(user_id: Uuid, preferences: UserPreferences) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            user_id,
            preferences,
            created_at: now,
            updated_at: now,
        }
    }
}
