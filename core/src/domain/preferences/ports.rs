use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    preferences::{
        entities::{StoredPreferences, UserPreferences},
        value_objects::SavedPreferences,
    },
};

/// Remote, authoritative preference store.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceRepository: Send + Sync {
    fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<StoredPreferences>, CoreError>> + Send;

    fn upsert(
        &self,
        user_id: Uuid,
        preferences: UserPreferences,
    ) -> impl Future<Output = Result<StoredPreferences, CoreError>> + Send;
}

/// Local mirror consulted when the remote store is unreachable.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceCache: Send + Sync {
    fn load(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<UserPreferences>, CoreError>> + Send;

    fn store(
        &self,
        user_id: Uuid,
        preferences: UserPreferences,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for reading and writing preferences
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceService: Send + Sync {
    /// Never fails: falls back to the local cache, then to empty preferences.
    fn fetch_preferences(&self, user_id: Uuid) -> impl Future<Output = UserPreferences> + Send;

    fn save_preferences(
        &self,
        user_id: Uuid,
        preferences: UserPreferences,
    ) -> impl Future<Output = Result<SavedPreferences, CoreError>> + Send;
}
