use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_safety::conflict_rules::ConflictRules,
    preferences::{
        entities::UserPreferences,
        ports::{PreferenceCache, PreferenceRepository, PreferenceService},
        value_objects::{SaveOutcome, SavedPreferences},
    },
};

impl<PR, PC, CR> Service<PR, PC, CR>
where
    PR: PreferenceRepository,
    PC: PreferenceCache,
    CR: ConflictRules,
{
    async fn cached_or_default(&self, user_id: Uuid) -> UserPreferences {
        match self.preference_cache.load(user_id).await {
            Ok(Some(preferences)) => {
                debug!("Serving preferences from local cache");
                preferences
            }
            Ok(None) => {
                debug!("No cached preferences, using defaults");
                UserPreferences::default()
            }
            Err(e) => {
                warn!("Failed to read local preference cache: {}", e);
                UserPreferences::default()
            }
        }
    }

    async fn mirror_to_cache(&self, user_id: Uuid, preferences: UserPreferences) {
        if let Err(e) = self.preference_cache.store(user_id, preferences).await {
            warn!("Failed to mirror preferences into local cache: {}", e);
        }
    }
}

impl<PR, PC, CR> PreferenceService for Service<PR, PC, CR>
where
    PR: PreferenceRepository,
    PC: PreferenceCache,
    CR: ConflictRules,
{
    #[instrument(skip(self))]
    async fn fetch_preferences(&self, user_id: Uuid) -> UserPreferences {
        match self.preference_repository.get_by_user_id(user_id).await {
            Ok(Some(stored)) => {
                self.mirror_to_cache(user_id, stored.preferences.clone())
                    .await;
                stored.preferences
            }
            Ok(None) => {
                // A cache-only save made while the store was down lives here.
                debug!("No stored preferences, checking local cache");
                self.cached_or_default(user_id).await
            }
            Err(e) => {
                warn!("Remote preference fetch failed, falling back to cache: {}", e);
                self.cached_or_default(user_id).await
            }
        }
    }

    #[instrument(skip(self, preferences))]
    async fn save_preferences(
        &self,
        user_id: Uuid,
        preferences: UserPreferences,
    ) -> Result<SavedPreferences, CoreError> {
        let preferences = preferences.sanitized();

        match self
            .preference_repository
            .upsert(user_id, preferences.clone())
            .await
        {
            Ok(stored) => {
                self.mirror_to_cache(user_id, stored.preferences.clone())
                    .await;
                info!(
                    allergies = stored.preferences.allergies.len(),
                    dietary_preferences = stored.preferences.dietary_preferences.len(),
                    "Preferences saved"
                );

                Ok(SavedPreferences {
                    preferences: stored.preferences,
                    outcome: SaveOutcome::Synced,
                })
            }
            Err(remote_error) => {
                warn!("Remote preference save failed, writing local cache only: {}", remote_error);

                self.preference_cache
                    .store(user_id, preferences.clone())
                    .await
                    .map_err(|cache_error| {
                        error!("Failed to persist preferences anywhere: {}", cache_error);
                        CoreError::PreferenceStore(format!(
                            "remote: {remote_error}; cache: {cache_error}"
                        ))
                    })?;

                Ok(SavedPreferences {
                    preferences,
                    outcome: SaveOutcome::CachedOnly,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        food_safety::conflict_rules::ConflictTable,
        preferences::fakes::{FakeCache, FakeRepository, prefs},
    };

    fn service(
        repository: FakeRepository,
        cache: FakeCache,
    ) -> (
        Service<FakeRepository, FakeCache, ConflictTable>,
        Arc<FakeRepository>,
        Arc<FakeCache>,
    ) {
        let repository = Arc::new(repository);
        let cache = Arc::new(cache);
        let service = Service {
            preference_repository: repository.clone(),
            preference_cache: cache.clone(),
            conflict_rules: Arc::new(ConflictTable::default()),
        };
        (service, repository, cache)
    }

    #[tokio::test]
    async fn fetch_returns_remote_value_and_mirrors_it() {
        let user_id = Uuid::new_v4();
        let remote = prefs(&["Peanuts"], &["Vegan"]);
        let (service, _, cache) =
            service(FakeRepository::with(user_id, remote.clone()), FakeCache::default());

        let fetched = service.fetch_preferences(user_id).await;

        assert_eq!(fetched, remote);
        assert_eq!(cache.get(user_id), Some(remote));
    }

    #[tokio::test]
    async fn fetch_without_any_record_returns_defaults() {
        let (service, _, cache) = service(FakeRepository::default(), FakeCache::default());

        let fetched = service.fetch_preferences(Uuid::new_v4()).await;

        assert!(fetched.is_empty());
        assert_eq!(cache.store_calls(), 0);
    }

    #[tokio::test]
    async fn cached_only_save_survives_store_recovery() {
        let user_id = Uuid::new_v4();
        let (service, repository, _) = service(FakeRepository::failing(), FakeCache::default());

        let saved = service
            .save_preferences(user_id, prefs(&["Peanuts"], &["Vegan"]))
            .await
            .unwrap();
        assert_eq!(saved.outcome, SaveOutcome::CachedOnly);

        let while_down = service.fetch_preferences(user_id).await;
        assert_eq!(while_down.allergies, vec!["Peanuts"]);

        repository.set_failing(false);
        let after_recovery = service.fetch_preferences(user_id).await;

        assert_eq!(repository.get(user_id), None);
        assert_eq!(after_recovery, prefs(&["Peanuts"], &["Vegan"]));
    }

    #[tokio::test]
    async fn fetch_falls_back_to_cache_when_remote_fails() {
        let user_id = Uuid::new_v4();
        let cached = prefs(&["Soy"], &[]);
        let (service, _, _) = service(
            FakeRepository::failing(),
            FakeCache::with(user_id, cached.clone()),
        );

        assert_eq!(service.fetch_preferences(user_id).await, cached);
    }

    #[tokio::test]
    async fn fetch_returns_defaults_when_remote_and_cache_fail() {
        let (service, _, _) = service(FakeRepository::failing(), FakeCache::failing());

        assert!(service.fetch_preferences(Uuid::new_v4()).await.is_empty());
    }

    #[tokio::test]
    async fn fetch_ignores_cache_failure_when_remote_succeeds() {
        let user_id = Uuid::new_v4();
        let remote = prefs(&["Fish"], &[]);
        let (service, _, _) =
            service(FakeRepository::with(user_id, remote.clone()), FakeCache::failing());

        assert_eq!(service.fetch_preferences(user_id).await, remote);
    }

    #[tokio::test]
    async fn save_sanitizes_and_syncs() {
        let user_id = Uuid::new_v4();
        let (service, repository, cache) =
            service(FakeRepository::default(), FakeCache::default());

        let saved = service
            .save_preferences(user_id, prefs(&[" Peanuts ", "peanuts", ""], &["Vegan"]))
            .await
            .unwrap();

        let expected = prefs(&["Peanuts"], &["Vegan"]);
        assert!(saved.is_synced());
        assert_eq!(saved.preferences, expected);
        assert_eq!(repository.get(user_id), Some(expected.clone()));
        assert_eq!(cache.get(user_id), Some(expected));
    }

    #[tokio::test]
    async fn save_falls_back_to_cache_only() {
        let user_id = Uuid::new_v4();
        let (service, _, cache) = service(FakeRepository::failing(), FakeCache::default());

        let saved = service
            .save_preferences(user_id, prefs(&["Eggs"], &[]))
            .await
            .unwrap();

        assert_eq!(saved.outcome, SaveOutcome::CachedOnly);
        assert_eq!(cache.get(user_id), Some(prefs(&["Eggs"], &[])));
    }

    #[tokio::test]
    async fn save_errors_when_nothing_accepts_the_write() {
        let (service, _, _) = service(FakeRepository::failing(), FakeCache::failing());

        let result = service
            .save_preferences(Uuid::new_v4(), prefs(&["Eggs"], &[]))
            .await;

        assert!(matches!(result, Err(CoreError::PreferenceStore(_))));
    }

    #[tokio::test]
    async fn save_then_fetch_is_last_write_wins() {
        let user_id = Uuid::new_v4();
        let (service, _, _) = service(FakeRepository::default(), FakeCache::default());

        service
            .save_preferences(user_id, prefs(&["Eggs"], &[]))
            .await
            .unwrap();
        service
            .save_preferences(user_id, prefs(&["Sesame"], &["Halal"]))
            .await
            .unwrap();

        assert_eq!(
            service.fetch_preferences(user_id).await,
            prefs(&["Sesame"], &["Halal"])
        );
    }
}
