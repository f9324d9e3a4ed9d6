//! Hand-written adapters for service tests.

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    preferences::{
        entities::{StoredPreferences, UserPreferences},
        ports::{PreferenceCache, PreferenceRepository},
    },
};

pub fn prefs(allergies: &[&str], dietary_preferences: &[&str]) -> UserPreferences {
    UserPreferences::new(
        allergies.iter().map(|s| s.to_string()).collect(),
        dietary_preferences.iter().map(|s| s.to_string()).collect(),
    )
}

#[derive(Default)]
pub struct FakeRepository {
    records: Mutex<HashMap<Uuid, StoredPreferences>>,
    failing: AtomicBool,
    fetches: AtomicUsize,
}

impl FakeRepository {
    pub fn with(user_id: Uuid, preferences: UserPreferences) -> Self {
        let repository = Self::default();
        repository
            .records
            .lock()
            .unwrap()
            .insert(user_id, StoredPreferences::new(user_id, preferences));
        repository
    }

    pub fn failing() -> Self {
        Self {
            failing: AtomicBool::new(true),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn get(&self, user_id: Uuid) -> Option<UserPreferences> {
        self.records
            .lock()
            .unwrap()
            .get(&user_id)
            .map(|stored| stored.preferences.clone())
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl PreferenceRepository for FakeRepository {
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<StoredPreferences>, CoreError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(CoreError::InternalServerError);
        }
        Ok(self.records.lock().unwrap().get(&user_id).cloned())
    }

    async fn upsert(
        &self,
        user_id: Uuid,
        preferences: UserPreferences,
    ) -> Result<StoredPreferences, CoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(CoreError::InternalServerError);
        }
        let stored = StoredPreferences::new(user_id, preferences);
        self.records.lock().unwrap().insert(user_id, stored.clone());
        Ok(stored)
    }
}

#[derive(Default)]
pub struct FakeCache {
    entries: Mutex<HashMap<Uuid, UserPreferences>>,
    failing: bool,
    stores: AtomicUsize,
}

impl FakeCache {
    pub fn with(user_id: Uuid, preferences: UserPreferences) -> Self {
        let cache = Self::default();
        cache.entries.lock().unwrap().insert(user_id, preferences);
        cache
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn get(&self, user_id: Uuid) -> Option<UserPreferences> {
        self.entries.lock().unwrap().get(&user_id).cloned()
    }

    pub fn store_calls(&self) -> usize {
        self.stores.load(Ordering::SeqCst)
    }
}

impl PreferenceCache for FakeCache {
    async fn load(&self, user_id: Uuid) -> Result<Option<UserPreferences>, CoreError> {
        if self.failing {
            return Err(CoreError::PreferenceCache("unavailable".to_string()));
        }
        Ok(self.get(user_id))
    }

    async fn store(&self, user_id: Uuid, preferences: UserPreferences) -> Result<(), CoreError> {
        self.stores.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(CoreError::PreferenceCache("unavailable".to_string()));
        }
        self.entries.lock().unwrap().insert(user_id, preferences);
        Ok(())
    }
}
