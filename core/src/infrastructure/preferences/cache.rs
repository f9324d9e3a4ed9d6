use std::{collections::HashMap, io::ErrorKind, path::PathBuf};

use tokio::{fs, sync::RwLock};
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{
    common::{CacheConfig, entities::app_errors::CoreError},
    preferences::{entities::UserPreferences, ports::PreferenceCache},
};

/// One JSON document per user under `directory`.
#[derive(Debug, Clone)]
pub struct FilePreferenceCache {
    directory: PathBuf,
}

impl FilePreferenceCache {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    fn path_for(&self, user_id: Uuid) -> PathBuf {
        self.directory.join(format!("{user_id}.json"))
    }
}

fn cache_error(context: &str, e: impl std::fmt::Display) -> CoreError {
    error!("{}: {}", context, e);
    CoreError::PreferenceCache(format!("{context}: {e}"))
}

impl PreferenceCache for FilePreferenceCache {
    async fn load(&self, user_id: Uuid) -> Result<Option<UserPreferences>, CoreError> {
        let contents = match fs::read(self.path_for(user_id)).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(cache_error("Failed to read cached preferences", e)),
        };

        serde_json::from_slice(&contents)
            .map(Some)
            .map_err(|e| cache_error("Failed to decode cached preferences", e))
    }

    async fn store(&self, user_id: Uuid, preferences: UserPreferences) -> Result<(), CoreError> {
        fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| cache_error("Failed to create cache directory", e))?;

        let payload = serde_json::to_vec(&preferences)
            .map_err(|e| cache_error("Failed to encode preferences", e))?;

        // Readers never observe a partially written file.
        let path = self.path_for(user_id);
        let staging = self
            .directory
            .join(format!("{user_id}.{}.tmp", Uuid::new_v4()));
        fs::write(&staging, payload)
            .await
            .map_err(|e| cache_error("Failed to write cached preferences", e))?;
        if let Err(e) = fs::rename(&staging, &path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(cache_error("Failed to replace cached preferences", e));
        }

        debug!(path = %path.display(), "Preferences cached");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPreferenceCache {
    entries: RwLock<HashMap<Uuid, UserPreferences>>,
}

impl InMemoryPreferenceCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceCache for InMemoryPreferenceCache {
    async fn load(&self, user_id: Uuid) -> Result<Option<UserPreferences>, CoreError> {
        Ok(self.entries.read().await.get(&user_id).cloned())
    }

    async fn store(&self, user_id: Uuid, preferences: UserPreferences) -> Result<(), CoreError> {
        self.entries.write().await.insert(user_id, preferences);
        Ok(())
    }
}

/// Cache adapter picked from configuration.
#[derive(Debug)]
pub enum LocalPreferenceCache {
    File(FilePreferenceCache),
    Memory(InMemoryPreferenceCache),
}

impl LocalPreferenceCache {
    pub fn from_config(config: &CacheConfig) -> Self {
        match &config.directory {
            Some(directory) => Self::File(FilePreferenceCache::new(directory.clone())),
            None => Self::Memory(InMemoryPreferenceCache::new()),
        }
    }
}

impl PreferenceCache for LocalPreferenceCache {
    async fn load(&self, user_id: Uuid) -> Result<Option<UserPreferences>, CoreError> {
        match self {
            Self::File(cache) => cache.load(user_id).await,
            Self::Memory(cache) => cache.load(user_id).await,
        }
    }

    async fn store(&self, user_id: Uuid, preferences: UserPreferences) -> Result<(), CoreError> {
        match self {
            Self::File(cache) => cache.store(user_id, preferences).await,
            Self::Memory(cache) => cache.store(user_id, preferences).await,
        }
    }
}
