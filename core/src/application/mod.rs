use tracing::info;

use crate::{
    domain::{
        common::{MealguardConfig, entities::app_errors::CoreError, services::Service},
        food_safety::conflict_rules::ConflictTable,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        preferences::{
            cache::LocalPreferenceCache,
            repositories::preference_repository::PostgresPreferenceRepository,
        },
    },
};

pub type MealguardService =
    Service<PostgresPreferenceRepository, LocalPreferenceCache, ConflictTable>;

pub async fn create_service(config: MealguardConfig) -> Result<MealguardService, anyhow::Error> {
    let conflict_rules = load_conflict_rules(&config).await?;

    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;
    postgres.migrate().await?;

    Ok(Service::new(
        PostgresPreferenceRepository::new(postgres.get_db()),
        LocalPreferenceCache::from_config(&config.cache),
        conflict_rules,
    ))
}

/// Built-in table unless a JSON rules file is configured.
pub async fn load_conflict_rules(config: &MealguardConfig) -> Result<ConflictTable, CoreError> {
    let Some(path) = &config.conflict_rules_path else {
        return Ok(ConflictTable::default());
    };

    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CoreError::InvalidConflictRules(format!("{}: {e}", path.display())))?;
    let table = ConflictTable::from_json(&contents)?;
    info!(path = %path.display(), rules = table.len(), "Loaded conflict rules");

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{CacheConfig, DatabaseConfig};

    fn config(conflict_rules_path: Option<std::path::PathBuf>) -> MealguardConfig {
        MealguardConfig {
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: 5432,
                username: "postgres".to_string(),
                password: "postgres".to_string(),
                name: "mealguard".to_string(),
            },
            cache: CacheConfig::default(),
            conflict_rules_path,
        }
    }

    #[tokio::test]
    async fn default_rules_without_path() {
        let table = load_conflict_rules(&config(None)).await.unwrap();

        assert_eq!(&table, ConflictTable::builtin());
    }

    #[tokio::test]
    async fn rules_file_replaces_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(&path, r#"{"keto": ["sugar", "bread"]}"#).unwrap();

        let table = load_conflict_rules(&config(Some(path))).await.unwrap();

        assert_eq!(table.len(), 1);
        assert!(table.rules().contains_key("keto"));
    }

    #[tokio::test]
    async fn missing_rules_file_is_an_error() {
        let result = load_conflict_rules(&config(Some("/nonexistent/rules.json".into()))).await;

        assert!(matches!(result, Err(CoreError::InvalidConflictRules(_))));
    }
}
