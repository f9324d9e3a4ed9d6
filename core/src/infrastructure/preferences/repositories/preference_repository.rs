use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait, sea_query::OnConflict};
use tracing::{error, instrument};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    preferences::{
        entities::{StoredPreferences, UserPreferences},
        ports::PreferenceRepository,
    },
};
use crate::entity::user_preferences::{
    ActiveModel as UserPreferencesActiveModel, Column as UserPreferencesColumn,
    Entity as UserPreferencesEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresPreferenceRepository {
    pub db: DatabaseConnection,
}

impl PostgresPreferenceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PreferenceRepository for PostgresPreferenceRepository {
    #[instrument(skip(self))]
    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<StoredPreferences>, CoreError> {
        let preferences = UserPreferencesEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get preferences by user id: {}", e);
                CoreError::PreferenceStore(e.to_string())
            })?
            .map(StoredPreferences::from);

        Ok(preferences)
    }

    #[instrument(skip(self, preferences))]
    async fn upsert(
        &self,
        user_id: Uuid,
        preferences: UserPreferences,
    ) -> Result<StoredPreferences, CoreError> {
        let now = Utc::now().naive_utc();

        UserPreferencesEntity::insert(UserPreferencesActiveModel {
            user_id: Set(user_id),
            allergies: Set(preferences.allergies),
            dietary_preferences: Set(preferences.dietary_preferences),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .on_conflict(
            OnConflict::column(UserPreferencesColumn::UserId)
                .update_columns([
                    UserPreferencesColumn::Allergies,
                    UserPreferencesColumn::DietaryPreferences,
                    UserPreferencesColumn::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to upsert preferences: {}", e);
            CoreError::PreferenceStore(e.to_string())
        })?;

        self.get_by_user_id(user_id).await?.ok_or_else(|| {
            error!("Preferences missing right after upsert");
            CoreError::PreferenceStore("record missing after upsert".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use super::*;
    use crate::entity::user_preferences::Model as UserPreferencesModel;

    #[tokio::test]
    async fn get_by_user_id_maps_the_row() {
        let user_id = Uuid::new_v4();
        let timestamp = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![UserPreferencesModel {
                user_id,
                allergies: vec!["Peanuts".to_string()],
                dietary_preferences: vec!["Vegan".to_string()],
                created_at: timestamp,
                updated_at: timestamp,
            }]])
            .into_connection();
        let repository = PostgresPreferenceRepository::new(db);

        let stored = repository.get_by_user_id(user_id).await.unwrap().unwrap();

        assert_eq!(stored.user_id, user_id);
        assert_eq!(stored.preferences.allergies, vec!["Peanuts"]);
    }

    #[tokio::test]
    async fn missing_row_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<UserPreferencesModel>::new()])
            .into_connection();
        let repository = PostgresPreferenceRepository::new(db);

        assert!(repository.get_by_user_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn database_failures_surface_as_store_errors() {
        let repository = PostgresPreferenceRepository::new(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        );

        let fetched = repository.get_by_user_id(Uuid::new_v4()).await;
        let saved = repository
            .upsert(Uuid::new_v4(), UserPreferences::default())
            .await;

        assert!(matches!(fetched, Err(CoreError::PreferenceStore(_))));
        assert!(matches!(saved, Err(CoreError::PreferenceStore(_))));
    }
}
