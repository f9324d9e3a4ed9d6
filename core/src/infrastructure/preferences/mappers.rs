use chrono::{TimeZone, Utc};

use crate::domain::preferences::entities::{StoredPreferences, UserPreferences};
use crate::entity::user_preferences::Model as UserPreferencesModel;

impl From<UserPreferencesModel> for StoredPreferences {
    fn from(model: UserPreferencesModel) -> Self {
        StoredPreferences {
            user_id: model.user_id,
            preferences: UserPreferences::new(model.allergies, model.dietary_preferences),
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn model_maps_to_stored_preferences() {
        let created = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let user_id = Uuid::new_v4();

        let stored = StoredPreferences::from(UserPreferencesModel {
            user_id,
            allergies: vec!["Sesame".to_string()],
            dietary_preferences: vec!["Kosher".to_string()],
            created_at: created,
            updated_at: created,
        });

        assert_eq!(stored.user_id, user_id);
        assert_eq!(stored.preferences.allergies, vec!["Sesame"]);
        assert_eq!(stored.preferences.dietary_preferences, vec!["Kosher"]);
        assert_eq!(stored.created_at.naive_utc(), created);
    }
}
