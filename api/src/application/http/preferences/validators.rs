use mealguard_core::domain::preferences::entities::UserPreferences;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const MAX_ENTRIES: u64 = 64;
pub const MAX_ENTRY_LEN: usize = 100;

#[allow(clippy::ptr_arg)]
pub fn validate_entry_lengths(entries: &Vec<String>) -> Result<(), ValidationError> {
    if entries.iter().any(|entry| entry.chars().count() > MAX_ENTRY_LEN) {
        return Err(ValidationError::new("entry_too_long")
            .with_message(format!("entries are limited to {MAX_ENTRY_LEN} characters").into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePreferencesValidator {
    #[serde(default)]
    #[validate(
        length(max = MAX_ENTRIES, message = "too many allergies"),
        custom(function = "validate_entry_lengths")
    )]
    pub allergies: Vec<String>,

    #[serde(default)]
    #[validate(
        length(max = MAX_ENTRIES, message = "too many dietary preferences"),
        custom(function = "validate_entry_lengths")
    )]
    pub dietary_preferences: Vec<String>,
}

impl From<UpdatePreferencesValidator> for UserPreferences {
    fn from(payload: UpdatePreferencesValidator) -> Self {
        UserPreferences::new(payload.allergies, payload.dietary_preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_entries_fail_validation() {
        let payload = UpdatePreferencesValidator {
            allergies: vec!["x".repeat(MAX_ENTRY_LEN + 1)],
            dietary_preferences: vec![],
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn too_many_entries_fail_validation() {
        let payload = UpdatePreferencesValidator {
            allergies: vec![],
            dietary_preferences: vec!["Vegan".to_string(); MAX_ENTRIES as usize + 1],
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn entry_limit_is_inclusive() {
        let payload = UpdatePreferencesValidator {
            allergies: vec!["Peanuts".to_string(); MAX_ENTRIES as usize],
            dietary_preferences: vec!["Vegan".to_string(); MAX_ENTRIES as usize],
        };

        assert!(payload.validate().is_ok());
    }
}
