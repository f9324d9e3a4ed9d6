pub mod get_preferences;
pub mod update_preferences;
