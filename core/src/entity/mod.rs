pub mod user_preferences;
