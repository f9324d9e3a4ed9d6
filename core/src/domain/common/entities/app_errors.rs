use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input")]
    Invalid,

    #[error("Internal server error")]
    InternalServerError,

    #[error("Preference store error: {0}")]
    PreferenceStore(String),

    #[error("Preference cache error: {0}")]
    PreferenceCache(String),

    #[error("Invalid conflict rules: {0}")]
    InvalidConflictRules(String),
}
