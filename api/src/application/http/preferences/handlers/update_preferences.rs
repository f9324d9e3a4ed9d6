use axum::extract::State;
use mealguard_core::domain::preferences::{
    entities::UserPreferences, ports::PreferenceService, value_objects::SaveOutcome,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        preferences::validators::UpdatePreferencesValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdatePreferencesResponse {
    pub data: UserPreferences,
    /// False when only the local cache accepted the write.
    pub synced: bool,
    pub outcome: SaveOutcome,
}

#[utoipa::path(
    put,
    path = "",
    tag = "preferences",
    summary = "Replace preferences",
    description = "Stores the sanitized lists (trimmed, blanks and case-insensitive duplicates removed). Last write wins.",
    responses(
        (status = 200, body = UpdatePreferencesResponse),
        (status = 503, description = "Neither the store nor the local cache accepted the write")
    ),
    params(
        ("X-Device-Id" = Option<String>, Header, description = "Device identifier, used when no bearer token is sent"),
    ),
    request_body = UpdatePreferencesValidator
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdatePreferencesValidator>,
) -> Result<Response<UpdatePreferencesResponse>, ApiError> {
    let saved = state
        .service
        .save_preferences(identity.user_id(), payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdatePreferencesResponse {
        synced: saved.is_synced(),
        outcome: saved.outcome,
        data: saved.preferences,
    }))
}
