use axum::extract::State;
use mealguard_core::domain::preferences::{entities::UserPreferences, ports::PreferenceService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetPreferencesResponse {
    pub data: UserPreferences,
}

#[utoipa::path(
    get,
    path = "",
    tag = "preferences",
    summary = "Get preferences",
    description = "Returns the caller's allergies and dietary preferences. Falls back to the local cache, then to empty lists, when the store is unreachable.",
    responses(
        (status = 200, body = GetPreferencesResponse)
    ),
    params(
        ("X-Device-Id" = Option<String>, Header, description = "Device identifier, used when no bearer token is sent"),
    )
)]
pub async fn get_preferences(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetPreferencesResponse>, ApiError> {
    let preferences = state.service.fetch_preferences(identity.user_id()).await;

    Ok(Response::OK(GetPreferencesResponse { data: preferences }))
}
