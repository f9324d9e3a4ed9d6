use axum::{Router, routing::get};
use mealguard_core::domain::preferences::vocabulary::{
    COMMON_ALLERGENS, COMMON_DIETARY_PREFERENCES,
};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Vocabulary {
    pub allergens: Vec<String>,
    pub dietary_preferences: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetVocabularyResponse {
    pub data: Vocabulary,
}

#[utoipa::path(
    get,
    path = "",
    tag = "vocabulary",
    summary = "Selectable allergens and dietary preferences",
    description = "Suggested values for preference pickers. Matching accepts any free text.",
    responses(
        (status = 200, body = GetVocabularyResponse)
    )
)]
pub async fn get_vocabulary() -> Result<Response<GetVocabularyResponse>, ApiError> {
    Ok(Response::OK(GetVocabularyResponse {
        data: Vocabulary {
            allergens: owned(COMMON_ALLERGENS),
            dietary_preferences: owned(COMMON_DIETARY_PREFERENCES),
        },
    }))
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[derive(OpenApi)]
#[openapi(paths(get_vocabulary))]
pub struct VocabularyApiDoc;

pub fn vocabulary_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/vocabulary", state.args.server.root_path),
        get(get_vocabulary),
    )
}
