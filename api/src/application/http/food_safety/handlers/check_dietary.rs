use axum::extract::State;
use mealguard_core::domain::food_safety::{
    entities::DietaryCheck, matchers::check_dietary_preferences_with,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_safety::validators::CheckDietaryValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CheckDietaryResponse {
    pub data: DietaryCheck,
}

#[utoipa::path(
    post,
    path = "/dietary",
    tag = "food-safety",
    summary = "Match tags against dietary preferences",
    description = "Direct matches plus conflicts found through the active conflict table. A preference may appear in both lists.",
    responses(
        (status = 200, body = CheckDietaryResponse)
    ),
    request_body = CheckDietaryValidator
)]
pub async fn check_dietary(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckDietaryValidator>,
) -> Result<Response<CheckDietaryResponse>, ApiError> {
    let check = check_dietary_preferences_with(
        &payload.tags,
        &payload.dietary_preferences,
        state.service.conflict_rules(),
    );

    Ok(Response::OK(CheckDietaryResponse { data: check }))
}
