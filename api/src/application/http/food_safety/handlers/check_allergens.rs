use mealguard_core::domain::food_safety::matchers::check_allergens as match_allergens;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    food_safety::validators::CheckAllergensValidator,
    server::api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AllergenMatches {
    pub matches: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CheckAllergensResponse {
    pub data: AllergenMatches,
}

#[utoipa::path(
    post,
    path = "/allergens",
    tag = "food-safety",
    summary = "Match tags against allergies",
    description = "Exact, case-insensitive matching. Returns the allergies as given, deduplicated.",
    responses(
        (status = 200, body = CheckAllergensResponse)
    ),
    request_body = CheckAllergensValidator
)]
pub async fn check_allergens(
    ValidateJson(payload): ValidateJson<CheckAllergensValidator>,
) -> Result<Response<CheckAllergensResponse>, ApiError> {
    let matches = match_allergens(&payload.tags, &payload.allergies);

    Ok(Response::OK(CheckAllergensResponse {
        data: AllergenMatches { matches },
    }))
}
