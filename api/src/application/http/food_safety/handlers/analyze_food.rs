use axum::extract::State;
use mealguard_core::domain::food_safety::{
    entities::AnalysisResult,
    ports::FoodSafetyService,
    presentation::{SafetyBadge, SafetyBanner},
    value_objects::AnalyzeFoodInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        food_safety::validators::AnalyzeFoodValidator,
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
pub struct FoodSafetyReport {
    pub result: AnalysisResult,
    pub banner: SafetyBanner,
    pub badge: SafetyBadge,
}

impl From<AnalysisResult> for FoodSafetyReport {
    fn from(result: AnalysisResult) -> Self {
        Self {
            banner: SafetyBanner::from(&result),
            badge: SafetyBadge::from(&result),
            result,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeFoodResponse {
    pub data: FoodSafetyReport,
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "food-safety",
    summary = "Analyze one food",
    description = "Matches the food's tags against the caller's allergies and dietary preferences. Inline preferences skip the stored ones. An empty warning list also covers the case where no preferences are known.",
    responses(
        (status = 200, body = AnalyzeFoodResponse)
    ),
    params(
        ("X-Device-Id" = Option<String>, Header, description = "Device identifier, used when no bearer token is sent"),
    ),
    request_body = AnalyzeFoodValidator
)]
pub async fn analyze_food(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AnalyzeFoodValidator>,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let (tags, preferences) = payload.into_parts();

    let result = state
        .service
        .analyze_food(AnalyzeFoodInput {
            user_id: identity.user_id(),
            tags,
            preferences,
        })
        .await;

    Ok(Response::OK(AnalyzeFoodResponse {
        data: result.into(),
    }))
}
