use axum::extract::State;
use mealguard_core::domain::food_safety::{
    entities::AnalysisResult,
    ports::FoodSafetyService,
    presentation::{AlertSummary, SafetyBadge},
    value_objects::AnalyzeMealsInput,
};
use mealguard_core::domain::preferences::entities::UserPreferences;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        food_safety::validators::AnalyzeMealsValidator,
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
pub struct MealReport {
    pub id: Option<String>,
    pub badge: SafetyBadge,
    pub result: AnalysisResult,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MealBatchReport {
    pub items: Vec<MealReport>,
    pub summary: AlertSummary,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeMealsResponse {
    pub data: MealBatchReport,
}

#[utoipa::path(
    post,
    path = "/analyze/batch",
    tag = "food-safety",
    summary = "Analyze several meals",
    description = "Fetches preferences once and analyzes every meal against that snapshot. Items keep request order.",
    responses(
        (status = 200, body = AnalyzeMealsResponse)
    ),
    params(
        ("X-Device-Id" = Option<String>, Header, description = "Device identifier, used when no bearer token is sent"),
    ),
    request_body = AnalyzeMealsValidator
)]
pub async fn analyze_meals(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AnalyzeMealsValidator>,
) -> Result<Response<AnalyzeMealsResponse>, ApiError> {
    let (ids, meals): (Vec<_>, Vec<_>) = payload
        .meals
        .into_iter()
        .map(|meal| meal.into_parts())
        .unzip();

    let results = state
        .service
        .analyze_meals(AnalyzeMealsInput {
            user_id: identity.user_id(),
            meals,
            preferences: payload.preferences.map(UserPreferences::from),
        })
        .await;

    let summary = AlertSummary::from_results(&results);
    let items = ids
        .into_iter()
        .zip(results)
        .map(|(id, result)| MealReport {
            id,
            badge: SafetyBadge::from(&result),
            result,
        })
        .collect();

    Ok(Response::OK(AnalyzeMealsResponse {
        data: MealBatchReport { items, summary },
    }))
}
