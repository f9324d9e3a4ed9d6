use std::collections::BTreeMap;

use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetConflictRulesResponse {
    /// Normalized preference key to the ingredient keywords that violate it.
    pub data: BTreeMap<String, Vec<String>>,
}

#[utoipa::path(
    get,
    path = "/conflict-rules",
    tag = "food-safety",
    summary = "Active conflict table",
    responses(
        (status = 200, body = GetConflictRulesResponse)
    )
)]
pub async fn get_conflict_rules(
    State(state): State<AppState>,
) -> Result<Response<GetConflictRulesResponse>, ApiError> {
    let data = state
        .service
        .conflict_rules()
        .rules()
        .iter()
        .map(|(key, keywords)| (key.clone(), keywords.iter().cloned().collect()))
        .collect();

    Ok(Response::OK(GetConflictRulesResponse { data }))
}
