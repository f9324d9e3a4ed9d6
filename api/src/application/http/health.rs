use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = HealthStatus)
    )
)]
pub async fn live() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}

#[derive(OpenApi)]
#[openapi(paths(live))]
pub struct HealthApiDoc;

pub fn health_routes<S>(root_path: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(&format!("{root_path}/health/live"), get(live))
}
