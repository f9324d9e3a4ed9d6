use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use clap::Parser;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use mealguard_core::{
    domain::{common::services::Service, food_safety::conflict_rules::ConflictTable},
    infrastructure::preferences::{
        cache::{InMemoryPreferenceCache, LocalPreferenceCache},
        repositories::preference_repository::PostgresPreferenceRepository,
    },
};
use sea_orm::{DatabaseBackend, MockDatabase};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use crate::application::auth::{DEVICE_ID_HEADER, JwtClaim};
use crate::application::http::server::{app_state::AppState, http_server::api_routes};
use crate::args::Args;

pub const TEST_JWT_SECRET: &str = "test-secret";

/// Router whose remote store always fails, so preferences live in memory.
pub fn test_app() -> Router {
    let args = Args::try_parse_from(["mealguard", "--jwt-secret", TEST_JWT_SECRET])
        .expect("test arguments parse");

    let service = Service::new(
        PostgresPreferenceRepository::new(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        ),
        LocalPreferenceCache::Memory(InMemoryPreferenceCache::new()),
        ConflictTable::default(),
    );

    api_routes(AppState::new(Arc::new(args), service))
}

pub fn json_request(
    method: Method,
    uri: &str,
    device_id: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(device_id) = device_id {
        builder = builder.header(DEVICE_ID_HEADER, device_id);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request builds")
}

pub fn bearer_request(uri: &str, body: Value) -> Request<Body> {
    let claims = JwtClaim {
        sub: Uuid::new_v4().to_string(),
        exp: (chrono::Utc::now().timestamp() + 600) as usize,
        iat: None,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("token encodes");

    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
