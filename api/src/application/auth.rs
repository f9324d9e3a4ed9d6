use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};
use uuid::Uuid;

use super::http::server::{api_entities::api_error::ApiErrorResponse, app_state::AppState};

pub const DEVICE_ID_HEADER: &str = "x-device-id";

const MAX_DEVICE_ID_LEN: usize = 128;

/// Namespace for device-scoped user ids.
const DEVICE_NAMESPACE: Uuid = Uuid::from_u128(0x6d65_616c_6775_6172_6400_0000_0000_0001);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub iat: Option<usize>,
}

/// Who the request acts for. Both variants resolve to a preference owner id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    User(Uuid),
    Device(Uuid),
}

impl Identity {
    pub fn user_id(&self) -> Uuid {
        match self {
            Identity::User(id) | Identity::Device(id) => *id,
        }
    }
}

#[derive(Debug, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Invalid device id")]
    InvalidDeviceId,
    #[error("Missing bearer token or X-Device-Id header")]
    IdentityNotFound,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code) = match self {
            AuthError::InvalidDeviceId => (StatusCode::BAD_REQUEST, "E_BAD_REQUEST"),
            _ => (StatusCode::UNAUTHORIZED, "E_UNAUTHORIZED"),
        };

        let body = ApiErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: status.as_u16() as i64,
        };

        (status, axum::Json(body)).into_response()
    }
}

pub fn device_user_id(device_id: &str) -> Uuid {
    Uuid::new_v5(&DEVICE_NAMESPACE, device_id.as_bytes())
}

pub fn decode_claims(token: &str, secret: &str) -> Result<JwtClaim, AuthError> {
    decode::<JwtClaim>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => {
            debug!("Rejected bearer token: {}", e);
            AuthError::InvalidToken
        }
    })
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::InvalidToken)?;

    Ok(bearer.token().to_string())
}

/// Resolves the caller: a Bearer token wins over `X-Device-Id`.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        if parts.headers.contains_key(AUTHORIZATION) {
            let token = extract_token_from_bearer(parts).await?;
            let Some(secret) = state.args.auth.jwt_secret.as_deref() else {
                error!("Bearer token received but no JWT secret is configured");
                return Err(AuthError::InvalidToken);
            };

            let claims = decode_claims(&token, secret)?;
            let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;

            return Ok(RequiredIdentity(Identity::User(user_id)));
        }

        let device_id = parts
            .headers
            .get(DEVICE_ID_HEADER)
            .ok_or(AuthError::IdentityNotFound)?
            .to_str()
            .map_err(|_| AuthError::InvalidDeviceId)?
            .trim();

        if device_id.is_empty() || device_id.len() > MAX_DEVICE_ID_LEN {
            return Err(AuthError::InvalidDeviceId);
        }

        Ok(RequiredIdentity(Identity::Device(device_user_id(device_id))))
    }
}
