// Authentication extractors
// Decision: Header-based bearer tokens only (`Authorization: Bearer <jwt>`)
// Decision: In "none" mode, every request runs as the anonymous caller
//
// AuthState implements the core IdentityGate: a token is accepted only when
// it verifies and its subject still names a stored user.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use eventdeck_core::{CallerIdentity, EventDeckError, IdentityGate};
use std::sync::Arc;

use super::{
    config::{AuthConfig, AuthMode},
    jwt::JwtService,
};
use crate::api::common::ApiError;
use crate::storage::StorageBackend;

/// Authenticated caller extracted from the request
#[derive(Debug, Clone)]
pub struct AuthUser(pub CallerIdentity);

/// Auth state shared across routes
#[derive(Clone)]
pub struct AuthState {
    pub config: AuthConfig,
    pub jwt_service: Arc<JwtService>,
    pub db: StorageBackend,
}

impl AuthState {
    pub fn new(config: AuthConfig, db: StorageBackend) -> Self {
        let jwt_service = Arc::new(JwtService::new(config.jwt.clone()));
        Self {
            config,
            jwt_service,
            db,
        }
    }
}

#[async_trait]
impl IdentityGate for AuthState {
    async fn authenticate(&self, token: &str) -> eventdeck_core::Result<CallerIdentity> {
        let claims = self.jwt_service.validate_token(token).map_err(|e| {
            tracing::debug!("JWT validation failed: {:#}", e);
            EventDeckError::auth("token failed")
        })?;
        let user_id = claims
            .user_id()
            .map_err(|_| EventDeckError::auth("token failed"))?;

        let user = self
            .db
            .get_user(user_id)
            .await
            .map_err(|e| EventDeckError::store(format!("{e:#}")))?
            .ok_or_else(|| EventDeckError::auth("user not found"))?;

        Ok(CallerIdentity {
            user_id: user.id,
            username: user.username,
            email: user.email,
        })
    }
}

/// Helper trait for extracting AuthState from application state
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

impl FromRef<AuthState> for AuthState {
    fn from_ref(input: &AuthState) -> Self {
        input.clone()
    }
}

/// Extractor for the authenticated caller; rejects with 401 before any
/// handler or storage work runs.
#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_state = AuthState::from_ref(state);
        extract_auth_user(parts, &auth_state).await
    }
}

/// Pull the bearer token out of the Authorization header
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

async fn extract_auth_user(parts: &Parts, auth_state: &AuthState) -> Result<AuthUser, ApiError> {
    if auth_state.config.mode == AuthMode::None {
        return Ok(AuthUser(CallerIdentity::anonymous()));
    }

    let token = bearer_token(parts).ok_or_else(|| EventDeckError::auth("no token"))?;
    let caller = auth_state.authenticate(token).await?;
    Ok(AuthUser(caller))
}
