// Authentication HTTP routes
// Decision: register/login return the user together with a bearer token
// Decision: Email is the login identifier and must be unique

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::middleware::{AuthState, AuthUser};
use crate::api::common::{ApiError, ErrorResponse, ValidJson};
use crate::storage::{
    models::{CreateUserRow, UserRow},
    password::{hash_password, verify_password},
};

/// Register request
const MISSING_FIELDS: &str = "Please provide all required fields: username, email, password";
const EMAIL_TAKEN: &str = "User with this email already exists";

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "ada")]
    pub username: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// User info, with a bearer token after register/login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserResponse {
    fn from_row(user: UserRow, token: Option<String>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            token,
        }
    }
}

/// Create auth routes
pub fn routes(state: AuthState) -> Router {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/me", get(get_current_user))
        .with_state(state)
}

fn required(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn issue_token(state: &AuthState, user_id: Uuid) -> Result<String, ApiError> {
    state.jwt_service.generate_token(user_id).map_err(|e| {
        tracing::error!("Token generation error: {:#}", e);
        ApiError::internal()
    })
}

/// POST /auth/register - Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Missing fields or email already registered", body = ErrorResponse),
        (status = 403, description = "Registration is disabled", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AuthState>,
    ValidJson(req): ValidJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    if !state.config.signup_enabled() {
        return Err(ApiError::forbidden("Registration is disabled"));
    }

    let (Some(username), Some(email), Some(password)) = (
        required(req.username),
        required(req.email).map(|e| e.to_lowercase()),
        req.password.filter(|p| !p.is_empty()),
    ) else {
        return Err(ApiError::bad_request(MISSING_FIELDS));
    };

    let existing = state.db.get_user_by_email(&email).await.map_err(|e| {
        tracing::error!("Database error during registration: {:#}", e);
        ApiError::internal()
    })?;
    if existing.is_some() {
        return Err(ApiError::bad_request(EMAIL_TAKEN));
    }

    let password_hash = hash_password(&password).map_err(|e| {
        tracing::error!("Password hashing error: {:#}", e);
        ApiError::internal()
    })?;

    let user = state
        .db
        .create_user(CreateUserRow {
            username,
            email,
            password_hash,
        })
        .await
        .map_err(|e| {
            tracing::error!("Database error during registration: {:#}", e);
            ApiError::internal()
        })?
        // Lost a race with a concurrent registration for the same email
        .ok_or_else(|| ApiError::bad_request(EMAIL_TAKEN))?;

    tracing::info!(user.id = %user.id, "User registered");
    let token = issue_token(&state, user.id)?;
    Ok((
        StatusCode::CREATED,
        Json(UserResponse::from_row(user, Some(token))),
    ))
}

/// POST /auth/login - Login with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = UserResponse),
        (status = 401, description = "Invalid email or password", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AuthState>,
    ValidJson(req): ValidJson<LoginRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let invalid = || ApiError::unauthorized("Invalid email or password");

    let email = required(req.email).map(|e| e.to_lowercase()).ok_or_else(invalid)?;
    let password = req.password.ok_or_else(invalid)?;

    let user = state
        .db
        .get_user_by_email(&email)
        .await
        .map_err(|e| {
            tracing::error!("Database error during login: {:#}", e);
            ApiError::internal()
        })?
        .ok_or_else(invalid)?;

    let valid = verify_password(&password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:#}", e);
        ApiError::internal()
    })?;
    if !valid {
        return Err(invalid());
    }

    let token = issue_token(&state, user.id)?;
    Ok(Json(UserResponse::from_row(user, Some(token))))
}

/// GET /auth/me - Current user
#[utoipa::path(
    get,
    path = "/auth/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Not authorized", body = ErrorResponse)
    ),
    tag = "auth"
)]
pub async fn get_current_user(AuthUser(caller): AuthUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: caller.user_id,
        username: caller.username,
        email: caller.email,
        token: None,
    })
}
