// Common DTOs and error plumbing for the public API
//
// Every failure is rendered as `{"message": ..., "kind": ...}` so clients can
// show the text and branch on the kind.

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eventdeck_core::EventDeckError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Standard error response for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable description of what went wrong.
    #[schema(example = "name: is required")]
    pub message: String,
    /// One of `validation_error`, `not_found`, `auth_failure`, `persistence_error`.
    #[schema(example = "validation_error")]
    pub kind: String,
}

/// Confirmation body for deletes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Event removed")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error returned by API handlers
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            kind: "validation_error",
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            kind: "not_found",
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            kind: "auth_failure",
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            kind: "auth_failure",
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            kind: "persistence_error",
            message: "Internal server error".to_string(),
        }
    }
}

impl From<EventDeckError> for ApiError {
    fn from(err: EventDeckError) -> Self {
        match &err {
            EventDeckError::Validation { .. } => Self::bad_request(err.to_string()),
            EventDeckError::NotFound { entity, .. } => Self::not_found(format!("{entity} not found")),
            EventDeckError::AuthFailure(_) => Self::unauthorized(err.to_string()),
            EventDeckError::Persistence(_) | EventDeckError::Internal(_) => {
                tracing::error!(error = %err, "Request failed");
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            tracing::debug!(status = %self.status, kind = self.kind, "{}", self.message);
        }
        let body = ErrorResponse {
            message: self.message,
            kind: self.kind.to_string(),
        };
        (self.status, Json(body)).into_response()
    }
}

/// JSON body extractor whose rejection is a `validation_error`
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ValidJson(value)),
            Err(rejection) => Err(ApiError::bad_request(rejection.body_text())),
        }
    }
}

/// Parse a path identifier. Anything that is not a UUID cannot resolve.
pub fn parse_id(raw: &str, entity: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found(format!("{entity} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let err: ApiError = EventDeckError::validation("time", "is required").into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "time: is required");

        let err: ApiError = EventDeckError::event_not_found(Uuid::nil()).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Event not found");

        let err: ApiError = EventDeckError::auth("no token").into();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.kind, "auth_failure");

        let err: ApiError = EventDeckError::store("pool timed out").into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("pool"));
    }

    #[test]
    fn test_parse_id() {
        let id = Uuid::now_v7();
        assert_eq!(parse_id(&id.to_string(), "Event").unwrap(), id);

        let err = parse_id("not-an-id", "Event").unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Event not found");
    }
}
