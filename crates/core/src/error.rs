// Error types for the event aggregate

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for aggregate operations
pub type Result<T> = std::result::Result<T, EventDeckError>;

/// Errors that can occur while managing events and catalogue items
#[derive(Debug, Error)]
pub enum EventDeckError {
    /// Missing or malformed field, invalid enum value, negative number
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Identifier does not resolve to a stored document
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Missing, malformed, invalid or expired credentials
    #[error("Not authorized, {0}")]
    AuthFailure(String),

    /// Store unreachable or write rejected
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl EventDeckError {
    /// Create a validation error for a field path (e.g. `costs[1].amount`)
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EventDeckError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an event not found error
    pub fn event_not_found(id: Uuid) -> Self {
        EventDeckError::NotFound {
            entity: "Event",
            id: id.to_string(),
        }
    }

    /// Create an inventory item not found error
    pub fn item_not_found(id: Uuid) -> Self {
        EventDeckError::NotFound {
            entity: "Inventory item",
            id: id.to_string(),
        }
    }

    /// Create an auth failure
    pub fn auth(msg: impl Into<String>) -> Self {
        EventDeckError::AuthFailure(msg.into())
    }

    /// Create a persistence error
    pub fn store(msg: impl Into<String>) -> Self {
        EventDeckError::Persistence(msg.into())
    }

    /// Machine-distinguishable kind, stable across releases
    pub fn kind(&self) -> &'static str {
        match self {
            EventDeckError::Validation { .. } => "validation_error",
            EventDeckError::NotFound { .. } => "not_found",
            EventDeckError::AuthFailure(_) => "auth_failure",
            EventDeckError::Persistence(_) | EventDeckError::Internal(_) => "persistence_error",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EventDeckError::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, EventDeckError::Validation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = EventDeckError::validation("costs[0].amount", "must not be negative");
        assert_eq!(err.to_string(), "costs[0].amount: must not be negative");
        assert_eq!(err.kind(), "validation_error");
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_kind() {
        let err = EventDeckError::event_not_found(Uuid::nil());
        assert!(err.is_not_found());
        assert_eq!(err.kind(), "not_found");
        assert!(err.to_string().starts_with("Event not found"));
    }

    #[test]
    fn test_auth_message() {
        let err = EventDeckError::auth("token failed");
        assert_eq!(err.to_string(), "Not authorized, token failed");
        assert_eq!(err.kind(), "auth_failure");
    }

    #[test]
    fn test_internal_maps_to_persistence_kind() {
        let err: EventDeckError = anyhow::anyhow!("pool closed").into();
        assert_eq!(err.kind(), "persistence_error");
    }
}
