// Core traits for pluggable backends
//
// These traits allow the aggregate managers to be used with different backends:
// - In-memory implementations for dev mode and testing
// - Database implementations for production

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::event::{Event, EventPatch, NewEvent};
use crate::inventory::{InventoryItem, InventoryItemPatch, NewInventoryItem};

// ============================================================================
// CallerIdentity - Who is making the request
// ============================================================================

/// Authenticated caller, produced by an `IdentityGate`.
///
/// Passed explicitly into every manager operation. Events carry no owner
/// reference, so managers only record it in spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
}

impl CallerIdentity {
    /// Identity used when authentication is disabled (local development)
    pub fn anonymous() -> Self {
        Self {
            user_id: Uuid::nil(),
            username: "anonymous".to_string(),
            email: "anonymous@local".to_string(),
        }
    }
}

// ============================================================================
// IdentityGate - Bearer token check
// ============================================================================

/// Resolves a credential token to a caller.
///
/// Fails with `EventDeckError::AuthFailure` when the token is malformed,
/// invalid, expired, or names a user that no longer exists.
#[async_trait]
pub trait IdentityGate: Send + Sync {
    async fn authenticate(&self, token: &str) -> Result<CallerIdentity>;
}

// ============================================================================
// EventStore - Persistence for the Event aggregate
// ============================================================================

/// Document store for events.
///
/// Every write method must be a single atomic operation on one document.
/// Implementations assign `id`, `created_at` and `updated_at`.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Insert a new event document
    async fn insert_event(&self, event: NewEvent) -> Result<Event>;

    /// Find an event by ID
    async fn find_event_by_id(&self, id: Uuid) -> Result<Option<Event>>;

    /// All events in natural storage order
    async fn find_all_events(&self) -> Result<Vec<Event>>;

    /// Set the fields present in `patch`; `None` when the id is unknown
    async fn replace_event_fields(&self, id: Uuid, patch: EventPatch) -> Result<Option<Event>>;

    /// Remove an event; `false` when the id is unknown
    async fn delete_event_by_id(&self, id: Uuid) -> Result<bool>;
}

// ============================================================================
// InventoryStore - Persistence for the catalogue
// ============================================================================

/// Document store for catalogue items.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn insert_item(&self, item: NewInventoryItem) -> Result<InventoryItem>;

    async fn find_item_by_id(&self, id: Uuid) -> Result<Option<InventoryItem>>;

    async fn find_all_items(&self) -> Result<Vec<InventoryItem>>;

    async fn replace_item_fields(
        &self,
        id: Uuid,
        patch: InventoryItemPatch,
    ) -> Result<Option<InventoryItem>>;

    async fn delete_item_by_id(&self, id: Uuid) -> Result<bool>;
}
