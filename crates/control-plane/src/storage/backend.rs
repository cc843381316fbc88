// Storage backend abstraction
// Decision: Use enum dispatch for simplicity over trait objects
//
// This module provides a unified StorageBackend enum that can work with
// either PostgreSQL (production) or in-memory (dev mode) storage, and plugs
// it into the core EventStore/InventoryStore traits.

use anyhow::Result;
use async_trait::async_trait;
use eventdeck_core::{
    Event, EventDeckError, EventPatch, EventStore, InventoryItem, InventoryItemPatch,
    InventoryStore, NewEvent, NewInventoryItem,
};
use std::sync::Arc;
use uuid::Uuid;

use super::memory::InMemoryDatabase;
use super::models::*;
use super::repositories::Database;

/// Storage backend that can be either PostgreSQL or in-memory
#[derive(Clone)]
pub enum StorageBackend {
    /// PostgreSQL database (production)
    Postgres(Database),
    /// In-memory database (dev mode)
    InMemory(Arc<InMemoryDatabase>),
}

impl StorageBackend {
    /// Create a PostgreSQL storage backend from a database URL
    pub async fn postgres(database_url: &str) -> Result<Self> {
        let db = Database::from_url(database_url).await?;
        Ok(Self::Postgres(db))
    }

    /// Create an in-memory storage backend
    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryDatabase::new()))
    }

    /// Check if this is dev mode (in-memory)
    pub fn is_dev_mode(&self) -> bool {
        matches!(self, Self::InMemory(_))
    }

    // ============================================
    // Users
    // ============================================

    /// Insert a user; `None` when the email is already registered
    pub async fn create_user(&self, input: CreateUserRow) -> Result<Option<UserRow>> {
        match self {
            Self::Postgres(db) => db.create_user(input).await,
            Self::InMemory(db) => db.create_user(input).await,
        }
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        match self {
            Self::Postgres(db) => db.get_user_by_email(email).await,
            Self::InMemory(db) => db.get_user_by_email(email).await,
        }
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>> {
        match self {
            Self::Postgres(db) => db.get_user(id).await,
            Self::InMemory(db) => db.get_user(id).await,
        }
    }
}

/// Storage failures surface to the managers as persistence errors
fn persistence(err: anyhow::Error) -> EventDeckError {
    EventDeckError::store(format!("{err:#}"))
}

// ============================================
// Events
// ============================================

#[async_trait]
impl EventStore for StorageBackend {
    async fn insert_event(&self, event: NewEvent) -> eventdeck_core::Result<Event> {
        match self {
            Self::Postgres(db) => db
                .create_event(event)
                .await
                .and_then(Event::try_from)
                .map_err(persistence),
            Self::InMemory(db) => db.events().insert_event(event).await,
        }
    }

    async fn find_event_by_id(&self, id: Uuid) -> eventdeck_core::Result<Option<Event>> {
        match self {
            Self::Postgres(db) => db
                .get_event(id)
                .await
                .and_then(|row| row.map(Event::try_from).transpose())
                .map_err(persistence),
            Self::InMemory(db) => db.events().find_event_by_id(id).await,
        }
    }

    async fn find_all_events(&self) -> eventdeck_core::Result<Vec<Event>> {
        match self {
            Self::Postgres(db) => db
                .list_events()
                .await
                .and_then(|rows| rows.into_iter().map(Event::try_from).collect())
                .map_err(persistence),
            Self::InMemory(db) => db.events().find_all_events().await,
        }
    }

    async fn replace_event_fields(
        &self,
        id: Uuid,
        patch: EventPatch,
    ) -> eventdeck_core::Result<Option<Event>> {
        match self {
            Self::Postgres(db) => db
                .update_event(id, patch)
                .await
                .and_then(|row| row.map(Event::try_from).transpose())
                .map_err(persistence),
            Self::InMemory(db) => db.events().replace_event_fields(id, patch).await,
        }
    }

    async fn delete_event_by_id(&self, id: Uuid) -> eventdeck_core::Result<bool> {
        match self {
            Self::Postgres(db) => db.delete_event(id).await.map_err(persistence),
            Self::InMemory(db) => db.events().delete_event_by_id(id).await,
        }
    }
}

// ============================================
// Inventory catalogue
// ============================================

#[async_trait]
impl InventoryStore for StorageBackend {
    async fn insert_item(&self, item: NewInventoryItem) -> eventdeck_core::Result<InventoryItem> {
        match self {
            Self::Postgres(db) => db
                .create_inventory_item(item)
                .await
                .map(InventoryItem::from)
                .map_err(persistence),
            Self::InMemory(db) => db.inventory().insert_item(item).await,
        }
    }

    async fn find_item_by_id(&self, id: Uuid) -> eventdeck_core::Result<Option<InventoryItem>> {
        match self {
            Self::Postgres(db) => db
                .get_inventory_item(id)
                .await
                .map(|row| row.map(InventoryItem::from))
                .map_err(persistence),
            Self::InMemory(db) => db.inventory().find_item_by_id(id).await,
        }
    }

    async fn find_all_items(&self) -> eventdeck_core::Result<Vec<InventoryItem>> {
        match self {
            Self::Postgres(db) => db
                .list_inventory_items()
                .await
                .map(|rows| rows.into_iter().map(InventoryItem::from).collect())
                .map_err(persistence),
            Self::InMemory(db) => db.inventory().find_all_items().await,
        }
    }

    async fn replace_item_fields(
        &self,
        id: Uuid,
        patch: InventoryItemPatch,
    ) -> eventdeck_core::Result<Option<InventoryItem>> {
        match self {
            Self::Postgres(db) => db
                .update_inventory_item(id, patch)
                .await
                .map(|row| row.map(InventoryItem::from))
                .map_err(persistence),
            Self::InMemory(db) => db.inventory().replace_item_fields(id, patch).await,
        }
    }

    async fn delete_item_by_id(&self, id: Uuid) -> eventdeck_core::Result<bool> {
        match self {
            Self::Postgres(db) => db.delete_inventory_item(id).await.map_err(persistence),
            Self::InMemory(db) => db.inventory().delete_item_by_id(id).await,
        }
    }
}
