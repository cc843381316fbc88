// In-memory implementations for dev mode and testing
//
// These implementations keep all data in memory, making them perfect for:
// - Running the server without a database
// - Unit tests
// - Quick prototyping
//
// Documents are kept in insertion order so `find_all_*` returns creation order.
// Each write holds the lock for its whole read-modify-write.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::event::{Event, EventPatch, NewEvent};
use crate::inventory::{InventoryItem, InventoryItemPatch, NewInventoryItem};
use crate::traits::{EventStore, InventoryStore};

// ============================================================================
// InMemoryEventStore - Stores events in memory
// ============================================================================

/// In-memory event store
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventStore {
    events: Arc<RwLock<Vec<Event>>>,
}

impl InMemoryEventStore {
    /// Create a new in-memory event store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn insert_event(&self, event: NewEvent) -> Result<Event> {
        let now = Utc::now();
        let stored = Event {
            id: Uuid::now_v7(),
            name: event.name,
            description: event.description,
            date: event.date,
            time: event.time,
            location: event.location,
            status: event.status,
            milestones: event.milestones,
            inventory: event.inventory,
            costs: event.costs,
            budget: event.budget,
            created_at: now,
            updated_at: now,
        };
        self.events.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_event_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        Ok(self
            .events
            .read()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn find_all_events(&self) -> Result<Vec<Event>> {
        Ok(self.events.read().await.clone())
    }

    async fn replace_event_fields(&self, id: Uuid, patch: EventPatch) -> Result<Option<Event>> {
        let mut events = self.events.write().await;
        match events.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                patch.apply(event);
                event.updated_at = Utc::now();
                Ok(Some(event.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_event_by_id(&self, id: Uuid) -> Result<bool> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| e.id != id);
        Ok(events.len() != before)
    }
}

// ============================================================================
// InMemoryInventoryStore - Stores catalogue items in memory
// ============================================================================

/// In-memory catalogue store
#[derive(Debug, Default, Clone)]
pub struct InMemoryInventoryStore {
    items: Arc<RwLock<Vec<InventoryItem>>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InventoryStore for InMemoryInventoryStore {
    async fn insert_item(&self, item: NewInventoryItem) -> Result<InventoryItem> {
        let now = Utc::now();
        let stored = InventoryItem {
            id: Uuid::now_v7(),
            name: item.name,
            description: item.description,
            quantity: item.quantity,
            unit: item.unit,
            created_at: now,
            updated_at: now,
        };
        self.items.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_item_by_id(&self, id: Uuid) -> Result<Option<InventoryItem>> {
        Ok(self
            .items
            .read()
            .await
            .iter()
            .find(|i| i.id == id)
            .cloned())
    }

    async fn find_all_items(&self) -> Result<Vec<InventoryItem>> {
        Ok(self.items.read().await.clone())
    }

    async fn replace_item_fields(
        &self,
        id: Uuid,
        patch: InventoryItemPatch,
    ) -> Result<Option<InventoryItem>> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                patch.apply(item);
                item.updated_at = Utc::now();
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_item_by_id(&self, id: Uuid) -> Result<bool> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|i| i.id != id);
        Ok(items.len() != before)
    }
}
