// Inventory catalogue manager
//
// CRUD over the shared catalogue. Same shape as `EventManager`, without any
// derived fields.

use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::{EventDeckError, Result};
use crate::input::{CreateInventoryItemInput, UpdateInventoryItemInput};
use crate::inventory::InventoryItem;
use crate::traits::{CallerIdentity, InventoryStore};
use crate::validation::{validate_create_item, validate_update_item};

pub struct InventoryCatalogue {
    store: Arc<dyn InventoryStore>,
}

impl InventoryCatalogue {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    pub async fn create(
        &self,
        input: CreateInventoryItemInput,
        caller: &CallerIdentity,
    ) -> Result<InventoryItem> {
        let span = tracing::info_span!("inventory.create", caller = %caller.user_id);

        async move {
            let item = validate_create_item(input)?;
            let stored = self.store.insert_item(item).await?;
            tracing::info!(item.id = %stored.id, item.name = %stored.name, "Inventory item created");
            Ok(stored)
        }
        .instrument(span)
        .await
    }

    pub async fn get_by_id(&self, id: Uuid, caller: &CallerIdentity) -> Result<InventoryItem> {
        tracing::debug!(item.id = %id, caller = %caller.user_id, "Fetching inventory item");
        self.store
            .find_item_by_id(id)
            .await?
            .ok_or_else(|| EventDeckError::item_not_found(id))
    }

    pub async fn list(&self, caller: &CallerIdentity) -> Result<Vec<InventoryItem>> {
        tracing::debug!(caller = %caller.user_id, "Listing inventory items");
        self.store.find_all_items().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateInventoryItemInput,
        caller: &CallerIdentity,
    ) -> Result<InventoryItem> {
        let span = tracing::info_span!("inventory.update", item.id = %id, caller = %caller.user_id);

        async move {
            let patch = validate_update_item(input)?;
            let updated = self
                .store
                .replace_item_fields(id, patch)
                .await?
                .ok_or_else(|| EventDeckError::item_not_found(id))?;
            tracing::info!("Inventory item updated");
            Ok(updated)
        }
        .instrument(span)
        .await
    }

    pub async fn delete(&self, id: Uuid, caller: &CallerIdentity) -> Result<()> {
        if !self.store.delete_item_by_id(id).await? {
            return Err(EventDeckError::item_not_found(id));
        }
        tracing::info!(item.id = %id, caller = %caller.user_id, "Inventory item deleted");
        Ok(())
    }
}
