// Event aggregate manager
//
// Owns the Event invariants: input is validated before any store call,
// `budget.spent` is derived from costs at create time and whenever an update
// replaces costs, and every create/update is a single store write.

use chrono::Utc;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::budget;
use crate::error::{EventDeckError, Result};
use crate::event::Event;
use crate::input::{CreateEventInput, UpdateEventInput};
use crate::traits::{CallerIdentity, EventStore};
use crate::validation::{validate_create_event, validate_update_event};

pub struct EventManager {
    store: Arc<dyn EventStore>,
}

impl EventManager {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: CreateEventInput, caller: &CallerIdentity) -> Result<Event> {
        let span = tracing::info_span!(
            "event.create",
            caller = %caller.user_id,
            event.name = input.name.as_deref().unwrap_or(""),
            event.id = tracing::field::Empty,
        );

        self.create_inner(input).instrument(span).await
    }

    async fn create_inner(&self, input: CreateEventInput) -> Result<Event> {
        let mut event = validate_create_event(input, Utc::now())?;
        event.budget.spent = budget::spent(&event.costs)?;

        let stored = self.store.insert_event(event).await?;
        tracing::Span::current().record("event.id", stored.id.to_string().as_str());
        tracing::info!(spent = stored.budget.spent, "Event created");

        Ok(stored)
    }

    pub async fn get_by_id(&self, id: Uuid, caller: &CallerIdentity) -> Result<Event> {
        tracing::debug!(event.id = %id, caller = %caller.user_id, "Fetching event");
        self.store
            .find_event_by_id(id)
            .await?
            .ok_or_else(|| EventDeckError::event_not_found(id))
    }

    pub async fn list(&self, caller: &CallerIdentity) -> Result<Vec<Event>> {
        tracing::debug!(caller = %caller.user_id, "Listing events");
        self.store.find_all_events().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateEventInput,
        caller: &CallerIdentity,
    ) -> Result<Event> {
        let span = tracing::info_span!("event.update", event.id = %id, caller = %caller.user_id);

        async move {
            let mut patch = validate_update_event(input, Utc::now())?;
            if let Some(costs) = &patch.costs {
                patch.budget_spent = Some(budget::spent(costs)?);
            }

            let updated = self
                .store
                .replace_event_fields(id, patch)
                .await?
                .ok_or_else(|| EventDeckError::event_not_found(id))?;
            tracing::info!(spent = updated.budget.spent, "Event updated");

            Ok(updated)
        }
        .instrument(span)
        .await
    }

    pub async fn delete(&self, id: Uuid, caller: &CallerIdentity) -> Result<()> {
        let deleted = self.store.delete_event_by_id(id).await?;
        if !deleted {
            return Err(EventDeckError::event_not_found(id));
        }
        tracing::info!(event.id = %id, caller = %caller.user_id, "Event deleted");
        Ok(())
    }
}
