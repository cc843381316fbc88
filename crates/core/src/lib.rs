// Event planning core
//
// This crate owns the Event aggregate and the inventory catalogue, independent
// of HTTP transport and of any particular database.
//
// Key design decisions:
// - Uses traits (EventStore, InventoryStore, IdentityGate) for pluggable backends
// - Request bodies are loosely typed inputs, validated into domain values before
//   any persistence call
// - `budget.spent` is derived by `budget::spent`, never taken from input
// - The caller identity is an explicit parameter of every manager operation

pub mod budget;
pub mod catalogue;
pub mod error;
pub mod event;
pub mod input;
pub mod inventory;
pub mod manager;
pub mod traits;
pub mod validation;

// In-memory implementations for dev mode and testing
pub mod memory;

// Re-exports for convenience
pub use catalogue::InventoryCatalogue;
pub use error::{EventDeckError, Result};
pub use event::{
    Budget, CostCategory, CostEntry, CostStatus, Currency, Event, EventInventoryLine,
    EventPatch, EventStatus, InventoryLineStatus, Milestone, NewEvent,
};
pub use input::{
    BudgetInput, CostEntryInput, CreateEventInput, CreateInventoryItemInput,
    InventoryLineInput, MilestoneInput, UpdateEventInput, UpdateInventoryItemInput,
};
pub use inventory::{InventoryItem, InventoryItemPatch, NewInventoryItem};
pub use manager::EventManager;
pub use memory::{InMemoryEventStore, InMemoryInventoryStore};
pub use traits::{CallerIdentity, EventStore, IdentityGate, InventoryStore};
