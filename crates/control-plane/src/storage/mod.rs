// Storage layer for the EventDeck control-plane
// Decision: Support both PostgreSQL (production) and in-memory (dev mode)
//
// - Database: sqlx repositories over the users, events and inventory_items tables
// - InMemoryDatabase: dev-mode storage, reusing the core in-memory stores
// - StorageBackend: enum dispatch over both, implementing EventStore and InventoryStore

pub mod backend;
pub mod memory;
pub mod models;
pub mod password;
pub mod repositories;

pub use backend::StorageBackend;
pub use memory::InMemoryDatabase;
pub use models::*;
pub use repositories::Database;
