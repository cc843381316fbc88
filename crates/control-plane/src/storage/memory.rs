// In-memory storage implementation for dev mode
// Decision: Use parking_lot for thread-safe access to user rows
// Decision: Events and catalogue items reuse the core in-memory stores
//
// Lets the control-plane run without a database for development and tests.
// All data is lost on restart.

use anyhow::Result;
use chrono::Utc;
use eventdeck_core::{InMemoryEventStore, InMemoryInventoryStore};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use super::models::*;

/// In-memory database for dev mode
#[derive(Default)]
pub struct InMemoryDatabase {
    users: RwLock<HashMap<Uuid, UserRow>>,
    events: InMemoryEventStore,
    inventory: InMemoryInventoryStore,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &InMemoryEventStore {
        &self.events
    }

    pub fn inventory(&self) -> &InMemoryInventoryStore {
        &self.inventory
    }

    // ============================================
    // Users
    // ============================================

    pub async fn create_user(&self, input: CreateUserRow) -> Result<Option<UserRow>> {
        let mut users = self.users.write();
        if users.values().any(|u| u.email == input.email) {
            return Ok(None);
        }

        let now = Utc::now();
        let row = UserRow {
            id: Uuid::now_v7(),
            username: input.username,
            email: input.email,
            password_hash: input.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(row.id, row.clone());
        Ok(Some(row))
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>> {
        Ok(self.users.read().get(&id).cloned())
    }

    /// Remove a user (tests only; there is no account deletion endpoint)
    #[cfg(test)]
    pub fn remove_user(&self, id: Uuid) {
        self.users.write().remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str) -> CreateUserRow {
        CreateUserRow {
            username: "ada".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$fake".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let db = InMemoryDatabase::new();
        let created = db.create_user(user("ada@example.com")).await.unwrap().unwrap();

        let by_id = db.get_user(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "ada@example.com");

        let by_email = db.get_user_by_email("ada@example.com").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(created.id));

        assert!(db
            .get_user_by_email("nobody@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let db = InMemoryDatabase::new();
        db.create_user(user("ada@example.com")).await.unwrap().unwrap();
        let second = db.create_user(user("ada@example.com")).await.unwrap();
        assert!(second.is_none());
        assert_eq!(db.users.read().len(), 1);
    }
}
