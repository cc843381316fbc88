// Repository layer for database operations
//
// Every create/update is one statement, so each write is atomic per row.
// Partial updates use COALESCE($n, column) to leave absent fields untouched.

use anyhow::{Context, Result};
use eventdeck_core::{EventPatch, InventoryItemPatch, NewEvent, NewInventoryItem};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::*;

const EVENT_COLUMNS: &str = "id, name, description, date, time, location, status, milestones, \
     inventory, costs, budget_total, budget_spent, budget_currency, created_at, updated_at";

const ITEM_COLUMNS: &str = "id, name, description, quantity, unit, created_at, updated_at";

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create database connection from URL and apply pending migrations
    pub async fn from_url(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .context("Failed to connect to database")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self { pool })
    }

    /// Pool that connects on first use; lets tests reach an unreachable server
    #[cfg(test)]
    pub(crate) fn connect_lazy(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(500))
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    // ============================================
    // Users
    // ============================================

    /// Insert a user; `None` when the email is already registered
    pub async fn create_user(&self, input: CreateUserRow) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, username, email, password_hash)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password_hash)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to insert user")?;

        Ok(row)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user(&self, id: Uuid) -> Result<Option<UserRow>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    // ============================================
    // Events
    // ============================================

    pub async fn create_event(&self, input: NewEvent) -> Result<EventRow> {
        let sql = format!(
            r#"
            INSERT INTO events (id, name, description, date, time, location, status,
                                milestones, inventory, costs,
                                budget_total, budget_spent, budget_currency)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {EVENT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, EventRow>(&sql)
            .bind(Uuid::now_v7())
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.date)
            .bind(&input.time)
            .bind(&input.location)
            .bind(input.status.to_string())
            .bind(Json(&input.milestones))
            .bind(Json(&input.inventory))
            .bind(Json(&input.costs))
            .bind(input.budget.total)
            .bind(input.budget.spent)
            .bind(input.budget.currency.to_string())
            .fetch_one(&self.pool)
            .await
            .context("Failed to insert event")?;

        Ok(row)
    }

    pub async fn get_event(&self, id: Uuid) -> Result<Option<EventRow>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");
        let row = sqlx::query_as::<_, EventRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// All events in creation order (ids are UUID v7, so they sort by time)
    pub async fn list_events(&self) -> Result<Vec<EventRow>> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY created_at ASC, id ASC");
        let rows = sqlx::query_as::<_, EventRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn update_event(&self, id: Uuid, patch: EventPatch) -> Result<Option<EventRow>> {
        let sql = format!(
            r#"
            UPDATE events
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                date = COALESCE($4, date),
                time = COALESCE($5, time),
                location = COALESCE($6, location),
                status = COALESCE($7, status),
                milestones = COALESCE($8, milestones),
                inventory = COALESCE($9, inventory),
                costs = COALESCE($10, costs),
                budget_total = COALESCE($11, budget_total),
                budget_spent = COALESCE($12, budget_spent),
                budget_currency = COALESCE($13, budget_currency),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, EventRow>(&sql)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.description)
            .bind(patch.date)
            .bind(&patch.time)
            .bind(&patch.location)
            .bind(patch.status.map(|s| s.to_string()))
            .bind(patch.milestones.as_ref().map(Json))
            .bind(patch.inventory.as_ref().map(Json))
            .bind(patch.costs.as_ref().map(Json))
            .bind(patch.budget_total)
            .bind(patch.budget_spent)
            .bind(patch.budget_currency.map(|c| c.to_string()))
            .fetch_optional(&self.pool)
            .await
            .context("Failed to update event")?;

        Ok(row)
    }

    pub async fn delete_event(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    // ============================================
    // Inventory catalogue
    // ============================================

    pub async fn create_inventory_item(&self, input: NewInventoryItem) -> Result<InventoryItemRow> {
        let sql = format!(
            r#"
            INSERT INTO inventory_items (id, name, description, quantity, unit)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ITEM_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, InventoryItemRow>(&sql)
            .bind(Uuid::now_v7())
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.quantity)
            .bind(&input.unit)
            .fetch_one(&self.pool)
            .await
            .context("Failed to insert inventory item")?;

        Ok(row)
    }

    pub async fn get_inventory_item(&self, id: Uuid) -> Result<Option<InventoryItemRow>> {
        let sql = format!("SELECT {ITEM_COLUMNS} FROM inventory_items WHERE id = $1");
        let row = sqlx::query_as::<_, InventoryItemRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn list_inventory_items(&self) -> Result<Vec<InventoryItemRow>> {
        let sql =
            format!("SELECT {ITEM_COLUMNS} FROM inventory_items ORDER BY created_at ASC, id ASC");
        let rows = sqlx::query_as::<_, InventoryItemRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn update_inventory_item(
        &self,
        id: Uuid,
        patch: InventoryItemPatch,
    ) -> Result<Option<InventoryItemRow>> {
        let sql = format!(
            r#"
            UPDATE inventory_items
            SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                quantity = COALESCE($4, quantity),
                unit = COALESCE($5, unit),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {ITEM_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, InventoryItemRow>(&sql)
            .bind(id)
            .bind(&patch.name)
            .bind(&patch.description)
            .bind(patch.quantity)
            .bind(&patch.unit)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to update inventory item")?;

        Ok(row)
    }

    pub async fn delete_inventory_item(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM inventory_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
