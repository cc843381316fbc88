// Database models (internal, may differ from public DTOs)
//
// Embedded sub-documents (milestones, inventory lines, costs) are JSONB
// columns; the budget is flattened into three scalar columns.

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};
use eventdeck_core::{
    Budget, CostEntry, Currency, Event, EventInventoryLine, EventStatus, InventoryItem, Milestone,
};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

// ============================================
// Users
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateUserRow {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

// ============================================
// Events
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: String,
    pub location: Option<String>,
    pub status: String,
    pub milestones: Json<Vec<Milestone>>,
    pub inventory: Json<Vec<EventInventoryLine>>,
    pub costs: Json<Vec<CostEntry>>,
    pub budget_total: f64,
    pub budget_spent: f64,
    pub budget_currency: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = anyhow::Error;

    fn try_from(row: EventRow) -> Result<Self> {
        let status = EventStatus::parse(&row.status)
            .ok_or_else(|| anyhow!("Unknown event status in row {}: {}", row.id, row.status))?;
        let currency = Currency::parse(&row.budget_currency).ok_or_else(|| {
            anyhow!(
                "Unknown budget currency in row {}: {}",
                row.id,
                row.budget_currency
            )
        })?;

        Ok(Event {
            id: row.id,
            name: row.name,
            description: row.description,
            date: row.date,
            time: row.time,
            location: row.location,
            status,
            milestones: row.milestones.0,
            inventory: row.inventory.0,
            costs: row.costs.0,
            budget: Budget {
                total: row.budget_total,
                spent: row.budget_spent,
                currency,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

// ============================================
// Inventory catalogue
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct InventoryItemRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub quantity: f64,
    pub unit: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<InventoryItemRow> for InventoryItem {
    fn from(row: InventoryItemRow) -> Self {
        InventoryItem {
            id: row.id,
            name: row.name,
            description: row.description,
            quantity: row.quantity,
            unit: row.unit,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
