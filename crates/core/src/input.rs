// Request input types
//
// These mirror what clients send. Every field is optional and loosely typed
// so that a missing or malformed value is reported as a field-level
// validation error rather than a body parse failure. See `validation` for the
// conversion into domain values.

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Milestone as sent by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct MilestoneInput {
    #[cfg_attr(feature = "openapi", schema(example = "Venue booked"))]
    pub title: Option<String>,
    /// Calendar date, `YYYY-MM-DD` or RFC 3339.
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-01"))]
    pub date: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Event inventory line as sent by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct InventoryLineInput {
    pub name: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub cost: Option<f64>,
    pub description: Option<String>,
    /// One of "Available", "In Use", "Reserved".
    pub status: Option<String>,
}

/// Cost entry as sent by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CostEntryInput {
    /// One of "Venue", "Catering", "Equipment", "Staff", "Marketing", "Other".
    #[cfg_attr(feature = "openapi", schema(example = "Venue"))]
    pub category: Option<String>,
    pub description: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = 500.0))]
    pub amount: Option<f64>,
    /// Defaults to the time the entry is first stored.
    pub date: Option<String>,
    /// One of "Pending", "Paid".
    pub status: Option<String>,
}

/// Budget as sent by clients. `spent` is accepted for compatibility and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BudgetInput {
    pub total: Option<f64>,
    pub spent: Option<f64>,
    /// One of "USD", "EUR", "GBP", "INR".
    pub currency: Option<String>,
}

/// Request to create an event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateEventInput {
    #[cfg_attr(feature = "openapi", schema(example = "Launch"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "2025-06-01"))]
    pub date: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub time: Option<String>,
    pub location: Option<String>,
    /// One of "Pending", "In Progress", "Completed".
    pub status: Option<String>,
    pub milestones: Option<Vec<MilestoneInput>>,
    pub inventory: Option<Vec<InventoryLineInput>>,
    pub costs: Option<Vec<CostEntryInput>>,
    pub budget: Option<BudgetInput>,
}

/// Request to update an event. Only provided fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateEventInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    /// Replaces the whole milestone list.
    pub milestones: Option<Vec<MilestoneInput>>,
    /// Replaces the whole inventory list.
    pub inventory: Option<Vec<InventoryLineInput>>,
    /// Replaces the whole cost list and recomputes `budget.spent`.
    pub costs: Option<Vec<CostEntryInput>>,
    pub budget: Option<BudgetInput>,
}

/// Request to add an item to the inventory catalogue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateInventoryItemInput {
    #[cfg_attr(feature = "openapi", schema(example = "Folding chair"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Request to update a catalogue item. Only provided fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct UpdateInventoryItemInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}
