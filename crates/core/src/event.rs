// Event domain types
//
// These types represent the Event aggregate and its embedded sub-documents.
// Used by both the API and storage layers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Event lifecycle status.
/// No transition ordering is enforced; any status may follow any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum EventStatus {
    /// Event is being planned.
    #[default]
    Pending,
    /// Event is underway.
    #[serde(rename = "In Progress", alias = "InProgress")]
    InProgress,
    /// Event is over.
    Completed,
}

impl EventStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(EventStatus::Pending),
            "In Progress" | "InProgress" => Some(EventStatus::InProgress),
            "Completed" => Some(EventStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Pending => write!(f, "Pending"),
            EventStatus::InProgress => write!(f, "In Progress"),
            EventStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Availability of an event-local inventory line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum InventoryLineStatus {
    #[default]
    Available,
    #[serde(rename = "In Use", alias = "InUse")]
    InUse,
    Reserved,
}

impl InventoryLineStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Available" => Some(InventoryLineStatus::Available),
            "In Use" | "InUse" => Some(InventoryLineStatus::InUse),
            "Reserved" => Some(InventoryLineStatus::Reserved),
            _ => None,
        }
    }
}

/// Cost category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum CostCategory {
    Venue,
    Catering,
    Equipment,
    Staff,
    Marketing,
    Other,
}

impl CostCategory {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Venue" => Some(CostCategory::Venue),
            "Catering" => Some(CostCategory::Catering),
            "Equipment" => Some(CostCategory::Equipment),
            "Staff" => Some(CostCategory::Staff),
            "Marketing" => Some(CostCategory::Marketing),
            "Other" => Some(CostCategory::Other),
            _ => None,
        }
    }
}

/// Payment status of a cost entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub enum CostStatus {
    #[default]
    Pending,
    Paid,
}

impl CostStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(CostStatus::Pending),
            "Paid" => Some(CostStatus::Paid),
            _ => None,
        }
    }
}

/// Budget currency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Inr,
}

impl Currency {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            "INR" => Some(Currency::Inr),
            _ => None,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
        };
        f.write_str(code)
    }
}

/// A point on the event timeline. Identified only by its position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Milestone {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Event-local copy of an inventory item. Not linked to the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct EventInventoryLine {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: InventoryLineStatus,
}

/// A single spending line on an event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CostEntry {
    pub category: CostCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub status: CostStatus,
}

/// Planned versus spent money for an event.
/// `spent` is derived from the event's costs and never set from input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Budget {
    /// User-declared planned budget.
    #[serde(default)]
    pub total: f64,
    /// Sum of all cost amounts.
    #[serde(default)]
    pub spent: f64,
    #[serde(default)]
    pub currency: Currency,
}

impl Budget {
    /// Money left to spend; negative when over budget.
    pub fn remaining(&self) -> f64 {
        self.total - self.spent
    }
}

/// Event - root aggregate owning milestones, inventory lines, costs and budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier for the event.
    #[serde(alias = "_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    /// Free-form clock time, e.g. "10:00".
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    /// Timeline order.
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub inventory: Vec<EventInventoryLine>,
    #[serde(default)]
    pub costs: Vec<CostEntry>,
    #[serde(default)]
    pub budget: Budget,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated document ready for insertion. Storage assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub name: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub time: String,
    pub location: Option<String>,
    pub status: EventStatus,
    pub milestones: Vec<Milestone>,
    pub inventory: Vec<EventInventoryLine>,
    pub costs: Vec<CostEntry>,
    pub budget: Budget,
}

/// Validated field map for a partial update.
/// `None` leaves the stored value untouched. Budget sub-fields are set
/// individually so that one write can merge them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub status: Option<EventStatus>,
    pub milestones: Option<Vec<Milestone>>,
    pub inventory: Option<Vec<EventInventoryLine>>,
    pub costs: Option<Vec<CostEntry>>,
    pub budget_total: Option<f64>,
    pub budget_currency: Option<Currency>,
    pub budget_spent: Option<f64>,
}

impl EventPatch {
    /// Apply the field map to a stored event (in-memory stores and tests)
    pub fn apply(self, event: &mut Event) {
        if let Some(name) = self.name {
            event.name = name;
        }
        if let Some(description) = self.description {
            event.description = Some(description);
        }
        if let Some(date) = self.date {
            event.date = date;
        }
        if let Some(time) = self.time {
            event.time = time;
        }
        if let Some(location) = self.location {
            event.location = Some(location);
        }
        if let Some(status) = self.status {
            event.status = status;
        }
        if let Some(milestones) = self.milestones {
            event.milestones = milestones;
        }
        if let Some(inventory) = self.inventory {
            event.inventory = inventory;
        }
        if let Some(costs) = self.costs {
            event.costs = costs;
        }
        if let Some(total) = self.budget_total {
            event.budget.total = total;
        }
        if let Some(currency) = self.budget_currency {
            event.budget.currency = currency;
        }
        if let Some(spent) = self.budget_spent {
            event.budget.spent = spent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_spelling() {
        assert_eq!(
            serde_json::to_value(EventStatus::InProgress).unwrap(),
            "In Progress"
        );
        let parsed: EventStatus = serde_json::from_str("\"InProgress\"").unwrap();
        assert_eq!(parsed, EventStatus::InProgress);
        assert_eq!(EventStatus::parse("Completed"), Some(EventStatus::Completed));
        assert_eq!(EventStatus::parse("completed"), None);
    }

    #[test]
    fn test_inventory_line_status_wire_spelling() {
        assert_eq!(
            serde_json::to_value(InventoryLineStatus::InUse).unwrap(),
            "In Use"
        );
        assert_eq!(
            InventoryLineStatus::parse("InUse"),
            Some(InventoryLineStatus::InUse)
        );
    }

    #[test]
    fn test_budget_remaining() {
        let budget = Budget {
            total: 1000.0,
            spent: 1250.0,
            currency: Currency::Eur,
        };
        assert_eq!(budget.remaining(), -250.0);
    }

    #[test]
    fn test_event_serializes_camel_case_timestamps() {
        let now = Utc::now();
        let event = Event {
            id: Uuid::now_v7(),
            name: "Launch".to_string(),
            description: None,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: "10:00".to_string(),
            location: None,
            status: EventStatus::Pending,
            milestones: vec![],
            inventory: vec![],
            costs: vec![],
            budget: Budget::default(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
        assert_eq!(json["date"], "2025-06-01");
        assert_eq!(json["budget"]["currency"], "USD");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_patch_apply_leaves_absent_fields() {
        let now = Utc::now();
        let mut event = Event {
            id: Uuid::now_v7(),
            name: "Launch".to_string(),
            description: Some("Product launch".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: "10:00".to_string(),
            location: None,
            status: EventStatus::Pending,
            milestones: vec![],
            inventory: vec![],
            costs: vec![],
            budget: Budget {
                total: 900.0,
                spent: 0.0,
                currency: Currency::Gbp,
            },
            created_at: now,
            updated_at: now,
        };

        EventPatch {
            location: Some("Hall A".to_string()),
            budget_total: Some(1200.0),
            ..Default::default()
        }
        .apply(&mut event);

        assert_eq!(event.location.as_deref(), Some("Hall A"));
        assert_eq!(event.name, "Launch");
        assert_eq!(event.budget.total, 1200.0);
        assert_eq!(event.budget.currency, Currency::Gbp);
    }
}
