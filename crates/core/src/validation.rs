// Input validation for events and catalogue items
//
// Converts loosely typed input into domain values. Runs before any store call
// so a rejected request never causes a write. Field paths in errors follow
// the request shape, e.g. `costs[2].amount`.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::{EventDeckError, Result};
use crate::event::{
    Budget, CostCategory, CostEntry, CostStatus, Currency, EventInventoryLine, EventPatch,
    EventStatus, InventoryLineStatus, Milestone, NewEvent,
};
use crate::input::{
    BudgetInput, CostEntryInput, CreateEventInput, CreateInventoryItemInput, InventoryLineInput,
    MilestoneInput, UpdateEventInput, UpdateInventoryItemInput,
};
use crate::inventory::{InventoryItemPatch, NewInventoryItem};

// =============================================================================
// Input Size Limits
// =============================================================================

/// Maximum size for names and titles.
pub const MAX_NAME_BYTES: usize = 2 * 1024; // 2 KB

/// Maximum size for description fields.
pub const MAX_DESCRIPTION_BYTES: usize = 10 * 1024; // 10 KB

/// Maximum size for short text fields (time, location, unit).
pub const MAX_SHORT_TEXT_BYTES: usize = 1024; // 1 KB

/// Maximum number of entries in any embedded list.
pub const MAX_EMBEDDED_ITEMS: usize = 1000;

// =============================================================================
// Field helpers
// =============================================================================

fn check_len(field: &str, value: &str, max: usize) -> Result<()> {
    if value.len() > max {
        tracing::warn!(
            field = %field,
            "Field exceeds limit: {} bytes (max: {})",
            value.len(),
            max
        );
        return Err(EventDeckError::validation(field, "exceeds allowed size"));
    }
    Ok(())
}

/// Trimmed, non-empty text.
fn required_text(field: &str, value: Option<String>, max: usize) -> Result<String> {
    let value = value.map(|v| v.trim().to_string()).unwrap_or_default();
    if value.is_empty() {
        return Err(EventDeckError::validation(field, "is required"));
    }
    check_len(field, &value, max)?;
    Ok(value)
}

/// Trimmed text; blank collapses to `None`.
fn optional_text(field: &str, value: Option<String>, max: usize) -> Result<Option<String>> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => {
            check_len(field, &v, max)?;
            Ok(Some(v))
        }
        _ => Ok(None),
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(EventDeckError::validation(field, "must be a finite number"));
    }
    if value < 0.0 {
        return Err(EventDeckError::validation(field, "must not be negative"));
    }
    Ok(value)
}

fn finite(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(EventDeckError::validation(field, "must be a finite number"));
    }
    Ok(value)
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (date part is kept).
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EventDeckError::validation(field, "is required"));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc).date_naive());
    }
    Err(EventDeckError::validation(
        field,
        "must be a date (YYYY-MM-DD)",
    ))
}

/// Accepts an RFC 3339 timestamp or a bare date (midnight UTC).
fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }
    let midnight = parse_date(field, value)?
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| EventDeckError::validation(field, "must be a timestamp"))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

fn required_date(field: &str, value: Option<String>) -> Result<NaiveDate> {
    parse_date(field, value.as_deref().unwrap_or(""))
}

fn enum_value<T>(field: &str, value: &str, parse: fn(&str) -> Option<T>, allowed: &str) -> Result<T> {
    parse(value.trim()).ok_or_else(|| {
        EventDeckError::validation(field, format!("must be one of {}", allowed))
    })
}

fn check_count(field: &str, count: usize) -> Result<()> {
    if count > MAX_EMBEDDED_ITEMS {
        tracing::warn!(
            field = %field,
            "Embedded list exceeds limit: {} (max: {})",
            count,
            MAX_EMBEDDED_ITEMS
        );
        return Err(EventDeckError::validation(field, "has too many entries"));
    }
    Ok(())
}

// =============================================================================
// Sub-documents
// =============================================================================

fn validate_status(value: String) -> Result<EventStatus> {
    enum_value(
        "status",
        &value,
        EventStatus::parse,
        "Pending, In Progress, Completed",
    )
}

fn validate_milestone(index: usize, input: MilestoneInput) -> Result<Milestone> {
    let path = |name: &str| format!("milestones[{}].{}", index, name);
    Ok(Milestone {
        title: required_text(&path("title"), input.title, MAX_NAME_BYTES)?,
        date: required_date(&path("date"), input.date)?,
        time: optional_text(&path("time"), input.time, MAX_SHORT_TEXT_BYTES)?,
        description: optional_text(
            &path("description"),
            input.description,
            MAX_DESCRIPTION_BYTES,
        )?,
        completed: input.completed.unwrap_or(false),
    })
}

fn validate_inventory_line(index: usize, input: InventoryLineInput) -> Result<EventInventoryLine> {
    let path = |name: &str| format!("inventory[{}].{}", index, name);
    let quantity = input
        .quantity
        .ok_or_else(|| EventDeckError::validation(path("quantity"), "is required"))?;
    let status = match input.status {
        Some(s) => enum_value(
            &path("status"),
            &s,
            InventoryLineStatus::parse,
            "Available, In Use, Reserved",
        )?,
        None => InventoryLineStatus::default(),
    };
    Ok(EventInventoryLine {
        name: required_text(&path("name"), input.name, MAX_NAME_BYTES)?,
        quantity: non_negative(&path("quantity"), quantity)?,
        unit: required_text(&path("unit"), input.unit, MAX_SHORT_TEXT_BYTES)?,
        cost: non_negative(&path("cost"), input.cost.unwrap_or(0.0))?,
        description: optional_text(
            &path("description"),
            input.description,
            MAX_DESCRIPTION_BYTES,
        )?,
        status,
    })
}

fn validate_cost(index: usize, input: CostEntryInput, now: DateTime<Utc>) -> Result<CostEntry> {
    let path = |name: &str| format!("costs[{}].{}", index, name);
    let category = match input.category {
        Some(c) => enum_value(
            &path("category"),
            &c,
            CostCategory::parse,
            "Venue, Catering, Equipment, Staff, Marketing, Other",
        )?,
        None => return Err(EventDeckError::validation(path("category"), "is required")),
    };
    let amount = input
        .amount
        .ok_or_else(|| EventDeckError::validation(path("amount"), "is required"))?;
    let date = match input.date.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => parse_timestamp(&path("date"), d)?,
        _ => now,
    };
    let status = match input.status {
        Some(s) => enum_value(&path("status"), &s, CostStatus::parse, "Pending, Paid")?,
        None => CostStatus::default(),
    };
    Ok(CostEntry {
        category,
        description: optional_text(
            &path("description"),
            input.description,
            MAX_DESCRIPTION_BYTES,
        )?,
        amount: non_negative(&path("amount"), amount)?,
        date,
        status,
    })
}

fn validate_milestones(inputs: Vec<MilestoneInput>) -> Result<Vec<Milestone>> {
    check_count("milestones", inputs.len())?;
    inputs
        .into_iter()
        .enumerate()
        .map(|(i, m)| validate_milestone(i, m))
        .collect()
}

fn validate_inventory_lines(inputs: Vec<InventoryLineInput>) -> Result<Vec<EventInventoryLine>> {
    check_count("inventory", inputs.len())?;
    inputs
        .into_iter()
        .enumerate()
        .map(|(i, l)| validate_inventory_line(i, l))
        .collect()
}

fn validate_costs(inputs: Vec<CostEntryInput>, now: DateTime<Utc>) -> Result<Vec<CostEntry>> {
    check_count("costs", inputs.len())?;
    inputs
        .into_iter()
        .enumerate()
        .map(|(i, c)| validate_cost(i, c, now))
        .collect()
}

fn validate_total(total: Option<f64>) -> Result<Option<f64>> {
    total.map(|t| finite("budget.total", t)).transpose()
}

fn validate_currency(currency: Option<String>) -> Result<Option<Currency>> {
    currency
        .map(|c| enum_value("budget.currency", &c, Currency::parse, "USD, EUR, GBP, INR"))
        .transpose()
}

// =============================================================================
// Aggregates
// =============================================================================

/// Validate a create request. `budget.spent` is left at zero; the caller
/// derives it from the validated costs.
pub fn validate_create_event(input: CreateEventInput, now: DateTime<Utc>) -> Result<NewEvent> {
    let name = required_text("name", input.name, MAX_NAME_BYTES)?;
    let date = required_date("date", input.date)?;
    let time = required_text("time", input.time, MAX_SHORT_TEXT_BYTES)?;
    let description = optional_text("description", input.description, MAX_DESCRIPTION_BYTES)?;
    let location = optional_text("location", input.location, MAX_SHORT_TEXT_BYTES)?;
    let status = input
        .status
        .map(validate_status)
        .transpose()?
        .unwrap_or_default();

    let milestones = validate_milestones(input.milestones.unwrap_or_default())?;
    let inventory = validate_inventory_lines(input.inventory.unwrap_or_default())?;
    let costs = validate_costs(input.costs.unwrap_or_default(), now)?;

    let BudgetInput {
        total, currency, ..
    } = input.budget.unwrap_or_default();
    let budget = Budget {
        total: validate_total(total)?.unwrap_or(0.0),
        spent: 0.0,
        currency: validate_currency(currency)?.unwrap_or_default(),
    };

    Ok(NewEvent {
        name,
        description,
        date,
        time,
        location,
        status,
        milestones,
        inventory,
        costs,
        budget,
    })
}

/// Validate an update request. Supplied fields follow the create rules.
/// `budget_spent` is left unset; the caller derives it when costs change.
pub fn validate_update_event(input: UpdateEventInput, now: DateTime<Utc>) -> Result<EventPatch> {
    let mut patch = EventPatch {
        name: input
            .name
            .map(|n| required_text("name", Some(n), MAX_NAME_BYTES))
            .transpose()?,
        description: optional_text("description", input.description, MAX_DESCRIPTION_BYTES)?,
        date: input
            .date
            .map(|d| parse_date("date", &d))
            .transpose()?,
        time: input
            .time
            .map(|t| required_text("time", Some(t), MAX_SHORT_TEXT_BYTES))
            .transpose()?,
        location: optional_text("location", input.location, MAX_SHORT_TEXT_BYTES)?,
        status: input.status.map(validate_status).transpose()?,
        milestones: input.milestones.map(validate_milestones).transpose()?,
        inventory: input.inventory.map(validate_inventory_lines).transpose()?,
        costs: input.costs.map(|c| validate_costs(c, now)).transpose()?,
        ..Default::default()
    };

    if let Some(budget) = input.budget {
        patch.budget_total = validate_total(budget.total)?;
        patch.budget_currency = validate_currency(budget.currency)?;
    }

    Ok(patch)
}

/// Validate a catalogue create request.
pub fn validate_create_item(input: CreateInventoryItemInput) -> Result<NewInventoryItem> {
    Ok(NewInventoryItem {
        name: required_text("name", input.name, MAX_NAME_BYTES)?,
        description: optional_text("description", input.description, MAX_DESCRIPTION_BYTES)?,
        quantity: non_negative("quantity", input.quantity.unwrap_or(0.0))?,
        unit: optional_text("unit", input.unit, MAX_SHORT_TEXT_BYTES)?,
    })
}

/// Validate a catalogue update request.
pub fn validate_update_item(input: UpdateInventoryItemInput) -> Result<InventoryItemPatch> {
    Ok(InventoryItemPatch {
        name: input
            .name
            .map(|n| required_text("name", Some(n), MAX_NAME_BYTES))
            .transpose()?,
        description: optional_text("description", input.description, MAX_DESCRIPTION_BYTES)?,
        quantity: input
            .quantity
            .map(|q| non_negative("quantity", q))
            .transpose()?,
        unit: optional_text("unit", input.unit, MAX_SHORT_TEXT_BYTES)?,
    })
}
