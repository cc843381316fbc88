// OpenAPI specification generation
//
// Shared by the API server (for Swagger UI) and the export-openapi binary
// (for static document generation).

use crate::api;
use crate::auth;
use eventdeck_core::{
    Budget, BudgetInput, CostCategory, CostEntry, CostEntryInput, CostStatus, CreateEventInput,
    CreateInventoryItemInput, Currency, Event, EventInventoryLine, EventStatus, InventoryItem,
    InventoryLineInput, InventoryLineStatus, Milestone, MilestoneInput, UpdateEventInput,
    UpdateInventoryItemInput,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the EventDeck API
#[derive(OpenApi)]
#[openapi(
    paths(
        api::events::create_event,
        api::events::list_events,
        api::events::get_event,
        api::events::update_event,
        api::events::delete_event,
        api::inventory::create_item,
        api::inventory::list_items,
        api::inventory::get_item,
        api::inventory::update_item,
        api::inventory::delete_item,
        auth::routes::register,
        auth::routes::login,
        auth::routes::get_current_user,
    ),
    components(
        schemas(
            // Event aggregate
            Event, EventStatus, Milestone, EventInventoryLine, InventoryLineStatus,
            CostEntry, CostCategory, CostStatus, Budget, Currency,
            CreateEventInput, UpdateEventInput,
            MilestoneInput, InventoryLineInput, CostEntryInput, BudgetInput,
            // Catalogue
            InventoryItem, CreateInventoryItemInput, UpdateInventoryItemInput,
            // Auth
            auth::routes::RegisterRequest, auth::routes::LoginRequest, auth::routes::UserResponse,
            // Common
            api::ErrorResponse, api::MessageResponse,
        )
    ),
    tags(
        (name = "events", description = "Event planning endpoints"),
        (name = "inventory", description = "Inventory catalogue endpoints"),
        (name = "auth", description = "Registration and login")
    ),
    info(
        title = "EventDeck API",
        description = "Plan events with milestones, inventory and costs, and keep a shared inventory catalogue. \
                       Protected endpoints expect `Authorization: Bearer <token>`.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI spec as a pretty-printed JSON string
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }
}
