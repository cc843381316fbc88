// Inventory catalogue HTTP routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use eventdeck_core::{
    CreateInventoryItemInput, InventoryCatalogue, InventoryItem, UpdateInventoryItemInput,
};
use std::sync::Arc;
use uuid::Uuid;

use super::common::{parse_id, ApiError, ErrorResponse, MessageResponse, ValidJson};
use crate::auth::{AuthState, AuthUser, FromRef};

/// App state for inventory routes
#[derive(Clone)]
pub struct AppState {
    pub catalogue: Arc<InventoryCatalogue>,
    pub auth: AuthState,
}

impl AppState {
    pub fn new(auth: AuthState) -> Self {
        let store = Arc::new(auth.db.clone());
        Self {
            catalogue: Arc::new(InventoryCatalogue::new(store)),
            auth,
        }
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(input: &AppState) -> Self {
        input.auth.clone()
    }
}

/// Create inventory routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/inventory", post(create_item).get(list_items))
        .route(
            "/inventory/:item_id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(state)
}

/// POST /inventory - Add an item to the catalogue
#[utoipa::path(
    post,
    path = "/inventory",
    request_body = CreateInventoryItemInput,
    responses(
        (status = 201, description = "Inventory item created", body = InventoryItem),
        (status = 400, description = "Invalid inventory item", body = ErrorResponse),
        (status = 401, description = "Not authorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn create_item(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidJson(req): ValidJson<CreateInventoryItemInput>,
) -> Result<(StatusCode, Json<InventoryItem>), ApiError> {
    let item = state.catalogue.create(req, &caller).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /inventory - List the catalogue in creation order
#[utoipa::path(
    get,
    path = "/inventory",
    responses(
        (status = 200, description = "All catalogue items", body = Vec<InventoryItem>),
        (status = 401, description = "Not authorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn list_items(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<InventoryItem>>, ApiError> {
    let items = state.catalogue.list(&caller).await?;
    Ok(Json(items))
}

/// GET /inventory/{item_id} - Get catalogue item by ID
#[utoipa::path(
    get,
    path = "/inventory/{item_id}",
    params(
        ("item_id" = Uuid, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Inventory item found", body = InventoryItem),
        (status = 401, description = "Not authorized", body = ErrorResponse),
        (status = 404, description = "Inventory item not found", body = ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn get_item(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(item_id): Path<String>,
) -> Result<Json<InventoryItem>, ApiError> {
    let id = parse_id(&item_id, "Inventory item")?;
    let item = state.catalogue.get_by_id(id, &caller).await?;
    Ok(Json(item))
}

/// PUT /inventory/{item_id} - Update catalogue item
#[utoipa::path(
    put,
    path = "/inventory/{item_id}",
    params(
        ("item_id" = Uuid, Path, description = "Inventory item ID")
    ),
    request_body = UpdateInventoryItemInput,
    responses(
        (status = 200, description = "Inventory item updated", body = InventoryItem),
        (status = 400, description = "Invalid update", body = ErrorResponse),
        (status = 401, description = "Not authorized", body = ErrorResponse),
        (status = 404, description = "Inventory item not found", body = ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn update_item(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(item_id): Path<String>,
    ValidJson(req): ValidJson<UpdateInventoryItemInput>,
) -> Result<Json<InventoryItem>, ApiError> {
    let id = parse_id(&item_id, "Inventory item")?;
    let item = state.catalogue.update(id, req, &caller).await?;
    Ok(Json(item))
}

/// DELETE /inventory/{item_id} - Remove catalogue item
#[utoipa::path(
    delete,
    path = "/inventory/{item_id}",
    params(
        ("item_id" = Uuid, Path, description = "Inventory item ID")
    ),
    responses(
        (status = 200, description = "Inventory item removed", body = MessageResponse),
        (status = 401, description = "Not authorized", body = ErrorResponse),
        (status = 404, description = "Inventory item not found", body = ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(item_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&item_id, "Inventory item")?;
    state.catalogue.delete(id, &caller).await?;
    Ok(Json(MessageResponse::new("Inventory item removed")))
}
