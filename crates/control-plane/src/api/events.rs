// Event CRUD HTTP routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use eventdeck_core::{CreateEventInput, Event, EventManager, UpdateEventInput};
use std::sync::Arc;
use uuid::Uuid;

use super::common::{parse_id, ApiError, ErrorResponse, MessageResponse, ValidJson};
use crate::auth::{AuthState, AuthUser, FromRef};

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<EventManager>,
    pub auth: AuthState,
}

impl AppState {
    pub fn new(auth: AuthState) -> Self {
        let store = Arc::new(auth.db.clone());
        Self {
            manager: Arc::new(EventManager::new(store)),
            auth,
        }
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(input: &AppState) -> Self {
        input.auth.clone()
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/events", post(create_event).get(list_events))
        .route(
            "/events/:event_id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .with_state(state)
}

/// POST /events - Create a new event
#[utoipa::path(
    post,
    path = "/events",
    request_body = CreateEventInput,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 400, description = "Invalid event", body = ErrorResponse),
        (status = 401, description = "Not authorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidJson(req): ValidJson<CreateEventInput>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let event = state.manager.create(req, &caller).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events - List all events in creation order
#[utoipa::path(
    get,
    path = "/events",
    responses(
        (status = 200, description = "All events", body = Vec<Event>),
        (status = 401, description = "Not authorized", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.manager.list(&caller).await?;
    Ok(Json(events))
}

/// GET /events/{event_id} - Get event by ID
#[utoipa::path(
    get,
    path = "/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 401, description = "Not authorized", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(event_id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let id = parse_id(&event_id, "Event")?;
    let event = state.manager.get_by_id(id, &caller).await?;
    Ok(Json(event))
}

/// PUT /events/{event_id} - Update event; absent fields are left unchanged
#[utoipa::path(
    put,
    path = "/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    request_body = UpdateEventInput,
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 400, description = "Invalid update", body = ErrorResponse),
        (status = 401, description = "Not authorized", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(event_id): Path<String>,
    ValidJson(req): ValidJson<UpdateEventInput>,
) -> Result<Json<Event>, ApiError> {
    let id = parse_id(&event_id, "Event")?;
    let event = state.manager.update(id, req, &caller).await?;
    Ok(Json(event))
}

/// DELETE /events/{event_id} - Delete event
#[utoipa::path(
    delete,
    path = "/events/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event removed", body = MessageResponse),
        (status = 401, description = "Not authorized", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(event_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&event_id, "Event")?;
    state.manager.delete(id, &caller).await?;
    Ok(Json(MessageResponse::new("Event removed")))
}
