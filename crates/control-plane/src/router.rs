// Router assembly
// Decision: Health and Swagger UI stay at the root; everything else can be nested under API_PREFIX

use axum::http::{header, HeaderValue, Method};
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::auth::{self, AuthConfig, AuthMode, AuthState};
use crate::openapi::ApiDoc;
use crate::storage::StorageBackend;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub auth_mode: String,
    pub storage: String,
}

/// State for health endpoint
#[derive(Clone)]
struct HealthState {
    auth_mode: AuthMode,
    dev_mode: bool,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        auth_mode: match state.auth_mode {
            AuthMode::None => "none".to_string(),
            AuthMode::Full => "full".to_string(),
        },
        storage: if state.dev_mode { "memory" } else { "postgres" }.to_string(),
    })
}

/// Build the complete application router
pub fn build_app(
    db: StorageBackend,
    auth_config: AuthConfig,
    api_prefix: &str,
    cors_origins: Vec<HeaderValue>,
) -> Router {
    let health_state = HealthState {
        auth_mode: auth_config.mode,
        dev_mode: db.is_dev_mode(),
    };

    let auth_state = AuthState::new(auth_config, db);
    let events_state = api::events::AppState::new(auth_state.clone());
    let inventory_state = api::inventory::AppState::new(auth_state.clone());

    let api_routes = Router::new()
        .merge(api::events::routes(events_state))
        .merge(api::inventory::routes(inventory_state))
        .merge(auth::routes::routes(auth_state));

    let app = Router::new()
        .route("/health", get(health).with_state(health_state))
        .merge(build_router_with_prefix(api_routes, api_prefix))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()));

    // Add CORS layer only if origins are configured
    let app = if cors_origins.is_empty() {
        app
    } else {
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]),
        )
    };

    app.layer(TraceLayer::new_for_http())
}

/// Build router with optional API prefix
pub fn build_router_with_prefix<S: Clone + Send + Sync + 'static>(
    api_routes: Router<S>,
    api_prefix: &str,
) -> Router<S> {
    if api_prefix.is_empty() {
        api_routes
    } else {
        Router::new().nest(api_prefix, api_routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_routes() -> Router {
        Router::new().route("/events", get(|| async { "ok" }))
    }

    #[tokio::test]
    async fn test_api_prefix_empty() {
        let app = build_router_with_prefix(test_routes(), "");

        let response = app
            .oneshot(Request::builder().uri("/events").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_api_prefix_set() {
        let app = build_router_with_prefix(test_routes(), "/api");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let response = app
            .oneshot(Request::builder().uri("/events").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_health_reports_backend() {
        let app = build_app(
            StorageBackend::in_memory(),
            AuthConfig::with_random_secret(),
            "/api",
            vec![],
        );

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(health.status, "ok");
        assert_eq!(health.auth_mode, "full");
        assert_eq!(health.storage, "memory");
    }
}
