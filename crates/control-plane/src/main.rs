// EventDeck API server
// Decision: Run with PostgreSQL when DATABASE_URL is set, in-memory otherwise
// Decision: Auth defaults to full bearer-token mode; AUTH_MODE=none for local hacking

use anyhow::{Context, Result};
use eventdeck_control_plane::{auth::AuthMode, build_app, storage::StorageBackend, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    // RUST_LOG overrides the default filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "eventdeck_control_plane=debug,eventdeck_core=info,tower_http=debug".into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("eventdeck-control-plane starting...");

    let config = ServerConfig::from_env();

    let db = match &config.database_url {
        Some(url) => {
            let db = StorageBackend::postgres(url)
                .await
                .context("Failed to initialize PostgreSQL storage")?;
            tracing::info!("Connected to database, migrations applied");
            db
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage (data is lost on restart)");
            StorageBackend::in_memory()
        }
    };

    tracing::info!(
        mode = ?config.auth.mode,
        signup = config.auth.signup_enabled(),
        "Authentication configured"
    );
    if config.auth.mode == AuthMode::None {
        tracing::warn!("AUTH_MODE=none, all requests run as the anonymous caller");
    }

    if !config.api_prefix.is_empty() {
        tracing::info!(prefix = %config.api_prefix, "API prefix configured");
    }
    if config.cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
    } else {
        tracing::info!(origins = ?config.cors_origins, "CORS origins configured");
    }

    let addr = config.listen_addr();
    let app = build_app(
        db,
        config.auth,
        &config.api_prefix,
        config.cors_origins,
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
