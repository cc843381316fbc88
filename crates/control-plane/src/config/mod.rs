// Server configuration loaded from environment variables
// Decision: No DATABASE_URL means dev mode with the in-memory backend

use axum::http::HeaderValue;

use crate::auth::AuthConfig;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL URL; `None` selects the in-memory backend
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub port: u16,
    /// Prefix nesting all API routes, e.g. "/api"; empty for none
    pub api_prefix: String,
    /// Origins allowed by CORS; empty disables the CORS layer
    pub cors_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.is_empty());

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_prefix = normalize_prefix(&std::env::var("API_PREFIX").unwrap_or_default());

        // Example: CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
        let cors_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .unwrap_or_default();

        Self {
            database_url,
            bind_addr,
            port,
            api_prefix,
            cors_origins,
            auth: AuthConfig::from_env(),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// "api", "/api/" and "/api" all become "/api"; blank or "/" become ""
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect()
}
