// Authentication module
//
// Users register and log in with email and password, and receive an HS256
// bearer token. Protected routes extract `AuthUser`.

pub mod config;
pub mod jwt;
pub mod middleware;
pub mod routes;

pub use config::{AuthConfig, AuthMode};
pub use middleware::{AuthState, AuthUser, FromRef};
