// EventDeck Control Plane Library
// Decision: Shared library for binaries (API server, export-openapi) and router tests

// Server configuration
pub mod config;

// API routes and types (shared for OpenAPI generation)
pub mod api;

// Authentication module
pub mod auth;

// Storage layer
pub mod storage;

// OpenAPI spec generation
pub mod openapi;

// Router assembly
pub mod router;

pub use config::ServerConfig;
pub use router::build_app;
