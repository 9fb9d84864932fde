/// projectd: minimal CRUD service for project records
/// 
/// Exposes list/create/update/delete over HTTP, each mapped to one parameterized
/// SQLite statement, with enum validation on writes.

// Core configuration and setup
pub mod config;

// Project records, validation and persistence
pub mod project;

// HTTP API layer - REST endpoints and error mapping
pub mod api;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use api::{ApiError, AppState};
pub use project::{Project, ProjectStatus, ProjectStore, ProjectType, SqliteProjectStore};
pub use server::{build_router, create_app, start_server};
