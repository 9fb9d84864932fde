/// HTTP API Layer
/// 
/// REST endpoints for project records:
/// - Project CRUD under /project
/// - Error-to-status mapping shared by all handlers

// Project management endpoints (GET/POST/PUT/DELETE)
pub mod projects;

// ApiError and its HTTP rendering
pub mod error;

// Re-export router builder and shared types
pub use error::{ApiError, ErrorResponse};
pub use projects::{create_project_routes, AppState};
