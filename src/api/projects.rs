/// Project management REST API endpoints
///
/// One handler per verb. Each validates its input (create/update), issues a single
/// store call and maps the outcome straight to the response.

use crate::{
    api::error::ApiError,
    project::{Project, ProjectPayload, ProjectStore},
};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use std::sync::Arc;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Project persistence, injected by the hosting process
    pub store: Arc<dyn ProjectStore>,
}

/// Create project management routes
pub fn create_project_routes() -> Router<AppState> {
    Router::new()
        .route("/project", get(list_projects).post(create_project))
        .route("/project/{id}", put(update_project).delete(delete_project))
}

/// List all projects
///
/// GET /project
/// Returns: [{ "id": 1, "name": "...", "project_type": "...", "status": "..." }]
async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.store.list().await?;
    Ok(Json(projects))
}

/// Create a new project
///
/// POST /project
/// Body: { "name": "...", "project_type": "...", "status": "..." }
async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(payload) = payload?;
    let project = payload.validate()?;

    let id = state.store.insert(&project).await?;
    tracing::info!("Created project {} ({})", id, project.name);

    Ok(StatusCode::OK)
}

/// Update an existing project
///
/// PUT /project/{id}
/// Body: { "name": "...", "project_type": "...", "status": "..." }
/// A missing row is not distinguished from a successful update.
async fn update_project(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProjectPayload>, JsonRejection>,
) -> Result<String, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let project = payload.validate()?;

    let affected = state.store.update(id, &project).await?;
    tracing::info!("Updated project {} ({} rows)", id, affected);

    Ok(format!("Project with ID {} updated successfully", id))
}

/// Delete a project
///
/// DELETE /project/{id}
/// Deleting an id that does not exist still succeeds.
async fn delete_project(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<String, ApiError> {
    let Path(id) = id?;

    let affected = state.store.delete(id).await?;
    tracing::info!("Deleted project {} ({} rows)", id, affected);

    Ok(format!("Project with ID {} deleted successfully", id))
}
