//! Scene collection endpoints
//!
//! # Endpoints
//!
//! - `GET /api/health` - Health check endpoint
//! - `GET /api/scenes` - List the scene collection (sidebar order)
//! - `POST /api/scenes` - Create a new scene and select it
//! - `POST /api/scenes/:id/select` - Change the selection
//! - `DELETE /api/scenes/:id?confirm=true` - Delete a scene

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::server::{AppState, HttpError};
use scenepad_core::{DeleteOutcome, Scene};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Query parameters for scene deletion
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    /// Must be `true`; deletion without confirmation is rejected.
    #[serde(default)]
    confirm: bool,
}

/// Health check endpoint
///
/// # Example
///
/// ```bash
/// curl http://localhost:3001/api/health
/// ```
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List the scene collection in store order
async fn list_scenes(State(state): State<AppState>) -> Json<Vec<Scene>> {
    Json(state.editor.scenes().await)
}

/// Create a new scene with creation defaults and select it
async fn create_scene(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Scene>), HttpError> {
    let created = state.editor.create_scene().await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Select a scene, loading its document into the editor
async fn select_scene(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Scene>, HttpError> {
    let scene = state.editor.select_scene(&id).await?;
    Ok(Json(scene))
}

/// Delete a scene
///
/// Requires `?confirm=true`; responds with the deletion outcome
/// including where the selection fell back to.
async fn delete_scene(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteQuery>,
) -> Result<Json<DeleteOutcome>, HttpError> {
    let outcome = state.editor.delete_scene(&id, params.confirm).await?;
    Ok(Json(outcome))
}

/// Build the scene endpoint routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/scenes", get(list_scenes))
        .route("/api/scenes", post(create_scene))
        .route("/api/scenes/:id/select", post(select_scene))
        .route("/api/scenes/:id", delete(delete_scene))
        .with_state(state)
}
