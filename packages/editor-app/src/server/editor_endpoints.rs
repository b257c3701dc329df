//! Editor pane endpoints
//!
//! # Endpoints
//!
//! - `GET /api/editor` - Snapshot of the editor for rendering
//! - `PUT /api/editor` - Apply a local edit (debounce-autosaved)
//! - `GET /api/editor/status` - Save indicator only

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde::Deserialize;

use crate::server::AppState;
use scenepad_core::{EditorView, SaveStatus};

/// Body for an edit: the full current pair, not a delta.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditRequest {
    pub title: String,
    pub content: String,
}

/// Snapshot of the editor: selection, pair, status, word count
async fn get_editor(State(state): State<AppState>) -> Json<EditorView> {
    Json(state.editor.snapshot().await)
}

/// Apply a local edit
///
/// Returns 202 immediately; persistence happens after the debounce
/// window elapses. With no selected scene the edit only updates the
/// in-memory pair.
async fn put_editor(
    State(state): State<AppState>,
    Json(body): Json<EditRequest>,
) -> StatusCode {
    state.editor.edit(&body.title, &body.content).await;
    StatusCode::ACCEPTED
}

/// Save indicator: neverSaved / saving / saved-at
async fn get_status(State(state): State<AppState>) -> Json<SaveStatus> {
    Json(state.editor.save_status())
}

/// Build the editor endpoint routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/editor", get(get_editor))
        .route("/api/editor", put(put_editor))
        .route("/api/editor/status", get(get_status))
        .with_state(state)
}
