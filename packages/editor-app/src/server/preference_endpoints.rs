//! Preference endpoints
//!
//! # Endpoints
//!
//! - `GET /api/preferences` - Load persisted preferences (or defaults)
//! - `PUT /api/preferences` - Replace and persist preferences

use axum::{
    extract::State,
    response::Json,
    routing::{get, put},
    Router,
};

use crate::preferences::{load_preferences, save_preferences, AppPreferences};
use crate::server::{AppState, HttpError};

async fn get_preferences(State(state): State<AppState>) -> Result<Json<AppPreferences>, HttpError> {
    let prefs = load_preferences(&state.preferences_dir)
        .await
        .map_err(|e| HttpError::new(e, "PREFERENCES_ERROR"))?;
    Ok(Json(prefs))
}

async fn put_preferences(
    State(state): State<AppState>,
    Json(prefs): Json<AppPreferences>,
) -> Result<Json<AppPreferences>, HttpError> {
    save_preferences(&state.preferences_dir, &prefs)
        .await
        .map_err(|e| HttpError::new(e, "PREFERENCES_ERROR"))?;
    Ok(Json(prefs))
}

/// Build the preference endpoint routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/preferences", get(get_preferences))
        .route("/api/preferences", put(put_preferences))
        .with_state(state)
}
