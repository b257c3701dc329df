//! HTTP server exposing the editor session as a REST API
//!
//! The server is organized into modular endpoint modules:
//! - `scene_endpoints`: collection CRUD and selection
//! - `editor_endpoints`: the editable pair, edits, and save status
//! - `preference_endpoints`: persistent user preferences
//!
//! # Security
//!
//! - CORS restricted to localhost origins (local use only)
//! - No authentication; store credentials never leave the process

use axum::{
    http::{header, Method},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use scenepad_core::EditorService;

mod editor_endpoints;
mod http_error;
mod preference_endpoints;
mod scene_endpoints;

pub use http_error::HttpError;

/// Application state shared across all endpoints
///
/// The editor service serializes its own state internally, so handlers
/// clone the Arc and call it directly.
#[derive(Clone)]
pub struct AppState {
    pub editor: Arc<EditorService>,
    pub preferences_dir: PathBuf,
}

/// Create the main application router with all endpoint modules
///
/// Uses axum's modular routing pattern; each endpoint module exposes a
/// `routes()` function merged here.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(scene_endpoints::routes(state.clone()))
        .merge(editor_endpoints::routes(state.clone()))
        .merge(preference_endpoints::routes(state))
        .layer(cors_layer())
}

/// Create CORS layer for local front-ends
///
/// Default origins cover common dev-server ports. Set
/// SCENEPAD_CORS_ORIGIN to allow a different one.
fn cors_layer() -> CorsLayer {
    let default_origins = [
        "http://localhost:3000", // Next.js default
        "http://localhost:5173", // Vite default
    ];

    let origins: Vec<header::HeaderValue> =
        if let Ok(custom_origin) = std::env::var("SCENEPAD_CORS_ORIGIN") {
            vec![custom_origin
                .parse::<header::HeaderValue>()
                .expect("Invalid SCENEPAD_CORS_ORIGIN - must be valid HTTP origin")]
        } else {
            default_origins
                .iter()
                .map(|o| o.parse::<header::HeaderValue>().unwrap())
                .collect()
        };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_credentials(false)
}

/// Start the HTTP server
///
/// # Errors
///
/// Returns error if the server fails to bind or start.
pub async fn start_server(
    editor: Arc<EditorService>,
    preferences_dir: PathBuf,
    port: u16,
) -> anyhow::Result<()> {
    let state = AppState {
        editor,
        preferences_dir,
    };
    let app = create_router(state);

    let addr = format!("127.0.0.1:{}", port);
    tracing::info!("Scenepad server starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
