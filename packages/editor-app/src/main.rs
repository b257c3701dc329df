//! Scenepad application server
//!
//! Standalone binary that hosts the editor session behind a local REST
//! API. On startup it loads the scene collection from the configured
//! content store and selects the first scene; edits submitted over HTTP
//! flow through the debounced autosave pipeline.
//!
//! # Environment Variables
//!
//! - `SCENEPAD_PROJECT_ID`, `SCENEPAD_DATASET`, `SCENEPAD_API_VERSION`,
//!   `SCENEPAD_WRITE_TOKEN`: content store credentials
//! - `SCENEPAD_OFFLINE`: set to 1 to use the in-memory store instead
//! - `SCENEPAD_PORT`: server port (default: 3001)
//! - `SCENEPAD_WORD_GOAL`: writing goal in words (default: 1000)
//! - `SCENEPAD_CONFIG_DIR`: preferences directory (default: ~/.scenepad)
//! - `RUST_LOG`: logging level (e.g., "info", "debug", "trace")

use std::sync::Arc;

use scenepad_core::{
    AutosaveConfig, EditorService, HttpSceneStore, MemoryStore, SceneStore,
};

mod config;
mod preferences;
mod server;

use config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Scenepad server");

    let app_config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(port = app_config.port, "configuration loaded");

    let preferences_dir = preferences::get_config_dir().map_err(|e| anyhow::anyhow!(e))?;
    let prefs = preferences::load_preferences(&preferences_dir)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    // Preference override loses to an explicit SCENEPAD_WORD_GOAL,
    // which AppConfig already resolved from the environment.
    let word_goal = if std::env::var("SCENEPAD_WORD_GOAL").is_ok() {
        app_config.word_goal
    } else {
        prefs.writing.word_goal.unwrap_or(app_config.word_goal)
    };

    let store: Arc<dyn SceneStore> = match &app_config.store {
        Some(store_config) => {
            tracing::info!(
                project_id = %store_config.project_id,
                dataset = %store_config.dataset,
                "using hosted content store"
            );
            Arc::new(HttpSceneStore::new(store_config.clone()))
        }
        None => {
            tracing::warn!("offline mode: scenes are kept in memory and lost on exit");
            Arc::new(MemoryStore::new())
        }
    };

    let editor = Arc::new(EditorService::with_word_goal(
        store,
        AutosaveConfig::default(),
        word_goal,
    ));

    // A cold start against an unreachable store still serves the API;
    // the collection just starts empty.
    if let Err(e) = editor.load().await {
        tracing::warn!(error = %e, "initial scene load failed");
    }

    server::start_server(editor, preferences_dir, app_config.port).await?;

    Ok(())
}
