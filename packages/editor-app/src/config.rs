//! Runtime application configuration
//!
//! AppConfig is the single source of truth for what the running process
//! uses. It is derived from environment variables once at startup and
//! never serialized — it is rebuilt on every launch. For persistent
//! user settings, see preferences.rs.

use scenepad_core::utils::DEFAULT_WORD_GOAL;
use scenepad_core::StoreConfig;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 3001;

/// Runtime application configuration — immutable for the app lifetime.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Content store credentials. `None` runs against the in-memory
    /// store (SCENEPAD_OFFLINE=1), which loses everything on exit.
    pub store: Option<StoreConfig>,

    /// HTTP server port (from SCENEPAD_PORT or default 3001)
    pub port: u16,

    /// Writing goal in words, used for the progress readout
    pub word_goal: usize,
}

impl AppConfig {
    /// Build runtime config from the environment.
    ///
    /// Called once during startup in main.rs before any services are
    /// created.
    pub fn from_env() -> Result<Self, String> {
        let offline = std::env::var("SCENEPAD_OFFLINE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let store = if offline {
            None
        } else {
            Some(
                StoreConfig::from_env()
                    .map_err(|e| format!("Failed to load store config: {}", e))?,
            )
        };

        let port = match std::env::var("SCENEPAD_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("Invalid SCENEPAD_PORT: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let word_goal = match std::env::var("SCENEPAD_WORD_GOAL") {
            Ok(raw) => raw
                .parse::<usize>()
                .map_err(|_| format!("Invalid SCENEPAD_WORD_GOAL: {}", raw))?,
            Err(_) => DEFAULT_WORD_GOAL,
        };

        Ok(AppConfig {
            store,
            port,
            word_goal,
        })
    }
}
