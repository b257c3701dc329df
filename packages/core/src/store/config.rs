//! Content store configuration
//!
//! StoreConfig is the single source of truth for store credentials. It
//! is built once at startup (usually from environment variables) and
//! passed by reference to whatever needs it — there is no process-wide
//! client singleton.

use crate::store::error::StoreError;

/// Default hosted API host; overridable for self-hosted deployments
/// and tests via `SCENEPAD_STORE_HOST`.
const DEFAULT_API_HOST: &str = "api.sanity.io";

/// Credentials and addressing for the hosted content store.
///
/// Built once at startup and injected explicitly. Immutable for the
/// process lifetime.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Project identifier (first label of the API hostname)
    pub project_id: String,

    /// Dataset name within the project
    pub dataset: String,

    /// API version date string, e.g. "2024-01-01"
    pub api_version: String,

    /// Write token, passed through opaquely as a bearer credential
    pub token: String,

    /// API host (scheme-less); defaults to the hosted service
    pub api_host: String,
}

impl StoreConfig {
    /// Build a config from explicit values, using the default API host.
    pub fn new(
        project_id: impl Into<String>,
        dataset: impl Into<String>,
        api_version: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
            api_version: api_version.into(),
            token: token.into(),
            api_host: DEFAULT_API_HOST.to_string(),
        }
    }

    /// Build the config from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SCENEPAD_PROJECT_ID` — project identifier (required)
    /// - `SCENEPAD_DATASET` — dataset name (required)
    /// - `SCENEPAD_API_VERSION` — API version date (required)
    /// - `SCENEPAD_WRITE_TOKEN` — write token (required)
    /// - `SCENEPAD_STORE_HOST` — API host override (optional)
    pub fn from_env() -> Result<Self, StoreError> {
        let mut config = Self::new(
            require_env("SCENEPAD_PROJECT_ID")?,
            require_env("SCENEPAD_DATASET")?,
            require_env("SCENEPAD_API_VERSION")?,
            require_env("SCENEPAD_WRITE_TOKEN")?,
        );
        if let Ok(host) = std::env::var("SCENEPAD_STORE_HOST") {
            config.api_host = host;
        }
        Ok(config)
    }

    /// Base URL for all data endpoints:
    /// `https://{project_id}.{api_host}/v{api_version}`
    pub(crate) fn base_url(&self) -> String {
        format!(
            "https://{}.{}/v{}",
            self.project_id, self.api_host, self.api_version
        )
    }
}

fn require_env(name: &str) -> Result<String, StoreError> {
    std::env::var(name)
        .map_err(|_| StoreError::invalid_config(format!("missing environment variable {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_combines_project_host_and_version() {
        let config = StoreConfig::new("abc123", "production", "2024-01-01", "secret");
        assert_eq!(
            config.base_url(),
            "https://abc123.api.sanity.io/v2024-01-01"
        );
    }
}
