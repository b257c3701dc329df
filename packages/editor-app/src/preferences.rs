//! Application preferences management
//!
//! Handles loading/saving user preferences for the app. Preferences are
//! stored as JSON under the config directory (~/.scenepad by default,
//! SCENEPAD_CONFIG_DIR to override).

use std::path::{Path, PathBuf};

use tokio::fs;

const PREF_FILE: &str = "preferences.json";

/// App-wide preferences structure
/// All fields use #[serde(default)] so existing preferences.json files
/// without the new fields will deserialize without error.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AppPreferences {
    #[serde(default)]
    pub display: DisplayPreferences,

    #[serde(default)]
    pub writing: WritingPreferences,
}

/// Display-related user preferences
/// Changes take effect immediately (no restart required)
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayPreferences {
    /// Color theme: "system", "light", or "dark" (default: "system")
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

fn default_theme() -> String {
    "system".to_string()
}

/// Writing-related user preferences
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WritingPreferences {
    /// Per-user writing goal override, in words
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_goal: Option<usize>,
}

/// Resolve the config directory for the current platform
///
/// Checks `SCENEPAD_CONFIG_DIR` environment variable first, then falls
/// back to `~/.scenepad`.
///
/// # Returns
/// * `Ok(PathBuf)` - Config directory path
/// * `Err(String)` - If home directory cannot be determined
pub fn get_config_dir() -> Result<PathBuf, String> {
    if let Ok(env_path) = std::env::var("SCENEPAD_CONFIG_DIR") {
        return Ok(PathBuf::from(env_path));
    }

    let home_dir = dirs::home_dir().ok_or_else(|| "Failed to get home directory".to_string())?;

    Ok(home_dir.join(".scenepad"))
}

/// Load preferences from config file
///
/// # Returns
/// * `Ok(AppPreferences)` - Loaded preferences or defaults if file doesn't exist
/// * `Err(String)` - Error if the file cannot be read or parsed
pub async fn load_preferences(config_dir: &Path) -> Result<AppPreferences, String> {
    let pref_file = config_dir.join(PREF_FILE);

    if !pref_file.exists() {
        return Ok(AppPreferences::default());
    }

    let contents = fs::read_to_string(&pref_file)
        .await
        .map_err(|e| format!("Failed to read preferences: {}", e))?;

    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse preferences: {}", e))
}

/// Save preferences to config file
///
/// Uses atomic write pattern (write-to-temp, then rename) to prevent
/// corruption on crash or power loss.
///
/// # Returns
/// * `Ok(())` on success
/// * `Err(String)` on failure
pub async fn save_preferences(config_dir: &Path, prefs: &AppPreferences) -> Result<(), String> {
    fs::create_dir_all(config_dir)
        .await
        .map_err(|e| format!("Failed to create config directory: {}", e))?;

    let pref_file = config_dir.join(PREF_FILE);
    let temp_file = config_dir.join(format!("{}.tmp", PREF_FILE));

    let serialized = serde_json::to_string_pretty(prefs)
        .map_err(|e| format!("Failed to serialize preferences: {}", e))?;

    // Atomic write: write to temp file, then rename
    fs::write(&temp_file, serialized)
        .await
        .map_err(|e| format!("Failed to write preferences: {}", e))?;

    fs::rename(&temp_file, &pref_file)
        .await
        .map_err(|e| format!("Failed to save preferences: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let prefs = load_preferences(dir.path()).await.unwrap();

        assert_eq!(prefs, AppPreferences::default());
        assert_eq!(prefs.display.theme, "system");
    }

    #[tokio::test]
    async fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = AppPreferences {
            display: DisplayPreferences {
                theme: "dark".to_string(),
            },
            writing: WritingPreferences {
                word_goal: Some(2500),
            },
        };

        save_preferences(dir.path(), &prefs).await.unwrap();
        let loaded = load_preferences(dir.path()).await.unwrap();

        assert_eq!(loaded, prefs);
    }

    #[tokio::test]
    async fn old_files_without_new_fields_still_parse() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join(PREF_FILE), r#"{"display":{"theme":"light"}}"#)
            .await
            .unwrap();

        let loaded = load_preferences(dir.path()).await.unwrap();

        assert_eq!(loaded.display.theme, "light");
        assert_eq!(loaded.writing.word_goal, None);
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();

        save_preferences(dir.path(), &AppPreferences::default())
            .await
            .unwrap();

        assert!(dir.path().join(PREF_FILE).exists());
        assert!(!dir.path().join(format!("{}.tmp", PREF_FILE)).exists());
    }
}
