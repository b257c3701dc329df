//! Save status reporting
//!
//! A pure derivation of the most recent persistence call's lifecycle,
//! rendered by the view as the save indicator. Three states only: a
//! failed save does not introduce an error state, it leaves the
//! indicator in whatever the last successful outcome was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Three-state save indicator.
///
/// - `NeverSaved` — no persistence call has succeeded yet
/// - `Saving` — a persistence call is in flight
/// - `Saved` — the last call succeeded, at the recorded wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SaveStatus {
    NeverSaved,
    Saving,
    Saved { at: DateTime<Utc> },
}

impl SaveStatus {
    /// True while a persistence call is outstanding.
    pub fn is_saving(&self) -> bool {
        matches!(self, SaveStatus::Saving)
    }

    /// Completion time of the last successful save, if any.
    pub fn last_saved_at(&self) -> Option<DateTime<Utc>> {
        match self {
            SaveStatus::Saved { at } => Some(*at),
            _ => None,
        }
    }
}

impl std::fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveStatus::NeverSaved => write!(f, "Not saved yet"),
            SaveStatus::Saving => write!(f, "Saving..."),
            SaveStatus::Saved { at } => write!(f, "Saved at {}", at.format("%H:%M:%S")),
        }
    }
}
