//! Service Layer Error Types
//!
//! Error types for editor-session operations. Store failures reached
//! through the autosave pipeline are never surfaced here — the pipeline
//! logs and swallows them — so these errors cover only the explicit
//! operations (select, create, delete, load).

use crate::store::StoreError;
use thiserror::Error;

/// Editor session operation errors
#[derive(Error, Debug)]
pub enum EditorServiceError {
    /// Scene not found by id
    #[error("Scene not found: {id}")]
    SceneNotFound { id: String },

    /// Operation requires a selected scene and none is selected
    #[error("No scene is selected")]
    NoSelection,

    /// Destructive operation attempted without explicit confirmation
    #[error("Deletion of scene {id} requires explicit confirmation")]
    ConfirmationRequired { id: String },

    /// Content store operation failed
    #[error("Content store operation failed: {0}")]
    Store(#[from] StoreError),
}

impl EditorServiceError {
    /// Create a scene not found error
    pub fn scene_not_found(id: impl Into<String>) -> Self {
        Self::SceneNotFound { id: id.into() }
    }

    /// Create a confirmation required error
    pub fn confirmation_required(id: impl Into<String>) -> Self {
        Self::ConfirmationRequired { id: id.into() }
    }
}
