//! Scene Data Structures
//!
//! A [`Scene`] is one persisted document the user edits: a title plus a
//! rich-text-as-markup content string. Scenes live in the remote
//! content store; the `id` is assigned by the store at creation and is
//! immutable afterwards.
//!
//! # Examples
//!
//! ```rust
//! use scenepad_core::models::{Scene, SceneDraft, ScenePatch};
//!
//! // Creation defaults for the sidebar "add scene" action
//! let draft = SceneDraft::untitled();
//! assert_eq!(draft.title, "Untitled");
//! assert_eq!(draft.content, "");
//!
//! // Sparse update carrying only the changed fields
//! let patch = ScenePatch {
//!     content: Some("<p>It was a dark and stormy night.</p>".to_string()),
//!     ..Default::default()
//! };
//! assert!(!patch.is_empty());
//! ```

use serde::{Deserialize, Serialize};

/// Title given to freshly created scenes.
pub const DEFAULT_SCENE_TITLE: &str = "Untitled";

/// One persisted scene: a title plus rich-text markup content.
///
/// # Fields
///
/// - `id`: Opaque identifier assigned by the content store at creation.
///   Unique across all scenes and never reused after deletion.
/// - `title`: Scene title, mutable through the editing flow.
/// - `content`: Rich-text content as a markup string, mutable.
/// - `completed`: Present in the document schema but not surfaced by
///   the editing flow — written once at creation, never toggled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// Store-assigned opaque identifier (immutable)
    pub id: String,

    /// Scene title
    pub title: String,

    /// Rich-text content as markup
    pub content: String,

    /// Schema flag, write-once at creation
    #[serde(default)]
    pub completed: bool,
}

/// Creation payload for a new scene.
///
/// The store assigns the `id`; everything else is provided here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDraft {
    pub title: String,
    pub content: String,
    pub completed: bool,
}

impl SceneDraft {
    /// Creation defaults used by the sidebar "add scene" action:
    /// `title = "Untitled"`, empty content, `completed = false`.
    pub fn untitled() -> Self {
        Self {
            title: DEFAULT_SCENE_TITLE.to_string(),
            content: String::new(),
            completed: false,
        }
    }
}

/// Sparse update for an existing scene.
///
/// Fields left as `None` are untouched by the store (partial update
/// semantics). Serializes to exactly the `set` object sent on the wire,
/// so `None` fields are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ScenePatch {
    /// True when the patch carries no fields (a no-op update).
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
