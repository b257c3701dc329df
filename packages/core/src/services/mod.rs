//! Editor Services
//!
//! This module contains the editing logic built on top of the store:
//!
//! - `EditorService` - scene collection, selection, and editor state
//! - `AutosavePipeline` - debounced background persistence of edits
//! - `SaveStatus` - three-state save indicator for the view
//!
//! Services coordinate between the content-store layer and the view,
//! implementing the edit → debounce → persist → report pipeline.

pub mod autosave;
pub mod editor;
pub mod error;
pub mod save_status;

pub use autosave::{AutosaveConfig, AutosaveHandle, AutosavePipeline, DEFAULT_DEBOUNCE};
pub use editor::{DeleteOutcome, EditorService, EditorView};
pub use error::EditorServiceError;
pub use save_status::SaveStatus;
