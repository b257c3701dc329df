//! Scenepad Core — live scene editor logic and content-store layer
//!
//! This crate provides the data model, content-store abstraction, and
//! editing services behind the Scenepad live text editor: a sidebar of
//! "scenes" (short pieces of writing), one of which is selected into an
//! editable title/content pair whose edits are debounced and persisted
//! to a hosted headless content store.
//!
//! # Architecture
//!
//! - **Store abstraction**: the [`store::SceneStore`] trait separates
//!   editor logic from the backend; [`store::HttpSceneStore`] talks to
//!   the hosted content API, [`store::MemoryStore`] backs tests and
//!   offline runs.
//! - **Edit pipeline**: Edit Source → Debounce Gate → Persistence Call
//!   → Status Reporter. Implemented by [`services::AutosavePipeline`],
//!   a background task that coalesces edit bursts into at most one
//!   remote patch per quiescence window.
//! - **Session state**: [`services::EditorService`] owns the scene
//!   collection, the selection, and the in-memory editor pair; all
//!   mutating operations funnel through a single async mutex.
//!
//! # Modules
//!
//! - [`models`] - Data structures (Scene, SceneDraft, ScenePatch)
//! - [`store`] - Content-store trait and backends
//! - [`services`] - Editor session and autosave pipeline
//! - [`utils`] - Markup stripping and word-count helpers

pub mod models;
pub mod services;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use services::*;
pub use store::*;
