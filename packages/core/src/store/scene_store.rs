//! SceneStore Trait - Content Store Abstraction
//!
//! This module defines the `SceneStore` trait that abstracts the five
//! store operations the editor needs. The trait enables multiple
//! backends (hosted HTTP store, in-memory store for tests) without
//! changing the editor logic built on top of it.
//!
//! # Design Decisions
//!
//! 1. **Async-First**: all methods are async; the HTTP backend is the
//!    primary one and every call is a network round-trip.
//! 2. **Absent is not an error**: `get_scene` returns `Ok(None)` for a
//!    missing document.
//! 3. **Partial updates**: `patch_scene` only touches the fields the
//!    patch carries.
//! 4. **Idempotent delete**: deleting a scene that no longer exists
//!    succeeds.

use crate::models::{Scene, SceneDraft, ScenePatch};
use crate::store::error::StoreError;
use async_trait::async_trait;

/// Abstraction over scene persistence.
///
/// Implementations must be `Send + Sync` so the editor service and the
/// autosave pipeline can share one store behind an `Arc`.
#[async_trait]
pub trait SceneStore: Send + Sync {
    /// Fetch all scenes of the editor's document type.
    ///
    /// Order is store-defined; the editor treats the first element as
    /// the initial selection on load.
    async fn list_scenes(&self) -> Result<Vec<Scene>, StoreError>;

    /// Fetch one scene by id.
    ///
    /// Returns `Ok(None)` if the document does not exist.
    async fn get_scene(&self, id: &str) -> Result<Option<Scene>, StoreError>;

    /// Create a new scene; the store assigns the id.
    ///
    /// Returns the created scene including its generated id.
    async fn create_scene(&self, draft: SceneDraft) -> Result<Scene, StoreError>;

    /// Apply a sparse update to an existing scene.
    ///
    /// Fields the patch leaves as `None` are untouched. An empty patch
    /// is a no-op and must not produce a store round-trip.
    async fn patch_scene(&self, id: &str, patch: ScenePatch) -> Result<(), StoreError>;

    /// Delete a scene by id. Deleting a missing scene succeeds.
    async fn delete_scene(&self, id: &str) -> Result<(), StoreError>;
}
