//! Content Store Layer
//!
//! This module handles all interaction with the scene backend:
//!
//! - [`SceneStore`] — trait abstracting the five store operations
//!   (list, get, create, patch, delete)
//! - [`HttpSceneStore`] — client for the hosted headless content store
//! - [`MemoryStore`] — in-memory backend for tests and offline runs
//! - [`StoreConfig`] — credentials built once at startup and injected
//!   explicitly (no process-wide client singleton)
//!
//! The store is an external collaborator: it is consumed here, not
//! redesigned. Absent documents are `Ok(None)`, deletion is idempotent,
//! and patches have partial-update semantics (fields not given are left
//! untouched).

mod config;
mod error;
mod http_store;
mod memory_store;
mod scene_store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use http_store::HttpSceneStore;
pub use memory_store::MemoryStore;
pub use scene_store::SceneStore;
