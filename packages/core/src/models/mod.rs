//! Data Structures
//!
//! This module defines the persisted [`Scene`] entity and its companion
//! write types: [`SceneDraft`] for creation and [`ScenePatch`] for
//! sparse updates.

mod scene;

pub use scene::{Scene, SceneDraft, ScenePatch, DEFAULT_SCENE_TITLE};
