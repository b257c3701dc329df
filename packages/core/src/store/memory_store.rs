//! In-memory scene store
//!
//! Backend for tests and offline runs. Keeps scenes in insertion order
//! (the "store-defined order" the listing contract allows) behind an
//! async mutex, and mints uuid-v4 ids at creation.

use crate::models::{Scene, SceneDraft, ScenePatch};
use crate::store::error::StoreError;
use crate::store::scene_store::SceneStore;
use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

/// In-memory [`SceneStore`] backend.
#[derive(Default)]
pub struct MemoryStore {
    scenes: Mutex<Vec<Scene>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given scenes, in order.
    pub fn with_scenes(scenes: Vec<Scene>) -> Self {
        Self {
            scenes: Mutex::new(scenes),
        }
    }
}

#[async_trait]
impl SceneStore for MemoryStore {
    async fn list_scenes(&self) -> Result<Vec<Scene>, StoreError> {
        Ok(self.scenes.lock().await.clone())
    }

    async fn get_scene(&self, id: &str) -> Result<Option<Scene>, StoreError> {
        Ok(self
            .scenes
            .lock()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn create_scene(&self, draft: SceneDraft) -> Result<Scene, StoreError> {
        let scene = Scene {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            completed: draft.completed,
        };
        self.scenes.lock().await.push(scene.clone());
        Ok(scene)
    }

    async fn patch_scene(&self, id: &str, patch: ScenePatch) -> Result<(), StoreError> {
        if patch.is_empty() {
            return Ok(());
        }
        let mut scenes = self.scenes.lock().await;
        let scene = scenes
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::missing_document(id))?;
        if let Some(title) = patch.title {
            scene.title = title;
        }
        if let Some(content) = patch.content {
            scene.content = content;
        }
        Ok(())
    }

    async fn delete_scene(&self, id: &str) -> Result<(), StoreError> {
        // Idempotent: deleting an absent scene is a no-op
        self.scenes.lock().await.retain(|s| s.id != id);
        Ok(())
    }
}
