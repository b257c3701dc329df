//! Editor Session Service
//!
//! `EditorService` owns the sidebar collection, the current selection,
//! and the in-memory `(title, content)` pair loaded into the editor.
//! Edits flow through the autosave pipeline; explicit actions (load,
//! select, create, delete) go straight to the store.
//!
//! # Concurrency
//!
//! All mutating operations funnel through one async mutex, so there is
//! a single logical thread of control over the session state. The only
//! remaining hazard is temporal — a pending debounce countdown
//! outliving a selection change — and that is gated inside the
//! pipeline via the selection watch channel this service owns.

use crate::models::{Scene, SceneDraft};
use crate::services::autosave::{AutosaveConfig, AutosaveHandle, AutosavePipeline};
use crate::services::error::EditorServiceError;
use crate::services::save_status::SaveStatus;
use crate::store::SceneStore;
use crate::utils::{progress_percent, word_count, DEFAULT_WORD_GOAL};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

/// Snapshot of the editor for rendering: selection, editable pair,
/// save indicator, and the cosmetic word-count/progress readouts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub selected_id: Option<String>,
    pub title: String,
    pub content: String,
    pub status: SaveStatus,
    pub word_count: usize,
    pub progress_percent: f64,
}

/// Result of a confirmed deletion: which scene was removed and where
/// the selection fell back to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub deleted_id: String,
    pub selected_id: Option<String>,
}

/// Mutable session state, guarded by the service mutex.
struct EditorState {
    scenes: Vec<Scene>,
    selected_id: Option<String>,
    title: String,
    content: String,
}

/// Editor session: collection + selection + editable pair + autosave.
pub struct EditorService {
    store: Arc<dyn SceneStore>,
    pipeline: AutosavePipeline,
    autosave: AutosaveHandle,
    selection_tx: watch::Sender<Option<String>>,
    state: Mutex<EditorState>,
    word_goal: usize,
}

impl EditorService {
    /// Create a session over the given store with the default writing
    /// goal.
    pub fn new(store: Arc<dyn SceneStore>, config: AutosaveConfig) -> Self {
        Self::with_word_goal(store, config, DEFAULT_WORD_GOAL)
    }

    /// Create a session with an explicit writing goal (words).
    pub fn with_word_goal(
        store: Arc<dyn SceneStore>,
        config: AutosaveConfig,
        word_goal: usize,
    ) -> Self {
        let (selection_tx, selection_rx) = watch::channel(None);
        let pipeline = AutosavePipeline::spawn(store.clone(), selection_rx, config);
        let autosave = pipeline.handle();

        Self {
            store,
            pipeline,
            autosave,
            selection_tx,
            state: Mutex::new(EditorState {
                scenes: Vec::new(),
                selected_id: None,
                title: String::new(),
                content: String::new(),
            }),
            word_goal,
        }
    }

    /// Fetch-on-mount: load the scene collection and select the first
    /// scene, if any.
    pub async fn load(&self) -> Result<(), EditorServiceError> {
        let scenes = self.store.list_scenes().await?;
        tracing::info!(count = scenes.len(), "loaded scene collection");
        let first = scenes.first().map(|s| s.id.clone());
        {
            let mut state = self.state.lock().await;
            state.scenes = scenes;
        }
        if let Some(id) = first {
            self.select_scene(&id).await?;
        }
        Ok(())
    }

    /// Change the selection, replacing the in-memory pair with the
    /// freshly fetched document before any further edits are accepted.
    pub async fn select_scene(&self, id: &str) -> Result<Scene, EditorServiceError> {
        let scene = self
            .store
            .get_scene(id)
            .await?
            .ok_or_else(|| EditorServiceError::scene_not_found(id))?;

        let mut state = self.state.lock().await;
        state.selected_id = Some(scene.id.clone());
        state.title = scene.title.clone();
        state.content = scene.content.clone();
        // Publish after the pair is replaced so a stale countdown for
        // the previous scene can no longer pass the pipeline's gate.
        self.selection_tx.send_replace(Some(scene.id.clone()));
        tracing::debug!(scene_id = %scene.id, "selected scene");
        Ok(scene)
    }

    /// Add a new scene with creation defaults, append it to the
    /// collection, and select it immediately.
    pub async fn create_scene(&self) -> Result<Scene, EditorServiceError> {
        let created = self.store.create_scene(SceneDraft::untitled()).await?;

        let mut state = self.state.lock().await;
        state.scenes.push(created.clone());
        state.selected_id = Some(created.id.clone());
        state.title = created.title.clone();
        state.content = created.content.clone();
        self.selection_tx.send_replace(Some(created.id.clone()));
        tracing::info!(scene_id = %created.id, "created scene");
        Ok(created)
    }

    /// Delete a scene after explicit confirmation.
    ///
    /// Without confirmation the operation aborts with no side effects.
    /// If the deleted scene was selected, the selection falls back to
    /// the first remaining scene, or the editor clears entirely when
    /// none remain.
    pub async fn delete_scene(
        &self,
        id: &str,
        confirmed: bool,
    ) -> Result<DeleteOutcome, EditorServiceError> {
        if !confirmed {
            return Err(EditorServiceError::confirmation_required(id));
        }

        self.store.delete_scene(id).await?;

        let (was_selected, next) = {
            let mut state = self.state.lock().await;
            state.scenes.retain(|s| s.id != id);
            let was_selected = state.selected_id.as_deref() == Some(id);
            let next = if was_selected {
                state.scenes.first().map(|s| s.id.clone())
            } else {
                None
            };
            if was_selected && next.is_none() {
                state.selected_id = None;
                state.title.clear();
                state.content.clear();
                self.selection_tx.send_replace(None);
            }
            (was_selected, next)
        };
        tracing::info!(scene_id = %id, "deleted scene");

        if was_selected {
            if let Some(next_id) = &next {
                self.select_scene(next_id).await?;
            }
            return Ok(DeleteOutcome {
                deleted_id: id.to_string(),
                selected_id: next,
            });
        }

        let state = self.state.lock().await;
        Ok(DeleteOutcome {
            deleted_id: id.to_string(),
            selected_id: state.selected_id.clone(),
        })
    }

    /// Handle a local edit: replace the in-memory pair and feed the
    /// autosave pipeline. With no selection this only updates the pair.
    pub async fn edit(&self, title: &str, content: &str) {
        let mut state = self.state.lock().await;
        state.title = title.to_string();
        state.content = content.to_string();
        self.autosave
            .notify_changed(state.selected_id.as_deref(), title, content);
    }

    /// Current scene collection, in store order.
    pub async fn scenes(&self) -> Vec<Scene> {
        self.state.lock().await.scenes.clone()
    }

    /// Currently selected scene id, if any.
    pub async fn selection(&self) -> Option<String> {
        self.state.lock().await.selected_id.clone()
    }

    /// Current save status.
    pub fn save_status(&self) -> SaveStatus {
        self.pipeline.status()
    }

    /// Subscribe to save status changes.
    pub fn subscribe_status(&self) -> watch::Receiver<SaveStatus> {
        self.pipeline.subscribe_status()
    }

    /// Snapshot of the editor for rendering.
    pub async fn snapshot(&self) -> EditorView {
        let state = self.state.lock().await;
        let words = word_count(&state.content);
        EditorView {
            selected_id: state.selected_id.clone(),
            title: state.title.clone(),
            content: state.content.clone(),
            status: self.pipeline.status(),
            word_count: words,
            progress_percent: progress_percent(words, self.word_goal),
        }
    }
}
