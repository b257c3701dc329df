//! Debounced Autosave Pipeline
//!
//! Connects local edit events to remote persistence:
//!
//! Edit Source → Debounce Gate → Persistence Call → Status Reporter
//!
//! The pipeline is a single event-driven background task:
//! 1. Edit notifications land on a watch channel, so bursts coalesce to
//!    the latest `(title, content)` pair with no queue growth.
//! 2. Every notification re-arms one pipeline-wide countdown; a
//!    superseded countdown's write is cancelled entirely, not delayed.
//! 3. When the countdown elapses uninterrupted, exactly one patch is
//!    issued with whatever values were most recent at that moment. The
//!    task awaits the call inline, so persistence calls are serialized
//!    in countdown-completion order — an older write can never clobber
//!    a newer one.
//! 4. Save failures are logged and swallowed; the editor stays usable
//!    and the next edit triggers a fresh attempt.
//! 5. Each pending countdown is bound to the scene id captured when the
//!    edit was scheduled. At fire time the pipeline re-validates
//!    against the current selection and refuses to fire on mismatch,
//!    so an edit to scene A can never overwrite scene B after a
//!    selection change.
//!
//! There is no timeout on the persistence call itself: a hung request
//! leaves the status reporter in `Saving`. Later edits still coalesce
//! on the watch channel and are saved once the call returns.

use crate::services::save_status::SaveStatus;
use crate::store::SceneStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;

/// Quiescence window observed by the editor: a save fires this long
/// after the last edit.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(800);

/// Autosave pipeline configuration.
#[derive(Debug, Clone)]
pub struct AutosaveConfig {
    /// Debounce window; each edit restarts this countdown.
    pub debounce: Duration,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// One coalesced edit: the full current values, not deltas, bound to
/// the scene that was selected when the edit happened.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditEvent {
    scene_id: String,
    title: String,
    content: String,
}

/// Cheap cloneable handle for feeding edits into the pipeline.
///
/// Multiple rapid notifications are coalesced — only the latest
/// `(title, content)` pair is persisted once the debounce window
/// elapses.
#[derive(Clone)]
pub struct AutosaveHandle {
    edit_tx: Arc<watch::Sender<Option<EditEvent>>>,
}

impl AutosaveHandle {
    /// Notify the pipeline that the editor content changed.
    ///
    /// Non-blocking. A call with no selected scene is a no-op — there
    /// is nothing to save against. `title` and `content` are the full
    /// current values.
    pub fn notify_changed(&self, selected_id: Option<&str>, title: &str, content: &str) {
        let Some(scene_id) = selected_id else {
            tracing::debug!("edit with no selection ignored");
            return;
        };
        self.edit_tx.send_replace(Some(EditEvent {
            scene_id: scene_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
        }));
    }
}

/// Debounced autosave pipeline with an active background task.
///
/// Dropping the pipeline (together with all handles) shuts the task
/// down; any armed countdown is discarded.
pub struct AutosavePipeline {
    handle: AutosaveHandle,
    status_rx: watch::Receiver<SaveStatus>,
    _shutdown_tx: mpsc::Sender<()>,
}

impl AutosavePipeline {
    /// Spawn the pipeline task.
    ///
    /// # Arguments
    ///
    /// * `store` - persistence target for coalesced edits
    /// * `selection_rx` - current selection, owned by the editor
    ///   session; consulted at fire time to gate stale writes
    /// * `config` - debounce window
    pub fn spawn(
        store: Arc<dyn SceneStore>,
        selection_rx: watch::Receiver<Option<String>>,
        config: AutosaveConfig,
    ) -> Self {
        let (status_tx, status_rx) = watch::channel(SaveStatus::NeverSaved);
        let (edit_tx, edit_rx) = watch::channel(None);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);

        tokio::spawn(run(
            store,
            selection_rx,
            edit_rx,
            status_tx,
            shutdown_rx,
            config.debounce,
        ));

        Self {
            handle: AutosaveHandle {
                edit_tx: Arc::new(edit_tx),
            },
            status_rx,
            _shutdown_tx: shutdown_tx,
        }
    }

    /// Get a cloneable handle for feeding edits into the pipeline.
    pub fn handle(&self) -> AutosaveHandle {
        self.handle.clone()
    }

    /// Current save status.
    pub fn status(&self) -> SaveStatus {
        *self.status_rx.borrow()
    }

    /// Subscribe to save status changes.
    pub fn subscribe_status(&self) -> watch::Receiver<SaveStatus> {
        self.status_rx.clone()
    }
}

/// Pipeline task loop: debounce, gate, persist, report.
async fn run(
    store: Arc<dyn SceneStore>,
    selection_rx: watch::Receiver<Option<String>>,
    mut edit_rx: watch::Receiver<Option<EditEvent>>,
    status_tx: watch::Sender<SaveStatus>,
    mut shutdown_rx: mpsc::Receiver<()>,
    debounce: Duration,
) {
    let countdown = tokio::time::sleep(Duration::ZERO);
    tokio::pin!(countdown);
    // The countdown only participates in the select while armed.
    let mut armed = false;
    let mut last_saved: Option<DateTime<Utc>> = None;

    loop {
        tokio::select! {
            biased;

            _ = shutdown_rx.recv() => {
                tracing::info!("autosave pipeline shutting down");
                break;
            }

            changed = edit_rx.changed() => {
                if changed.is_err() {
                    // All handles dropped
                    break;
                }
                // Each edit restarts the countdown; the previous pending
                // write is superseded entirely.
                countdown.as_mut().reset(Instant::now() + debounce);
                armed = true;
            }

            _ = countdown.as_mut(), if armed => {
                armed = false;
                // Capture whatever was most recent when the timer fired.
                let Some(event) = edit_rx.borrow().clone() else {
                    continue;
                };
                save(&store, &selection_rx, &status_tx, &mut last_saved, event).await;
            }
        }
    }
}

/// Issue one persistence call for a coalesced edit, gated against
/// selection changes since the edit was scheduled.
async fn save(
    store: &Arc<dyn SceneStore>,
    selection_rx: &watch::Receiver<Option<String>>,
    status_tx: &watch::Sender<SaveStatus>,
    last_saved: &mut Option<DateTime<Utc>>,
    event: EditEvent,
) {
    let current = selection_rx.borrow().clone();
    if current.as_deref() != Some(event.scene_id.as_str()) {
        tracing::debug!(
            scene_id = %event.scene_id,
            "selection changed since edit was scheduled, dropping stale save"
        );
        return;
    }

    status_tx.send_replace(SaveStatus::Saving);
    let patch = crate::models::ScenePatch {
        title: Some(event.title),
        content: Some(event.content),
    };

    match store.patch_scene(&event.scene_id, patch).await {
        Ok(()) => {
            let at = Utc::now();
            *last_saved = Some(at);
            status_tx.send_replace(SaveStatus::Saved { at });
            tracing::debug!(scene_id = %event.scene_id, "scene saved");
        }
        Err(err) => {
            // Swallowed: no retry, no blocking error. The indicator
            // reverts and the next edit triggers a fresh attempt.
            tracing::warn!(scene_id = %event.scene_id, error = %err, "scene save failed");
            status_tx.send_replace(match *last_saved {
                Some(at) => SaveStatus::Saved { at },
                None => SaveStatus::NeverSaved,
            });
        }
    }
}
