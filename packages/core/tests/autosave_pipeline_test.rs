//! Autosave pipeline timing tests
//!
//! These tests drive the pipeline under tokio's paused clock, so the
//! debounce window elapses deterministically and instantly. A recording
//! store captures every patch with its virtual-clock timestamp.

use async_trait::async_trait;
use scenepad_core::{
    AutosaveConfig, AutosavePipeline, SaveStatus, Scene, SceneDraft, ScenePatch, SceneStore,
    StoreError,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tokio::time::{Duration, Instant};

/// Store double that records patches with virtual timestamps, and can
/// inject latency or failures.
#[derive(Default)]
struct RecordingStore {
    patches: Mutex<Vec<(Instant, String, ScenePatch)>>,
    patch_delay: Duration,
    fail_patches: AtomicBool,
}

impl RecordingStore {
    fn with_delay(delay: Duration) -> Self {
        Self {
            patch_delay: delay,
            ..Default::default()
        }
    }

    async fn recorded(&self) -> Vec<(Instant, String, ScenePatch)> {
        self.patches.lock().await.clone()
    }
}

#[async_trait]
impl SceneStore for RecordingStore {
    async fn list_scenes(&self) -> Result<Vec<Scene>, StoreError> {
        Ok(Vec::new())
    }

    async fn get_scene(&self, _id: &str) -> Result<Option<Scene>, StoreError> {
        Ok(None)
    }

    async fn create_scene(&self, _draft: SceneDraft) -> Result<Scene, StoreError> {
        unreachable!("pipeline tests never create scenes")
    }

    async fn patch_scene(&self, id: &str, patch: ScenePatch) -> Result<(), StoreError> {
        if !self.patch_delay.is_zero() {
            tokio::time::sleep(self.patch_delay).await;
        }
        if self.fail_patches.load(Ordering::SeqCst) {
            return Err(StoreError::api(500, "injected failure"));
        }
        self.patches
            .lock()
            .await
            .push((Instant::now(), id.to_string(), patch));
        Ok(())
    }

    async fn delete_scene(&self, _id: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

fn pipeline_over(
    store: Arc<RecordingStore>,
    selected: &str,
) -> (AutosavePipeline, watch::Sender<Option<String>>) {
    let (selection_tx, selection_rx) = watch::channel(Some(selected.to_string()));
    let pipeline = AutosavePipeline::spawn(store, selection_rx, AutosaveConfig::default());
    (pipeline, selection_tx)
}

/// Edits at t=0, 100, 200, 700ms with an 800ms window collapse into a
/// single save at t=1500 carrying the values as of t=700.
#[tokio::test(start_paused = true)]
async fn burst_of_edits_collapses_to_one_save() {
    let store = Arc::new(RecordingStore::default());
    let (pipeline, _selection_tx) = pipeline_over(store.clone(), "scene-a");
    let handle = pipeline.handle();
    let start = Instant::now();

    handle.notify_changed(Some("scene-a"), "Title", "draft one");
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.notify_changed(Some("scene-a"), "Title", "draft two");
    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.notify_changed(Some("scene-a"), "Title", "draft three");
    tokio::time::sleep(Duration::from_millis(500)).await;
    handle.notify_changed(Some("scene-a"), "Title", "draft four");
    tokio::time::sleep(Duration::from_millis(900)).await;

    let patches = store.recorded().await;
    assert_eq!(patches.len(), 1, "burst must collapse to one save");
    let (at, id, patch) = &patches[0];
    assert_eq!(id, "scene-a");
    assert_eq!(patch.content.as_deref(), Some("draft four"));
    assert_eq!(patch.title.as_deref(), Some("Title"));
    assert_eq!(at.duration_since(start), Duration::from_millis(1500));
}

/// A selection change before the countdown elapses gates the stale
/// write: nothing lands in the new selection, and this implementation
/// drops the stale write entirely.
#[tokio::test(start_paused = true)]
async fn selection_change_drops_stale_countdown() {
    let store = Arc::new(RecordingStore::default());
    let (pipeline, selection_tx) = pipeline_over(store.clone(), "scene-a");
    let handle = pipeline.handle();

    handle.notify_changed(Some("scene-a"), "A title", "content for A");
    tokio::time::sleep(Duration::from_millis(200)).await;
    selection_tx.send_replace(Some("scene-b".to_string()));
    tokio::time::sleep(Duration::from_millis(800)).await;

    let patches = store.recorded().await;
    assert!(
        patches.is_empty(),
        "no write may occur against A or B after the selection moved"
    );
}

/// Two edits, each completing its own debounce window, persist in
/// order: the remote store ends with the later edit.
#[tokio::test(start_paused = true)]
async fn sequential_windows_persist_in_order() {
    let store = Arc::new(RecordingStore::default());
    let (pipeline, _selection_tx) = pipeline_over(store.clone(), "scene-a");
    let handle = pipeline.handle();

    handle.notify_changed(Some("scene-a"), "Title", "first revision");
    tokio::time::sleep(Duration::from_millis(900)).await;
    handle.notify_changed(Some("scene-a"), "Title", "second revision");
    tokio::time::sleep(Duration::from_millis(900)).await;

    let patches = store.recorded().await;
    assert_eq!(patches.len(), 2);
    assert_eq!(patches[0].2.content.as_deref(), Some("first revision"));
    assert_eq!(patches[1].2.content.as_deref(), Some("second revision"));
    assert!(patches[0].0 < patches[1].0);
}

/// An edit landing while a save is in flight waits for the call to
/// settle, then runs its own debounce window — saves never overlap and
/// the later value is written last.
#[tokio::test(start_paused = true)]
async fn in_flight_save_serializes_follow_up_edits() {
    let store = Arc::new(RecordingStore::with_delay(Duration::from_millis(500)));
    let (pipeline, _selection_tx) = pipeline_over(store.clone(), "scene-a");
    let handle = pipeline.handle();
    let start = Instant::now();

    handle.notify_changed(Some("scene-a"), "Title", "first revision");
    // First save fires at t=800 and is in flight until t=1300.
    tokio::time::sleep(Duration::from_millis(900)).await;
    handle.notify_changed(Some("scene-a"), "Title", "second revision");
    tokio::time::sleep(Duration::from_millis(2000)).await;

    let patches = store.recorded().await;
    assert_eq!(patches.len(), 2);
    assert_eq!(patches[0].2.content.as_deref(), Some("first revision"));
    assert_eq!(patches[1].2.content.as_deref(), Some("second revision"));
    // Second window only starts once the first call settles at t=1300.
    assert_eq!(
        patches[1].0.duration_since(start),
        Duration::from_millis(2600)
    );
}

/// The status reporter walks NeverSaved → Saving → Saved.
#[tokio::test(start_paused = true)]
async fn status_reports_save_lifecycle() {
    let store = Arc::new(RecordingStore::with_delay(Duration::from_millis(100)));
    let (pipeline, _selection_tx) = pipeline_over(store.clone(), "scene-a");
    let handle = pipeline.handle();

    assert_eq!(pipeline.status(), SaveStatus::NeverSaved);

    handle.notify_changed(Some("scene-a"), "Title", "content");
    tokio::time::sleep(Duration::from_millis(850)).await;
    assert!(pipeline.status().is_saving());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(pipeline.status().last_saved_at().is_some());
}

/// A failed save is swallowed: the indicator reverts, no retry happens
/// on its own, and the next edit triggers a fresh attempt.
#[tokio::test(start_paused = true)]
async fn failed_save_reverts_status_and_next_edit_retries() {
    let store = Arc::new(RecordingStore::default());
    store.fail_patches.store(true, Ordering::SeqCst);
    let (pipeline, _selection_tx) = pipeline_over(store.clone(), "scene-a");
    let handle = pipeline.handle();

    handle.notify_changed(Some("scene-a"), "Title", "doomed revision");
    tokio::time::sleep(Duration::from_millis(900)).await;

    assert_eq!(pipeline.status(), SaveStatus::NeverSaved);
    assert!(store.recorded().await.is_empty());

    // No automatic retry: nothing further happens without a new edit.
    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert!(store.recorded().await.is_empty());

    store.fail_patches.store(false, Ordering::SeqCst);
    handle.notify_changed(Some("scene-a"), "Title", "recovered revision");
    tokio::time::sleep(Duration::from_millis(900)).await;

    let patches = store.recorded().await;
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].2.content.as_deref(), Some("recovered revision"));
    assert!(pipeline.status().last_saved_at().is_some());
}
