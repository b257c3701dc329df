//! Hosted content store client
//!
//! HTTP backend for [`SceneStore`], speaking the hosted document API:
//!
//! - `GET  /data/query/{dataset}?query=...` — listing via a query
//!   projection over all documents of the scene type
//! - `GET  /data/doc/{dataset}/{id}` — single document fetch
//! - `POST /data/mutate/{dataset}` — create / patch / delete mutations
//!
//! All requests carry the write token as a bearer credential. Patch
//! mutations are sent with array-key auto-generation enabled so ordered
//! sub-structures in content would be accepted by the store (content is
//! a flat string today, but the interface must not reject it).

use crate::models::{Scene, SceneDraft, ScenePatch};
use crate::store::config::StoreConfig;
use crate::store::error::StoreError;
use crate::store::scene_store::SceneStore;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

/// Document type name in the store schema.
const SCENE_TYPE: &str = "scene";

/// Listing query: all scene documents, projected down to the fields
/// the editor uses.
const LIST_QUERY: &str = r#"*[_type == "scene"]{_id, title, content, completed}"#;

/// Client for the hosted content store.
///
/// Holds the injected [`StoreConfig`] and a pooled HTTP client. Cheap
/// to share behind an `Arc<dyn SceneStore>`.
pub struct HttpSceneStore {
    config: StoreConfig,
    http: reqwest::Client,
}

/// Wire shape of a scene document as the store returns it.
///
/// The store prefixes system fields with underscores and may omit
/// fields that were never set.
#[derive(Debug, Deserialize)]
struct SceneDoc {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    completed: bool,
}

impl From<SceneDoc> for Scene {
    fn from(doc: SceneDoc) -> Self {
        Scene {
            id: doc.id,
            title: doc.title.unwrap_or_default(),
            content: doc.content.unwrap_or_default(),
            completed: doc.completed,
        }
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: Vec<SceneDoc>,
}

#[derive(Debug, Deserialize)]
struct DocResponse {
    documents: Vec<SceneDoc>,
}

#[derive(Debug, Deserialize)]
struct MutateResponse {
    results: Vec<MutateResult>,
}

#[derive(Debug, Deserialize)]
struct MutateResult {
    #[serde(default)]
    document: Option<SceneDoc>,
}

impl HttpSceneStore {
    /// Create a store client from an injected configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn query_url(&self) -> String {
        format!(
            "{}/data/query/{}",
            self.config.base_url(),
            self.config.dataset
        )
    }

    fn doc_url(&self, id: &str) -> String {
        format!(
            "{}/data/doc/{}/{}",
            self.config.base_url(),
            self.config.dataset,
            id
        )
    }

    fn mutate_url(&self) -> String {
        format!(
            "{}/data/mutate/{}",
            self.config.base_url(),
            self.config.dataset
        )
    }

    /// Map non-success responses to `StoreError::Api` with the body as
    /// the message (the store returns JSON error descriptions).
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable response body>".to_string());
        Err(StoreError::api(status.as_u16(), message))
    }

    async fn mutate(&self, body: Value, params: &[(&str, &str)]) -> Result<MutateResponse, StoreError> {
        let response = self
            .http
            .post(self.mutate_url())
            .query(params)
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        Ok(response.json::<MutateResponse>().await?)
    }
}

/// Build the `create` mutation body for a new scene document.
fn create_mutation(draft: &SceneDraft) -> Value {
    json!({
        "mutations": [{
            "create": {
                "_type": SCENE_TYPE,
                "title": draft.title,
                "content": draft.content,
                "completed": draft.completed,
            }
        }]
    })
}

/// Build the `patch` mutation body for a sparse scene update.
///
/// `ScenePatch` serializes to exactly the `set` object: `None` fields
/// are omitted, so the store leaves them untouched.
fn patch_mutation(id: &str, patch: &ScenePatch) -> Result<Value, StoreError> {
    let set = serde_json::to_value(patch)?;
    Ok(json!({
        "mutations": [{
            "patch": {
                "id": id,
                "set": set,
            }
        }]
    }))
}

/// Build the `delete` mutation body.
fn delete_mutation(id: &str) -> Value {
    json!({
        "mutations": [{
            "delete": { "id": id }
        }]
    })
}

#[async_trait]
impl SceneStore for HttpSceneStore {
    async fn list_scenes(&self) -> Result<Vec<Scene>, StoreError> {
        let response = self
            .http
            .get(self.query_url())
            .query(&[("query", LIST_QUERY)])
            .bearer_auth(&self.config.token)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let parsed = response.json::<QueryResponse>().await?;
        Ok(parsed.result.into_iter().map(Scene::from).collect())
    }

    async fn get_scene(&self, id: &str) -> Result<Option<Scene>, StoreError> {
        let response = self
            .http
            .get(self.doc_url(id))
            .bearer_auth(&self.config.token)
            .send()
            .await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::check(response).await?;
        let parsed = response.json::<DocResponse>().await?;
        Ok(parsed.documents.into_iter().next().map(Scene::from))
    }

    async fn create_scene(&self, draft: SceneDraft) -> Result<Scene, StoreError> {
        let parsed = self
            .mutate(create_mutation(&draft), &[("returnDocuments", "true")])
            .await?;
        let doc = parsed
            .results
            .into_iter()
            .next()
            .and_then(|r| r.document)
            .ok_or_else(|| {
                StoreError::api(200, "mutation response carried no created document")
            })?;
        tracing::debug!(scene_id = %doc.id, "created scene in content store");
        Ok(doc.into())
    }

    async fn patch_scene(&self, id: &str, patch: ScenePatch) -> Result<(), StoreError> {
        if patch.is_empty() {
            return Ok(());
        }
        self.mutate(
            patch_mutation(id, &patch)?,
            &[("autoGenerateArrayKeys", "true")],
        )
        .await?;
        tracing::debug!(scene_id = %id, "patched scene in content store");
        Ok(())
    }

    async fn delete_scene(&self, id: &str) -> Result<(), StoreError> {
        self.mutate(delete_mutation(id), &[]).await?;
        tracing::debug!(scene_id = %id, "deleted scene from content store");
        Ok(())
    }
}
