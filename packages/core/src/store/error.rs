//! Store Error Types
//!
//! Error taxonomy for content-store operations. Every fetch, create,
//! patch, or delete rejection surfaces as a [`StoreError`]; callers in
//! the editing flow log and swallow these rather than blocking the
//! editor (see the autosave pipeline).

use thiserror::Error;

/// Content-store operation errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// Network-level failure reaching the store
    #[error("Content store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success status
    #[error("Content store rejected request ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode content store response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Document expected to exist was not found (mutation target)
    #[error("Document not found in store: {id}")]
    MissingDocument { id: String },

    /// Credentials or endpoint configuration is incomplete
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    /// Create an API rejection error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a missing document error
    pub fn missing_document(id: impl Into<String>) -> Self {
        Self::MissingDocument { id: id.into() }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
