//! HTTP error handling for the API server
//!
//! Provides consistent JSON error responses across all endpoint modules.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use scenepad_core::{EditorServiceError, StoreError};

/// JSON error envelope returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpError {
    /// User-facing error message
    pub message: String,
    /// Machine-readable error code
    pub code: String,
    /// Optional detailed error information for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HttpError {
    /// Create a new HTTP error
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: None,
        }
    }

    /// Create a new HTTP error with details
    pub fn with_details(
        message: impl Into<String>,
        code: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: Some(details.into()),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match self.code.as_str() {
            "SCENE_NOT_FOUND" => StatusCode::NOT_FOUND,
            "CONFIRMATION_REQUIRED" | "INVALID_INPUT" | "NO_SELECTION" => StatusCode::BAD_REQUEST,
            "STORE_ERROR" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

impl From<EditorServiceError> for HttpError {
    fn from(err: EditorServiceError) -> Self {
        match err {
            EditorServiceError::SceneNotFound { id } => {
                HttpError::new(format!("Scene not found: {}", id), "SCENE_NOT_FOUND")
            }
            EditorServiceError::ConfirmationRequired { id } => HttpError::new(
                format!("Deleting scene '{}' requires confirmation", id),
                "CONFIRMATION_REQUIRED",
            ),
            EditorServiceError::NoSelection => {
                HttpError::new("No scene is selected", "NO_SELECTION")
            }
            EditorServiceError::Store(store_err) => HttpError::from(store_err),
        }
    }
}

impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        HttpError::with_details(
            "Content store request failed",
            "STORE_ERROR",
            err.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn maps_codes_to_statuses() {
        let resp = HttpError::new("missing", "SCENE_NOT_FOUND").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = HttpError::new("confirm", "CONFIRMATION_REQUIRED").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = HttpError::new("upstream", "STORE_ERROR").into_response();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let resp = HttpError::new("boom", "SOMETHING_ELSE").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn converts_service_errors() {
        let err = HttpError::from(EditorServiceError::scene_not_found("s1"));
        assert_eq!(err.code, "SCENE_NOT_FOUND");

        let err = HttpError::from(EditorServiceError::confirmation_required("s1"));
        assert_eq!(err.code, "CONFIRMATION_REQUIRED");
    }
}
