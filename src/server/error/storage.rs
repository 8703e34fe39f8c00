use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage service could not be reached.
    #[error("Storage request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The storage service answered with a non-success status.
    #[error("Storage rejected upload of '{key}' with status {status}: {body}")]
    Rejected {
        /// Object key that was being written
        key: String,
        /// HTTP status returned by the storage service
        status: u16,
        /// Response body, usually a JSON error document
        body: String,
    },
}

/// Any storage failure aborts the request with 500; the provider message is echoed
/// as `details`.
impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Failed to upload files").with_details(self.to_string())),
        )
            .into_response()
    }
}
