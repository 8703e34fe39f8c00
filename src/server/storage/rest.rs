//! Storage backend speaking the hosted storage REST API.

use async_trait::async_trait;
use axum::body::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::server::{error::storage::StorageError, storage::ObjectStorage};

/// Bucket client for a hosted storage service.
///
/// Objects are written with `POST {base_url}/storage/v1/object/{bucket}/{key}` and served
/// from `{base_url}/storage/v1/object/public/{bucket}/{key}`.
#[derive(Clone)]
pub struct RestObjectStorage {
    http_client: reqwest::Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

impl RestObjectStorage {
    /// Creates a client for one bucket.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `base_url` - Storage service base URL; a trailing slash is ignored
    /// - `service_key` - Service credential sent as bearer token and `apikey`
    /// - `bucket` - Bucket that receives every upload
    pub fn new(
        http_client: reqwest::Client,
        base_url: &str,
        service_key: String,
        bucket: String,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
            bucket,
        }
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key)
    }
}

#[async_trait]
impl ObjectStorage for RestObjectStorage {
    async fn upload(
        &self,
        key: &str,
        content_type: &str,
        content: Bytes,
    ) -> Result<(), StorageError> {
        let response = self
            .http_client
            .post(self.object_url(key))
            .header(AUTHORIZATION, format!("Bearer {}", self.service_key))
            .header("apikey", &self.service_key)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(content)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("Uploaded object {} to bucket {}", key, self.bucket);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(StorageError::Rejected {
            key: key.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, key
        )
    }
}
