//! Object storage for uploaded car images.
//!
//! The upload flow only needs two things from a storage backend: writing an object under
//! a key and producing the public URL for that key. `ObjectStorage` captures exactly that
//! so request handlers hold an `Arc<dyn ObjectStorage>` and tests can substitute an
//! in-memory backend.

#[cfg(test)]
pub mod memory;
pub mod rest;

use async_trait::async_trait;
use axum::body::Bytes;

use crate::server::error::storage::StorageError;

#[async_trait]
pub trait ObjectStorage: Send + Sync + 'static {
    /// Stores `content` under `key`, failing if an object already exists there.
    ///
    /// # Arguments
    /// - `key` - Object key within the configured bucket
    /// - `content_type` - MIME type recorded with the object
    /// - `content` - Raw object bytes
    async fn upload(&self, key: &str, content_type: &str, content: Bytes)
        -> Result<(), StorageError>;

    /// Publicly reachable URL for an object key.
    fn public_url(&self, key: &str) -> String;
}
