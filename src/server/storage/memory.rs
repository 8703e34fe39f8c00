//! In-memory storage backend used by tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::body::Bytes;

use crate::server::{error::storage::StorageError, storage::ObjectStorage};

/// Stores objects in a shared map; can be told to reject keys containing a marker.
#[derive(Clone, Default)]
pub struct MemoryObjectStorage {
    objects: Arc<Mutex<HashMap<String, (String, Bytes)>>>,
    reject_marker: Option<String>,
}

impl MemoryObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects any upload whose key contains `marker`.
    pub fn rejecting(marker: &str) -> Self {
        Self {
            reject_marker: Some(marker.to_string()),
            ..Self::default()
        }
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .objects
            .lock()
            .map(|objects| objects.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    pub fn content_type(&self, key: &str) -> Option<String> {
        self.objects
            .lock()
            .ok()
            .and_then(|objects| objects.get(key).map(|(content_type, _)| content_type.clone()))
    }
}

#[async_trait]
impl ObjectStorage for MemoryObjectStorage {
    async fn upload(
        &self,
        key: &str,
        content_type: &str,
        content: Bytes,
    ) -> Result<(), StorageError> {
        if let Some(marker) = &self.reject_marker {
            if key.contains(marker.as_str()) {
                return Err(StorageError::Rejected {
                    key: key.to_string(),
                    status: 400,
                    body: "rejected".to_string(),
                });
            }
        }

        let mut objects = self.objects.lock().map_err(|_| StorageError::Rejected {
            key: key.to_string(),
            status: 500,
            body: "storage lock poisoned".to_string(),
        })?;

        if objects.contains_key(key) {
            return Err(StorageError::Rejected {
                key: key.to_string(),
                status: 409,
                body: "The resource already exists".to_string(),
            });
        }

        objects.insert(key.to_string(), (content_type.to_string(), content));
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("memory://car-images/{}", key)
    }
}
