//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Object storage backend for uploaded images
//! - Secret for signing session tokens

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::storage::ObjectStorage;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<dyn ObjectStorage>` is a reference-counted pointer
/// - `Arc<str>` shares the secret without copying it
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Backend receiving uploaded car images.
    pub storage: Arc<dyn ObjectStorage>,

    /// HMAC secret used to sign login tokens.
    pub jwt_secret: Arc<str>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `storage` - Object storage backend
    /// - `jwt_secret` - Token signing secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, storage: Arc<dyn ObjectStorage>, jwt_secret: &str) -> Self {
        Self {
            db,
            storage,
            jwt_secret: Arc::from(jwt_secret),
        }
    }
}
