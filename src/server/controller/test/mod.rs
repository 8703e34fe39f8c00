use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState, storage::memory::MemoryObjectStorage};


const JWT_SECRET: &str = "test-secret";
/// Upload limit for router tests; above axum's 2 MiB default body limit.
const UPLOAD_BODY_LIMIT: usize = 4 * 1024 * 1024;

/// Router over an in-memory database with every table and an in-memory image store.
struct TestApp {
    app: Router,
    storage: MemoryObjectStorage,
    context: TestContext,
}

impl TestApp {
    async fn new() -> Self {
        Self::with_context(TestBuilder::new().with_all_tables().build().await.unwrap())
    }

    fn with_context(context: TestContext) -> Self {
        Self::with_storage(context, MemoryObjectStorage::new())
    }

    fn with_storage(context: TestContext, storage: MemoryObjectStorage) -> Self {
        let db = context.db.clone().unwrap();
        let state = AppState::new(db, Arc::new(storage.clone()), JWT_SECRET);

        Self {
            app: router(UPLOAD_BODY_LIMIT).with_state(state),
            storage,
            context,
        }
    }

    fn db(&self) -> &DatabaseConnection {
        self.context.db.as_ref().unwrap()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn json(&self, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }
}
