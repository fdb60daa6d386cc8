use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use mongodb::bson::{oid::ObjectId, Document};
use tower::ServiceExt;

use catalog_server::{
    api,
    error::{StoreError, StoreResult},
    store::{DocumentStore, MemoryStore},
    AppState,
};

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

pub fn app() -> Router {
    app_with_store(Arc::new(MemoryStore::new()))
}

pub fn app_with_store(store: Arc<dyn DocumentStore>) -> Router {
    api::router(AppState::new(store))
}

/// Store whose every operation fails, as when the database is unreachable
pub struct UnreachableStore;

fn refused<T>() -> StoreResult<T> {
    Err(StoreError::Malformed("connection refused".to_string()))
}

#[async_trait]
impl DocumentStore for UnreachableStore {
    async fn find(&self, _: &str, _: Document) -> StoreResult<Vec<Document>> {
        refused()
    }

    async fn find_by_id(&self, _: &str, _: ObjectId) -> StoreResult<Option<Document>> {
        refused()
    }

    async fn insert(&self, _: &str, _: Document) -> StoreResult<()> {
        refused()
    }

    async fn replace_by_id(&self, _: &str, _: ObjectId, _: Document) -> StoreResult<bool> {
        refused()
    }

    async fn remove_by_id(&self, _: &str, _: ObjectId) -> StoreResult<Option<Document>> {
        refused()
    }

    async fn count(&self, _: &str, _: Document) -> StoreResult<u64> {
        refused()
    }
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        location,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

/// POST an urlencoded body built from key/value pairs
pub async fn post_form(app: &Router, uri: &str, pairs: &[(&str, &str)]) -> TestResponse {
    let body = serde_urlencoded::to_string(pairs).unwrap();

    send(
        app,
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

/// Last path segment of a redirect target
pub fn created_id(response: &TestResponse) -> String {
    assert_eq!(response.status, StatusCode::SEE_OTHER, "{}", response.body);
    let location = response.location.as_deref().unwrap();
    location.rsplit('/').next().unwrap().to_string()
}

pub async fn create_author(app: &Router) -> String {
    let response = post_form(
        app,
        "/catalog/author/create",
        &[("first_name", "Ursula"), ("family_name", "LeGuin")],
    )
    .await;
    created_id(&response)
}

pub async fn create_book(app: &Router, author: &str) -> String {
    let response = post_form(
        app,
        "/catalog/book/create",
        &[
            ("title", "The Dispossessed"),
            ("author", author),
            ("summary", "An ambiguous utopia."),
            ("isbn", "9780061054884"),
        ],
    )
    .await;
    created_id(&response)
}
