use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{app, get};

#[tokio::test]
async fn test_health_check() {
    let response = get(&app(), "/health").await;
    assert_eq!(response.status, StatusCode::OK);

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_root_redirects_to_catalog() {
    let response = get(&app(), "/").await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/catalog"));
}
