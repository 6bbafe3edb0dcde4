//! Storage usage over HTTP.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::{TEST_QUOTA_BYTES, TestApp};

#[tokio::test]
async fn test_usage_breakdown_by_mime_type() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    app.register_file(user, None, "a", ".jpg", 300, "image/jpeg")
        .await;
    app.register_file(user, None, "b", ".png", 100, "image/png")
        .await;
    app.register_file(user, None, "c", ".mp4", 50, "video/mp4")
        .await;
    app.create_folder(user, None, "folders-are-free").await;
    let dead = app
        .register_file(user, None, "d", ".txt", 400, "text/plain")
        .await;
    app.request("DELETE", &format!("/api/entries/{dead}"), None, Some(user))
        .await;

    let response = app.request("GET", "/api/storage", None, Some(user)).await;
    assert_eq!(response.status, StatusCode::OK);

    let data = response.data();
    assert_eq!(data["used_bytes"], 450);
    assert_eq!(data["limit_bytes"], TEST_QUOTA_BYTES);
    assert_eq!(data["file_count"], 3);
    assert_eq!(data["percentage"], 45.0);
    assert_eq!(data["by_type"]["image"]["count"], 2);
    assert_eq!(data["by_type"]["image"]["size_bytes"], 400);
    assert_eq!(data["by_type"]["video"]["count"], 1);
}

#[tokio::test]
async fn test_usage_empty_account() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let response = app.request("GET", "/api/storage", None, Some(user)).await;
    assert_eq!(response.status, StatusCode::OK);

    let data = response.data();
    assert_eq!(data["used_bytes"], 0);
    assert_eq!(data["file_count"], 0);
    assert_eq!(data["percentage"], 0.0);
}
