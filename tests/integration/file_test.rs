//! File registration, upload, and download over HTTP.

use axum::body::Body;
use http::{Request, StatusCode};
use tower::ServiceExt;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_file_validates_input() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    // Negative size
    let response = app
        .request(
            "POST",
            "/api/files",
            Some(serde_json::json!({
                "name": "bad",
                "sizeBytes": -1,
                "storageRef": "ref",
            })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    // Missing parent folder
    let response = app
        .request(
            "POST",
            "/api/files",
            Some(serde_json::json!({
                "name": "orphan",
                "sizeBytes": 1,
                "storageRef": "ref",
                "parentId": Uuid::new_v4().to_string(),
            })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_register_file_returns_entry() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let response = app
        .request(
            "POST",
            "/api/files",
            Some(serde_json::json!({
                "name": "report",
                "extension": ".pdf",
                "sizeBytes": 2048,
                "mimeType": "application/pdf",
                "storageRef": "blobs/report.pdf",
            })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let data = response.data();
    assert_eq!(data["name"], "report");
    assert_eq!(data["extension"], ".pdf");
    assert_eq!(data["size_bytes"], 2048);
    assert_eq!(data["kind"], "file");
    assert!(data["parent_id"].is_null());
}

#[tokio::test]
async fn test_upload_then_download_round_trip() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();
    let content = b"hello drivevault".to_vec();

    // Raw-body upload
    let req = Request::builder()
        .method("POST")
        .uri("/api/files/upload?name=notes.txt")
        .header("x-user-id", user.to_string())
        .header("Content-Type", "text/plain")
        .body(Body::from(content.clone()))
        .unwrap();
    let response = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
    let data = &body["data"];
    assert_eq!(data["name"], "notes");
    assert_eq!(data["extension"], ".txt");
    assert_eq!(data["size_bytes"], content.len());
    assert_eq!(data["mime_type"], "text/plain");
    let id = data["id"].as_str().unwrap();

    // Download streams the same bytes back
    let req = Request::builder()
        .method("GET")
        .uri(format!("/api/files/{id}/download"))
        .header("x-user-id", user.to_string())
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/plain"
    );
    assert!(
        response.headers()["content-disposition"]
            .to_str()
            .unwrap()
            .contains("notes.txt")
    );

    let downloaded = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    assert_eq!(downloaded.as_ref(), content.as_slice());
}

#[tokio::test]
async fn test_download_folder_rejected() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let folder = app.create_folder(user, None, "docs").await;

    let response = app
        .request(
            "GET",
            &format!("/api/files/{folder}/download"),
            None,
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_OPERATION");
}

#[tokio::test]
async fn test_download_other_users_file_is_not_found() {
    let app = TestApp::new().await;
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let file = app
        .register_file(owner, None, "secret", ".txt", 1, "text/plain")
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/files/{file}/download"),
            None,
            Some(stranger),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
