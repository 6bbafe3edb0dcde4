//! Search over HTTP: matching, path annotation, empty queries.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_search_annotates_full_paths() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let archive = app.create_folder(user, None, "archive").await;
    let year = app
        .create_folder(user, Some(&archive.to_string()), "2023")
        .await;
    app.register_file(
        user,
        Some(&year.to_string()),
        "taxes",
        ".pdf",
        100,
        "application/pdf",
    )
    .await;

    let response = app
        .request("GET", "/api/search?q=taxes", None, Some(user))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let hits = response.data().as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["full_path"], "Home / archive / 2023 / taxes");
}

#[tokio::test]
async fn test_search_matches_extension_case_insensitively() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    app.register_file(user, None, "holiday", ".JPG", 100, "image/jpeg")
        .await;
    app.register_file(user, None, "notes", ".txt", 10, "text/plain")
        .await;

    let response = app
        .request("GET", "/api/search?q=jpg", None, Some(user))
        .await;
    let hits = response.data().as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "holiday");
}

#[tokio::test]
async fn test_empty_query_returns_empty_list() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();
    app.register_file(user, None, "something", ".txt", 1, "text/plain")
        .await;

    for path in ["/api/search", "/api/search?q=", "/api/search?q=%20%20"] {
        let response = app.request("GET", path, None, Some(user)).await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.data().as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_search_excludes_deleted_and_foreign_entries() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();
    let stranger = Uuid::new_v4();

    let dead = app
        .register_file(user, None, "report-old", ".pdf", 1, "application/pdf")
        .await;
    app.request("DELETE", &format!("/api/entries/{dead}"), None, Some(user))
        .await;
    app.register_file(stranger, None, "report-theirs", ".pdf", 1, "application/pdf")
        .await;
    app.register_file(user, None, "report-live", ".pdf", 1, "application/pdf")
        .await;

    let response = app
        .request("GET", "/api/search?q=report", None, Some(user))
        .await;
    let hits = response.data().as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "report-live");
}
