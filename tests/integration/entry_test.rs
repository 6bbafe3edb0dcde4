//! Entry CRUD over HTTP: listing, rename, star, delete, ownership.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_requests_without_identity_are_unauthorized() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/entries", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_list_top_level_folders_first_sorted() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    app.register_file(user, None, "zeta", ".txt", 10, "text/plain")
        .await;
    app.register_file(user, None, "Alpha", ".txt", 10, "text/plain")
        .await;
    app.create_folder(user, None, "beta").await;
    app.create_folder(user, None, "Acorn").await;

    let response = app.request("GET", "/api/entries", None, Some(user)).await;
    assert_eq!(response.status, StatusCode::OK);

    let data = response.data();
    let folders: Vec<&str> = data["folders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    let files: Vec<&str> = data["files"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();

    assert_eq!(folders, vec!["Acorn", "beta"]);
    assert_eq!(files, vec!["Alpha", "zeta"]);
}

#[tokio::test]
async fn test_list_accepts_root_sentinel() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();
    app.create_folder(user, None, "docs").await;

    let response = app
        .request("GET", "/api/entries?parentId=root", None, Some(user))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["folders"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_missing_parent_is_not_found() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let response = app
        .request(
            "GET",
            &format!("/api/entries?parentId={}", Uuid::new_v4()),
            None,
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_entry_not_found() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let response = app
        .request(
            "GET",
            &format!("/api/entries/{}", Uuid::new_v4()),
            None,
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_entries_are_owner_scoped() {
    let app = TestApp::new().await;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let folder = app.create_folder(alice, None, "private").await;

    let response = app
        .request("GET", &format!("/api/entries/{folder}"), None, Some(bob))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/entries", None, Some(bob)).await;
    assert!(response.data()["folders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_rename_entry() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let file = app
        .register_file(user, None, "draft", ".md", 100, "text/markdown")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/entries/{file}/rename"),
            Some(serde_json::json!({ "name": "final" })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["name"], "final");
}

#[tokio::test]
async fn test_rename_folder_onto_sibling_name_rejected() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    app.create_folder(user, None, "taken").await;
    let folder = app.create_folder(user, None, "free").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/entries/{folder}/rename"),
            Some(serde_json::json!({ "name": "taken" })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_OPERATION");
}

#[tokio::test]
async fn test_duplicate_folder_name_rejected() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    app.create_folder(user, None, "Docs").await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({ "name": "Docs" })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_OPERATION");
}

#[tokio::test]
async fn test_star_toggle_round_trip() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let file = app
        .register_file(user, None, "fav", ".txt", 1, "text/plain")
        .await;

    let response = app
        .request("PUT", &format!("/api/entries/{file}/star"), None, Some(user))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["is_starred"], true);

    let response = app
        .request("PUT", &format!("/api/entries/{file}/star"), None, Some(user))
        .await;
    assert_eq!(response.data()["is_starred"], false);
}

#[tokio::test]
async fn test_delete_file_reports_count_and_hides_entry() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let file = app
        .register_file(user, None, "gone", ".txt", 1, "text/plain")
        .await;

    let response = app
        .request("DELETE", &format!("/api/entries/{file}"), None, Some(user))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["deleted"], 1);

    let response = app
        .request("GET", &format!("/api/entries/{file}"), None, Some(user))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
