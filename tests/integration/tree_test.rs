//! Tree integrity over HTTP: moves, cycle rejection, cascade deletion.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_move_into_own_subtree_rejected() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let a = app.create_folder(user, None, "A").await;
    let b = app
        .create_folder(user, Some(&a.to_string()), "B")
        .await;

    // A → B would orphan the A subtree into itself.
    let response = app
        .request(
            "PUT",
            &format!("/api/entries/{a}/move"),
            Some(serde_json::json!({ "targetParentId": b.to_string() })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "INVALID_OPERATION");
}

#[tokio::test]
async fn test_move_onto_itself_rejected() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let a = app.create_folder(user, None, "A").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/entries/{a}/move"),
            Some(serde_json::json!({ "targetParentId": a.to_string() })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_move_to_root_sentinel() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let a = app.create_folder(user, None, "A").await;
    let b = app
        .create_folder(user, Some(&a.to_string()), "B")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/entries/{b}/move"),
            Some(serde_json::json!({ "targetParentId": "root" })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data()["parent_id"].is_null());
}

#[tokio::test]
async fn test_move_file_into_folder() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let docs = app.create_folder(user, None, "docs").await;
    let file = app
        .register_file(user, None, "report", ".pdf", 100, "application/pdf")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/entries/{file}/move"),
            Some(serde_json::json!({ "targetParentId": docs.to_string() })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["parent_id"], docs.to_string());

    let response = app
        .request(
            "GET",
            &format!("/api/entries?parentId={docs}"),
            None,
            Some(user),
        )
        .await;
    assert_eq!(response.data()["files"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_move_target_must_be_live_folder() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let file = app
        .register_file(user, None, "doc", ".txt", 1, "text/plain")
        .await;
    let other = app
        .register_file(user, None, "not-a-folder", ".txt", 1, "text/plain")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/entries/{file}/move"),
            Some(serde_json::json!({ "targetParentId": other.to_string() })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PUT",
            &format!("/api/entries/{file}/move"),
            Some(serde_json::json!({ "targetParentId": Uuid::new_v4().to_string() })),
            Some(user),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_folder_cascades_to_subtree() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let a = app.create_folder(user, None, "A").await;
    let b = app
        .create_folder(user, Some(&a.to_string()), "B")
        .await;
    let f1 = app
        .register_file(user, Some(&a.to_string()), "f1", ".txt", 1, "text/plain")
        .await;
    let f2 = app
        .register_file(user, Some(&b.to_string()), "f2", ".txt", 1, "text/plain")
        .await;
    let survivor = app.create_folder(user, None, "keep").await;

    let response = app
        .request("DELETE", &format!("/api/entries/{a}"), None, Some(user))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["deleted"], 4);

    for id in [a, b, f1, f2] {
        let response = app
            .request("GET", &format!("/api/entries/{id}"), None, Some(user))
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    let response = app
        .request("GET", &format!("/api/entries/{survivor}"), None, Some(user))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_deleted_folder_frees_its_name() {
    let app = TestApp::new().await;
    let user = Uuid::new_v4();

    let docs = app.create_folder(user, None, "Docs").await;
    app.request("DELETE", &format!("/api/entries/{docs}"), None, Some(user))
        .await;

    // Tombstoned siblings no longer block the name.
    let recreated = app.create_folder(user, None, "Docs").await;
    assert_ne!(recreated, docs);
}
