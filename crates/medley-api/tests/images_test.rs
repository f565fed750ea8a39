//! Image API integration tests.
//!
//! Image upload is a single server-side operation: one request performs the
//! media-service ingest and the metadata write. Lifecycle tests need Docker
//! for testcontainers Postgres and are ignored by default.

mod helpers;

use axum_test::multipart::{MultipartForm, Part};
use helpers::auth::bearer_for;
use helpers::{api_path, fixtures, setup_db_app, setup_stub_app, setup_stub_app_with_limits};
use serde_json::json;

fn image_form(data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data).file_name("photo.png").mime_type("image/png"),
    )
}

#[tokio::test]
async fn test_list_requires_auth() {
    let app = setup_stub_app().await;

    let response = app.server.get(&api_path("/images")).await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_upload_rejects_missing_file() {
    let app = setup_stub_app().await;

    let response = app
        .server
        .post(&api_path("/images"))
        .add_header("Authorization", bearer_for("user_1"))
        .multipart(MultipartForm::new().add_text("title", "A photo"))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(app.cloud.upload_count(), 0);
}

#[tokio::test]
async fn test_upload_rejects_oversized_before_ingest() {
    let app = setup_stub_app_with_limits(1024, 1024).await;

    let response = app
        .server
        .post(&api_path("/images"))
        .add_header("Authorization", bearer_for("user_1"))
        .multipart(image_form(fixtures::bytes_of_size(4096)))
        .await;

    assert_eq!(response.status_code(), 413);
    assert_eq!(app.cloud.upload_count(), 0);
}

#[tokio::test]
#[ignore = "requires Docker for testcontainers Postgres"]
async fn test_image_lifecycle() {
    let db = setup_db_app().await;
    let app = &db.app;

    // Title is optional for images.
    let response = app
        .server
        .post(&api_path("/images"))
        .add_header("Authorization", bearer_for("user_1"))
        .multipart(image_form(fixtures::create_minimal_png()))
        .await;
    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    let content_id = body["content_id"].as_str().unwrap().to_string();
    assert!(!content_id.is_empty());
    assert!(body["title"].is_null());
    assert!(body["thumbnail_url"].as_str().unwrap().contains(&content_id));

    let response = app
        .server
        .get(&api_path("/images"))
        .add_header("Authorization", bearer_for("user_1"))
        .await;
    assert_eq!(response.status_code(), 200);
    let listed: serde_json::Value = response.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let response = app
        .server
        .delete(&api_path("/images"))
        .add_header("Authorization", bearer_for("user_1"))
        .json(&json!({ "content_id": content_id }))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(app.cloud.destroyed_ids(), vec![content_id.clone()]);

    let response = app
        .server
        .get(&api_path("/images"))
        .add_header("Authorization", bearer_for("user_1"))
        .await;
    let listed: serde_json::Value = response.json();
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires Docker for testcontainers Postgres"]
async fn test_delete_missing_image_returns_not_found() {
    let db = setup_db_app().await;
    let app = &db.app;

    let response = app
        .server
        .delete(&api_path("/images"))
        .add_header("Authorization", bearer_for("user_1"))
        .json(&json!({ "content_id": "gallery/never-existed" }))
        .await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(app.cloud.destroy_count(), 0);
}
