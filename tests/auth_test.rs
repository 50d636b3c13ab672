mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{json_request, spawn_app};
use monk_reflections_api::utils::hash::hash_api_key;
use sea_orm::{ConnectionTrait, Statement};
use serde_json::json;
use tower::ServiceExt;

fn new_blog() -> serde_json::Value {
    json!({"title": "Gate", "content": {"text": "x"}})
}

#[tokio::test]
async fn test_missing_authorization_header() {
    let app = spawn_app().await;

    let (status, body) = app.request(json_request("POST", "/api/blogs", new_blog(), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Authorization header required");
}

#[tokio::test]
async fn test_empty_bearer_key() {
    let app = spawn_app().await;

    let (status, body) = app
        .request(json_request("POST", "/api/blogs", new_blog(), Some("Bearer ")))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "API key required");
}

#[tokio::test]
async fn test_unknown_key_is_rejected() {
    let app = spawn_app().await;

    let (status, body) = app
        .request(json_request(
            "POST",
            "/api/blogs",
            new_blog(),
            Some("Bearer not-a-real-key"),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid API key");

    let (_, blogs) = app.get("/api/blogs").await;
    assert_eq!(blogs, json!([]));
}

#[tokio::test]
async fn test_key_accepted_with_or_without_bearer_prefix() {
    let app = spawn_app().await;

    let bearer = app.bearer();
    let (status, _) = app
        .request(json_request("POST", "/api/blogs", new_blog(), Some(&bearer)))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let raw = app.api_key.clone();
    let (status, _) = app
        .request(json_request("POST", "/api/blogs", new_blog(), Some(&raw)))
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_stored_hash_does_not_authenticate() {
    let app = spawn_app().await;
    let hash = format!("Bearer {}", hash_api_key(&app.api_key));

    let (status, body) = app
        .request(json_request("POST", "/api/blogs", new_blog(), Some(&hash)))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid API key");
}

#[tokio::test]
async fn test_key_store_failure_is_service_unavailable() {
    let app = spawn_app().await;
    app.db
        .execute(Statement::from_string(
            app.db.get_database_backend(),
            "DROP TABLE api_keys".to_owned(),
        ))
        .await
        .unwrap();

    let (status, body) = app.send_json("POST", "/api/blogs", new_blog()).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Unable to validate API key");
}

#[tokio::test]
async fn test_public_routes_need_no_key() {
    let app = spawn_app().await;

    for uri in ["/api/forms", "/api/blogs", "/api/events", "/api/books"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body, json!([]));
    }
}

#[tokio::test]
async fn test_health_reports_storage_state() {
    let app = spawn_app().await;
    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "monk-reflections-api");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["image_uploads"], "enabled");

    let app = common::spawn_app_without_storage().await;
    let (_, body) = app.get("/health").await;
    assert_eq!(body["image_uploads"], "disabled");
}

#[tokio::test]
async fn test_request_id_is_echoed_or_minted() {
    let app = spawn_app().await;

    let response = app
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "abc-123");

    let response = app
        .app
        .clone()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let minted = response.headers()["x-request-id"].to_str().unwrap();
    assert_eq!(minted.len(), 36);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = spawn_app().await;
    let (status, body) = app.get("/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/blogs/{id}/upload-image"].is_object());
}
