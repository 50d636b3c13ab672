mod common;

use axum::http::StatusCode;
use common::spawn_app;
use serde_json::json;

#[tokio::test]
async fn test_blog_round_trip() {
    let app = spawn_app().await;
    let content = json!({"blocks": [{"type": "heading", "text": "Silence"}, {"type": "paragraph", "text": "On stillness."}]});

    let (status, body) = app
        .send_json(
            "POST",
            "/api/blogs",
            json!({"title": "On Silence", "content": content, "author": "Brother Thomas"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();

    let (status, blog) = app.get(&format!("/api/blogs/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(blog["title"], "On Silence");
    assert_eq!(blog["content"], content);
    assert_eq!(blog["author"], "Brother Thomas");
}

#[tokio::test]
async fn test_blog_author_is_optional() {
    let app = spawn_app().await;
    let (status, body) = app
        .send_json("POST", "/api/blogs", json!({"title": "Anon", "content": {}}))
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, blog) = app.get(&format!("/api/blogs/{}", body["id"])).await;
    assert!(blog["author"].is_null());
}

#[tokio::test]
async fn test_update_blog_content_only() {
    let app = spawn_app().await;
    let id = app.create_blog("Keep my title").await;

    let (status, _) = app
        .send_json(
            "PUT",
            &format!("/api/blogs/{}", id),
            json!({"content": {"blocks": []}}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, blog) = app.get(&format!("/api/blogs/{}", id)).await;
    assert_eq!(blog["title"], "Keep my title");
    assert_eq!(blog["content"], json!({"blocks": []}));
    assert_eq!(blog["author"], "Brother Thomas");
}

#[tokio::test]
async fn test_missing_blog() {
    let app = spawn_app().await;

    let (status, body) = app.get("/api/blogs/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Blog not found");

    let (status, _) = app.delete("/api/blogs/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.get("/api/blogs/forty-two").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid blog ID");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = spawn_app().await;
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/blogs")
        .header("Content-Type", "application/json")
        .header("Authorization", app.bearer())
        .body(axum::body::Body::from("{\"title\": "))
        .unwrap();

    let (status, body) = app.request(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_delete_blog_removes_comments() {
    let app = spawn_app().await;
    let id = app.create_blog("Short lived").await;

    let (status, _) = app
        .send_anonymous(
            "POST",
            "/api/comments",
            json!({
                "blog_id": id,
                "author_name": "Ana",
                "author_email": "ana@example.com",
                "content": "First!"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app.delete(&format!("/api/blogs/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Blog deleted successfully");

    let (_, comments) = app
        .request(common::json_request(
            "GET",
            "/api/comments",
            json!(null),
            Some(&app.bearer()),
        ))
        .await;
    assert_eq!(comments, json!([]));
}
