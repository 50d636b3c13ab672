mod common;

use axum::http::StatusCode;
use common::{TestApp, spawn_app};
use serde_json::{Value, json};

async fn submit(app: &TestApp, blog_id: i64, content: &str) -> i64 {
    let (status, body) = app
        .send_anonymous(
            "POST",
            "/api/comments",
            json!({
                "blog_id": blog_id,
                "blog_slug": "on-silence",
                "author_name": "Maria",
                "author_email": "maria@example.org",
                "content": content,
                "status": "approved"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_i64().unwrap()
}

async fn moderate(app: &TestApp, id: i64, status: &str) {
    let (code, _) = app
        .send_json("PUT", &format!("/api/comments/{}", id), json!({"status": status}))
        .await;
    assert_eq!(code, StatusCode::OK);
}

fn contents(list: &Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_new_comment_is_pending() {
    let app = spawn_app().await;
    let blog_id = app.create_blog("On Silence").await;

    let (status, body) = app
        .send_anonymous(
            "POST",
            "/api/comments",
            json!({
                "blog_id": blog_id,
                "author_name": "Maria",
                "author_email": "maria@example.org",
                "content": "Beautiful",
                "status": "approved"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Comment submitted for moderation");

    let (status, all) = app.admin_get("/api/comments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all[0]["status"], "pending");
    assert!(all[0]["blog_slug"].is_null());

    let (_, public) = app.get(&format!("/api/comments/blog/{}", blog_id)).await;
    assert_eq!(public, json!([]));
}

#[tokio::test]
async fn test_comment_on_missing_blog() {
    let app = spawn_app().await;
    let (status, body) = app
        .send_anonymous(
            "POST",
            "/api/comments",
            json!({
                "blog_id": 404,
                "author_name": "Maria",
                "author_email": "maria@example.org",
                "content": "Hello?"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Blog not found");
}

#[tokio::test]
async fn test_comment_validation() {
    let app = spawn_app().await;
    let blog_id = app.create_blog("On Silence").await;

    let (status, _) = app
        .send_anonymous(
            "POST",
            "/api/comments",
            json!({
                "blog_id": blog_id,
                "author_name": "Maria",
                "author_email": "nope",
                "content": "Hi"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .send_anonymous(
            "POST",
            "/api/comments",
            json!({
                "blog_id": blog_id,
                "author_name": "Maria",
                "author_email": "maria@example.org",
                "content": ""
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_public_lists_show_only_approved_oldest_first() {
    let app = spawn_app().await;
    let blog_id = app.create_blog("On Silence").await;

    let first = submit(&app, blog_id, "first").await;
    let second = submit(&app, blog_id, "second").await;
    let third = submit(&app, blog_id, "third").await;
    moderate(&app, third, "approved").await;
    moderate(&app, first, "approved").await;
    moderate(&app, second, "spam").await;

    let (status, by_blog) = app.get(&format!("/api/comments/blog/{}", blog_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contents(&by_blog), vec!["first", "third"]);

    let (status, by_slug) = app.get("/api/comments/slug/on-silence").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contents(&by_slug), vec!["first", "third"]);

    let (_, unknown) = app.get("/api/comments/slug/elsewhere").await;
    assert_eq!(unknown, json!([]));

    let (status, _) = app.get("/api/comments/blog/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_list_requires_key_and_filters() {
    let app = spawn_app().await;
    let blog_id = app.create_blog("On Silence").await;

    let a = submit(&app, blog_id, "a").await;
    submit(&app, blog_id, "b").await;
    submit(&app, blog_id, "c").await;
    moderate(&app, a, "rejected").await;

    let (status, _) = app
        .request(common::json_request("GET", "/api/comments", Value::Null, None))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, all) = app.admin_get("/api/comments").await;
    assert_eq!(contents(&all), vec!["c", "b", "a"]);

    let (_, pending) = app.admin_get("/api/comments?status=pending").await;
    assert_eq!(contents(&pending), vec!["c", "b"]);

    let (_, rejected) = app.admin_get("/api/comments?status=rejected").await;
    assert_eq!(contents(&rejected), vec!["a"]);

    let (_, everything) = app.admin_get("/api/comments?status=").await;
    assert_eq!(everything.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_comment() {
    let app = spawn_app().await;
    let blog_id = app.create_blog("On Silence").await;
    let id = submit(&app, blog_id, "original").await;
    let uri = format!("/api/comments/{}", id);

    let (status, body) = app
        .send_json("PUT", &uri, json!({"status": "published"}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);

    let (status, body) = app
        .send_json("PUT", &uri, json!({"status": "", "content": "edited"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Comment updated successfully");

    let (_, all) = app.admin_get("/api/comments").await;
    assert_eq!(all[0]["content"], "edited");
    assert_eq!(all[0]["status"], "pending");

    let (status, _) = app
        .send_json("PUT", "/api/comments/999", json!({"status": "approved"}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .send_anonymous("PUT", &uri, json!({"status": "approved"}))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_comment() {
    let app = spawn_app().await;
    let blog_id = app.create_blog("On Silence").await;
    let id = submit(&app, blog_id, "bye").await;
    let uri = format!("/api/comments/{}", id);

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Comment deleted successfully");

    let (status, body) = app.delete(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Comment not found");
}
