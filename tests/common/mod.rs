#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use monk_reflections_api::config::AppConfig;
use monk_reflections_api::infrastructure::database::run_migrations;
use monk_reflections_api::services::api_keys::create_api_key;
use monk_reflections_api::services::storage::StorageService;
use monk_reflections_api::{AppState, create_app};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use tower::ServiceExt;

/// In-memory object store that records every call.
#[derive(Default)]
pub struct MockStorage {
    pub objects: Mutex<HashMap<String, (Vec<u8>, String)>>,
    pub puts: Mutex<Vec<String>>,
    pub deleted: Mutex<Vec<String>>,
    pub fail_deletes: AtomicBool,
}

impl MockStorage {
    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }

    pub fn object(&self, key: &str) -> Option<(Vec<u8>, String)> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageService for MockStorage {
    async fn upload_file(&self, key: &str, data: Vec<u8>, content_type: &str) -> anyhow::Result<()> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), (data, content_type.to_string()));
        self.puts.lock().unwrap().push(key.to_string());
        Ok(())
    }

    async fn delete_file(&self, key: &str) -> anyhow::Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            anyhow::bail!("AccessDenied: delete not permitted");
        }
        self.objects.lock().unwrap().remove(key);
        self.deleted.lock().unwrap().push(key.to_string());
        Ok(())
    }

    async fn presigned_url(&self, key: &str, expires_in: Duration) -> anyhow::Result<String> {
        Ok(format!(
            "https://cdn.test/{}?X-Amz-Expires={}&X-Amz-Signature=abc",
            key,
            expires_in.as_secs()
        ))
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://cdn.test/{}", key)
    }
}

pub struct TestApp {
    pub app: Router,
    pub db: DatabaseConnection,
    pub storage: Option<Arc<MockStorage>>,
    /// Raw key accepted by the API key gate.
    pub api_key: String,
}

pub async fn setup_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    run_migrations(&db).await.unwrap();
    db
}

pub async fn spawn_app() -> TestApp {
    build_app(true).await
}

pub async fn spawn_app_without_storage() -> TestApp {
    build_app(false).await
}

async fn build_app(with_storage: bool) -> TestApp {
    let db = setup_db().await;
    let (_, api_key) = create_api_key(&db, Some("test".to_string())).await.unwrap();

    let storage = with_storage.then(|| Arc::new(MockStorage::default()));
    let state = AppState::new(
        db.clone(),
        storage
            .clone()
            .map(|s| s as Arc<dyn StorageService>),
        AppConfig::default(),
    );

    TestApp {
        app: create_app(state),
        db,
        storage,
        api_key,
    }
}

impl TestApp {
    pub fn storage(&self) -> &MockStorage {
        self.storage.as_deref().expect("app has storage")
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    pub async fn request(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn admin_get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header("Authorization", self.bearer())
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Sends JSON with the test API key.
    pub async fn send_json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(json_request(method, uri, body, Some(&self.bearer())))
            .await
    }

    pub async fn send_anonymous(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(json_request(method, uri, body, None)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .header("Authorization", self.bearer())
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Creates a blog post and returns its id.
    pub async fn create_blog(&self, title: &str) -> i64 {
        let (status, body) = self
            .send_json(
                "POST",
                "/api/blogs",
                serde_json::json!({
                    "title": title,
                    "content": {"blocks": [{"type": "paragraph", "text": "Hello"}]},
                    "author": "Brother Thomas"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);
        body["id"].as_i64().unwrap()
    }
}

pub fn json_request(method: &str, uri: &str, body: Value, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(auth) = authorization {
        builder = builder.header("Authorization", auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub const BOUNDARY: &str = "----monkreflectionsboundary7MA4YWxkTrZu0gW";

/// Multipart body with an `image` part and an optional `alt_text` part.
pub fn multipart_body(filename: &str, content_type: &str, data: &[u8], alt_text: Option<&str>) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(b"\r\n");
    if let Some(alt) = alt_text {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"alt_text\"\r\n\r\n{alt}\r\n")
                .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn upload_request(blog_id: i64, body: Vec<u8>, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(format!("/api/blogs/{}/upload-image", blog_id))
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        );
    if let Some(auth) = authorization {
        builder = builder.header("Authorization", auth);
    }
    builder.body(Body::from(body)).unwrap()
}

/// A small, valid PNG.
pub fn png_bytes() -> Vec<u8> {
    encode_sample(image::ImageOutputFormat::Png)
}

pub fn jpeg_bytes() -> Vec<u8> {
    encode_sample(image::ImageOutputFormat::Jpeg(95))
}

fn encode_sample(format: image::ImageOutputFormat) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_fn(48, 48, |x, y| {
        image::Rgb([(x * 5) as u8, (y * 5) as u8, ((x + y) * 2) as u8])
    }));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, format).unwrap();
    out.into_inner()
}
