pub mod api;
pub mod config;
pub mod entities;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

use crate::api::handlers::{blogs, books, comments, events, forms, health};
use crate::api::middleware::{api_key::api_key_middleware, request_id};
use crate::config::AppConfig;
use crate::services::blog_service::BlogService;
use crate::services::book_service::BookService;
use crate::services::comment_service::CommentService;
use crate::services::event_service::EventService;
use crate::services::form_service::FormService;
use crate::services::image_upload::BlogImageService;
use crate::services::storage::StorageService;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    middleware::{from_fn, from_fn_with_state},
    routing::{delete, get, post, put},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::health::health_check,
        api::handlers::forms::list_forms,
        api::handlers::forms::get_form,
        api::handlers::forms::create_form,
        api::handlers::forms::update_form,
        api::handlers::forms::delete_form,
        api::handlers::blogs::list_blogs,
        api::handlers::blogs::get_blog,
        api::handlers::blogs::create_blog,
        api::handlers::blogs::update_blog,
        api::handlers::blogs::delete_blog,
        api::handlers::blogs::upload_blog_image,
        api::handlers::blogs::list_blog_images,
        api::handlers::blogs::get_blog_image_url,
        api::handlers::blogs::delete_blog_image,
        api::handlers::events::list_events,
        api::handlers::events::get_event,
        api::handlers::events::create_event,
        api::handlers::events::update_event,
        api::handlers::events::delete_event,
        api::handlers::books::list_books,
        api::handlers::books::get_book,
        api::handlers::books::create_book,
        api::handlers::books::update_book,
        api::handlers::books::delete_book,
        api::handlers::comments::create_comment,
        api::handlers::comments::list_blog_comments,
        api::handlers::comments::list_slug_comments,
        api::handlers::comments::list_comments,
        api::handlers::comments::update_comment,
        api::handlers::comments::delete_comment,
    ),
    components(
        schemas(
            entities::forms::Model,
            entities::blogs::Model,
            entities::blog_images::Model,
            entities::events::Model,
            entities::books::Model,
            entities::comments::Model,
            models::CreatedResponse,
            models::MessageResponse,
            models::form::CreateFormRequest,
            models::form::UpdateFormRequest,
            models::blog::CreateBlogRequest,
            models::blog::UpdateBlogRequest,
            models::blog::UploadImageResponse,
            models::blog::SignedUrlResponse,
            models::event::CreateEventRequest,
            models::event::UpdateEventRequest,
            models::book::CreateBookRequest,
            models::book::UpdateBookRequest,
            models::comment::CreateCommentRequest,
            models::comment::UpdateCommentRequest,
            models::comment::CommentCreatedResponse,
            api::handlers::health::HealthResponse,
        )
    ),
    modifiers(&ApiKeyAuth),
    tags(
        (name = "forms", description = "Contact form submissions"),
        (name = "blogs", description = "Blog posts and their images"),
        (name = "events", description = "Events"),
        (name = "books", description = "Book catalogue"),
        (name = "comments", description = "Moderated blog comments"),
        (name = "system", description = "Health")
    )
)]
pub struct ApiDoc;

struct ApiKeyAuth;

impl Modify for ApiKeyAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    pub forms: Arc<FormService>,
    pub blogs: Arc<BlogService>,
    pub events: Arc<EventService>,
    pub books: Arc<BookService>,
    pub comments: Arc<CommentService>,
    /// `None` when object storage is not configured.
    pub images: Option<Arc<BlogImageService>>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        storage: Option<Arc<dyn StorageService>>,
        config: AppConfig,
    ) -> Self {
        Self {
            forms: Arc::new(FormService::new(db.clone())),
            blogs: Arc::new(BlogService::new(db.clone())),
            events: Arc::new(EventService::new(db.clone())),
            books: Arc::new(BookService::new(db.clone())),
            comments: Arc::new(CommentService::new(db.clone())),
            images: storage.map(|storage| Arc::new(BlogImageService::new(db.clone(), storage))),
            db,
            config,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/forms", get(forms::list_forms).post(forms::create_form))
        .route("/api/forms/:id", get(forms::get_form))
        .route("/api/blogs", get(blogs::list_blogs))
        .route("/api/blogs/:id", get(blogs::get_blog))
        .route("/api/blogs/:id/images", get(blogs::list_blog_images))
        .route(
            "/api/blogs/:id/images/:image_id/url",
            get(blogs::get_blog_image_url),
        )
        .route("/api/events", get(events::list_events))
        .route("/api/events/:id", get(events::get_event))
        .route("/api/books", get(books::list_books))
        .route("/api/books/:id", get(books::get_book))
        .route("/api/comments", post(comments::create_comment))
        .route(
            "/api/comments/blog/:blog_id",
            get(comments::list_blog_comments),
        )
        .route("/api/comments/slug/:slug", get(comments::list_slug_comments));

    let protected = Router::new()
        .route(
            "/api/forms/:id",
            put(forms::update_form).delete(forms::delete_form),
        )
        .route("/api/blogs", post(blogs::create_blog))
        .route(
            "/api/blogs/:id",
            put(blogs::update_blog).delete(blogs::delete_blog),
        )
        .route(
            "/api/blogs/:id/upload-image",
            post(blogs::upload_blog_image)
                .layer(DefaultBodyLimit::max(state.config.max_request_body)),
        )
        .route(
            "/api/blogs/:id/images/:image_id",
            delete(blogs::delete_blog_image),
        )
        .route("/api/events", post(events::create_event))
        .route(
            "/api/events/:id",
            put(events::update_event).delete(events::delete_event),
        )
        .route("/api/books", post(books::create_book))
        .route(
            "/api/books/:id",
            put(books::update_book).delete(books::delete_book),
        )
        .route("/api/comments", get(comments::list_comments))
        .route(
            "/api/comments/:id",
            put(comments::update_comment).delete(comments::delete_comment),
        )
        .route_layer(from_fn_with_state(state.clone(), api_key_middleware));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public)
        .merge(protected)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get(&request_id::REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("unknown");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                    info!("📥 {} {}", request.method(), request.uri());
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        info!(
                            "📤 Finished in {:?} with status {}",
                            latency,
                            response.status()
                        );
                    },
                ),
        )
        .layer(from_fn(request_id::request_id_middleware))
        .layer(cors_layer(&state.config.allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            request_id::REQUEST_ID_HEADER.clone(),
        ])
        .expose_headers([request_id::REQUEST_ID_HEADER.clone()]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    cors.allow_origin(origins)
}
