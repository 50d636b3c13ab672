use axum::{
    Json,
    extract::{Multipart, Path, State, multipart::MultipartError},
    http::StatusCode,
};

use crate::AppState;
use crate::api::error::AppError;
use crate::api::extract::{ValidatedJson, parse_id};
use crate::entities::{blog_images, blogs};
use crate::models::blog::{
    CreateBlogRequest, SignedUrlResponse, UpdateBlogRequest, UploadImageResponse,
};
use crate::models::{CreatedResponse, MessageResponse};
use crate::services::image_upload::{BlogImageService, ImageUpload, SIGNED_URL_TTL};

#[utoipa::path(
    get,
    path = "/api/blogs",
    responses((status = 200, description = "Blog posts, newest first", body = [blogs::Model])),
    tag = "blogs"
)]
pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<blogs::Model>>, AppError> {
    Ok(Json(state.blogs.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(("id" = i32, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog post", body = blogs::Model),
        (status = 404, description = "Blog not found")
    ),
    tag = "blogs"
)]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<blogs::Model>, AppError> {
    let id = parse_id(&id, "blog")?;
    Ok(Json(state.blogs.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Blog created", body = CreatedResponse),
        (status = 400, description = "Invalid request body"),
        (status = 401, description = "Missing or invalid API key")
    ),
    security(("api_key" = [])),
    tag = "blogs"
)]
pub async fn create_blog(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateBlogRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = state.blogs.create(req).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

#[utoipa::path(
    put,
    path = "/api/blogs/{id}",
    params(("id" = i32, Path, description = "Blog ID")),
    request_body = UpdateBlogRequest,
    responses(
        (status = 200, description = "Blog updated", body = MessageResponse),
        (status = 404, description = "Blog not found")
    ),
    security(("api_key" = [])),
    tag = "blogs"
)]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateBlogRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "blog")?;
    state.blogs.update(id, req).await?;
    Ok(Json(MessageResponse::new("Blog updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = i32, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Blog deleted", body = MessageResponse),
        (status = 404, description = "Blog not found")
    ),
    security(("api_key" = [])),
    tag = "blogs"
)]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "blog")?;
    state.blogs.delete(id).await?;
    Ok(Json(MessageResponse::new("Blog deleted successfully")))
}

fn image_service(state: &AppState) -> Result<&BlogImageService, AppError> {
    state.images.as_deref().ok_or_else(|| {
        AppError::ServiceUnavailable(
            "Image upload service is not available. Object storage is not configured.".to_string(),
        )
    })
}

#[utoipa::path(
    post,
    path = "/api/blogs/{id}/upload-image",
    params(("id" = i32, Path, description = "Blog ID")),
    request_body(content = String, description = "Multipart form with an `image` file and optional `alt_text`", content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image stored", body = UploadImageResponse),
        (status = 404, description = "Blog not found"),
        (status = 413, description = "Image larger than 5MB"),
        (status = 415, description = "Not a jpg, png or gif"),
        (status = 500, description = "Image stored but not recorded; cleanup outcome in body"),
        (status = 503, description = "Object storage not configured")
    ),
    security(("api_key" = [])),
    tag = "blogs"
)]
pub async fn upload_blog_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadImageResponse>), AppError> {
    let images = image_service(&state)?;
    let blog_id = parse_id(&id, "blog")?;

    let mut file = None;
    let mut alt_text = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Invalid multipart body"))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("image") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, "Failed to read image"))?;
                file = Some((filename, data));
            }
            Some("alt_text") => {
                alt_text = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| multipart_error(e, "Invalid alt_text"))?,
                );
            }
            _ => {}
        }
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::BadRequest("Image file is required".to_string()))?;

    tracing::info!("📥 Image upload for blog {}: {} ({} bytes)", blog_id, filename, data.len());

    let image = images
        .upload(
            blog_id,
            ImageUpload {
                filename,
                data: data.to_vec(),
                alt_text,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadImageResponse {
            id: image.id,
            image_url: image.image_url,
            image_key: image.image_key,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}/images",
    params(("id" = i32, Path, description = "Blog ID")),
    responses(
        (status = 200, description = "Images attached to the blog", body = [blog_images::Model]),
        (status = 404, description = "Blog not found"),
        (status = 503, description = "Object storage not configured")
    ),
    tag = "blogs"
)]
pub async fn list_blog_images(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<blog_images::Model>>, AppError> {
    let images = image_service(&state)?;
    let blog_id = parse_id(&id, "blog")?;
    Ok(Json(images.list(blog_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}/images/{image_id}/url",
    params(
        ("id" = i32, Path, description = "Blog ID"),
        ("image_id" = i32, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Time-limited signed URL", body = SignedUrlResponse),
        (status = 404, description = "Image not found"),
        (status = 503, description = "Object storage not configured")
    ),
    tag = "blogs"
)]
pub async fn get_blog_image_url(
    State(state): State<AppState>,
    Path((id, image_id)): Path<(String, String)>,
) -> Result<Json<SignedUrlResponse>, AppError> {
    let images = image_service(&state)?;
    let blog_id = parse_id(&id, "blog")?;
    let image_id = parse_id(&image_id, "image")?;

    let url = images.signed_url(blog_id, image_id).await?;
    Ok(Json(SignedUrlResponse {
        url,
        expires_in: SIGNED_URL_TTL.as_secs(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/blogs/{id}/images/{image_id}",
    params(
        ("id" = i32, Path, description = "Blog ID"),
        ("image_id" = i32, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Image deleted", body = MessageResponse),
        (status = 404, description = "Image not found"),
        (status = 503, description = "Object storage not configured")
    ),
    security(("api_key" = [])),
    tag = "blogs"
)]
pub async fn delete_blog_image(
    State(state): State<AppState>,
    Path((id, image_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, AppError> {
    let images = image_service(&state)?;
    let blog_id = parse_id(&id, "blog")?;
    let image_id = parse_id(&image_id, "image")?;

    images.delete(blog_id, image_id).await?;
    Ok(Json(MessageResponse::new("Image deleted successfully")))
}

/// Bodies cut off by the request limit surface as 413, everything else as 400.
fn multipart_error(e: MultipartError, context: &str) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge(
            "Request body too large. Maximum 5MB allowed".to_string(),
        );
    }
    AppError::BadRequest(format!("{}: {}", context, e))
}
