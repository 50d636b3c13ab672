use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::AppState;
use crate::api::error::AppError;
use crate::api::extract::{ValidatedJson, parse_id};
use crate::entities::comments;
use crate::models::MessageResponse;
use crate::models::comment::{
    CommentCreatedResponse, CommentFilter, CreateCommentRequest, UpdateCommentRequest,
};

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment queued for moderation", body = CommentCreatedResponse),
        (status = 400, description = "Invalid request body"),
        (status = 404, description = "Blog not found")
    ),
    tag = "comments"
)]
pub async fn create_comment(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentCreatedResponse>), AppError> {
    let id = state.comments.create(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(CommentCreatedResponse {
            id,
            message: "Comment submitted for moderation".to_string(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/comments/blog/{blog_id}",
    params(("blog_id" = i32, Path, description = "Blog ID")),
    responses((status = 200, description = "Approved comments, oldest first", body = [comments::Model])),
    tag = "comments"
)]
pub async fn list_blog_comments(
    State(state): State<AppState>,
    Path(blog_id): Path<String>,
) -> Result<Json<Vec<comments::Model>>, AppError> {
    let blog_id = parse_id(&blog_id, "blog")?;
    Ok(Json(state.comments.list_approved_for_blog(blog_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/comments/slug/{slug}",
    params(("slug" = String, Path, description = "Blog slug")),
    responses((status = 200, description = "Approved comments, oldest first", body = [comments::Model])),
    tag = "comments"
)]
pub async fn list_slug_comments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<comments::Model>>, AppError> {
    Ok(Json(state.comments.list_approved_for_slug(&slug).await?))
}

#[utoipa::path(
    get,
    path = "/api/comments",
    params(CommentFilter),
    responses(
        (status = 200, description = "All comments, newest first", body = [comments::Model]),
        (status = 401, description = "Missing or invalid API key")
    ),
    security(("api_key" = [])),
    tag = "comments"
)]
pub async fn list_comments(
    State(state): State<AppState>,
    Query(filter): Query<CommentFilter>,
) -> Result<Json<Vec<comments::Model>>, AppError> {
    Ok(Json(state.comments.list(filter.status.as_deref()).await?))
}

#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    params(("id" = i32, Path, description = "Comment ID")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = MessageResponse),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Comment not found")
    ),
    security(("api_key" = [])),
    tag = "comments"
)]
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateCommentRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "comment")?;
    state.comments.update(id, req).await?;
    Ok(Json(MessageResponse::new("Comment updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted", body = MessageResponse),
        (status = 404, description = "Comment not found")
    ),
    security(("api_key" = [])),
    tag = "comments"
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "comment")?;
    state.comments.delete(id).await?;
    Ok(Json(MessageResponse::new("Comment deleted successfully")))
}
