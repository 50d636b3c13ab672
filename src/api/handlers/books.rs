use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::AppState;
use crate::api::error::AppError;
use crate::api::extract::{ValidatedJson, parse_id};
use crate::entities::books;
use crate::models::book::{CreateBookRequest, UpdateBookRequest};
use crate::models::{CreatedResponse, MessageResponse};

#[utoipa::path(
    get,
    path = "/api/books",
    responses((status = 200, description = "Books, newest first", body = [books::Model])),
    tag = "books"
)]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<books::Model>>, AppError> {
    Ok(Json(state.books.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book", body = books::Model),
        (status = 404, description = "Book not found")
    ),
    tag = "books"
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<books::Model>, AppError> {
    let id = parse_id(&id, "book")?;
    Ok(Json(state.books.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/books",
    request_body = CreateBookRequest,
    responses(
        (status = 201, description = "Book created", body = CreatedResponse),
        (status = 400, description = "Invalid request body"),
        (status = 401, description = "Missing or invalid API key")
    ),
    security(("api_key" = [])),
    tag = "books"
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateBookRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = state.books.create(req).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

#[utoipa::path(
    put,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book ID")),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 404, description = "Book not found")
    ),
    security(("api_key" = [])),
    tag = "books"
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateBookRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "book")?;
    state.books.update(id, req).await?;
    Ok(Json(MessageResponse::new("Book updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found")
    ),
    security(("api_key" = [])),
    tag = "books"
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "book")?;
    state.books.delete(id).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
