use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::AppState;
use crate::api::error::AppError;
use crate::api::extract::{ValidatedJson, parse_id};
use crate::entities::forms;
use crate::models::form::{CreateFormRequest, UpdateFormRequest};
use crate::models::{CreatedResponse, MessageResponse};

#[utoipa::path(
    get,
    path = "/api/forms",
    responses(
        (status = 200, description = "Form submissions, newest first", body = [forms::Model])
    ),
    tag = "forms"
)]
pub async fn list_forms(State(state): State<AppState>) -> Result<Json<Vec<forms::Model>>, AppError> {
    Ok(Json(state.forms.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/forms/{id}",
    params(("id" = i32, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Form submission", body = forms::Model),
        (status = 400, description = "Invalid form ID"),
        (status = 404, description = "Form not found")
    ),
    tag = "forms"
)]
pub async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<forms::Model>, AppError> {
    let id = parse_id(&id, "form")?;
    Ok(Json(state.forms.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/forms",
    request_body = CreateFormRequest,
    responses(
        (status = 201, description = "Form submitted", body = CreatedResponse),
        (status = 400, description = "Invalid request body")
    ),
    tag = "forms"
)]
pub async fn create_form(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFormRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = state.forms.create(req).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

#[utoipa::path(
    put,
    path = "/api/forms/{id}",
    params(("id" = i32, Path, description = "Form ID")),
    request_body = UpdateFormRequest,
    responses(
        (status = 200, description = "Form updated", body = MessageResponse),
        (status = 401, description = "Missing or invalid API key"),
        (status = 404, description = "Form not found")
    ),
    security(("api_key" = [])),
    tag = "forms"
)]
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateFormRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "form")?;
    state.forms.update(id, req).await?;
    Ok(Json(MessageResponse::new("Form updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/forms/{id}",
    params(("id" = i32, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Form deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid API key"),
        (status = 404, description = "Form not found")
    ),
    security(("api_key" = [])),
    tag = "forms"
)]
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "form")?;
    state.forms.delete(id).await?;
    Ok(Json(MessageResponse::new("Form deleted successfully")))
}
