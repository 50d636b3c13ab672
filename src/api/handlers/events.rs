use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::AppState;
use crate::api::error::AppError;
use crate::api::extract::{ValidatedJson, parse_id};
use crate::entities::events;
use crate::models::event::{CreateEventRequest, UpdateEventRequest};
use crate::models::{CreatedResponse, MessageResponse};

#[utoipa::path(
    get,
    path = "/api/events",
    responses((status = 200, description = "Events, latest start date first", body = [events::Model])),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<events::Model>>, AppError> {
    Ok(Json(state.events.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event", body = events::Model),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<events::Model>, AppError> {
    let id = parse_id(&id, "event")?;
    Ok(Json(state.events.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = CreatedResponse),
        (status = 400, description = "Invalid request body"),
        (status = 401, description = "Missing or invalid API key")
    ),
    security(("api_key" = [])),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = state.events.create(req).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(("id" = i32, Path, description = "Event ID")),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated", body = MessageResponse),
        (status = 404, description = "Event not found")
    ),
    security(("api_key" = [])),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateEventRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "event")?;
    state.events.update(id, req).await?;
    Ok(Json(MessageResponse::new("Event updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 404, description = "Event not found")
    ),
    security(("api_key" = [])),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id, "event")?;
    state.events.delete(id).await?;
    Ok(Json(MessageResponse::new("Event deleted successfully")))
}
