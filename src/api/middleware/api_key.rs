use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::AppState;
use crate::api::error::AppError;
use crate::services::api_keys::authenticate;

/// Gate for mutating routes. Requests pass through untouched once the key
/// resolves.
pub async fn api_key_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let api_key = authenticate(&state.db, header).await?;
    tracing::debug!(api_key_id = api_key.id, "API key accepted");

    Ok(next.run(req).await)
}
