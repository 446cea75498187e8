//! Axum route handlers for the Facebook API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::facebook::credentials::FacebookCredentials;
use crate::facebook::publisher::PublishResult;
use crate::planner::handlers::{lock_store, parse_day};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub credentials: FacebookCredentials,
}

/// Publish parameters, from the query string (GET) or the JSON body (POST).
/// `content` is accepted as an alias of `message`.
#[derive(Debug, Default, Deserialize)]
pub struct PublishRequest {
    pub day: Option<String>,
    #[serde(alias = "content")]
    pub message: Option<String>,
}

/// GET|POST /api/facebook/connect
///
/// Connects a page through the configured publisher and persists its credentials.
pub async fn handle_connect(
    State(state): State<AppState>,
) -> Result<Json<ConnectResponse>, AppError> {
    let credentials = state
        .publisher
        .connect()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;
    state.credentials.save(&credentials)?;
    info!("Connected Facebook page {}", credentials.fb_page_id);

    Ok(Json(ConnectResponse {
        status: "connected",
        credentials,
    }))
}

/// GET /api/facebook/publish?day=Mon[&message=...]
pub async fn handle_publish_query(
    State(state): State<AppState>,
    Query(request): Query<PublishRequest>,
) -> Result<Json<PublishResult>, AppError> {
    publish_scheduled(&state, request).await
}

/// POST /api/facebook/publish { "day": "...", "message": "..." }
///
/// A missing or unreadable body is treated like an empty one.
pub async fn handle_publish_body(
    State(state): State<AppState>,
    body: Option<Json<PublishRequest>>,
) -> Result<Json<PublishResult>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    publish_scheduled(&state, request).await
}

/// Publishes the override message, or the scheduled one, for the requested day.
async fn publish_scheduled(
    state: &AppState,
    request: PublishRequest,
) -> Result<Json<PublishResult>, AppError> {
    let credentials = state.credentials.current();
    if !credentials.is_connected() {
        return Err(AppError::Validation(
            "Facebook page not connected".to_string(),
        ));
    }

    let raw_day = request
        .day
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing 'day' parameter".to_string()))?;
    let day = parse_day(&raw_day)?;

    let scheduled = {
        let store = lock_store(state)?;
        store.get().get(day).map(str::to_string)
    };
    let scheduled = scheduled
        .ok_or_else(|| AppError::NotFound(format!("No scheduled post for '{day}'")))?;

    let message = request
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or(scheduled);

    let result = state
        .publisher
        .publish(&message, &credentials)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(result))
}
