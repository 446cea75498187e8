//! Axum route handlers for the Weekly Planner API.

use std::sync::MutexGuard;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{lenient_usize, ApiJson};
use crate::planner::schedule::{Weekday, WeeklySchedule};
use crate::planner::store::ScheduleStore;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateScheduleRequest {
    #[serde(deserialize_with = "lenient_usize")]
    pub post_frequency: usize,
    pub preferred_days: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub(crate) fn lock_store(state: &AppState) -> Result<MutexGuard<'_, ScheduleStore>, AppError> {
    state
        .schedule
        .lock()
        .map_err(|_| AppError::Internal(anyhow::anyhow!("schedule store lock poisoned")))
}

pub(crate) fn parse_day(raw: &str) -> Result<Weekday, AppError> {
    raw.parse::<Weekday>()
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// POST /api/weekly-planner/
///
/// Replaces the current schedule with a freshly generated one.
pub async fn handle_generate_schedule(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateScheduleRequest>,
) -> Result<Json<WeeklySchedule>, AppError> {
    let mut store = lock_store(&state)?;
    let schedule = store.generate(request.post_frequency, request.preferred_days.as_slice())?;
    Ok(Json(schedule.clone()))
}

/// GET /api/weekly-planner/
pub async fn handle_get_schedule(
    State(state): State<AppState>,
) -> Result<Json<WeeklySchedule>, AppError> {
    let store = lock_store(&state)?;
    let schedule = store.get();
    if schedule.is_empty() {
        return Err(AppError::NotFound(
            "No schedule has been generated yet.".to_string(),
        ));
    }
    Ok(Json(schedule.clone()))
}

/// PUT /api/weekly-planner/:day
pub async fn handle_update_post(
    State(state): State<AppState>,
    Path(day): Path<String>,
    ApiJson(request): ApiJson<UpdatePostRequest>,
) -> Result<Json<WeeklySchedule>, AppError> {
    let day = parse_day(&day)?;
    let content = request
        .content
        .ok_or_else(|| AppError::Validation("Missing 'content' field".to_string()))?;

    let mut store = lock_store(&state)?;
    let schedule = store.update(day, content)?;
    Ok(Json(schedule.clone()))
}

/// DELETE /api/weekly-planner/:day
pub async fn handle_delete_post(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<WeeklySchedule>, AppError> {
    let day = parse_day(&day)?;
    let mut store = lock_store(&state)?;
    let schedule = store.delete(day)?;
    Ok(Json(schedule.clone()))
}

/// DELETE /api/weekly-planner/reset
pub async fn handle_reset_schedule(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    lock_store(&state)?.reset()?;
    Ok(Json(MessageResponse {
        message: "Schedule reset successfully.".to_string(),
    }))
}
