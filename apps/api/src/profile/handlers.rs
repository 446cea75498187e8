//! Axum route handlers for the Business Profile API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::profile::analyzer::profile_from_website;
use crate::profile::models::{non_blank, BusinessProfile};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub website_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: BusinessProfile,
}

/// POST /api/business/profile
///
/// Scrapes the website and infers a structured business profile from it.
pub async fn handle_generate_profile(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    let url = non_blank(request.website_url.as_deref())
        .ok_or_else(|| AppError::Validation("Missing 'url' parameter".to_string()))?;

    let profile = profile_from_website(&state.http, state.llm.as_ref(), url)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(ProfileResponse { profile }))
}
