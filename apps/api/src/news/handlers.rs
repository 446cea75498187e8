//! Axum route handlers for the News API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::ApiJson;
use crate::news::feed::{fetch_industry_news, industry_from_profile, NewsItem};
use crate::profile::models::{non_blank, BusinessProfile};
use crate::state::AppState;

/// Either an explicit industry or a full business profile to take it from.
#[derive(Debug, Deserialize)]
pub struct NewsRequest {
    pub industry: Option<String>,
    pub profile: Option<BusinessProfile>,
}

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub news: Vec<NewsItem>,
}

/// POST /api/news/industry-news
pub async fn handle_industry_news(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NewsRequest>,
) -> Result<Json<NewsResponse>, AppError> {
    let industry = non_blank(request.industry.as_deref())
        .map(str::to_string)
        .or_else(|| {
            request
                .profile
                .as_ref()
                .map(industry_from_profile)
                .filter(|i| !i.is_empty())
        })
        .ok_or_else(|| AppError::Validation("Industry field is required".to_string()))?;

    let news = fetch_industry_news(&state.http, &industry)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    Ok(Json(NewsResponse { news }))
}
