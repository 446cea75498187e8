//! Axum route handlers for the Content API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::content::generator::generate_posts;
use crate::content::prompts::PostPreferences;
use crate::errors::AppError;
use crate::extract::{lenient_opt_usize, ApiJson};
use crate::profile::models::BusinessProfile;
use crate::state::AppState;

const DEFAULT_POST_COUNT: usize = 5;

/// A headline passed in by the client: either plain text or an item from
/// the news endpoint (`{headline, url}`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Headline {
    Text(String),
    Item { headline: String },
}

impl Headline {
    fn into_text(self) -> String {
        match self {
            Headline::Text(text) => text,
            Headline::Item { headline } => headline,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GeneratePostsRequest {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub tone: Option<String>,
    pub post_type: Option<String>,
    #[serde(default)]
    pub news: Vec<Headline>,
    #[serde(default, deserialize_with = "lenient_opt_usize")]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct GeneratePostsResponse {
    pub posts: Vec<String>,
}

/// POST /api/content/generate-posts
pub async fn handle_generate_posts(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GeneratePostsRequest>,
) -> Result<Json<GeneratePostsResponse>, AppError> {
    let profile = BusinessProfile::named(request.name, request.industry);
    let preferences = PostPreferences::new(request.tone.as_deref(), request.post_type.as_deref());
    let news: Vec<String> = request
        .news
        .into_iter()
        .map(Headline::into_text)
        .filter(|h| !h.trim().is_empty())
        .collect();
    let count = request.count.unwrap_or(DEFAULT_POST_COUNT);

    let posts = generate_posts(state.llm.as_ref(), &profile, &news, &preferences, count)
        .await
        .map_err(|e| AppError::ServiceUnavailable(e.to_string()))?;

    Ok(Json(GeneratePostsResponse { posts }))
}
