//! Post generation pipeline.
//!
//! Flow: build_prompt → completion call → sanitize.
//! One completion call per request; failures propagate without retry.

use tracing::info;

use crate::content::prompts::{build_prompt, PostPreferences, GENERATION_SYSTEM};
use crate::content::sanitizer::sanitize;
use crate::llm_client::{CompletionRequest, CompletionService, LlmError};
use crate::profile::models::BusinessProfile;

/// Low-moderate sampling temperature; keeps phrasing consistent between runs.
pub const GENERATION_TEMPERATURE: f32 = 0.6;

/// Generates at most `count` cleaned, ready-to-publish post strings.
pub async fn generate_posts(
    llm: &dyn CompletionService,
    profile: &BusinessProfile,
    news: &[String],
    preferences: &PostPreferences,
    count: usize,
) -> Result<Vec<String>, LlmError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let prompt = build_prompt(profile, news, preferences, count);
    let raw = llm
        .complete(CompletionRequest {
            system: GENERATION_SYSTEM,
            prompt: &prompt,
            temperature: Some(GENERATION_TEMPERATURE),
        })
        .await?;

    let posts = sanitize(&raw, count);
    info!(
        "Generated {}/{} posts for {} ({:?})",
        posts.len(),
        count,
        profile.display_name(),
        preferences.post_type
    );
    Ok(posts)
}
