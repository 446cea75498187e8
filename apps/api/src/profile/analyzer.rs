//! Business profile analysis.
//!
//! Flow: fetch_html → extract_visible_content + page_title → model call → BusinessProfile.

use reqwest::Client;
use thiserror::Error;
use tracing::info;

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::{complete_json, CompletionRequest, CompletionService, LlmError};
use crate::profile::models::BusinessProfile;
use crate::profile::prompts::{prompt_with_title, PROFILE_ANALYST_SYSTEM};
use crate::profile::website::{extract_visible_content, fetch_html, page_title, FetchError};

/// Upper bound on the page text sent to the model, in characters.
pub const MAX_PROFILE_INPUT_CHARS: usize = 10_000;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// Builds the user prompt: title header (if any) + page text, truncated.
pub fn build_profile_prompt(content: &str, title: &str) -> String {
    let full = if title.is_empty() {
        content.to_string()
    } else {
        prompt_with_title(title, content)
    };
    full.chars().take(MAX_PROFILE_INPUT_CHARS).collect()
}

/// Asks the model to infer a business profile from extracted page text.
pub async fn analyze_business_profile(
    llm: &dyn CompletionService,
    content: &str,
    title: &str,
) -> Result<BusinessProfile, LlmError> {
    let prompt = build_profile_prompt(content, title);
    let system = format!("{PROFILE_ANALYST_SYSTEM} {JSON_ONLY_INSTRUCTION}");

    complete_json(
        llm,
        CompletionRequest {
            system: &system,
            prompt: &prompt,
            temperature: None,
        },
    )
    .await
}

/// Full pipeline for one website URL.
pub async fn profile_from_website(
    http: &Client,
    llm: &dyn CompletionService,
    url: &str,
) -> Result<BusinessProfile, ProfileError> {
    let html = fetch_html(http, url).await?;
    let content = extract_visible_content(&html);
    let title = page_title(&html);
    info!(
        "Extracted {} chars of content from {url} (title: {title:?})",
        content.len()
    );

    let profile = analyze_business_profile(llm, &content, &title).await?;
    info!("Profiled {url} as {:?}", profile.name);
    Ok(profile)
}
