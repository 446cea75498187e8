// LLM prompts for the Profile module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for website analysis. Followed by `JSON_ONLY_INSTRUCTION`.
pub const PROFILE_ANALYST_SYSTEM: &str = "You are a business analyst AI agent. \
    Given the text extracted from a company's website, infer the following fields: \
    name, industry, services, audience, tone_of_voice, unique_value_proposition.";

/// User prompt when the page has a title.
pub fn prompt_with_title(title: &str, content: &str) -> String {
    format!("Website Title: {title}\n\n{content}")
}
