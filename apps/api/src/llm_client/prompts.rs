// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Appended to system prompts whose output is parsed as JSON.
pub const JSON_ONLY_INSTRUCTION: &str =
    "Return only a JSON object with these keys and no additional explanation.";

/// Appended to every prompt whose output is shown to end users as plain text.
pub const PLAIN_TEXT_INSTRUCTION: &str =
    "Avoid emojis, markdown symbols like **, and any unicode escape characters. \
    Return plain text only.";
