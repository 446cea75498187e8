// Content generation: prompt building, the completion call, and output cleanup.
// All LLM calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod sanitizer;
