// Job search: query parsing, prompt rendering, model call, output sanitizing.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod handlers;
pub mod prompts;
pub mod query;
pub mod sanitizer;
