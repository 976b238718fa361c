// SMS reminder generation.
// Templates are the source of truth; model rewrites are accepted only after validation.
// All completion calls go through llm_client::CompletionService.

pub mod enhancer;
pub mod export;
pub mod generator;
pub mod handlers;
pub mod paraphraser;
pub mod prompts;
pub mod templates;
pub mod validation;
