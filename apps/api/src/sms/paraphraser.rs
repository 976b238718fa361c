//! Paraphraser: tone-shifted rewrites of an arbitrary existing SMS.
//!
//! Per variation: paraphrase prompt, then one retry with the simpler rewrite
//! prompt, then the original message fitted to the SMS limit. Both attempts
//! are judged by the same `validate_rewrite` check the enhancer uses.

use tracing::debug;

use crate::llm_client::CompletionService;
use crate::models::customer::CustomerRecord;
use crate::sms::prompts::{paraphrase_prompt, simple_rewrite_prompt};
use crate::sms::validation::{fit_to_sms, validate_rewrite, Rejection};

/// Response-length hint for paraphrase calls.
pub const PARAPHRASE_MAX_TOKENS: u32 = 50;

async fn attempt(
    llm: &dyn CompletionService,
    prompt: &str,
    customer: &CustomerRecord,
    institution: &str,
) -> Result<String, Rejection> {
    let text = llm
        .complete(prompt, PARAPHRASE_MAX_TOKENS)
        .await
        .unwrap_or_else(|e| {
            debug!("Paraphrase call failed: {e}");
            String::new()
        });
    validate_rewrite(&text, customer, institution).map(|()| text)
}

/// Produces exactly `count` rewrites of `original_sms` in the customer's tone.
pub async fn paraphrase_sms(
    llm: &dyn CompletionService,
    original_sms: &str,
    customer: &CustomerRecord,
    institution: &str,
    count: usize,
) -> Vec<String> {
    let primary = paraphrase_prompt(original_sms, customer, institution);
    let simple = simple_rewrite_prompt(original_sms, customer.tone);

    let mut variations = Vec::with_capacity(count);
    for index in 0..count {
        let sms = match attempt(llm, &primary, customer, institution).await {
            Ok(text) => text,
            Err(first) => {
                debug!("Paraphrase {index} rejected ({first}), retrying with simple prompt");
                match attempt(llm, &simple, customer, institution).await {
                    Ok(text) => text,
                    Err(second) => {
                        debug!("Paraphrase {index} retry rejected ({second}), using original");
                        fit_to_sms(original_sms)
                    }
                }
            }
        };
        variations.push(sms);
    }
    variations
}
