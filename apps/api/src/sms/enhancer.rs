//! Model-assisted enhancement of a template reminder.
//!
//! One completion call, no retry. Any upstream failure or rejected rewrite
//! returns the template unchanged; errors never reach the caller.

use tracing::debug;

use crate::llm_client::CompletionService;
use crate::models::customer::CustomerRecord;
use crate::sms::prompts::enhance_prompt;
use crate::sms::validation::validate_rewrite;

/// Response-length hint for enhancement calls.
pub const ENHANCE_MAX_TOKENS: u32 = 40;

/// Asks the model to make `template_sms` more in line with the customer's
/// tone. Returns the rewrite only if it passes `validate_rewrite`.
pub async fn enhance_with_llm(
    llm: &dyn CompletionService,
    template_sms: &str,
    customer: &CustomerRecord,
    institution: &str,
) -> String {
    let prompt = enhance_prompt(template_sms, customer.tone);

    let rewrite = match llm.complete(&prompt, ENHANCE_MAX_TOKENS).await {
        Ok(text) => text,
        Err(e) => {
            debug!("Enhancement for {} fell back to template: {e}", customer.name);
            return template_sms.to_string();
        }
    };

    match validate_rewrite(&rewrite, customer, institution) {
        Ok(()) => rewrite,
        Err(rejection) => {
            debug!(
                "Enhancement for {} rejected ({rejection}): {:?}",
                customer.name, rewrite
            );
            template_sms.to_string()
        }
    }
}
