// All completion-service prompts for the SMS module.

use crate::models::customer::CustomerRecord;
use crate::models::tone::Tone;

/// Enhancement prompt. Replace `{tone}` and `{sms}` before sending.
pub const ENHANCE_PROMPT_TEMPLATE: &str =
    "Improve this SMS to be more {tone} while keeping it under 160 characters: '{sms}'";

/// Paraphrase prompt.
/// Replace: {tone}, {name}, {balance}, {due_date}, {institution}, {sms}
pub const PARAPHRASE_PROMPT_TEMPLATE: &str = "Paraphrase the following SMS message to be more {tone} in tone. \
    Ensure it includes the customer name '{name}' (if applicable), \
    loan balance '{balance}' (if applicable), \
    due date '{due_date}' (if applicable), and mentions '{institution}'. \
    Keep the message strictly under 160 characters. \
    Original SMS: '{sms}'";

/// Shorter fallback used when the paraphrase prompt yields nothing usable.
pub const SIMPLE_REWRITE_PROMPT_TEMPLATE: &str =
    "Rewrite this SMS in a {tone} tone, under 160 chars: '{sms}'";

pub fn enhance_prompt(sms: &str, tone: Tone) -> String {
    ENHANCE_PROMPT_TEMPLATE
        .replace("{tone}", tone.as_str())
        .replace("{sms}", sms)
}

pub fn paraphrase_prompt(sms: &str, customer: &CustomerRecord, institution: &str) -> String {
    PARAPHRASE_PROMPT_TEMPLATE
        .replace("{tone}", customer.tone.as_str())
        .replace("{name}", &customer.name)
        .replace("{balance}", &customer.loan_balance)
        .replace("{due_date}", &customer.due_date)
        .replace("{institution}", institution)
        .replace("{sms}", sms)
}

pub fn simple_rewrite_prompt(sms: &str, tone: Tone) -> String {
    SIMPLE_REWRITE_PROMPT_TEMPLATE
        .replace("{tone}", tone.as_str())
        .replace("{sms}", sms)
}
