//! SMS length limits and the acceptance check applied to every model rewrite.
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use thiserror::Error;

use crate::models::customer::CustomerRecord;

/// Hard ceiling for a single SMS.
pub const MAX_SMS_CHARS: usize = 160;
/// Characters kept before the ellipsis when a message is cut.
const TRUNCATED_CHARS: usize = 157;
const ELLIPSIS: &str = "...";

/// Why a model rewrite was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("rewrite is empty")]
    Empty,
    #[error("rewrite is {0} characters (max {MAX_SMS_CHARS})")]
    TooLong(usize),
    #[error("rewrite omits the customer name")]
    MissingName,
    #[error("rewrite omits the loan balance")]
    MissingBalance,
    #[error("rewrite omits the institution name")]
    MissingInstitution,
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to 157 characters plus "..." when it exceeds the SMS limit.
/// Messages already within the limit are returned unchanged.
pub fn fit_to_sms(text: &str) -> String {
    if char_len(text) <= MAX_SMS_CHARS {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(TRUNCATED_CHARS).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Accepts a rewrite only if it is non-empty, fits in one SMS and still
/// carries the customer name, the loan balance and the institution name
/// verbatim. Used by both the enhancer and the paraphraser.
pub fn validate_rewrite(
    text: &str,
    customer: &CustomerRecord,
    institution: &str,
) -> Result<(), Rejection> {
    if text.trim().is_empty() {
        return Err(Rejection::Empty);
    }
    let len = char_len(text);
    if len > MAX_SMS_CHARS {
        return Err(Rejection::TooLong(len));
    }
    if !text.contains(customer.name.as_str()) {
        return Err(Rejection::MissingName);
    }
    if !text.contains(customer.loan_balance.as_str()) {
        return Err(Rejection::MissingBalance);
    }
    if !text.contains(institution) {
        return Err(Rejection::MissingInstitution);
    }
    Ok(())
}
