use serde::{Deserialize, Serialize};

use crate::models::tone::Tone;

/// A customer due for a payment reminder. Balance and due date arrive
/// pre-formatted and are interpolated verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    /// Includes the currency label, e.g. "15,000 KES".
    pub loan_balance: String,
    /// Human-readable, e.g. "20th Sept".
    pub due_date: String,
    pub tone: Tone,
}

impl CustomerRecord {
    pub fn new(name: &str, loan_balance: &str, due_date: &str, tone: Tone) -> Self {
        Self {
            name: name.to_string(),
            loan_balance: loan_balance.to_string(),
            due_date: due_date.to_string(),
            tone,
        }
    }
}
