//! Template catalog: three hand-written reminders per tone.
//!
//! Placeholders: `{name}`, `{balance}`, `{due_date}`, `{institution}`.
//! Selection draws from a caller-supplied RNG so tests can fix the seed.

use rand::Rng;

use crate::models::customer::CustomerRecord;
use crate::models::tone::Tone;
use crate::sms::validation::fit_to_sms;

const FORMAL_TEMPLATES: [&str; 3] = [
    "Dear {name}, your loan of {balance} is due on {due_date}. Please make payment to avoid penalties. {institution}",
    "{name}, kindly settle your {balance} loan by {due_date}. Thank you for banking with {institution}.",
    "Reminder: {name}, your loan balance of {balance} is due {due_date}. Please pay on time. {institution}",
];

const FRIENDLY_TEMPLATES: [&str; 3] = [
    "Hi {name}! Friendly reminder: your {balance} loan is due {due_date}. Thanks for choosing {institution}!",
    "Hello {name}, just a gentle reminder that your {balance} loan payment is due {due_date}. {institution}",
    "Hey {name}! Your {balance} loan is due {due_date}. We appreciate your business with {institution}!",
];

const URGENT_TEMPLATES: [&str; 3] = [
    "URGENT: {name}, your {balance} loan is due {due_date}. Please pay immediately to avoid late fees. {institution}",
    "{name}, IMPORTANT: Your {balance} loan payment is due {due_date}. Act now to avoid penalties. {institution}",
    "ATTENTION {name}: {balance} loan due {due_date}. Immediate payment required. {institution}",
];

/// Raw templates for a tone.
pub fn catalog(tone: Tone) -> &'static [&'static str] {
    match tone {
        Tone::Formal => &FORMAL_TEMPLATES,
        Tone::Friendly => &FRIENDLY_TEMPLATES,
        Tone::Urgent => &URGENT_TEMPLATES,
    }
}

fn render(template: &str, customer: &CustomerRecord, institution: &str) -> String {
    let message = template
        .replace("{name}", &customer.name)
        .replace("{balance}", &customer.loan_balance)
        .replace("{due_date}", &customer.due_date)
        .replace("{institution}", institution);
    fit_to_sms(&message)
}

/// Every message the catalog can produce for this customer, already fitted
/// to the SMS limit.
#[cfg(test)]
pub fn rendered_catalog(customer: &CustomerRecord, institution: &str) -> Vec<String> {
    catalog(customer.tone)
        .iter()
        .map(|template| render(template, customer, institution))
        .collect()
}

/// Picks one template for the customer's tone uniformly at random and fills it in.
/// Total: never fails, result is always ≤160 characters.
pub fn select_template<R: Rng>(
    rng: &mut R,
    customer: &CustomerRecord,
    institution: &str,
) -> String {
    let templates = catalog(customer.tone);
    let index = rng.gen_range(0..templates.len());
    render(templates[index], customer, institution)
}
