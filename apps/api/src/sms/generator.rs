//! SMS Generation: template selection, optional model enhancement, batching.
//!
//! Flow per customer: candidate 0 = template only; candidates 1.. = fresh
//! template → enhance_with_llm (falls back to that template).
//!
//! Completion calls are awaited one at a time, so batch output keeps
//! customer order and no two requests are in flight together.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::llm_client::CompletionService;
use crate::models::customer::CustomerRecord;
use crate::sms::enhancer::enhance_with_llm;
use crate::sms::paraphraser::paraphrase_sms;
use crate::sms::templates::select_template;

/// Candidates produced per customer unless the caller asks otherwise.
pub const DEFAULT_VARIATION_COUNT: usize = 3;

/// One customer paired with their generated reminders. This is also the
/// export document's element type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSmsResult {
    pub customer: CustomerRecord,
    pub sms_variations: Vec<String>,
}

/// Generation entry point shared by all handlers.
/// Holds the completion client and the institution name; otherwise stateless.
#[derive(Clone)]
pub struct SmsGenerator {
    llm: Arc<dyn CompletionService>,
    institution: String,
}

impl SmsGenerator {
    pub fn new(llm: Arc<dyn CompletionService>, institution: &str) -> Self {
        Self {
            llm,
            institution: institution.to_string(),
        }
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    /// Produces exactly `count` candidates. Index 0 never involves the model.
    pub async fn generate_variations<R: Rng + Send>(
        &self,
        rng: &mut R,
        customer: &CustomerRecord,
        count: usize,
    ) -> Vec<String> {
        let mut variations = Vec::with_capacity(count);

        for index in 0..count {
            let template_sms = select_template(rng, customer, &self.institution);
            let sms = if index == 0 {
                template_sms
            } else {
                enhance_with_llm(self.llm.as_ref(), &template_sms, customer, &self.institution)
                    .await
            };
            variations.push(sms);
        }

        variations
    }

    /// Rewrites an existing message `count` times in the customer's tone.
    pub async fn paraphrase(
        &self,
        original_sms: &str,
        customer: &CustomerRecord,
        count: usize,
    ) -> Vec<String> {
        paraphrase_sms(
            self.llm.as_ref(),
            original_sms,
            customer,
            &self.institution,
            count,
        )
        .await
    }

    /// Runs `generate_variations` over every customer, in order.
    pub async fn process_customers<R: Rng + Send>(
        &self,
        rng: &mut R,
        customers: &[CustomerRecord],
    ) -> Vec<CustomerSmsResult> {
        let mut results = Vec::with_capacity(customers.len());

        for customer in customers {
            let sms_variations = self
                .generate_variations(rng, customer, DEFAULT_VARIATION_COUNT)
                .await;
            results.push(CustomerSmsResult {
                customer: customer.clone(),
                sms_variations,
            });
        }

        info!("Generated reminders for {} customers", results.len());
        results
    }
}
