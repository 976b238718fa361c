//! Axum route handlers for the SMS API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::customer::CustomerRecord;
use crate::models::tone::Tone;
use crate::sms::export::{export_results, load_results};
use crate::sms::generator::{CustomerSmsResult, DEFAULT_VARIATION_COUNT};
use crate::state::AppState;

/// Upper bound on paraphrase variations per request.
const MAX_PARAPHRASE_COUNT: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Fields are optional at the wire level so a missing one yields a 400 naming it.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateSmsRequest {
    pub name: Option<String>,
    pub loan_balance: Option<String>,
    pub due_date: Option<String>,
    pub tone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateSmsResponse {
    pub success: bool,
    pub customer: CustomerRecord,
    pub sms_variations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateAllResponse {
    pub success: bool,
    pub results: Vec<CustomerSmsResult>,
    pub total_customers: usize,
}

#[derive(Debug, Serialize)]
pub struct CustomersResponse {
    pub success: bool,
    pub customers: Vec<CustomerRecord>,
}

#[derive(Debug, Serialize)]
pub struct TonesResponse {
    pub success: bool,
    pub tones: Vec<Tone>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ParaphraseRequest {
    pub original_sms: Option<String>,
    pub name: Option<String>,
    pub loan_balance: Option<String>,
    pub due_date: Option<String>,
    pub tone: Option<String>,
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ParaphraseResponse {
    pub success: bool,
    pub tone: Tone,
    pub sms_variations: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub success: bool,
    pub filename: String,
    pub total_customers: usize,
    pub total_sms: usize,
}

fn require(field: &'static str, value: Option<String>) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("Missing required field: {field}")))
}

/// Checks fields in a fixed order so the first missing one is reported.
fn customer_from_fields(
    name: Option<String>,
    loan_balance: Option<String>,
    due_date: Option<String>,
    tone: Option<String>,
) -> Result<CustomerRecord, AppError> {
    let name = require("name", name)?;
    let loan_balance = require("loan_balance", loan_balance)?;
    let due_date = require("due_date", due_date)?;
    let tone = require("tone", tone)?;
    Ok(CustomerRecord {
        name,
        loan_balance,
        due_date,
        tone: Tone::from_label(&tone),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sms/generate
///
/// Three candidates for one customer. Candidate 0 is always a template.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateSmsRequest>, JsonRejection>,
) -> Result<Json<GenerateSmsResponse>, AppError> {
    let Json(request) = payload?;
    let customer = customer_from_fields(
        request.name,
        request.loan_balance,
        request.due_date,
        request.tone,
    )?;

    let mut rng = state.template_rng();
    let sms_variations = state
        .generator
        .generate_variations(&mut rng, &customer, DEFAULT_VARIATION_COUNT)
        .await;

    Ok(Json(GenerateSmsResponse {
        success: true,
        customer,
        sms_variations,
    }))
}

/// GET /api/v1/sms/generate-all
pub async fn handle_generate_all(
    State(state): State<AppState>,
) -> Result<Json<GenerateAllResponse>, AppError> {
    let customers = state.customers.customers().await?;

    let mut rng = state.template_rng();
    let results = state.generator.process_customers(&mut rng, &customers).await;

    Ok(Json(GenerateAllResponse {
        success: true,
        total_customers: results.len(),
        results,
    }))
}

/// GET /api/v1/sms/customers
pub async fn handle_customers(
    State(state): State<AppState>,
) -> Result<Json<CustomersResponse>, AppError> {
    let customers = state.customers.customers().await?;
    Ok(Json(CustomersResponse {
        success: true,
        customers,
    }))
}

/// GET /api/v1/sms/tones
pub async fn handle_tones() -> Json<TonesResponse> {
    Json(TonesResponse {
        success: true,
        tones: Tone::ALL.to_vec(),
    })
}

/// POST /api/v1/sms/paraphrase
///
/// Tone-shifted rewrites of a caller-supplied message. `count` defaults to 3.
pub async fn handle_paraphrase(
    State(state): State<AppState>,
    payload: Result<Json<ParaphraseRequest>, JsonRejection>,
) -> Result<Json<ParaphraseResponse>, AppError> {
    let Json(request) = payload?;
    let original_sms = require("original_sms", request.original_sms)?;
    let customer = customer_from_fields(
        request.name,
        request.loan_balance,
        request.due_date,
        request.tone,
    )?;

    let count = request.count.unwrap_or(DEFAULT_VARIATION_COUNT);
    if count == 0 || count > MAX_PARAPHRASE_COUNT {
        return Err(AppError::Validation(format!(
            "count must be between 1 and {MAX_PARAPHRASE_COUNT}"
        )));
    }

    let sms_variations = state
        .generator
        .paraphrase(&original_sms, &customer, count)
        .await;

    Ok(Json(ParaphraseResponse {
        success: true,
        tone: customer.tone,
        sms_variations,
    }))
}

/// POST /api/v1/sms/export
///
/// Runs the batch over all customers and overwrites the configured export file.
pub async fn handle_export(
    State(state): State<AppState>,
) -> Result<Json<ExportResponse>, AppError> {
    let customers = state.customers.customers().await?;

    let mut rng = state.template_rng();
    let results = state.generator.process_customers(&mut rng, &customers).await;

    let path = &state.config.export_path;
    export_results(&results, path).await?;

    let total_sms: usize = results.iter().map(|r| r.sms_variations.len()).sum();
    info!(
        "Export complete: {} customers, {} SMS to {}",
        results.len(),
        total_sms,
        path.display()
    );

    Ok(Json(ExportResponse {
        success: true,
        filename: path.display().to_string(),
        total_customers: results.len(),
        total_sms,
    }))
}

/// GET /api/v1/sms/export
///
/// Returns the document last written by the export endpoint.
pub async fn handle_get_export(
    State(state): State<AppState>,
) -> Result<Json<GenerateAllResponse>, AppError> {
    let results = load_results(&state.config.export_path).await?;
    Ok(Json(GenerateAllResponse {
        success: true,
        total_customers: results.len(),
        results,
    }))
}
