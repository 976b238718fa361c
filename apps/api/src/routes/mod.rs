pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::sms::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/sms/generate", post(handlers::handle_generate))
        .route("/api/v1/sms/generate-all", get(handlers::handle_generate_all))
        .route("/api/v1/sms/customers", get(handlers::handle_customers))
        .route("/api/v1/sms/tones", get(handlers::handle_tones))
        .route("/api/v1/sms/paraphrase", post(handlers::handle_paraphrase))
        .route(
            "/api/v1/sms/export",
            get(handlers::handle_get_export).post(handlers::handle_export),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::customers::{CustomerProvider, StaticCustomers};
    use crate::errors::AppError;
    use crate::llm_client::stub::UnavailableCompletion;
    use crate::models::customer::CustomerRecord;
    use crate::sms::export::load_results;
    use crate::sms::generator::SmsGenerator;
    use crate::sms::templates::rendered_catalog;

    struct BrokenCustomers;

    #[async_trait]
    impl CustomerProvider for BrokenCustomers {
        async fn customers(&self) -> Result<Vec<CustomerRecord>, AppError> {
            Err(AppError::Internal(anyhow::anyhow!("customer store offline")))
        }
    }

    fn test_config(export_path: PathBuf) -> Config {
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.template_seed = Some(17);
        config.export_path = export_path;
        config
    }

    fn test_state(customers: Arc<dyn CustomerProvider>, export_path: PathBuf) -> AppState {
        let config = test_config(export_path);
        AppState {
            generator: SmsGenerator::new(
                Arc::new(UnavailableCompletion::default()),
                &config.institution_name,
            ),
            customers,
            config,
        }
    }

    fn offline_app() -> Router {
        build_router(test_state(
            Arc::new(StaticCustomers::default()),
            PathBuf::from("sms_results.json"),
        ))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).expect("request")
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(offline_app(), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_tones_lists_three_labels() {
        let (status, body) = send(offline_app(), get_request("/api/v1/sms/tones")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "tones": ["formal", "friendly", "urgent"]}));
    }

    #[tokio::test]
    async fn test_customers_lists_samples() {
        let (status, body) = send(offline_app(), get_request("/api/v1/sms/customers")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["customers"].as_array().unwrap().len(), 3);
        assert_eq!(body["customers"][1]["name"], "Mary");
    }

    #[tokio::test]
    async fn test_generate_returns_three_template_variations_when_offline() {
        let payload = json!({
            "name": "Mary",
            "loan_balance": "5,000 KES",
            "due_date": "25th Sept",
            "tone": "friendly"
        });
        let (status, body) =
            send(offline_app(), post_json("/api/v1/sms/generate", payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["customer"]["name"], "Mary");

        let customer: CustomerRecord = serde_json::from_value(body["customer"].clone()).unwrap();
        let catalog = rendered_catalog(&customer, "Co-op Bank");
        let variations = body["sms_variations"].as_array().unwrap();
        assert_eq!(variations.len(), 3);
        for sms in variations {
            assert!(catalog.contains(&sms.as_str().unwrap().to_string()));
        }
    }

    #[tokio::test]
    async fn test_generate_is_deterministic_with_seed() {
        let payload = json!({
            "name": "Ali",
            "loan_balance": "30,000 KES",
            "due_date": "18th Sept",
            "tone": "formal"
        });
        let (_, first) =
            send(offline_app(), post_json("/api/v1/sms/generate", payload.clone())).await;
        let (_, second) = send(offline_app(), post_json("/api/v1/sms/generate", payload)).await;
        assert_eq!(first["sms_variations"][0], second["sms_variations"][0]);
    }

    #[tokio::test]
    async fn test_generate_missing_field_is_bad_request() {
        let payload = json!({"name": "Mary", "loan_balance": "5,000 KES", "tone": "friendly"});
        let (status, body) =
            send(offline_app(), post_json("/api/v1/sms/generate", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Missing required field: due_date");
    }

    #[tokio::test]
    async fn test_generate_mistyped_field_uses_error_envelope() {
        let payload = json!({
            "name": 5,
            "loan_balance": "5,000 KES",
            "due_date": "25th Sept",
            "tone": "friendly"
        });
        let (status, body) =
            send(offline_app(), post_json("/api/v1/sms/generate", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(!body["error"]["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_paraphrase_non_json_body_uses_error_envelope() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/sms/paraphrase")
            .header("content-type", "text/plain")
            .body(Body::from("pay up"))
            .expect("request");
        let (status, body) = send(offline_app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_all_covers_every_customer_in_order() {
        let (status, body) = send(offline_app(), get_request("/api/v1/sms/generate-all")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_customers"], 3);
        let results = body["results"].as_array().unwrap();
        let names: Vec<&str> = results
            .iter()
            .map(|r| r["customer"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["John", "Mary", "Ali"]);
        assert!(results
            .iter()
            .all(|r| r["sms_variations"].as_array().unwrap().len() == 3));
    }

    #[tokio::test]
    async fn test_provider_failure_is_server_error_with_message() {
        let app = build_router(test_state(
            Arc::new(BrokenCustomers),
            PathBuf::from("sms_results.json"),
        ));
        let (status, body) = send(app, get_request("/api/v1/sms/generate-all")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("customer store offline"));
    }

    #[tokio::test]
    async fn test_paraphrase_falls_back_to_original_when_offline() {
        let payload = json!({
            "original_sms": "Dear Bett, KES 1,200 is overdue. Co-op Bank",
            "name": "Bett",
            "loan_balance": "KES 1,200",
            "due_date": "late by 203 days",
            "tone": "urgent",
            "count": 2
        });
        let (status, body) =
            send(offline_app(), post_json("/api/v1/sms/paraphrase", payload)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tone"], "urgent");
        assert_eq!(
            body["sms_variations"],
            json!([
                "Dear Bett, KES 1,200 is overdue. Co-op Bank",
                "Dear Bett, KES 1,200 is overdue. Co-op Bank"
            ])
        );
    }

    #[tokio::test]
    async fn test_paraphrase_rejects_out_of_range_count() {
        let payload = json!({
            "original_sms": "x",
            "name": "Bett",
            "loan_balance": "KES 1,200",
            "due_date": "today",
            "tone": "formal",
            "count": 0
        });
        let (status, _) = send(offline_app(), post_json("/api/v1/sms/paraphrase", payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_writes_batch_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sms_results.json");
        let app = build_router(test_state(Arc::new(StaticCustomers::default()), path.clone()));

        let (status, body) = send(app, post_json("/api/v1/sms/export", json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_customers"], 3);
        assert_eq!(body["total_sms"], 9);
        let exported = load_results(&path).await.unwrap();
        assert_eq!(exported.len(), 3);
        assert_eq!(exported[0].customer.name, "John");
    }

    #[tokio::test]
    async fn test_get_export_reads_back_what_post_wrote() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sms_results.json");
        let app = build_router(test_state(Arc::new(StaticCustomers::default()), path.clone()));

        let (status, _) = send(app.clone(), post_json("/api/v1/sms/export", json!({}))).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(app, get_request("/api/v1/sms/export")).await;
        assert_eq!(status, StatusCode::OK);
        let on_disk = load_results(&path).await.unwrap();
        assert_eq!(body["results"], serde_json::to_value(&on_disk).unwrap());
        assert_eq!(body["total_customers"], 3);
    }

    #[tokio::test]
    async fn test_get_export_without_file_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = build_router(test_state(
            Arc::new(StaticCustomers::default()),
            dir.path().join("never_written.json"),
        ));
        let (status, body) = send(app, get_request("/api/v1/sms/export")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("never_written.json"));
    }
}
