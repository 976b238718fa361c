mod config;
mod customers;
mod errors;
mod llm_client;
mod models;
mod routes;
mod sms;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::customers::{CustomerProvider, StaticCustomers};
use crate::llm_client::OllamaClient;
use crate::routes::build_router;
use crate::sms::generator::SmsGenerator;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting reminder API v{}", env!("CARGO_PKG_VERSION"));

    let llm = OllamaClient::new(
        &config.ollama_url,
        &config.ollama_model,
        config.llm_temperature,
        config.llm_timeout,
    )?;
    info!(
        "Completion client initialized (model: {}, endpoint: {}, timeout: {:?})",
        llm.model(),
        config.ollama_url,
        config.llm_timeout
    );

    let customers: Arc<dyn CustomerProvider> = match &config.customers_file {
        Some(path) => {
            let source = StaticCustomers::from_file(path)?;
            info!("Loaded customers from {}", path.display());
            Arc::new(source)
        }
        None => Arc::new(StaticCustomers::default()),
    };

    let generator = SmsGenerator::new(Arc::new(llm), &config.institution_name);
    info!("SMS generator ready for {}", generator.institution());

    let state = AppState {
        config: config.clone(),
        generator,
        customers,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
