use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
const DEFAULT_OLLAMA_MODEL: &str = "tinyllama";
const DEFAULT_INSTITUTION: &str = "Co-op Bank";
const DEFAULT_EXPORT_PATH: &str = "sms_results.json";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so an empty environment yields a working local setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub llm_timeout: Duration,
    pub llm_temperature: f32,
    /// Institution literal interpolated into templates and required in every rewrite.
    pub institution_name: String,
    /// Optional JSON file replacing the built-in sample customers.
    pub customers_file: Option<PathBuf>,
    pub export_path: PathBuf,
    /// Fixed seed for template selection. `None` draws from OS entropy per request.
    pub template_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let timeout_secs = parse_var(&lookup, "LLM_TIMEOUT_SECS", 20_u64)?;

        Ok(Config {
            port: parse_var(&lookup, "PORT", 8080_u16)?,
            rust_log: or_default("RUST_LOG", "info"),
            ollama_url: or_default("OLLAMA_URL", DEFAULT_OLLAMA_URL),
            ollama_model: or_default("OLLAMA_MODEL", DEFAULT_OLLAMA_MODEL),
            llm_timeout: Duration::from_secs(timeout_secs),
            llm_temperature: parse_var(&lookup, "LLM_TEMPERATURE", 0.7_f32)?,
            institution_name: or_default("INSTITUTION_NAME", DEFAULT_INSTITUTION),
            customers_file: lookup("CUSTOMERS_FILE").map(PathBuf::from),
            export_path: PathBuf::from(or_default("EXPORT_PATH", DEFAULT_EXPORT_PATH)),
            template_seed: lookup("TEMPLATE_SEED")
                .map(|raw| {
                    raw.parse::<u64>()
                        .with_context(|| format!("TEMPLATE_SEED must be an unsigned integer, got '{raw}'"))
                })
                .transpose()?,
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
