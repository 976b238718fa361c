//! Customer Data Provider: pluggable source of customers due for a reminder.
//!
//! Default: `StaticCustomers` with three built-in sample records, optionally
//! replaced by a JSON file at startup. A real data store implements the same
//! trait without touching the generator.
//!
//! `AppState` holds an `Arc<dyn CustomerProvider>`.

use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::customer::CustomerRecord;
use crate::models::tone::Tone;

/// Implement this to swap the customer source without touching handlers.
#[async_trait]
pub trait CustomerProvider: Send + Sync {
    /// All customers, in a stable order.
    async fn customers(&self) -> Result<Vec<CustomerRecord>, AppError>;
}

/// A fixed, ordered list held in memory.
#[derive(Debug, Clone)]
pub struct StaticCustomers {
    records: Vec<CustomerRecord>,
}

impl StaticCustomers {
    pub fn new(records: Vec<CustomerRecord>) -> Self {
        Self { records }
    }

    /// Loads a JSON array of customer records.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read customers file {}", path.display()))?;
        let records: Vec<CustomerRecord> = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed customers file {}", path.display()))?;
        Ok(Self::new(records))
    }

    #[cfg(test)]
    pub fn into_records(self) -> Vec<CustomerRecord> {
        self.records
    }
}

impl Default for StaticCustomers {
    fn default() -> Self {
        Self::new(vec![
            CustomerRecord::new("John", "15,000 KES", "20th Sept", Tone::Urgent),
            CustomerRecord::new("Mary", "5,000 KES", "25th Sept", Tone::Friendly),
            CustomerRecord::new("Ali", "30,000 KES", "18th Sept", Tone::Formal),
        ])
    }
}

#[async_trait]
impl CustomerProvider for StaticCustomers {
    async fn customers(&self) -> Result<Vec<CustomerRecord>, AppError> {
        Ok(self.records.clone())
    }
}
