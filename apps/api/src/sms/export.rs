//! Export of batch results as a pretty-printed JSON document.
//! Writes replace any existing file; nothing is appended or merged.
//!
//! The document goes to a temp file in the target directory first and is then
//! renamed over the target, so a concurrent reader sees either the previous
//! document or the new one.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::sms::generator::CustomerSmsResult;

pub async fn export_results(results: &[CustomerSmsResult], path: &Path) -> Result<()> {
    let document =
        serde_json::to_string_pretty(results).context("Failed to serialize SMS results")?;

    let target = path.to_path_buf();
    tokio::task::spawn_blocking(move || replace_file(&target, document.as_bytes()))
        .await
        .context("Export task did not complete")??;

    info!("Exported {} customer results to {}", results.len(), path.display());
    Ok(())
}

fn replace_file(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    staged
        .write_all(contents)
        .and_then(|()| staged.as_file().sync_all())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    staged
        .persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

/// Reads a document previously written by `export_results`.
pub async fn load_results(path: &Path) -> Result<Vec<CustomerSmsResult>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    serde_json::from_str(&raw).with_context(|| format!("Malformed SMS results in {}", path.display()))
}
