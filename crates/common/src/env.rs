//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist before stores open.

use std::path::Path;

/// Ensure the data directory exists, creating it if missing.
pub async fn ensure_data_dir(dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    Ok(())
}
