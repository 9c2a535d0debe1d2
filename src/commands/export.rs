//! Export articles as JSON

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Vault;

/// Write the load outcome as JSON to `output`, or stdout
pub async fn run(vault: &Vault, output: Option<&Path>) -> Result<()> {
    // Failures are exported too, so consumers can show them
    let outcome = vault.load().await;
    let json = serde_json::to_string_pretty(&outcome)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            tracing::info!("Exported {} articles to {:?}", outcome.articles.len(), path);
        }
        None => println!("{}", json),
    }

    if !outcome.success {
        anyhow::bail!("Failed to fetch notes: {}", outcome.message);
    }
    Ok(())
}
