//! CLI commands

pub mod export;
pub mod list;
pub mod render;

use anyhow::Result;

use crate::content::LoadOutcome;
use crate::Vault;

/// Load the vault, turning a failed fetch into an error
pub(crate) async fn load_articles(vault: &Vault) -> Result<LoadOutcome> {
    let outcome = vault.load().await;
    if !outcome.success {
        anyhow::bail!("Failed to fetch notes: {}", outcome.message);
    }
    tracing::info!("{}", outcome.message);
    Ok(outcome)
}
