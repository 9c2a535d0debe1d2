//! vault-press: publish knowledge-base notes as blog articles
//!
//! This crate reads Markdown notes exported from a personal knowledge base,
//! derives article metadata from their front-matter and renders their
//! wiki-style embeds and links to HTML on demand.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod source;

use anyhow::Result;
use std::path::Path;

use content::{ContentLoader, ContentTransformer, LoadOutcome};
use source::LocalVault;

/// The main application
#[derive(Clone)]
pub struct Vault {
    /// Vault configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding the notes
    pub source_dir: std::path::PathBuf,
}

impl Vault {
    /// Create a new Vault instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
        })
    }

    /// Fetch all notes and build their articles
    pub async fn load(&self) -> LoadOutcome {
        let source = LocalVault::from_vault(self);
        ContentLoader::new(self).load_from(&source).await
    }

    /// Transformer resolving attachments under the configured route
    pub fn transformer(&self) -> ContentTransformer<impl Fn(&str) -> String + '_> {
        ContentTransformer::new(helpers::attachment_resolver(&self.config.attachment_route))
    }
}
