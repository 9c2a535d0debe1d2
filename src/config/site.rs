//! Vault configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::ListCoercion;

/// Main vault configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // Directory
    /// Directory holding the notes, relative to the vault root
    pub source_dir: String,
    /// File extensions treated as notes
    pub markdown_extensions: Vec<String>,

    // Rendering
    /// Route prefix under which attachments are served
    pub attachment_route: String,
    /// Maximum preview length in characters
    pub preview_length: usize,

    // Front-matter
    pub list_coercion: ListCoercion,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Notes".to_string(),

            source_dir: ".".to_string(),
            markdown_extensions: vec!["md".to_string()],

            attachment_route: "/api/attachments/".to_string(),
            preview_length: crate::content::DEFAULT_PREVIEW_LENGTH,

            list_coercion: ListCoercion::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}
