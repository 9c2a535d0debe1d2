//! Content loader - turns fetched notes into articles

use serde::Serialize;

use super::article::{Article, ArticleBuilder, RawFile};
use crate::source::{FetchResult, FileSource};
use crate::Vault;

/// Outcome of loading a whole vault
///
/// `success == false` means the source itself failed; a successful load may
/// still hold zero articles.
#[derive(Debug, Clone, Serialize)]
pub struct LoadOutcome {
    pub articles: Vec<Article>,
    pub success: bool,
    pub message: String,
}

/// Loads articles from fetched notes
pub struct ContentLoader {
    builder: ArticleBuilder,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new(vault: &Vault) -> Self {
        Self::with_builder(ArticleBuilder::from_config(&vault.config))
    }

    /// Create a loader with a preconfigured builder
    pub fn with_builder(builder: ArticleBuilder) -> Self {
        Self { builder }
    }

    /// Fetch from `source` and load the result
    pub async fn load_from<S: FileSource>(&self, source: &S) -> LoadOutcome {
        self.load(source.fetch().await)
    }

    /// Load the result of a fetch
    pub fn load(&self, fetched: FetchResult) -> LoadOutcome {
        if !fetched.success {
            tracing::error!("Failed to fetch notes: {}", fetched.message);
            return LoadOutcome {
                articles: Vec::new(),
                success: false,
                message: fetched.message,
            };
        }

        let articles = self.ingest(&fetched.files);
        LoadOutcome {
            message: format!("{} articles loaded", articles.len()),
            articles,
            success: true,
        }
    }

    /// Build articles for all notes, skipping rejected ones
    pub fn ingest(&self, files: &[RawFile]) -> Vec<Article> {
        let mut articles = Vec::with_capacity(files.len());
        for file in files {
            match self.builder.from_raw(file) {
                Ok(article) => articles.push(article),
                // Rejections are expected and never fail the batch
                Err(rejection) => tracing::info!("Skipping note: {}", rejection),
            }
        }
        tracing::debug!("Ingested {} of {} notes", articles.len(), files.len());
        articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::LocalVault;
    use std::fs;
    use tempfile::TempDir;

    fn raw(name: &str, content: &str) -> RawFile {
        RawFile {
            name: name.to_string(),
            path: name.to_string(),
            content: content.to_string(),
            revision_id: None,
        }
    }

    #[test]
    fn test_rejections_do_not_fail_batch() {
        let loader = ContentLoader::with_builder(ArticleBuilder::new());
        let fetched = FetchResult::fetched(vec![
            raw("a.md", "---\ntitle: A\n---\nA body"),
            raw("b.md", "no header"),
            raw("c.md", "---\npublished: false\n---\nhidden"),
            raw("d.md", "---\ntags:\n  - x\n---\nD body"),
        ]);

        let outcome = loader.load(fetched);
        assert!(outcome.success);
        assert_eq!(outcome.message, "2 articles loaded");
        let slugs: Vec<&str> = outcome.articles.iter().map(|a| a.slug()).collect();
        assert_eq!(slugs, vec!["a", "d"]);
    }

    #[test]
    fn test_fetch_failure_is_not_an_empty_list() {
        let loader = ContentLoader::with_builder(ArticleBuilder::new());
        let outcome = loader.load(FetchResult::failed("rate limited"));
        assert!(!outcome.success);
        assert_eq!(outcome.message, "rate limited");

        let empty = loader.load(FetchResult::fetched(Vec::new()));
        assert!(empty.success);
        assert!(empty.articles.is_empty());
    }

    #[tokio::test]
    async fn test_load_from_local_vault() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("Hello World.md"),
            "---\ntags:\n  - intro\n---\nWelcome ![[banner.png]] to [[Home]].\n\nMore.",
        )
        .unwrap();
        fs::write(dir.path().join("scratch.md"), "todo").unwrap();

        let source = LocalVault::new(dir.path(), dir.path(), &["md".to_string()]);
        let loader = ContentLoader::with_builder(ArticleBuilder::new());
        let outcome = loader.load_from(&source).await;

        assert!(outcome.success);
        assert_eq!(outcome.articles.len(), 1);
        let article = &outcome.articles[0];
        assert_eq!(article.slug(), "hello-world");
        assert_eq!(article.path(), "Hello World.md");
        assert_eq!(article.tags(), ["intro"]);
        assert_eq!(article.preview_content(), Some("Welcome  to Home."));
        assert!(article.revision_id().is_some());
    }
}
