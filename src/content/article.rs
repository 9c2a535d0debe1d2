//! Article model and the rules deriving it from a note

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::frontmatter::{FrontMatter, ListCoercion};
use super::preview::{extract_preview, DEFAULT_PREVIEW_LENGTH};
use crate::config::SiteConfig;

/// A note as delivered by a file source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFile {
    /// File name including extension
    pub name: String,
    /// Path of the file inside the vault
    pub path: String,
    /// Full text, front-matter included
    pub content: String,
    /// Revision identifier assigned by the source, if any
    pub revision_id: Option<String>,
}

/// A publishable article
///
/// Built once from a [`RawFile`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    title: String,
    slug: String,
    tags: Vec<String>,
    create_date: Option<String>,
    update_date: Option<String>,
    preview_content: Option<String>,
    published: bool,
    uid: Option<String>,
    /// Markdown body without the front-matter
    content: String,
    revision_id: Option<String>,
    path: String,
}

impl Article {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Tags in declaration order, duplicates included
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn create_date(&self) -> Option<&str> {
        self.create_date.as_deref()
    }

    pub fn update_date(&self) -> Option<&str> {
        self.update_date.as_deref()
    }

    pub fn preview_content(&self) -> Option<&str> {
        self.preview_content.as_deref()
    }

    pub fn published(&self) -> bool {
        self.published
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn revision_id(&self) -> Option<&str> {
        self.revision_id.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Why a note did not become an article
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("{path}: no front-matter found")]
    MissingFrontMatter { path: String },

    #[error("{path}: marked as unpublished")]
    Unpublished { path: String },
}

/// Derives [`Article`]s from notes
#[derive(Debug, Clone)]
pub struct ArticleBuilder {
    preview_length: usize,
    list_coercion: ListCoercion,
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self {
            preview_length: DEFAULT_PREVIEW_LENGTH,
            list_coercion: ListCoercion::default(),
        }
    }
}

impl ArticleBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder from the vault configuration
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            preview_length: config.preview_length,
            list_coercion: config.list_coercion,
        }
    }

    pub fn with_preview_length(mut self, preview_length: usize) -> Self {
        self.preview_length = preview_length;
        self
    }

    pub fn with_list_coercion(mut self, list_coercion: ListCoercion) -> Self {
        self.list_coercion = list_coercion;
        self
    }

    /// Parse a note and build its article
    pub fn from_raw(&self, raw: &RawFile) -> Result<Article, Rejection> {
        let (fm, body) = FrontMatter::parse_with(&raw.content, self.list_coercion);
        self.try_build(raw, fm.as_ref(), body)
    }

    /// Build an article, or `None` if the note is rejected
    pub fn build(&self, raw: &RawFile, fm: Option<&FrontMatter>, body: &str) -> Option<Article> {
        self.try_build(raw, fm, body).ok()
    }

    /// Build an article, telling why the note was rejected
    pub fn try_build(
        &self,
        raw: &RawFile,
        fm: Option<&FrontMatter>,
        body: &str,
    ) -> Result<Article, Rejection> {
        let Some(fm) = fm else {
            return Err(Rejection::MissingFrontMatter {
                path: raw.path.clone(),
            });
        };

        // Anything but an explicit `false` counts as published
        if fm.get_bool("published") == Some(false) {
            return Err(Rejection::Unpublished {
                path: raw.path.clone(),
            });
        }

        let stem = file_stem(&raw.name);

        let title = fm
            .get_str("title")
            .filter(|t| !t.is_empty())
            .unwrap_or(stem)
            .to_string();

        let slug = match fm.get_list("aliases").and_then(|a| a.first()) {
            Some(alias) if !alias.is_empty() => alias.clone(),
            _ => slugify_file_stem(stem),
        };

        let tags = fm.get_list("tags").map(<[String]>::to_vec).unwrap_or_default();

        Ok(Article {
            title,
            slug,
            tags,
            create_date: non_empty(fm.get_str("create_date")),
            update_date: non_empty(fm.get_str("update_date")),
            preview_content: Some(extract_preview(body, self.preview_length)),
            published: true,
            uid: non_empty(fm.get_str("uid")),
            content: body.to_string(),
            revision_id: raw.revision_id.clone(),
            path: raw.path.clone(),
        })
    }
}

/// File name without its last extension
fn file_stem(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Lower-case the stem and join whitespace-separated words with `-`
fn slugify_file_stem(stem: &str) -> String {
    let slug = stem
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, content: &str) -> RawFile {
        RawFile {
            name: name.to_string(),
            path: format!("notes/{}", name),
            content: content.to_string(),
            revision_id: Some("abc123".to_string()),
        }
    }

    #[test]
    fn test_unpublished_note_rejected() {
        let file = raw(
            "hello.md",
            "---\ntitle: Hello\ntags:\n  - a\n  - b\npublished: false\n---\nBody text",
        );
        let builder = ArticleBuilder::new();
        assert_eq!(
            builder.from_raw(&file),
            Err(Rejection::Unpublished {
                path: "notes/hello.md".to_string()
            })
        );

        let (fm, body) = FrontMatter::parse(&file.content);
        assert!(builder.build(&file, fm.as_ref(), body).is_none());
    }

    #[test]
    fn test_alias_slug_and_preview() {
        let file = raw(
            "hi.md",
            "---\ntitle: Hi\naliases:\n  - my-slug\n---\nFirst paragraph.\n\nSecond.",
        );
        let article = ArticleBuilder::new().from_raw(&file).unwrap();
        assert_eq!(article.title(), "Hi");
        assert_eq!(article.slug(), "my-slug");
        assert_eq!(article.preview_content(), Some("First paragraph."));
        assert!(article.published());
        assert_eq!(article.content(), "First paragraph.\n\nSecond.");
        assert_eq!(article.path(), "notes/hi.md");
        assert_eq!(article.revision_id(), Some("abc123"));
    }

    #[test]
    fn test_slug_from_file_name() {
        let file = raw("My Post.md", "---\ncreate_date: 2024-05-01\n---\nText");
        let article = ArticleBuilder::new().from_raw(&file).unwrap();
        assert_eq!(article.slug(), "my-post");
        assert_eq!(article.title(), "My Post");
        assert_eq!(article.create_date(), Some("2024-05-01"));
        assert_eq!(article.update_date(), None);
    }

    #[test]
    fn test_slug_collapses_whitespace_runs() {
        assert_eq!(slugify_file_stem("Rust  \t Tips And Tricks"), "rust-tips-and-tricks");
        assert_eq!(slugify_file_stem("   "), "untitled");
        assert_eq!(file_stem("notes.v2.md"), "notes.v2");
        assert_eq!(file_stem("README"), "README");
        assert_eq!(file_stem(".md"), ".md");
    }

    #[test]
    fn test_missing_front_matter_rejected() {
        let file = raw("plain.md", "# Just text\n\nNo header here.");
        assert_eq!(
            ArticleBuilder::new().from_raw(&file),
            Err(Rejection::MissingFrontMatter {
                path: "notes/plain.md".to_string()
            })
        );
    }

    #[test]
    fn test_published_flag_rules() {
        for (header, published) in [
            ("published: true", true),
            ("published: TRUE", true),
            ("published: \"false\"", true),
            ("published: no", true),
            ("title: x", true),
        ] {
            let file = raw("p.md", &format!("---\n{}\n---\nBody", header));
            let article = ArticleBuilder::new().from_raw(&file).unwrap();
            assert_eq!(article.published(), published, "{}", header);
        }
    }

    #[test]
    fn test_empty_title_falls_back_to_file_name() {
        let file = raw("Fallback Title.md", "---\ntitle: \"\"\n---\n");
        let article = ArticleBuilder::new().from_raw(&file).unwrap();
        assert_eq!(article.title(), "Fallback Title");
    }

    #[test]
    fn test_tags_keep_order_and_duplicates() {
        let file = raw(
            "t.md",
            "---\ntags:\n  - rust\n  - web\n  - rust\nuid: 20240101\n---\nBody",
        );
        let article = ArticleBuilder::new().from_raw(&file).unwrap();
        assert_eq!(article.tags(), ["rust", "web", "rust"]);
        assert_eq!(article.uid(), Some("20240101"));
    }

    #[test]
    fn test_preview_length_configurable() {
        let file = raw("long.md", "---\ntitle: L\n---\nabcdefghij");
        let article = ArticleBuilder::new()
            .with_preview_length(4)
            .from_raw(&file)
            .unwrap();
        assert_eq!(article.preview_content(), Some("abcd..."));
    }

    #[test]
    fn test_malformed_header_still_ingested() {
        // in strict mode the header falls back to defaults, which still
        // counts as front-matter, and the full text becomes the body
        let content = "---\ntitle: Broken\ntitle2: x\n  - y\npublished: false\n---\nBody";
        let file = raw("Broken Note.md", content);
        let article = ArticleBuilder::new()
            .with_list_coercion(ListCoercion::Strict)
            .from_raw(&file)
            .unwrap();
        assert_eq!(article.title(), "Broken Note");
        assert_eq!(article.content(), content);
        assert!(article.published());
    }

    #[test]
    fn test_serializes_camel_case() {
        let file = raw("s.md", "---\ntitle: S\n---\nBody");
        let article = ArticleBuilder::new().from_raw(&file).unwrap();
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["title"], "S");
        assert_eq!(json["previewContent"], "Body");
        assert_eq!(json["revisionId"], "abc123");
        assert!(json["createDate"].is_null());
    }
}
