//! File sources - where notes come from
//!
//! The pipeline only needs the text of each note. A [`FileSource`] hides
//! how that text is obtained; [`LocalVault`] reads it from a directory.

use serde::Serialize;
use std::future::Future;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinSet;
use walkdir::WalkDir;

use crate::content::RawFile;

/// File source errors
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Source directory not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Failed to list {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result of fetching all notes from a source
#[derive(Debug, Clone, Serialize)]
pub struct FetchResult {
    pub files: Vec<RawFile>,
    pub success: bool,
    pub message: String,
}

impl FetchResult {
    /// A successful fetch
    pub fn fetched(files: Vec<RawFile>) -> Self {
        let message = format!("{} markdown files fetched", files.len());
        Self {
            files,
            success: true,
            message,
        }
    }

    /// A fetch that produced nothing usable
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            files: Vec::new(),
            success: false,
            message: message.into(),
        }
    }
}

/// Something that can deliver the notes of a vault
pub trait FileSource {
    /// Fetch every note. Individual unreadable notes are skipped; only a
    /// source that cannot be listed at all yields `success == false`.
    fn fetch(&self) -> impl Future<Output = FetchResult> + Send;
}

/// Notes stored in a local directory
#[derive(Debug, Clone)]
pub struct LocalVault {
    /// Vault root; note paths are reported relative to it
    root: PathBuf,
    /// Directory scanned for notes
    source_dir: PathBuf,
    /// Extensions of note files, without the dot
    extensions: Vec<String>,
}

impl LocalVault {
    /// Create a source scanning `source_dir` for files with `extensions`
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(
        root: P,
        source_dir: Q,
        extensions: &[String],
    ) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            source_dir: source_dir.as_ref().to_path_buf(),
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Create a source for a vault using its configuration
    pub fn from_vault(vault: &crate::Vault) -> Self {
        Self::new(
            &vault.base_dir,
            &vault.source_dir,
            &vault.config.markdown_extensions,
        )
    }

    /// List note files, sorted by path. Hidden files and directories are skipped.
    pub fn list_files(&self) -> Result<Vec<PathBuf>, SourceError> {
        if !self.source_dir.is_dir() {
            return Err(SourceError::NotFound(self.source_dir.clone()));
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&self.source_dir)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(SourceError::Walk {
                        path: self.source_dir.clone(),
                        source: e,
                    });
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let path = entry.path();
            if path.is_file() && self.is_note(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn is_note(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|ext| ext.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }

    /// Read every note concurrently, one task per file
    async fn read_all(&self, paths: Vec<PathBuf>) -> Vec<RawFile> {
        let mut tasks = JoinSet::new();
        for path in paths {
            let root = self.root.clone();
            tasks.spawn(async move { read_note(&root, path).await });
        }

        let mut files = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined.map_err(SourceError::from).and_then(|r| r) {
                Ok(file) => files.push(file),
                Err(e) => tracing::error!("{}", e),
            }
        }

        // Completion order is arbitrary
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }
}

impl FileSource for LocalVault {
    async fn fetch(&self) -> FetchResult {
        let paths = match self.list_files() {
            Ok(paths) => paths,
            Err(e) => {
                tracing::error!("Failed to fetch notes: {}", e);
                return FetchResult::failed(e.to_string());
            }
        };

        let files = self.read_all(paths).await;
        tracing::info!("Fetched {} markdown files from {:?}", files.len(), self.source_dir);
        FetchResult::fetched(files)
    }
}

/// Read one note into a [`RawFile`]
async fn read_note(root: &Path, path: PathBuf) -> Result<RawFile, SourceError> {
    let content = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| SourceError::Read {
            path: path.clone(),
            source,
        })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(RawFile {
        name,
        path: relative_path(root, &path),
        revision_id: Some(format!("{:016x}", hash_content(&content))),
        content,
    })
}

/// Path relative to `root`, always with `/` separators
fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().map(|s| s.starts_with('.')).unwrap_or(false)
}

/// Calculate a hash for file content
pub fn hash_content(content: &str) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    hasher.finish()
}
