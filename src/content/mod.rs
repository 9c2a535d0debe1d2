//! Content module - notes, front-matter and articles

mod article;
mod frontmatter;
pub mod listing;
pub mod loader;
mod preview;
mod syntax;
pub mod transform;

pub use article::{Article, ArticleBuilder, RawFile, Rejection};
pub use frontmatter::{FmValue, FrontMatter, FrontMatterError, ListCoercion};
pub use listing::ArticleFilter;
pub use loader::{ContentLoader, LoadOutcome};
pub use preview::{extract_preview, extract_preview_default, DEFAULT_PREVIEW_LENGTH, ELLIPSIS};
pub use transform::{extract_image_refs, to_html, ContentTransformer};
