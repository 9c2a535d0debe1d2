//! Wiki-style markup patterns shared by the preview extractor and the
//! content transformer

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `![[attachment]]`
    pub static ref EMBED: Regex = Regex::new(r"!\[\[(.*?)\]\]").unwrap();

    /// `[[target]]` or `[[target|alias]]`
    pub static ref WIKI_LINK: Regex = Regex::new(r"\[\[(.*?)\]\]").unwrap();

    /// Emphasis, heading and code markers
    pub static ref INLINE_MARKERS: Regex = Regex::new(r"[*_~`#]").unwrap();

    /// A blank (or whitespace-only) line between two paragraphs
    pub static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\r?\n[ \t]*\r?\n").unwrap();
}

/// Text before the first paragraph break, or all of it
pub fn first_paragraph(text: &str) -> &str {
    PARAGRAPH_BREAK.split(text).next().unwrap_or("")
}

/// Split a wiki-link body into (target, alias)
pub fn split_link(inner: &str) -> (&str, Option<&str>) {
    let mut parts = inner.split('|');
    let target = parts.next().unwrap_or("").trim();
    let alias = parts.next().map(str::trim).filter(|a| !a.is_empty());
    (target, alias)
}
