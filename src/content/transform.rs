//! Render-time conversion of note bodies to HTML
//!
//! Only the knowledge-base specific syntax is handled: attachment embeds,
//! wiki-links and paragraph breaks. Everything else is passed through as-is.

use regex::Captures;

use super::syntax::{split_link, EMBED, PARAGRAPH_BREAK, WIKI_LINK};
use crate::helpers::{image_tag, is_paragraph, link_to, paragraph};

/// Converts note bodies to HTML, resolving attachments through `resolver`
pub struct ContentTransformer<R> {
    resolver: R,
}

impl<R> ContentTransformer<R>
where
    R: Fn(&str) -> String,
{
    /// Create a transformer with an attachment resolver
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Render a note body to HTML
    pub fn to_html(&self, body: &str) -> String {
        to_html(body, &self.resolver)
    }
}

/// Render a note body to HTML.
///
/// Embeds, then links, then paragraphs; each stage rewrites the whole text
/// before the next one runs.
pub fn to_html<R>(body: &str, resolver: R) -> String
where
    R: Fn(&str) -> String,
{
    let html = convert_embeds(body, &resolver);
    let html = convert_links(&html);
    wrap_paragraphs(&html)
}

/// `![[name]]` -> `<img>` pointing at the resolved attachment
pub fn convert_embeds<R>(text: &str, resolver: R) -> String
where
    R: Fn(&str) -> String,
{
    EMBED
        .replace_all(text, |caps: &Captures| {
            let name = caps[1].trim();
            image_tag(&resolver(name), name)
        })
        .into_owned()
}

/// `[[target|alias]]` -> `<a href="/alias">target</a>`
pub fn convert_links(text: &str) -> String {
    WIKI_LINK
        .replace_all(text, |caps: &Captures| {
            let (target, alias) = split_link(&caps[1]);
            link_to(&format!("/{}", alias.unwrap_or(target)), target)
        })
        .into_owned()
}

/// Wrap each blank-line separated chunk in `<p>`. Chunks that already are
/// paragraphs are kept, so rendered output renders to itself.
pub fn wrap_paragraphs(text: &str) -> String {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| {
            if is_paragraph(chunk) {
                chunk.to_string()
            } else {
                paragraph(chunk)
            }
        })
        .collect()
}

/// Attachment names referenced by embeds, in order of appearance
pub fn extract_image_refs(body: &str) -> Vec<String> {
    EMBED
        .captures_iter(body)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(name: &str) -> String {
        format!("/img/{}", name)
    }

    #[test]
    fn test_embed_and_alias_link() {
        let html = to_html("![[cat.png]]\n\n[[Note|My Note]]", resolver);
        assert_eq!(
            html,
            r#"<p><img src="/img/cat.png" alt="cat.png" /></p><p><a href="/My Note">Note</a></p>"#
        );
    }

    #[test]
    fn test_link_without_alias() {
        assert_eq!(
            convert_links("see [[Rust Tips]] and [[Other| ]]"),
            r#"see <a href="/Rust Tips">Rust Tips</a> and <a href="/Other">Other</a>"#
        );
    }

    #[test]
    fn test_embed_name_trimmed() {
        assert_eq!(
            convert_embeds("![[ photo.jpg ]]", resolver),
            r#"<img src="/img/photo.jpg" alt="photo.jpg" />"#
        );
    }

    #[test]
    fn test_embeds_before_links() {
        // an embed must never be picked up as a link
        let html = to_html("![[a.png]] [[b]]", resolver);
        assert_eq!(
            html,
            r#"<p><img src="/img/a.png" alt="a.png" /> <a href="/b">b</a></p>"#
        );
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(
            wrap_paragraphs("  One\nline two  \n\n\n\nTwo\n \nThree\n"),
            "<p>One\nline two</p><p>Two</p><p>Three</p>"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_embeds("", resolver), "");
        assert_eq!(convert_links(""), "");
        assert_eq!(wrap_paragraphs(""), "");
        assert_eq!(to_html("", resolver), "");
        assert_eq!(to_html("\n\n  \n\n", resolver), "");
    }

    #[test]
    fn test_plain_text_only_wrapped_and_idempotent() {
        let body = "Hello *world*.\n\nSecond <em>para</em>.";
        let once = to_html(body, resolver);
        assert_eq!(once, "<p>Hello *world*.</p><p>Second <em>para</em>.</p>");
        assert_eq!(to_html(&once, resolver), once);
    }

    #[test]
    fn test_mixed_paragraph_chunk_wrapped() {
        assert_eq!(
            to_html("<p>a</p> and then plain text <p>b</p>\n\nnext", resolver),
            "<p><p>a</p> and then plain text <p>b</p></p><p>next</p>"
        );
    }

    #[test]
    fn test_transformer_struct() {
        let transformer = ContentTransformer::new(|name: &str| format!("/files/{}", name));
        assert_eq!(
            transformer.to_html("![[x.gif]]"),
            r#"<p><img src="/files/x.gif" alt="x.gif" /></p>"#
        );
    }

    #[test]
    fn test_extract_image_refs() {
        assert_eq!(
            extract_image_refs("![[a.png]] text ![[ b.jpg ]]\n[[not-an-image]]"),
            vec!["a.png".to_string(), "b.jpg".to_string()]
        );
        assert!(extract_image_refs("").is_empty());
    }
}
