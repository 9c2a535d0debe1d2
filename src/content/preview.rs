//! Preview extraction
//!
//! List views show a short plain-text excerpt taken from the first paragraph
//! of a note, with wiki markup removed.

use super::syntax::{first_paragraph, EMBED, INLINE_MARKERS, WIKI_LINK};

/// Default maximum preview length, in characters
pub const DEFAULT_PREVIEW_LENGTH: usize = 150;

/// Appended to previews that were cut short
pub const ELLIPSIS: &str = "...";

/// Extract a plain-text preview of at most `max_length` characters
/// (plus [`ELLIPSIS`] when truncated)
pub fn extract_preview(body: &str, max_length: usize) -> String {
    let plain = strip_markup(first_paragraph(body));

    let cut = plain.char_indices().nth(max_length).map(|(idx, _)| idx);
    match cut {
        Some(cut) => format!("{}{}", &plain[..cut], ELLIPSIS),
        None => plain,
    }
}

/// [`extract_preview`] with [`DEFAULT_PREVIEW_LENGTH`]
pub fn extract_preview_default(body: &str) -> String {
    extract_preview(body, DEFAULT_PREVIEW_LENGTH)
}

/// Remove embeds, unwrap links and drop inline markers.
///
/// Repeated until nothing changes: unwrapping `[[[[a]]]]` or dropping the `*`
/// in `[*[a]*]` can expose new link syntax.
fn strip_markup(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let stripped = EMBED.replace_all(&current, "");
        let stripped = WIKI_LINK.replace_all(&stripped, "${1}");
        let stripped = INLINE_MARKERS.replace_all(&stripped, "").into_owned();
        if stripped == current {
            return stripped.trim().to_string();
        }
        current = stripped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_paragraph_only() {
        assert_eq!(
            extract_preview_default("First paragraph.\n\nSecond."),
            "First paragraph."
        );
    }

    #[test]
    fn test_strips_markup() {
        let body = "# Title with **bold**, _em_, ~~gone~~ and `code` ![[cat.png]] see [[Other Note]]";
        assert_eq!(
            extract_preview_default(body),
            "Title with bold, em, gone and code  see Other Note"
        );
    }

    #[test]
    fn test_alias_link_kept_verbatim() {
        assert_eq!(extract_preview_default("[[Note|My Note]]"), "Note|My Note");
    }

    #[test]
    fn test_embed_only_paragraph_is_empty() {
        assert_eq!(extract_preview_default("![[diagram.svg]]\n\nText"), "");
    }

    #[test]
    fn test_nested_syntax_fully_removed() {
        for body in ["[[[[a]]]]", "[*[a]*]", "![*[x]*]", "!![[[[x]]]]", "[[a]b]]"] {
            let preview = extract_preview_default(body);
            assert!(!EMBED.is_match(&preview), "{:?} -> {:?}", body, preview);
            assert!(!WIKI_LINK.is_match(&preview), "{:?} -> {:?}", body, preview);
        }
    }

    #[test]
    fn test_truncates_with_ellipsis() {
        let body = "a".repeat(200);
        let preview = extract_preview_default(&body);
        assert_eq!(preview, format!("{}...", "a".repeat(150)));

        assert_eq!(extract_preview("abcdef", 3), "abc...");
        assert_eq!(extract_preview("abc", 3), "abc");
        assert_eq!(extract_preview("abc", 0), "...");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let body = "日本語のテキスト";
        assert_eq!(extract_preview(body, 3), "日本語...");
        assert_eq!(extract_preview(body, 8), body);
    }

    #[test]
    fn test_length_law() {
        let bodies = vec![
            String::new(),
            "short".to_string(),
            "**bold** [[link]] ![[img.png]] text that keeps going for a while".to_string(),
            "ümlaut ünïcödé ".repeat(20),
            "line one\nline two\n\nparagraph two".to_string(),
        ];
        for body in &bodies {
            for max in [0, 1, 5, 20, 150] {
                let preview = extract_preview(body, max);
                let text = preview.strip_suffix(ELLIPSIS).unwrap_or(&preview);
                assert!(text.chars().count() <= max, "{:?} / {}", body, max);
            }
        }
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(extract_preview_default(""), "");
    }
}
