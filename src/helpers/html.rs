//! HTML helper functions
//!
//! Small builders for the few elements the content transformer emits.
//! Interpolated values are escaped; surrounding note text is not touched.

/// Generate an image tag
///
/// # Examples
/// ```ignore
/// image_tag("/api/attachments/cat.png", "cat.png") // -> <img src="/api/attachments/cat.png" alt="cat.png" />
/// ```
pub fn image_tag(src: &str, alt: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" />"#,
        html_escape(src),
        html_escape(alt)
    )
}

/// Generate an anchor tag
///
/// # Examples
/// ```ignore
/// link_to("/My Note", "Note") // -> <a href="/My Note">Note</a>
/// ```
pub fn link_to(href: &str, text: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, html_escape(href), html_escape(text))
}

/// Wrap already-rendered HTML in a paragraph
pub fn paragraph(inner: &str) -> String {
    format!("<p>{}</p>", inner)
}

/// Whether a chunk is nothing but a sequence of paragraph elements,
/// with no text between or around them
pub fn is_paragraph(chunk: &str) -> bool {
    if chunk.is_empty() {
        return false;
    }

    let mut rest = chunk;
    while !rest.is_empty() {
        let Some(inner) = rest.strip_prefix("<p>") else {
            return false;
        };
        let Some(end) = inner.find("</p>") else {
            return false;
        };
        rest = &inner[end + "</p>".len()..];
    }
    true
}

/// Simple HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
