//! Attachment helper functions
//!
//! Attachments (images, PDFs) live next to the notes and are served by an
//! external route; these helpers only build the URLs and content types.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Generate the servable URL of an attachment
///
/// # Examples
/// ```ignore
/// attachment_url("/api/attachments/", "my cat.png") // -> "/api/attachments/my%20cat.png"
/// ```
pub fn attachment_url(route: &str, file_name: &str) -> String {
    format!(
        "{}/{}",
        route.trim_end_matches('/'),
        utf8_percent_encode(file_name, COMPONENT)
    )
}

/// Build an image resolver bound to an attachment route
pub fn attachment_resolver(route: &str) -> impl Fn(&str) -> String + '_ {
    move |name: &str| attachment_url(route, name)
}

/// Guess the content type of an attachment from its extension
pub fn content_type_for(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    let ext = lower.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}
