//! Helper functions
//!
//! HTML snippets emitted by the content transformer and the URLs under
//! which attachments are served.

mod attachment;
mod html;

pub use attachment::*;
pub use html::*;
