//! Helper functions for rendering
//!
//! Pure string builders shared by the views: URL and share-link
//! construction, HTML fragments, and date formatting.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
