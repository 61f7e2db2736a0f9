//! Content module - post records, front-matter, and the on-disk content source

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::FrontMatter;
pub use post::{Adjacent, Post};
