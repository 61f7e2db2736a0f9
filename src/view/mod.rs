//! Views: pure transformations from post records to page structures
//!
//! Renderers never perform I/O; each call reads only its arguments, so
//! they can be shared freely across threads.

mod layout;
mod list;
mod page;
mod summary;

pub use layout::{DocumentLayout, Frame, Layout};
pub use list::PostList;
pub use page::{AdjacentEntry, Direction, PageView, PostPageRenderer, ShareLink, TagLink};
pub use summary::{PostSummaryRenderer, SummaryView};
