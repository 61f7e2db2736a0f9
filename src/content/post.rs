//! Post model and adjacency

use serde::{Deserialize, Serialize};

/// A blog post as supplied by the content source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Opaque unique identifier
    pub id: String,

    /// Address of the post, e.g. `/posts/hello/`
    pub slug: String,

    pub title: String,

    /// May be empty
    #[serde(default)]
    pub description: String,

    /// Raw publication date, formatted at render time
    pub date: String,

    /// Tags in display order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Pre-rendered HTML, embedded as-is
    #[serde(default)]
    pub content_body: String,
}

impl Post {
    /// Create a post with empty description, tags and body
    pub fn new(
        id: impl Into<String>,
        slug: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            title: title.into(),
            description: String::new(),
            date: date.into(),
            tags: Vec::new(),
            content_body: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_body(mut self, content_body: impl Into<String>) -> Self {
        self.content_body = content_body.into();
        self
    }
}

/// The chronological neighbors of a post
#[derive(Debug, Clone, Copy, Default)]
pub struct Adjacent<'a> {
    /// The older post
    pub previous: Option<&'a Post>,
    /// The newer post
    pub next: Option<&'a Post>,
}

impl<'a> Adjacent<'a> {
    pub fn new(previous: Option<&'a Post>, next: Option<&'a Post>) -> Self {
        Self { previous, next }
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// Neighbors of `posts[index]` in a newest-first collection
    pub fn of(posts: &'a [Post], index: usize) -> Self {
        if index >= posts.len() {
            return Self::none();
        }

        let previous = posts.get(index + 1);
        let next = if index > 0 { posts.get(index - 1) } else { None };

        Self { previous, next }
    }
}
