//! Post summary: one entry of the post list

use serde::Serialize;

use crate::content::Post;
use crate::error::{require, RenderError};
use crate::helpers::{html_escape, link_to, time_tag, DateFormatter};

/// A post as it appears in a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    /// Link target, the post's slug
    pub link: String,
    pub title: String,
    /// Formatted publication date
    pub date: String,
    pub description: String,
    /// `#tag` labels in the post's tag order
    pub tags: Vec<String>,
}

impl SummaryView {
    pub fn to_html(&self) -> String {
        let tags: String = self
            .tags
            .iter()
            .map(|tag| format!(r#"<li class="tag">{}</li>"#, html_escape(tag)))
            .collect();

        let inner = format!(
            r#"<div class="post-top"><h2 class="post-title">{}</h2>{}</div><div class="post-description">{}</div><ul class="tag-list">{}</ul>"#,
            html_escape(&self.title),
            time_tag(&self.date),
            html_escape(&self.description),
            tags
        );

        format!(
            r#"<li class="post-item">{}</li>"#,
            link_to(&self.link, &inner, Some("post-link"))
        )
    }
}

/// Renders list entries for posts
#[derive(Debug, Clone)]
pub struct PostSummaryRenderer<D> {
    dates: D,
}

impl<D: DateFormatter> PostSummaryRenderer<D> {
    pub fn new(dates: D) -> Self {
        Self { dates }
    }

    pub fn render(&self, post: &Post) -> Result<SummaryView, RenderError> {
        require(&post.slug, "slug")?;

        Ok(SummaryView {
            link: post.slug.clone(),
            title: post.title.clone(),
            date: self.dates.format_date(&post.date)?,
            description: post.description.clone(),
            tags: post.tags.iter().map(|tag| format!("#{}", tag)).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DateError;
    use crate::helpers::PatternDateFormatter;

    fn verbatim(date: &str) -> Result<String, DateError> {
        Ok(date.to_string())
    }

    fn sample() -> Post {
        Post::new("1", "/hello/", "Hello", "2020-01-01")
            .with_description("first post")
            .with_tags(["rust", "blog", "a-tag"])
    }

    #[test]
    fn test_render_summary() {
        let renderer = PostSummaryRenderer::new(verbatim);
        let view = renderer.render(&sample()).unwrap();

        assert_eq!(view.link, "/hello/");
        assert_eq!(view.title, "Hello");
        assert_eq!(view.date, "2020-01-01");
        assert_eq!(view.description, "first post");
        assert_eq!(view.tags, vec!["#rust", "#blog", "#a-tag"]);
    }

    #[test]
    fn test_tags_keep_input_order() {
        let renderer = PostSummaryRenderer::new(verbatim);
        let post = sample().with_tags(["zeta", "alpha", "mid"]);
        let view = renderer.render(&post).unwrap();
        assert_eq!(view.tags, vec!["#zeta", "#alpha", "#mid"]);
    }

    #[test]
    fn test_empty_tags_and_description() {
        let renderer = PostSummaryRenderer::new(verbatim);
        let post = Post::new("1", "/bare/", "Bare", "2020-01-01");
        let view = renderer.render(&post).unwrap();
        assert!(view.tags.is_empty());
        assert_eq!(view.description, "");
        assert!(view.to_html().contains(r#"<ul class="tag-list"></ul>"#));
    }

    #[test]
    fn test_empty_slug_is_rejected() {
        let renderer = PostSummaryRenderer::new(verbatim);
        let post = Post::new("1", "", "No slug", "2020-01-01");
        assert_eq!(
            renderer.render(&post),
            Err(RenderError::InvalidInput { field: "slug" })
        );
    }

    #[test]
    fn test_date_failure_propagates() {
        let renderer = PostSummaryRenderer::new(PatternDateFormatter::new("YYYY-MM-DD"));
        let post = Post::new("1", "/x/", "X", "not a date");
        assert_eq!(
            renderer.render(&post),
            Err(RenderError::Date(DateError::new("not a date")))
        );
    }

    #[test]
    fn test_summary_html() {
        let renderer = PostSummaryRenderer::new(verbatim);
        let html = renderer.render(&sample()).unwrap().to_html();
        assert_eq!(
            html,
            concat!(
                r#"<li class="post-item"><a class="post-link" href="/hello/">"#,
                r#"<div class="post-top"><h2 class="post-title">Hello</h2><time>2020-01-01</time></div>"#,
                r#"<div class="post-description">first post</div>"#,
                r##"<ul class="tag-list"><li class="tag">#rust</li><li class="tag">#blog</li><li class="tag">#a-tag</li></ul>"##,
                r#"</a></li>"#
            )
        );
    }

    #[test]
    fn test_summary_escapes_text() {
        let renderer = PostSummaryRenderer::new(verbatim);
        let post = Post::new("1", "/x/", "<script>", "2020-01-01");
        let html = renderer.render(&post).unwrap().to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = PostSummaryRenderer::new(PatternDateFormatter::new("YYYY-MM-DD"));
        let post = sample();
        let first = renderer.render(&post).unwrap().to_html();
        let second = renderer.render(&post).unwrap().to_html();
        assert_eq!(first, second);
    }
}
