//! Post page: article, share links and previous/next navigation

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{Adjacent, Post};
use crate::error::{require, RenderError};
use crate::helpers::{
    canonical_url, html_escape, link_to, share_url, tag_path, time_tag, DateFormatter,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagLink {
    /// `#tag`
    pub label: String,
    /// `/tags/<tag>/`
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    fn class(self) -> &'static str {
        match self {
            Direction::Previous => "adjacent-previous",
            Direction::Next => "adjacent-next",
        }
    }
}

/// One previous/next navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacentEntry {
    pub direction: Direction,
    pub label: String,
    pub href: String,
    pub title: String,
}

/// Everything a post page shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    /// Formatted publication date
    pub date: String,
    pub tags: Vec<TagLink>,
    /// Pre-rendered content, untouched
    pub body: String,
    pub share_links: Vec<ShareLink>,
    /// Previous first, then next; absent neighbors have no entry
    pub adjacent: Vec<AdjacentEntry>,
}

impl PageView {
    pub fn to_html(&self) -> String {
        let tags: String = self
            .tags
            .iter()
            .map(|tag| {
                format!(
                    r#"<li class="tag">{}</li>"#,
                    link_to(&tag.href, &html_escape(&tag.label), None)
                )
            })
            .collect();

        let article = format!(
            concat!(
                r#"<article class="post">"#,
                r#"<h1 class="post-title">{title}</h1>"#,
                r#"<div class="post-description">{description}</div>"#,
                r#"<div class="post-extra">{date}<div class="post-extra-divider" aria-hidden="true">·</div><ul class="tag-list">{tags}</ul></div>"#,
                r#"<div class="post-content">{body}</div>"#,
                r#"</article>"#
            ),
            title = html_escape(&self.title),
            description = html_escape(&self.description),
            date = time_tag(&self.date),
            tags = tags,
            body = self.body,
        );

        let share: String = self
            .share_links
            .iter()
            .map(|link| link_to(&link.href, &html_escape(&link.label), Some("share-link")))
            .collect();

        let adjacent: String = self
            .adjacent
            .iter()
            .map(|entry| {
                let inner = format!(
                    r#"<span class="adjacent-label">{}</span><span class="adjacent-title">{}</span>"#,
                    html_escape(&entry.label),
                    html_escape(&entry.title)
                );
                let class = format!("adjacent-article {}", entry.direction.class());
                link_to(&entry.href, &inner, Some(class.as_str()))
            })
            .collect();

        format!(
            "{}\n<div class=\"share-links\">{}</div>\n<nav class=\"adjacent-articles\">{}</nav>",
            article, share, adjacent
        )
    }
}

/// Renders full post pages
#[derive(Debug, Clone)]
pub struct PostPageRenderer<'a, D> {
    config: &'a SiteConfig,
    dates: D,
}

impl<'a, D: DateFormatter> PostPageRenderer<'a, D> {
    pub fn new(config: &'a SiteConfig, dates: D) -> Self {
        Self { config, dates }
    }

    pub fn render(
        &self,
        post: &Post,
        previous: Option<&Post>,
        next: Option<&Post>,
    ) -> Result<PageView, RenderError> {
        require(&post.slug, "slug")?;
        require(&post.title, "title")?;
        if let Some(previous) = previous {
            require(&previous.slug, "previous.slug")?;
        }
        if let Some(next) = next {
            require(&next.slug, "next.slug")?;
        }

        let date = self.dates.format_date(&post.date)?;
        let canonical = canonical_url(&self.config.url, &post.slug);

        let tags = post
            .tags
            .iter()
            .map(|tag| TagLink {
                label: format!("#{}", tag),
                href: tag_path(tag),
            })
            .collect();

        let share_links = self
            .config
            .share
            .iter()
            .map(|target| ShareLink {
                label: target.label.clone(),
                href: share_url(&target.template, &post.title, &canonical),
            })
            .collect();

        let labels = &self.config.adjacent;
        let adjacent = [
            (Direction::Previous, &labels.previous, previous),
            (Direction::Next, &labels.next, next),
        ]
        .into_iter()
        .filter_map(|(direction, label, neighbor)| {
            neighbor.map(|neighbor| AdjacentEntry {
                direction,
                label: label.clone(),
                href: neighbor.slug.clone(),
                title: neighbor.title.clone(),
            })
        })
        .collect();

        Ok(PageView {
            title: post.title.clone(),
            description: post.description.clone(),
            canonical_url: canonical,
            date,
            tags,
            body: post.content_body.clone(),
            share_links,
            adjacent,
        })
    }

    /// Render with neighbors taken from an [`Adjacent`]
    pub fn render_adjacent(
        &self,
        post: &Post,
        adjacent: Adjacent<'_>,
    ) -> Result<PageView, RenderError> {
        self.render(post, adjacent.previous, adjacent.next)
    }
}
