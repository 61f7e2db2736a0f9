//! Static page generator
//!
//! Writes the post list, every post page and one list page per tag into the
//! public directory.

use anyhow::{anyhow, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{Adjacent, Post};
use crate::helpers::{html_escape, PatternDateFormatter, TAG_DIR};
use crate::view::{
    DocumentLayout, Frame, Layout, PostList, PostPageRenderer, PostSummaryRenderer,
};
use crate::Blog;

/// Site generator
pub struct Generator<'a> {
    blog: &'a Blog,
    layout: DocumentLayout,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(blog: &'a Blog) -> Self {
        let layout = DocumentLayout::new(&blog.config.title, &blog.config.language);
        Self { blog, layout }
    }

    /// Generate the whole site from newest-first posts
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        fs::create_dir_all(&self.blog.public_dir)?;

        let dates = PatternDateFormatter::new(&self.blog.config.date_format);
        let summaries = PostSummaryRenderer::new(dates.clone());
        let pages = PostPageRenderer::new(&self.blog.config, dates);

        self.generate_index_page(&summaries, posts)?;
        self.generate_post_pages(&pages, posts)?;
        self.generate_tag_pages(&summaries, posts)?;

        Ok(())
    }

    /// Generate the post list at the site root
    fn generate_index_page(
        &self,
        summaries: &PostSummaryRenderer<PatternDateFormatter>,
        posts: &[Post],
    ) -> Result<()> {
        let list = PostList::render(summaries, posts)
            .map_err(|e| anyhow!("Failed to render post list: {}", e))?;

        let html = self.layout.wrap(&Frame {
            title: &self.blog.config.title,
            description: &self.blog.config.description,
            canonical_url: None,
            body: &list.to_html(),
        });

        let output_path = self.blog.public_dir.join("index.html");
        write_page(&output_path, &html)?;
        tracing::info!("Generated index with {} posts", list.items.len());

        Ok(())
    }

    /// Generate individual post pages
    fn generate_post_pages(
        &self,
        pages: &PostPageRenderer<'_, PatternDateFormatter>,
        posts: &[Post],
    ) -> Result<()> {
        let mut written = 0;

        for (i, post) in posts.iter().enumerate() {
            let Some(output_path) = self.slug_output_path(&post.slug) else {
                tracing::warn!("Skipping post {}: unusable slug {:?}", post.id, post.slug);
                continue;
            };

            let view = pages
                .render_adjacent(post, Adjacent::of(posts, i))
                .map_err(|e| anyhow!("Failed to render post {}: {}", post.id, e))?;

            let html = self.layout.wrap(&Frame {
                title: &view.title,
                description: &view.description,
                canonical_url: Some(&view.canonical_url),
                body: &view.to_html(),
            });

            write_page(&output_path, &html)?;
            tracing::debug!("Generated post: {:?}", output_path);
            written += 1;
        }

        tracing::info!("Generated {} post pages", written);
        Ok(())
    }

    /// Generate one post list per tag, tags in first-seen order
    fn generate_tag_pages(
        &self,
        summaries: &PostSummaryRenderer<PatternDateFormatter>,
        posts: &[Post],
    ) -> Result<()> {
        let mut tags: IndexMap<&str, Vec<&Post>> = IndexMap::new();
        for post in posts {
            for tag in &post.tags {
                tags.entry(tag.as_str()).or_default().push(post);
            }
        }

        let tag_root = self.blog.public_dir.join(TAG_DIR);
        let mut written = 0;

        for (tag, tagged) in &tags {
            if !is_path_segment(tag) {
                tracing::warn!("Skipping tag page for {:?}: not a path segment", tag);
                continue;
            }

            let list = PostList::render(summaries, tagged.iter().copied())
                .map_err(|e| anyhow!("Failed to render tag {}: {}", tag, e))?;

            let title = format!("#{}", tag);
            let body = format!(
                "<h1 class=\"tag-title\">{}</h1>\n{}",
                html_escape(&title),
                list.to_html()
            );
            let html = self.layout.wrap(&Frame {
                title: &title,
                description: "",
                canonical_url: None,
                body: &body,
            });

            let output_path = tag_root.join(tag).join("index.html");
            write_page(&output_path, &html)?;
            tracing::debug!("Generated tag page: {:?}", output_path);
            written += 1;
        }

        tracing::info!("Generated {} tag pages", written);
        Ok(())
    }

    /// Where a slug's page lands; `None` for slugs that would leave the public
    /// directory or overwrite the index
    fn slug_output_path(&self, slug: &str) -> Option<PathBuf> {
        let segments: Vec<&str> = slug.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() || !segments.iter().all(|s| is_path_segment(s)) {
            return None;
        }

        let mut path = self.blog.public_dir.clone();
        for segment in segments {
            path.push(segment);
        }
        Some(path.join("index.html"))
    }
}

fn is_path_segment(s: &str) -> bool {
    !s.is_empty() && s != "." && s != ".." && !s.contains(['/', '\\'])
}

fn write_page(output_path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow!("Failed to create dir {:?}: {}", parent, e))?;
    }
    fs::write(output_path, html)
        .map_err(|e| anyhow!("Failed to write {:?}: {}", output_path, e))?;
    Ok(())
}
