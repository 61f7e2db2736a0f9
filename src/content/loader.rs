//! Content loader - reads pre-rendered posts from the content directory

use anyhow::{anyhow, Result};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, Post};
use crate::helpers::parse_date;
use crate::Blog;

/// Loads posts from the content directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load all published posts, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !(path.is_file() && is_html_file(path)) {
                continue;
            }

            match self.load_post(path) {
                Ok(Some((sort_key, post))) => posts.push((sort_key, post)),
                Ok(None) => tracing::debug!("Skipping unpublished post {:?}", path),
                Err(e) => tracing::warn!("Failed to load post {:?}: {}", path, e),
            }
        }

        posts.sort_by(|(a_date, a), (b_date, b)| match b_date.cmp(a_date) {
            Ordering::Equal => a.slug.cmp(&b.slug),
            other => other,
        });
        let posts: Vec<Post> = posts.into_iter().map(|(_, post)| post).collect();

        warn_duplicate_slugs(&posts);

        Ok(posts)
    }

    /// Load a single post; `None` when it is not published
    fn load_post(&self, path: &Path) -> Result<Option<(chrono::NaiveDateTime, Post)>> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        if !fm.published {
            return Ok(None);
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");

        let date = fm
            .date
            .ok_or_else(|| anyhow!("missing `date` in front-matter"))?;
        let sort_key = parse_date(&date)?;

        let id = fm.id.unwrap_or_else(|| {
            path.strip_prefix(&self.blog.content_dir)
                .unwrap_or(path)
                .to_string_lossy()
                .to_string()
        });
        let slug = fm
            .slug
            .unwrap_or_else(|| format!("/{}/", slug::slugify(stem)));
        let title = fm.title.unwrap_or_else(|| stem.to_string());

        let post = Post::new(id, slug, title, date)
            .with_description(fm.description.unwrap_or_default())
            .with_tags(fm.tags)
            .with_body(body.trim_end());

        Ok(Some((sort_key, post)))
    }
}

/// Slugs are assumed unique; collisions are reported but both posts are kept
fn warn_duplicate_slugs(posts: &[Post]) {
    let mut seen = HashSet::new();
    for post in posts {
        if !seen.insert(post.slug.as_str()) {
            tracing::warn!("Duplicate slug {} (post {})", post.slug, post.id);
        }
    }
}

/// Check if a file holds pre-rendered HTML
fn is_html_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "html" || e == "htm")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn blog_in(dir: &Path) -> Blog {
        Blog::with_config(dir, SiteConfig::default())
    }

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_posts_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        write(
            &content,
            "older.html",
            "---\ntitle: Older\ndate: 2020-01-01\ntags: [x, y]\n---\n<p>old</p>\n",
        );
        write(
            &content,
            "nested/newer.html",
            "---\ntitle: Newer\ndate: 2021-06-01\nslug: /posts/newer/\n---\n<p>new</p>\n",
        );
        write(&content, "notes.txt", "ignored");

        let blog = blog_in(dir.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "Newer");
        assert_eq!(posts[0].slug, "/posts/newer/");
        assert_eq!(posts[0].content_body, "<p>new</p>");
        assert_eq!(posts[1].title, "Older");
        assert_eq!(posts[1].slug, "/older/");
        assert_eq!(posts[1].id, "older.html");
        assert_eq!(posts[1].tags, vec!["x", "y"]);
    }

    #[test]
    fn test_skips_unpublished_and_undated() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        write(
            &content,
            "draft.html",
            "---\ntitle: Draft\ndate: 2020-01-01\npublished: false\n---\n<p>d</p>\n",
        );
        write(&content, "undated.html", "---\ntitle: Undated\n---\n<p>u</p>\n");
        write(
            &content,
            "bad-date.html",
            "---\ntitle: Bad\ndate: someday\n---\n<p>b</p>\n",
        );
        write(
            &content,
            "ok.html",
            "---\ntitle: Ok\ndate: 2020-01-01\n---\n<p>ok</p>\n",
        );

        let blog = blog_in(dir.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Ok");
    }

    #[test]
    fn test_duplicate_slugs_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        write(
            &content,
            "a.html",
            "---\ntitle: A\ndate: 2020-01-01\nslug: /same/\n---\n<p>a</p>\n",
        );
        write(
            &content,
            "b.html",
            "---\ntitle: B\ndate: 2020-01-02\nslug: /same/\n---\n<p>b</p>\n",
        );

        let blog = blog_in(dir.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.slug == "/same/"));
    }

    #[test]
    fn test_numeric_tag_keeps_post() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        write(
            &content,
            "year.html",
            "---\ntitle: Year\ndate: 2020-01-02\ntags: 2020\n---\n<p>y</p>\n",
        );
        write(
            &content,
            "other.html",
            "---\ntitle: Other\ndate: 2020-01-01\n---\n<p>o</p>\n",
        );

        let blog = blog_in(dir.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].tags, vec!["2020"]);
    }

    #[test]
    fn test_equal_date_and_slug_follow_file_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        for name in ["c.html", "a.html", "nested/b.html"] {
            write(
                &content,
                name,
                &format!(
                    "---\ntitle: {}\ndate: 2020-01-01\nslug: /same/\n---\n<p>x</p>\n",
                    name
                ),
            );
        }

        let blog = blog_in(dir.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();

        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a.html", "c.html", "nested/b.html"]);
    }

    #[test]
    fn test_missing_content_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blog = blog_in(dir.path());
        assert!(ContentLoader::new(&blog).load_posts().unwrap().is_empty());
    }
}
