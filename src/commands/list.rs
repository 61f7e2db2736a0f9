//! List site content

use anyhow::Result;
use indexmap::IndexMap;

use crate::content::loader::ContentLoader;
use crate::content::Post;
use crate::Blog;

/// List site content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    let posts = ContentLoader::new(blog).load_posts()?;
    for line in list_lines(&posts, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

/// Lines printed for `content_type`: a header, then one indented entry each
pub fn list_lines(posts: &[Post], content_type: &str) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    match content_type {
        "post" | "posts" => {
            lines.push(format!("Posts ({}):", posts.len()));
            for post in posts {
                lines.push(format!("  {} - {} [{}]", post.date, post.title, post.slug));
            }
        }
        "tag" | "tags" => {
            let mut tags: IndexMap<&str, usize> = IndexMap::new();
            for post in posts {
                for tag in &post.tags {
                    *tags.entry(tag.as_str()).or_insert(0) += 1;
                }
            }
            lines.push(format!("Tags ({}):", tags.len()));
            // stable: equal counts keep first-seen order
            tags.sort_by(|_, a, _, b| b.cmp(a));
            for (tag, count) in tags {
                lines.push(format!("  {} ({})", tag, count));
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(lines)
}
