//! Print the rendered view of one post

use anyhow::{anyhow, Result};

use crate::content::loader::ContentLoader;
use crate::content::Adjacent;
use crate::helpers::PatternDateFormatter;
use crate::view::{PageView, PostPageRenderer};
use crate::Blog;

/// Render the post addressed by `slug`
pub fn page_view(blog: &Blog, slug: &str) -> Result<PageView> {
    let posts = ContentLoader::new(blog).load_posts()?;
    let index = posts
        .iter()
        .position(|p| p.slug == slug)
        .ok_or_else(|| anyhow!("No post with slug {}", slug))?;

    let renderer = PostPageRenderer::new(
        &blog.config,
        PatternDateFormatter::new(&blog.config.date_format),
    );
    let view = renderer.render_adjacent(&posts[index], Adjacent::of(&posts, index))?;
    Ok(view)
}

/// Print the view as JSON, or as HTML with `html`
pub fn run(blog: &Blog, slug: &str, html: bool) -> Result<()> {
    let view = page_view(blog, slug)?;
    if html {
        println!("{}", view.to_html());
    } else {
        println!("{}", serde_json::to_string_pretty(&view)?);
    }
    Ok(())
}
