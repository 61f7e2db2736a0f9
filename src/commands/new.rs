//! Create a new post

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Scaffold a content file and return its path
pub fn create_post(blog: &Blog, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    fs::create_dir_all(&blog.content_dir)?;

    let file_path = blog
        .content_dir
        .join(format!("{}.html", slug::slugify(title)));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let slug_line = match slug {
        Some(s) => format!("slug: {}\n", serde_json::to_string(s)?),
        None => String::new(),
    };

    let content = format!(
        "---\ntitle: {}\n{}date: {}\ndescription: ''\ntags: []\n---\n",
        serde_json::to_string(title)?,
        slug_line,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
