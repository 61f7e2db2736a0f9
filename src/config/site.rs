//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    /// Site origin, prefixed to slugs to form canonical URLs
    pub url: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,

    /// Moment.js-style display format for post dates
    pub date_format: String,

    /// Share-intent links shown under each post, in order
    pub share: Vec<ShareTarget>,

    /// Labels of the previous/next navigation entries
    pub adjacent: AdjacentLabels,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Heejong Ahn".to_string(),
            description: String::new(),
            language: "ko".to_string(),

            url: "https://ahnheejong.name".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),

            date_format: "YYYY-MM-DD".to_string(),

            share: vec![
                ShareTarget {
                    label: "Twitter에 공유하기".to_string(),
                    template: "https://twitter.com/intent/tweet?text=:title&url=:url".to_string(),
                },
                ShareTarget {
                    label: "Facebook에 공유하기".to_string(),
                    template: "https://www.facebook.com/sharer/sharer.php?u=:url".to_string(),
                },
            ],

            adjacent: AdjacentLabels::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// A third-party share-intent endpoint
///
/// `template` may contain `:title` and `:url` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareTarget {
    pub label: String,
    pub template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjacentLabels {
    pub previous: String,
    pub next: String,
}

impl Default for AdjacentLabels {
    fn default() -> Self {
        Self {
            previous: "이전 글".to_string(),
            next: "다음 글".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.url, "https://ahnheejong.name");
        assert_eq!(config.share.len(), 2);
        assert_eq!(config.adjacent.previous, "이전 글");
        assert_eq!(config.adjacent.next, "다음 글");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
url: https://example.com
date_format: YYYY년 M월 D일
adjacent:
  previous: Older
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.url, "https://example.com");
        assert_eq!(config.date_format, "YYYY년 M월 D일");
        assert_eq!(config.adjacent.previous, "Older");
        assert_eq!(config.adjacent.next, "다음 글");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.share.len(), 2);
    }

    #[test]
    fn test_parse_share_targets() {
        let yaml = r#"
share:
  - label: Share on Mastodon
    template: https://mastodon.social/share?text=:title%20:url
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.share.len(), 1);
        assert_eq!(config.share[0].label, "Share on Mastodon");
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(&path, "title: From File\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "From File");
    }
}
