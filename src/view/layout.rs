//! Page chrome around rendered views

use crate::helpers::html_escape;

/// What a layout needs to know about the page it wraps
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub canonical_url: Option<&'a str>,
    /// Rendered inner HTML
    pub body: &'a str,
}

/// Wraps rendered views into complete documents
pub trait Layout {
    fn wrap(&self, frame: &Frame<'_>) -> String;
}

/// Minimal HTML5 document
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    pub site_title: String,
    pub language: String,
}

impl DocumentLayout {
    pub fn new(site_title: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            site_title: site_title.into(),
            language: language.into(),
        }
    }

    fn page_title(&self, title: &str) -> String {
        if title.is_empty() || title == self.site_title {
            self.site_title.clone()
        } else {
            format!("{} | {}", title, self.site_title)
        }
    }
}

impl Layout for DocumentLayout {
    fn wrap(&self, frame: &Frame<'_>) -> String {
        let mut head = vec![
            r#"<meta charset="utf-8">"#.to_string(),
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#.to_string(),
            format!("<title>{}</title>", html_escape(&self.page_title(frame.title))),
        ];

        if !frame.description.is_empty() {
            head.push(format!(
                r#"<meta name="description" content="{}">"#,
                html_escape(frame.description)
            ));
        }

        if let Some(url) = frame.canonical_url {
            head.push(format!(r#"<link rel="canonical" href="{}">"#, html_escape(url)));
        }

        format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n{}\n</head>\n<body>\n{}\n</body>\n</html>\n",
            html_escape(&self.language),
            head.join("\n"),
            frame.body
        )
    }
}
