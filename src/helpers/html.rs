//! HTML helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate an anchor tag around already-rendered inner HTML
///
/// # Examples
/// ```ignore
/// link_to("/tags/rust/", "#rust", None) // -> <a href="/tags/rust/">#rust</a>
/// ```
pub fn link_to(href: &str, inner_html: &str, class: Option<&str>) -> String {
    let external = href.starts_with("http://") || href.starts_with("https://");
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();

    if external {
        format!(
            r#"<a{} href="{}" target="_blank" rel="noopener">{}</a>"#,
            class_attr,
            html_escape(href),
            inner_html
        )
    } else {
        format!(r#"<a{} href="{}">{}</a>"#, class_attr, html_escape(href), inner_html)
    }
}

/// Generate a <time> element holding a display date
pub fn time_tag(display: &str) -> String {
    format!("<time>{}</time>", html_escape(display))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_link_to() {
        assert_eq!(
            link_to("/tags/rust/", "#rust", None),
            r#"<a href="/tags/rust/">#rust</a>"#
        );
        assert_eq!(
            link_to("/a?x=1&y=2", "A", Some("nav")),
            r#"<a class="nav" href="/a?x=1&amp;y=2">A</a>"#
        );
    }

    #[test]
    fn test_external_link_opens_new_tab() {
        let html = link_to("https://twitter.com/intent/tweet", "share", None);
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener""#));
    }

    #[test]
    fn test_time_tag() {
        assert_eq!(time_tag("2020-01-01"), "<time>2020-01-01</time>");
    }
}
