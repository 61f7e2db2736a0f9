//! Post list: summaries in the order the content source supplies them

use serde::Serialize;

use super::summary::{PostSummaryRenderer, SummaryView};
use crate::content::Post;
use crate::error::RenderError;
use crate::helpers::DateFormatter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostList {
    pub items: Vec<SummaryView>,
}

impl PostList {
    /// Render one summary per post; the first failing post aborts the list
    pub fn render<'p, D, I>(
        renderer: &PostSummaryRenderer<D>,
        posts: I,
    ) -> Result<Self, RenderError>
    where
        D: DateFormatter,
        I: IntoIterator<Item = &'p Post>,
    {
        let items = posts
            .into_iter()
            .map(|post| renderer.render(post))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { items })
    }

    pub fn to_html(&self) -> String {
        let mut html = r#"<ol class="post-list">"#.to_string();
        for item in &self.items {
            html.push_str(&item.to_html());
        }
        html.push_str("</ol>");
        html
    }
}
