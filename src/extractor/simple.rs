//! Simple back-end: the first `<article>`, or every paragraph.

use dom_query::Selection;

use crate::dom;
use crate::result::{ExtractionResult, RawArticle};

/// Characters kept for the excerpt.
pub const EXCERPT_LENGTH: usize = 200;

/// Extract without heuristics.
///
/// With an `<article>`, its inner markup and text are used as-is. Without
/// one, every `<p>` in the document contributes its outer markup
/// (concatenated) and its text (newline-joined).
#[must_use]
pub fn extract(html: &str) -> ExtractionResult {
    let doc = dom::parse(html);

    let (content, text_content) = match doc.select("article").nodes().first() {
        Some(node) => {
            let article = Selection::from(*node);
            (
                dom::inner_html(&article).to_string(),
                dom::text_content(&article).to_string(),
            )
        }
        None => {
            let paragraphs: Vec<Selection> = doc
                .select("p")
                .nodes()
                .iter()
                .map(|node| Selection::from(*node))
                .collect();
            let content: String = paragraphs.iter().map(|p| dom::outer_html(p).to_string()).collect();
            let text = paragraphs
                .iter()
                .map(|p| dom::text_content(p).to_string())
                .collect::<Vec<_>>()
                .join("\n");
            (content, text)
        }
    };

    let excerpt: String = text_content.chars().take(EXCERPT_LENGTH).collect();

    RawArticle {
        title: Some(dom::document_title(&doc)),
        byline: None,
        dir: None,
        excerpt: Some(excerpt),
        content: Some(content),
        text_content: Some(text_content),
    }
    .normalize(dom::document_dir(&doc))
}
