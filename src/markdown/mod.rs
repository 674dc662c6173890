//! Markdown rendering of an [`ExtractionResult`].
//!
//! `quick_html2md` does the conversion. Elements claimed by a [`Rule`] are
//! swapped for opaque placeholder tokens first, so the converter never
//! touches them, and the rule output is substituted back afterwards.

pub mod rules;

use dom_query::{NodeRef, Selection};
use quick_html2md::{html_to_markdown_with_options, MarkdownOptions};

pub use rules::{Rule, IMAGE_RULES};

use crate::dom;
use crate::result::ExtractionResult;

const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';

/// Markdown for a whole result: title heading, italic byline, then the
/// converted content.
///
/// ```
/// use readability_sandbox::{markdown, ExtractionResult};
///
/// let result = ExtractionResult {
///     title: "T".into(),
///     content: "<p>Hello</p>".into(),
///     ..ExtractionResult::default()
/// };
/// assert_eq!(markdown::render(&result), "# T\n\nHello");
/// ```
#[must_use]
pub fn render(result: &ExtractionResult) -> String {
    let mut markdown = String::new();
    if !result.title.is_empty() {
        markdown.push_str("# ");
        markdown.push_str(&result.title);
        markdown.push_str("\n\n");
    }
    if !result.byline.is_empty() {
        markdown.push('_');
        markdown.push_str(&result.byline);
        markdown.push_str("_\n\n");
    }
    markdown.push_str(&convert(&result.content));
    markdown
}

/// Convert an HTML fragment with the image rules.
#[must_use]
pub fn convert(fragment: &str) -> String {
    convert_with_rules(fragment, IMAGE_RULES)
}

/// Convert an HTML fragment, letting `rules` claim elements first.
///
/// Rules are tried in order on every element in document order; the first
/// that matches claims the element and its subtree.
#[must_use]
pub fn convert_with_rules(fragment: &str, rules: &[Rule]) -> String {
    let fragment: String = fragment
        .chars()
        .filter(|ch| *ch != PLACEHOLDER_OPEN && *ch != PLACEHOLDER_CLOSE)
        .collect();
    if fragment.trim().is_empty() {
        return String::new();
    }

    let doc = dom::parse(&fragment);
    let body = doc.select("body");

    let mut claims = Vec::new();
    for node in body.nodes() {
        let mut child = node.first_child();
        while let Some(current) = child {
            claim(current, rules, &mut claims);
            child = current.next_sibling();
        }
    }

    let mut replacements = Vec::with_capacity(claims.len());
    for (index, (node, output)) in claims.into_iter().enumerate() {
        dom::replace_with_html(&Selection::from(node), &placeholder(index));
        replacements.push(output);
    }

    let html = dom::inner_html(&body).to_string();
    let options = MarkdownOptions::new()
        .include_links(true)
        .include_images(true)
        .preserve_tables(true);
    let mut markdown = html_to_markdown_with_options(&html, &options);

    for (index, output) in replacements.iter().enumerate() {
        markdown = markdown.replace(&placeholder(index), output);
    }
    markdown.trim().to_string()
}

/// Depth-first walk recording the first claiming rule's output per element.
fn claim<'a>(node: NodeRef<'a>, rules: &[Rule], claims: &mut Vec<(NodeRef<'a>, String)>) {
    if node.is_element() {
        let sel = Selection::from(node);
        if let Some(rule) = rules::find_rule(rules, &sel) {
            claims.push((node, (rule.replacement)(&sel)));
            return;
        }
    }

    let mut child = node.first_child();
    while let Some(current) = child {
        claim(current, rules, claims);
        child = current.next_sibling();
    }
}

fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_OPEN}{index}{PLACEHOLDER_CLOSE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_byline_prefix() {
        let result = ExtractionResult {
            title: "T".into(),
            byline: "B".into(),
            content: "<p>x</p>".into(),
            ..ExtractionResult::default()
        };
        assert_eq!(render(&result), "# T\n\n_B_\n\nx");
    }

    #[test]
    fn test_empty_result_renders_empty() {
        assert_eq!(render(&ExtractionResult::default()), "");
    }

    #[test]
    fn test_linked_image_replaces_anchor() {
        let markdown = convert(r#"<p><a href="/x"><img src="a.png" alt="A"></a></p>"#);
        assert_eq!(markdown, "![A](a.png)");
    }

    #[test]
    fn test_bare_image_falls_back() {
        let markdown = convert(r#"<p><img alt="" aria-label="L" src="" data-src="d.png"></p>"#);
        assert_eq!(markdown, "![L](d.png)");
    }

    #[test]
    fn test_only_first_image_of_link() {
        let markdown =
            convert(r#"<p><a href="/g"><img src="1.png" alt="one"><img src="2.png" alt="two"></a></p>"#);
        assert_eq!(markdown, "![one](1.png)");
    }

    #[test]
    fn test_placeholder_chars_in_input_are_dropped() {
        let markdown = convert("<p>a\u{E000}0\u{E001}b</p>");
        assert!(!markdown.contains(PLACEHOLDER_OPEN));
        assert!(markdown.contains("a0b"));
    }

    #[test]
    fn test_plain_links_still_converted() {
        let markdown = convert(r#"<p>See <a href="https://example.com">docs</a> now.</p>"#);
        assert!(markdown.contains("[docs](https://example.com)"));
    }
}
