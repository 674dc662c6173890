//! Selector Infrastructure
//!
//! Rules are plain predicate functions over a `Selection`; lookup tables are
//! ordered lists of CSS selectors. Both are evaluated in document order and
//! the first hit wins.

use dom_query::Selection;

use crate::dom;

pub mod clutter;
pub mod meta;
pub mod utils;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Query for all elements matching the rule, in document order.
///
/// # Example
///
/// ```rust
/// use readability_sandbox::selector::{self, utils};
/// use readability_sandbox::dom;
///
/// let doc = dom::parse(r#"<div><p class="content">a</p><p>b</p></div>"#);
/// let root = doc.select("div");
///
/// fn has_content_class(sel: &dom_query::Selection) -> bool {
///     utils::attr(sel, "class").contains("content")
/// }
///
/// assert_eq!(selector::query_all(&root, has_content_class).len(), 1);
/// ```
#[must_use]
pub fn query_all<'a>(root: &Selection<'a>, rule: Rule) -> Vec<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| rule(sel))
        .collect()
}

/// Text of the first element matched by the first selector in `selectors`
/// that yields non-empty, whitespace-collapsed text.
///
/// Selectors are tried in list order (priority), not document order.
#[must_use]
pub fn first_text(root: &Selection, selectors: &[&str]) -> Option<String> {
    selectors.iter().find_map(|css| {
        root.select(css).nodes().iter().find_map(|node| {
            let text = dom::collapse_whitespace(&Selection::from(*node).text());
            (!text.is_empty()).then_some(text)
        })
    })
}
