//! Utility functions for selector pattern matching
//!
//! Attribute accessors that return `""` for missing values, so rules can
//! chain string checks without unwrapping.

use crate::dom;
use dom_query::Selection;

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Check if element is one of the specified tags
///
/// # Example
///
/// ```rust
/// use readability_sandbox::selector::utils;
/// use readability_sandbox::dom;
///
/// let doc = dom::parse("<article>content</article>");
/// let article = doc.select("article");
///
/// assert!(utils::is_one_of_tags(&article, &["article", "div", "section"]));
/// assert!(!utils::is_one_of_tags(&article, &["div", "span", "p"]));
/// ```
#[inline]
#[must_use]
pub fn is_one_of_tags(sel: &Selection, tags: &[&str]) -> bool {
    let t = tag(sel);
    tags.contains(&t.as_str())
}

/// Id plus every class token, lowercased, one per entry.
#[must_use]
pub fn id_class_tokens(sel: &Selection) -> Vec<String> {
    let id = attr(sel, "id");
    let class = attr(sel, "class");
    std::iter::once(id.as_str())
        .chain(class.split_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}
