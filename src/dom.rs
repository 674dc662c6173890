//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate shared by every back-end and the
//! Markdown renderer. They mirror the handful of browser DOM properties the
//! extractors depend on (`document.title`, `document.dir`,
//! `body.textContent`).

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::result::direction_token;

// === Parsing ===

/// Parse HTML string into document.
///
/// Never fails: html5ever recovers from any markup, so malformed input
/// simply yields a sparse tree.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value only when it is present and non-empty.
#[must_use]
pub fn non_empty_attribute(sel: &Selection, name: &str) -> Option<String> {
    get_attribute(sel, name).filter(|value| !value.is_empty())
}

/// Remove an attribute
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// Get all attributes as key-value pairs
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get outer HTML content
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Strip leading/trailing whitespace and collapse inner runs to one space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// === Tree Manipulation ===

/// Replace element with HTML
#[inline]
pub fn replace_with_html(sel: &Selection, html: &str) {
    sel.replace_with_html(html);
}

/// Rename element tag
#[inline]
pub fn rename(sel: &Selection, new_tag: &str) {
    sel.rename(new_tag);
}

/// Every node matched by `css` below `root`, one `Selection` each, in
/// document order.
#[must_use]
pub fn select_each<'a>(root: &Selection<'a>, css: &str) -> Vec<Selection<'a>> {
    root.select(css)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Document Properties ===

/// Equivalent of `document.title`: the first `<title>` element's text with
/// whitespace stripped and collapsed, `""` when there is none.
#[must_use]
pub fn document_title(doc: &Document) -> String {
    doc.select("title")
        .nodes()
        .first()
        .map(|node| collapse_whitespace(&Selection::from(*node).text()))
        .unwrap_or_default()
}

/// Equivalent of `document.dir`: the root element's `dir` attribute when it
/// is a valid direction token.
#[must_use]
pub fn document_dir(doc: &Document) -> Option<&'static str> {
    doc.select("html")
        .nodes()
        .first()
        .and_then(|node| Selection::from(*node).attr("dir"))
        .and_then(|dir| direction_token(&dir))
}

/// Text of an HTML fragment, as a browser would report
/// `body.textContent` after loading it on its own.
#[must_use]
pub fn fragment_text(fragment: &str) -> String {
    if fragment.is_empty() {
        return String::new();
    }
    let doc = parse(fragment);
    let text = doc.select("body").text().to_string();
    text
}
