//! Clutter Patterns
//!
//! Identifies page furniture (navigation, sidebars, ads, share bars, hidden
//! elements) that the Defuddle-style back-end strips before looking for the
//! main content.

use dom_query::Selection;

use crate::dom;
use crate::etree;
use crate::patterns::{CLUTTER_CLASS, HIDDEN_STYLE};
use crate::selector::utils::{attr, id_class_tokens, is_one_of_tags};
use crate::selector::{self, Rule};

/// Elements removed wherever they appear.
pub const EXACT_CLUTTER_SELECTORS: &[&str] = &[
    "script",
    "style",
    "noscript",
    "template",
    "link",
    "meta",
    "nav",
    "aside",
    "footer",
    "form",
    "button",
    "input",
    "select",
    "textarea",
    "iframe",
    "object",
    "embed",
    "canvas",
    "[role=banner]",
    "[role=navigation]",
    "[role=complementary]",
    "[role=contentinfo]",
    "[role=dialog]",
    ".ad",
    ".ads",
    ".advertisement",
    ".share",
    ".social",
    ".related",
    ".newsletter",
    ".comments",
    "#comments",
];

/// Containers eligible for the class/id clutter test. Inline and content
/// tags are never removed on class alone.
const CLUTTER_CONTAINER_TAGS: &[&str] = &[
    "div", "section", "aside", "header", "ul", "ol", "li", "span", "p", "dl", "table",
];

/// Rules evaluated after the exact selectors, in order.
pub static CLUTTER_RULES: &[Rule] = &[is_hidden, has_clutter_token];

/// Element is hidden from readers: `hidden`, `aria-hidden="true"`, or an
/// inline style that hides it.
#[must_use]
pub fn is_hidden(sel: &Selection) -> bool {
    sel.has_attr("hidden")
        || attr(sel, "aria-hidden").eq_ignore_ascii_case("true")
        || HIDDEN_STYLE.is_match(&attr(sel, "style"))
}

/// Container whose id or one of whose class tokens names page furniture.
///
/// Containers wrapping an `<article>` or `<main>` are kept.
#[must_use]
pub fn has_clutter_token(sel: &Selection) -> bool {
    if !is_one_of_tags(sel, CLUTTER_CONTAINER_TAGS) {
        return false;
    }
    if id_class_tokens(sel).iter().all(|token| !CLUTTER_CLASS.is_match(token)) {
        return false;
    }
    sel.select("article, main, [role=main], [role=article]").is_empty()
}

/// Strip clutter below `root`. Returns the number of removed elements.
pub fn remove_clutter(root: &Selection) -> usize {
    let mut removed = 0;

    for css in EXACT_CLUTTER_SELECTORS {
        let matches = root.select(css);
        removed += matches.nodes().len();
        matches.remove();
    }

    for rule in CLUTTER_RULES {
        let matches = selector::query_all(root, *rule);
        removed += matches.len();
        // Innermost first so ancestors are still attached when reached.
        for sel in matches.iter().rev() {
            etree::remove(sel, true);
        }
    }

    removed
}

/// Whitespace-collapsed text of `root`.
#[must_use]
pub fn visible_text(root: &Selection) -> String {
    dom::collapse_whitespace(&root.text())
}
