//! Replacement rules applied before the default converter runs.
//!
//! A rule claims a whole element: its replacement text stands in for the
//! element and everything below it.

use dom_query::Selection;

use crate::dom;

/// A named `(filter, replacement)` pair.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub filter: fn(&Selection) -> bool,
    pub replacement: fn(&Selection) -> String,
}

/// Image rules in precedence order.
pub static IMAGE_RULES: &[Rule] = &[
    Rule {
        name: "linked-image",
        filter: is_linked_image,
        replacement: linked_image,
    },
    Rule {
        name: "image",
        filter: is_image,
        replacement: image,
    },
];

/// The first rule in `rules` whose filter accepts `sel`.
#[must_use]
pub fn find_rule<'r>(rules: &'r [Rule], sel: &Selection) -> Option<&'r Rule> {
    rules.iter().find(|rule| (rule.filter)(sel))
}

/// `<a>` with an `<img>` anywhere below it.
#[must_use]
pub fn is_linked_image(sel: &Selection) -> bool {
    dom::tag_name(sel).as_deref() == Some("a") && !sel.select("img").is_empty()
}

/// The anchor becomes its first image. Attributes count when present, even
/// if empty.
#[must_use]
pub fn linked_image(sel: &Selection) -> String {
    let Some(node) = sel.select("img").nodes().first().copied() else {
        return String::new();
    };
    let img = Selection::from(node);

    let alt = dom::get_attribute(&img, "alt").unwrap_or_default();
    let src = dom::get_attribute(&img, "src")
        .or_else(|| dom::get_attribute(&img, "data-src"))
        .unwrap_or_default();
    image_markdown(&alt, &src)
}

/// Any `<img>`.
#[must_use]
pub fn is_image(sel: &Selection) -> bool {
    dom::tag_name(sel).as_deref() == Some("img")
}

/// Empty attributes fall through to the next candidate.
#[must_use]
pub fn image(sel: &Selection) -> String {
    let alt = dom::non_empty_attribute(sel, "alt")
        .or_else(|| dom::non_empty_attribute(sel, "aria-label"))
        .unwrap_or_default();
    let src = dom::non_empty_attribute(sel, "src")
        .or_else(|| dom::non_empty_attribute(sel, "data-src"))
        .unwrap_or_default();
    image_markdown(&alt, &src)
}

fn image_markdown(alt: &str, src: &str) -> String {
    format!("![{alt}]({src})")
}
