//! Content cleaning passes applied after the main node has been chosen.
//!
//! Attribute whitelisting, heading de-duplication and empty-node pruning.
//! Every pass works in place on a `Selection` and reports how many nodes or
//! attributes it touched.

use dom_query::Selection;

use crate::dom;
use crate::etree;

/// Attributes kept on every element. `data-src` and `aria-label` stay so the
/// Markdown image rules can still fall back to them.
pub const ATTRIBUTE_WHITELIST: &[&str] = &[
    "src",
    "srcset",
    "sizes",
    "type",
    "href",
    "class",
    "id",
    "alt",
    "xlink:href",
    "width",
    "height",
    "data-src",
    "aria-label",
    "title",
    "colspan",
    "rowspan",
    "lang",
    "dir",
];

/// Elements that carry meaning without any text.
const MEDIA_SELECTOR: &str = "img, picture, video, audio, iframe, svg, object, embed, source";

/// Drop every attribute outside `whitelist` from `root` and its descendants.
pub fn strip_attributes(root: &Selection, whitelist: &[&str]) -> usize {
    let mut removed = 0;
    let elements = root.select("*");
    for node in root.nodes().iter().chain(elements.nodes()) {
        let sel = Selection::from(*node);
        for (name, _) in dom::get_all_attributes(&sel) {
            if !whitelist.contains(&name.as_str()) {
                dom::remove_attribute(&sel, &name);
                removed += 1;
            }
        }
    }
    removed
}

/// Remove headings whose text repeats `title`.
pub fn remove_title_headings(root: &Selection, title: &str, selector: &str) -> usize {
    let title = dom::collapse_whitespace(title);
    if title.is_empty() {
        return 0;
    }

    let headings: Vec<Selection> = root
        .select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|heading| dom::collapse_whitespace(&heading.text()).eq_ignore_ascii_case(&title))
        .collect();
    for heading in &headings {
        etree::remove(heading, true);
    }
    headings.len()
}

/// Remove elements matching `selector` that have neither text nor media.
pub fn remove_empty(root: &Selection, selector: &str) -> usize {
    let empty: Vec<Selection> = root
        .select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| sel.text().trim().is_empty() && sel.select(MEDIA_SELECTOR).is_empty())
        .collect();
    // Innermost first.
    for sel in empty.iter().rev() {
        etree::remove(sel, true);
    }
    empty.len()
}

/// Remove spacer images whose declared width or height is below `min_size`.
pub fn remove_spacer_images(root: &Selection, min_size: u32) -> usize {
    let spacers: Vec<Selection> = root
        .select("img")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|img| {
            ["width", "height"].iter().any(|name| {
                dom::get_attribute(img, name)
                    .and_then(|value| value.trim().trim_end_matches("px").parse::<u32>().ok())
                    .is_some_and(|size| size < min_size)
            })
        })
        .collect();
    for img in &spacers {
        etree::remove(img, true);
    }
    spacers.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_attributes() {
        let doc = dom::parse(
            r#"<div id="root" style="color:red" onclick="x()"><a href="/a" target="_blank" data-track="1">A</a><img src="i.png" data-src="d.png" loading="lazy"></div>"#,
        );
        let root = doc.select("#root");
        assert_eq!(strip_attributes(&root, ATTRIBUTE_WHITELIST), 5);
        let html = dom::outer_html(&root).to_string();
        assert!(html.contains(r#"href="/a""#));
        assert!(html.contains(r#"data-src="d.png""#));
        assert!(!html.contains("onclick"));
        assert!(!html.contains("style="));
        assert!(!html.contains("loading"));
    }

    #[test]
    fn test_remove_title_headings() {
        let doc = dom::parse("<div><h1>My  Title</h1><h2>Section</h2><p>Body</p></div>");
        let root = doc.select("div");
        assert_eq!(remove_title_headings(&root, "my title", "h1, h2"), 1);
        assert!(root.select("h1").is_empty());
        assert!(!root.select("h2").is_empty());
    }

    #[test]
    fn test_remove_empty_keeps_media() {
        let doc = dom::parse(r#"<div><p> </p><p><img src="a.png"></p><p>Text</p></div>"#);
        let root = doc.select("div");
        assert_eq!(remove_empty(&root, "p"), 1);
        assert_eq!(root.select("p").nodes().len(), 2);
    }

    #[test]
    fn test_remove_spacer_images() {
        let doc = dom::parse(
            r#"<div><img src="pixel.gif" width="1" height="1"><img src="photo.jpg" width="640px"><img src="plain.png"></div>"#,
        );
        let root = doc.select("div");
        assert_eq!(remove_spacer_images(&root, 10), 1);
        assert_eq!(root.select("img").nodes().len(), 2);
    }
}
