//! Metadata extraction module.
//!
//! Meta tags and schema.org JSON-LD, read once per document and consulted
//! through ordered lookup chains by the Mercury-style and Defuddle-style
//! back-ends.

pub mod json_ld;
pub mod meta_tags;

use dom_query::Document;

pub use json_ld::{extract_json_ld, SchemaMetadata};
pub use meta_tags::{validate_metadata_name, MetaTags};

use crate::dom;
use crate::patterns::TITLE_SEPARATOR;

/// Everything a back-end may look up, gathered in one pass.
#[derive(Debug, Clone, Default)]
pub struct DocumentMetadata {
    /// `<meta>` tags.
    pub meta: MetaTags,
    /// schema.org fields.
    pub schema: SchemaMetadata,
    /// `document.title`.
    pub title_element: String,
}

impl DocumentMetadata {
    /// Read meta tags, JSON-LD and the title element.
    #[must_use]
    pub fn collect(doc: &Document) -> Self {
        Self {
            meta: MetaTags::collect(doc),
            schema: extract_json_ld(doc),
            title_element: dom::document_title(doc),
        }
    }
}

/// Remove a site name from a "Story | Site" shaped title.
///
/// With a known `site_name`, the part equal to it (case-insensitively) is
/// dropped. Without one, the longest part is kept when it is clearly the
/// substantial one. Titles without separators are returned collapsed.
#[must_use]
pub fn strip_site_name(title: &str, site_name: Option<&str>) -> String {
    let title = dom::collapse_whitespace(title);
    let parts: Vec<&str> = TITLE_SEPARATOR
        .split(&title)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() < 2 {
        return title;
    }

    if let Some(site) = site_name.map(str::trim).filter(|s| !s.is_empty()) {
        let kept: Vec<&str> = parts
            .iter()
            .copied()
            .filter(|part| !part.eq_ignore_ascii_case(site))
            .collect();
        if !kept.is_empty() && kept.len() < parts.len() {
            return kept.join(" - ");
        }
    }

    parts
        .iter()
        .copied()
        .max_by_key(|part| part.chars().count())
        .filter(|part| part.split_whitespace().count() >= 2)
        .map_or(title.clone(), str::to_string)
}
