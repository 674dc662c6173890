//! HTML Meta Tag Extraction
//!
//! Collects `<meta>` tags keyed by their `name`, `property` or `itemprop`
//! (lowercased). Open Graph, Twitter cards, Dublin Core and plain names all
//! land in the same table; lookups take an ordered list of keys.

use std::collections::HashMap;

use dom_query::{Document, Selection};

use crate::dom;

/// Meta tag contents by lowercased key. The first tag for a key wins.
#[derive(Debug, Clone, Default)]
pub struct MetaTags {
    entries: HashMap<String, String>,
}

impl MetaTags {
    /// Collect all meta tags of a document.
    #[must_use]
    pub fn collect(doc: &Document) -> Self {
        let mut entries = HashMap::new();

        for node in doc.select("meta").nodes() {
            let meta = Selection::from(*node);

            let content = dom::get_attribute(&meta, "content").unwrap_or_default();
            let content = content.trim();
            if content.is_empty() {
                continue;
            }

            for key_attr in ["name", "property", "itemprop"] {
                if let Some(key) = dom::non_empty_attribute(&meta, key_attr) {
                    entries
                        .entry(key.trim().to_lowercase())
                        .or_insert_with(|| content.to_string());
                }
            }
        }

        Self { entries }
    }

    /// Content of the first key in `keys` that is present.
    #[must_use]
    pub fn first(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.get(key))
    }

    /// Content for a single key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(&key.to_lowercase()).cloned()
    }
}

/// Validate that a metadata value looks like a real person or outlet name.
///
/// Rejects empty strings, URLs, bare numbers and values without letters.
#[must_use]
pub fn validate_metadata_name(name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() || name.starts_with("http://") || name.starts_with("https://") {
        return false;
    }
    name.chars().any(char::is_alphabetic)
}
