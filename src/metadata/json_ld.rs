//! JSON-LD Metadata Parsing
//!
//! Reads schema.org objects embedded as `application/ld+json` and keeps the
//! few fields the Defuddle-style back-end consults: headline, description,
//! author and publisher name.

use dom_query::{Document, Selection};
use serde_json::{Map, Value};

use crate::dom;

/// Fields taken from the most relevant article-like schema object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMetadata {
    /// `headline`, falling back to `name`.
    pub headline: Option<String>,
    /// `description`.
    pub description: Option<String>,
    /// `author` names joined with `", "`.
    pub author: Option<String>,
    /// `publisher.name`, or the name of a standalone Organization/WebSite.
    pub publisher: Option<String>,
}

/// Extract metadata from every JSON-LD script in the document.
///
/// Scripts that fail to parse are skipped. `@graph` arrays and top-level
/// arrays are flattened; article types win over `WebPage`.
#[must_use]
pub fn extract_json_ld(doc: &Document) -> SchemaMetadata {
    let mut objects: Vec<Map<String, Value>> = Vec::new();

    for script in doc.select(r#"script[type="application/ld+json"]"#).nodes() {
        let json_text = dom::text_content(&Selection::from(*script)).trim().to_string();
        if json_text.is_empty() {
            continue;
        }
        let Ok(data) = serde_json::from_str::<Value>(&json_text) else {
            tracing::debug!("skipping unparsable JSON-LD block");
            continue;
        };
        flatten(&data, &mut objects);
    }

    let mut result = SchemaMetadata::default();

    let mut articles: Vec<&Map<String, Value>> = objects
        .iter()
        .filter(|obj| schema_types(obj).iter().any(|t| is_article_type(t)))
        .collect();
    // Real article types before generic WebPage entries.
    articles.sort_by_key(|obj| schema_types(obj).iter().all(|t| t == "webpage"));

    for article in &articles {
        if result.headline.is_none() {
            result.headline =
                single_string(article, "headline").or_else(|| single_string(article, "name"));
        }
        if result.description.is_none() {
            result.description = single_string(article, "description");
        }
        if result.author.is_none() {
            result.author = article.get("author").and_then(person_names);
        }
        if result.publisher.is_none() {
            result.publisher = article
                .get("publisher")
                .and_then(Value::as_object)
                .and_then(|publisher| single_string(publisher, "name"));
        }
    }

    if result.publisher.is_none() {
        result.publisher = objects
            .iter()
            .filter(|obj| schema_types(obj).iter().any(|t| is_organization_type(t)))
            .find_map(|obj| single_string(obj, "name"));
    }

    result
}

/// Collect typed objects, descending into arrays and `@graph`.
fn flatten(value: &Value, out: &mut Vec<Map<String, Value>>) {
    match value {
        Value::Object(map) => {
            if let Some(graph) = map.get("@graph") {
                flatten(graph, out);
            }
            if !schema_types(map).is_empty() {
                out.push(map.clone());
            }
        }
        Value::Array(items) => {
            for item in items {
                flatten(item, out);
            }
        }
        _ => {}
    }
}

/// Lowercased `@type` values.
fn schema_types(obj: &Map<String, Value>) -> Vec<String> {
    match obj.get("@type") {
        Some(Value::String(s)) => vec![s.to_lowercase()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_lowercase)
            .collect(),
        _ => Vec::new(),
    }
}

fn is_article_type(t: &str) -> bool {
    matches!(
        t,
        "article"
            | "newsarticle"
            | "blogposting"
            | "webpage"
            | "report"
            | "techarticle"
            | "scholarlyarticle"
            | "socialmediaposting"
    )
}

fn is_organization_type(t: &str) -> bool {
    matches!(t, "organization" | "newsmediaorganization" | "website")
}

/// Trimmed, non-empty string (or first string of an array).
fn single_string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    let value = match obj.get(key)? {
        Value::Array(items) => items.first()?,
        other => other,
    };
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Names from a schema `author` value: a string, a Person object, or an
/// array of either.
fn person_names(value: &Value) -> Option<String> {
    let names: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(person_name).collect(),
        other => person_name(other).into_iter().collect(),
    };
    (!names.is_empty()).then(|| names.join(", "))
}

fn person_name(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Object(obj) => single_string(obj, "name").or_else(|| {
            let given = single_string(obj, "givenName").unwrap_or_default();
            let family = single_string(obj, "familyName").unwrap_or_default();
            let full = format!("{given} {family}").trim().to_string();
            (!full.is_empty()).then_some(full)
        }),
        _ => None,
    }
}
