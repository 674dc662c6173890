//! Result types for extraction output.
//!
//! Every back-end answers in its own shape. `RawArticle` is the common
//! "maybe" shape the dispatcher maps them into, and `ExtractionResult` is
//! what callers see: no optional fields, absent values become `""`.

use serde::{Deserialize, Serialize};

/// Direction used when neither the back-end nor the document declares one.
pub const DEFAULT_DIR: &str = "ltr";

/// Normalized output of a single extraction.
///
/// Serialized field-for-field with the JSON names used by the HTTP API
/// (`textContent` is the only camel-cased one).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Article title, `""` when unknown.
    pub title: String,

    /// Author line, `""` when unknown.
    pub byline: String,

    /// Text direction: `"ltr"`, `"rtl"` or `""`.
    pub dir: String,

    /// Short summary supplied by the back-end or cut from the text.
    pub excerpt: String,

    /// Extracted article as an HTML fragment.
    pub content: String,

    /// Plain text of `content`.
    pub text_content: String,
}

/// What `POST /api/parse` answers with: the result and its Markdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutput {
    pub result: ExtractionResult,
    pub markdown: String,
}

/// Back-end output before normalization.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawArticle {
    pub title: Option<String>,
    pub byline: Option<String>,
    pub dir: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub text_content: Option<String>,
}

impl RawArticle {
    /// Collapse every optional field to a string.
    ///
    /// `dir` falls back to `document_dir` (already validated by the caller)
    /// and then to [`DEFAULT_DIR`].
    pub fn normalize(self, document_dir: Option<&str>) -> ExtractionResult {
        let dir = self
            .dir
            .as_deref()
            .and_then(direction_token)
            .or_else(|| document_dir.and_then(direction_token))
            .unwrap_or(DEFAULT_DIR);

        ExtractionResult {
            title: self.title.unwrap_or_default(),
            byline: self.byline.unwrap_or_default(),
            dir: dir.to_string(),
            excerpt: self.excerpt.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            text_content: self.text_content.unwrap_or_default(),
        }
    }
}

/// Map a raw `dir` value onto one of the two direction tokens.
///
/// `auto` and anything unrecognized yield `None`, like an unset attribute.
#[must_use]
pub fn direction_token(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "ltr" => Some("ltr"),
        "rtl" => Some("rtl"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_defaults_to_empty_strings() {
        let result = RawArticle::default().normalize(None);
        assert_eq!(result.title, "");
        assert_eq!(result.byline, "");
        assert_eq!(result.excerpt, "");
        assert_eq!(result.content, "");
        assert_eq!(result.text_content, "");
        assert_eq!(result.dir, "ltr");
    }

    #[test]
    fn test_dir_fallback_chain() {
        let raw = RawArticle {
            dir: Some("RTL".into()),
            ..RawArticle::default()
        };
        assert_eq!(raw.normalize(Some("ltr")).dir, "rtl");

        let raw = RawArticle {
            dir: Some("auto".into()),
            ..RawArticle::default()
        };
        assert_eq!(raw.normalize(Some("rtl")).dir, "rtl");
        assert_eq!(RawArticle::default().normalize(Some("sideways")).dir, "ltr");
    }

    #[test]
    fn test_serializes_text_content_camel_case() {
        let result = ExtractionResult {
            text_content: "body".into(),
            ..ExtractionResult::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["textContent"], "body");
        assert!(json.get("text_content").is_none());
        assert_eq!(json["byline"], "");
    }
}
