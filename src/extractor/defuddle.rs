//! Defuddle-style back-end.
//!
//! Defuddle strips page furniture from a copy of the document, picks the
//! main content through a fixed list of entry points and standardizes what
//! is left. Metadata comes from meta tags and schema.org JSON-LD.

use dom_query::{Document, Selection};

use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::cleaning;
use crate::metadata::{strip_site_name, validate_metadata_name, DocumentMetadata};
use crate::result::{ExtractionResult, RawArticle};
use crate::selector::{self, clutter, meta};

/// Block elements dropped by standardization when they hold nothing.
const EMPTY_BLOCK_SELECTOR: &str = "p, div, section, span, li, ul, ol, blockquote, figure";

/// Options for [`parse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefuddleOptions {
    /// Ask for Markdown instead of HTML. Rejected: Markdown comes from
    /// [`crate::markdown`].
    pub markdown: bool,
}

/// The parser's answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefuddleResponse {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub site: Option<String>,
    pub content: String,
    pub word_count: usize,
}

/// Parse `html` Defuddle-style.
///
/// # Errors
///
/// [`Error::ExtractionFailure`] when Markdown output is requested.
pub fn parse(html: &str, options: DefuddleOptions) -> Result<DefuddleResponse> {
    if options.markdown {
        return Err(Error::ExtractionFailure(
            "Markdown output is produced by the renderer, not the parser".to_string(),
        ));
    }

    let doc = dom::parse(html);
    let metadata = DocumentMetadata::collect(&doc);

    let site = metadata
        .meta
        .first(meta::DEFUDDLE_SITE_META)
        .or_else(|| metadata.schema.publisher.clone());
    let title = extract_title(&metadata, site.as_deref());
    let author = extract_author(&doc, &metadata);
    let description = metadata
        .meta
        .first(meta::DEFUDDLE_DESCRIPTION_META)
        .or_else(|| metadata.schema.description.clone())
        .map(|text| dom::collapse_whitespace(&text));

    let mut content = extract_content(html, title.as_deref(), true);
    if dom::fragment_text(&content).trim().is_empty() {
        tracing::debug!("clutter removal emptied the content, retrying without it");
        content = extract_content(html, title.as_deref(), false);
    }

    let word_count = dom::fragment_text(&content).split_whitespace().count();
    Ok(DefuddleResponse {
        title,
        author,
        description,
        site,
        content,
        word_count,
    })
}

/// Run [`parse`] and map its answer onto [`ExtractionResult`].
///
/// `textContent` is re-derived from `content`.
pub fn extract(html: &str) -> Result<ExtractionResult> {
    let document_dir = dom::document_dir(&dom::parse(html));
    let response = parse(html, DefuddleOptions::default())?;

    let text_content = dom::fragment_text(&response.content);
    Ok(RawArticle {
        title: response.title,
        byline: response.author,
        dir: None,
        excerpt: response.description,
        content: Some(response.content),
        text_content: Some(text_content),
    }
    .normalize(document_dir))
}

fn extract_title(metadata: &DocumentMetadata, site: Option<&str>) -> Option<String> {
    metadata
        .meta
        .first(meta::DEFUDDLE_TITLE_META)
        .or_else(|| metadata.schema.headline.clone())
        .or_else(|| metadata.meta.get("title"))
        .or_else(|| (!metadata.title_element.is_empty()).then(|| metadata.title_element.clone()))
        .map(|title| strip_site_name(&title, site))
        .filter(|title| !title.is_empty())
}

fn extract_author(doc: &Document, metadata: &DocumentMetadata) -> Option<String> {
    let valid = |name: &String| validate_metadata_name(name);

    metadata
        .meta
        .get("author")
        .filter(valid)
        .or_else(|| metadata.schema.author.clone().filter(valid))
        .or_else(|| metadata.meta.get("article:author").filter(valid))
        .or_else(|| selector::first_text(&doc.select("body"), meta::DEFUDDLE_AUTHOR_SELECTORS))
        .map(|name| dom::collapse_whitespace(&name))
}

fn extract_content(html: &str, title: Option<&str>, remove_clutter: bool) -> String {
    let doc = dom::parse(html);
    let body = doc.select("body");

    if remove_clutter {
        let removed = clutter::remove_clutter(&body);
        tracing::debug!(
            removed,
            remaining_chars = clutter::visible_text(&body).chars().count(),
            "removed clutter"
        );
    }

    let root = find_entry_point(&body);
    standardize(&root, title);
    let content = dom::inner_html(&root).trim().to_string();
    content
}

/// First content entry point with text, or `body` itself.
fn find_entry_point<'a>(body: &Selection<'a>) -> Selection<'a> {
    meta::CONTENT_ENTRY_POINTS
        .iter()
        .find_map(|css| {
            dom::select_each(body, css)
                .into_iter()
                .find(|sel| !sel.text().trim().is_empty())
        })
        .unwrap_or_else(|| body.clone())
}

fn standardize(root: &Selection, title: Option<&str>) {
    cleaning::strip_attributes(root, cleaning::ATTRIBUTE_WHITELIST);
    if let Some(title) = title {
        cleaning::remove_title_headings(root, title, "h1");
    }
    cleaning::remove_empty(root, EMPTY_BLOCK_SELECTOR);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><head>
        <title>Release Notes | Example Site</title>
        <meta name="description" content="What changed in this release.">
        <meta property="og:site_name" content="Example Site">
        <script type="application/ld+json">{"@type":"NewsArticle","author":{"@type":"Person","name":"Ada Lovelace"}}</script>
      </head><body>
        <nav><a href="/">Home</a> <a href="/about">About</a></nav>
        <div class="sidebar">Trending elsewhere</div>
        <article>
          <h1>Release Notes</h1>
          <p class="lead" onclick="track()">Version two brings a new parser.</p>
          <div hidden>Secret tracking text</div>
          <div class="share-bar">Share this</div>
          <p>It also fixes several bugs.</p>
          <p></p>
        </article>
        <footer>Copyright</footer>
      </body></html>"#;

    #[test]
    fn test_parse_metadata() {
        let response = match parse(PAGE, DefuddleOptions::default()) {
            Ok(response) => response,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(response.title.as_deref(), Some("Release Notes"));
        assert_eq!(response.author.as_deref(), Some("Ada Lovelace"));
        assert_eq!(response.description.as_deref(), Some("What changed in this release."));
        assert_eq!(response.site.as_deref(), Some("Example Site"));
        assert_eq!(response.word_count, 11);
    }

    #[test]
    fn test_clutter_removed_from_content() {
        let content = match parse(PAGE, DefuddleOptions::default()) {
            Ok(response) => response.content,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert!(content.contains("Version two brings a new parser."));
        assert!(content.contains("It also fixes several bugs."));
        assert!(!content.contains("Home"));
        assert!(!content.contains("Trending"));
        assert!(!content.contains("Secret"));
        assert!(!content.contains("Share this"));
        assert!(!content.contains("Copyright"));
        assert!(!content.contains("onclick"));
        assert!(!content.contains("<h1"));
        assert!(!content.contains("<p></p>"));
    }

    #[test]
    fn test_markdown_option_rejected() {
        let result = parse(PAGE, DefuddleOptions { markdown: true });
        assert!(matches!(result, Err(Error::ExtractionFailure(_))));
    }

    #[test]
    fn test_falls_back_to_body() {
        let html = "<html><body><p>Only a paragraph.</p></body></html>";
        let response = match parse(html, DefuddleOptions::default()) {
            Ok(response) => response,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(response.content, "<p>Only a paragraph.</p>");
        assert_eq!(response.title, None);
    }

    #[test]
    fn test_retries_without_clutter_removal() {
        let html = r#"<html><body><div class="sidebar"><p>The whole page.</p></div></body></html>"#;
        match parse(html, DefuddleOptions::default()) {
            Ok(response) => assert!(response.content.contains("The whole page.")),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn test_extract_rtl() {
        let html = PAGE.replace("<html>", r#"<html dir="rtl">"#);
        let result = match extract(&html) {
            Ok(result) => result,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(result.dir, "rtl");
        assert_eq!(result.byline, "Ada Lovelace");
        assert_eq!(result.excerpt, "What changed in this release.");
        assert_eq!(result.text_content, dom::fragment_text(&result.content));
    }

    #[test]
    fn test_invalid_meta_author_yields_to_schema_author() {
        let html = r#"<html><head>
            <meta name="author" content="https://example.com/jane">
            <script type="application/ld+json">{"@type":"Article","author":{"name":"Ada"}}</script>
          </head><body><p>Body text.</p></body></html>"#;
        match parse(html, DefuddleOptions::default()) {
            Ok(response) => assert_eq!(response.author.as_deref(), Some("Ada")),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn test_invalid_schema_author_yields_to_article_author() {
        let html = r#"<html><head>
            <meta property="article:author" content="Grace Hopper">
            <script type="application/ld+json">{"@type":"Article","author":"https://example.com/people/1"}</script>
          </head><body><p>Body text.</p></body></html>"#;
        match parse(html, DefuddleOptions::default()) {
            Ok(response) => assert_eq!(response.author.as_deref(), Some("Grace Hopper")),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }
}
