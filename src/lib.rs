//! # readability-sandbox
//!
//! Compare article extractors on the same HTML.
//!
//! One document goes in together with a parser tag. One of four back-ends
//! pulls the article out of it, the answer is normalized into a single
//! [`ExtractionResult`] shape, and a Markdown rendering is produced next to
//! it.
//!
//! ## Quick Start
//!
//! ```rust
//! use readability_sandbox::parse;
//!
//! let html = r#"<html><head><title>Hi</title></head>
//! <body><p>A</p><p>B</p></body></html>"#;
//!
//! let output = parse(html, "simple")?;
//! assert_eq!(output.result.text_content, "A\nB");
//! assert!(output.markdown.starts_with("# Hi\n\n"));
//! # Ok::<(), readability_sandbox::Error>(())
//! ```
//!
//! ## Back-ends
//!
//! - **readability**: Mozilla Readability (`dom_smoothie`)
//! - **simple**: the first `<article>`, or every paragraph
//! - **postlight**: Mercury-style lookup tables and content cleaning
//! - **defuddle**: clutter removal and content entry points
//!
//! With the default `server` feature the crate also ships the HTTP
//! boundary (`readability-sandbox` binary).

mod backend;
mod error;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Element tree utilities with text/tail model support.
pub mod etree;

/// Selector lookup tables and clutter rules.
pub mod selector;

/// Back-end implementations and the dispatcher.
pub mod extractor;

/// Metadata extraction (JSON-LD, HTML meta tags).
pub mod metadata;

/// Markdown rendering with image rules.
pub mod markdown;

/// HTTP boundary.
#[cfg(feature = "server")]
pub mod server;

// Public API - re-exports
pub use backend::Backend;
pub use error::{Error, Result};
pub use result::{direction_token, ExtractionResult, ParseOutput, DEFAULT_DIR};

/// Extract an article with the given back-end.
///
/// # Errors
///
/// [`Error::ExtractionFailure`] when the back-end cannot run.
pub fn extract(html: &str, backend: Backend) -> Result<ExtractionResult> {
    extractor::extract(html, backend)
}

/// Extract with the back-end named by `tag` (`"readability"`, `"simple"`,
/// `"postlight"` or `"defuddle"`).
///
/// # Errors
///
/// [`Error::UnsupportedBackend`] for any other tag, matched exactly and
/// case-sensitively. [`Error::ExtractionFailure`] when the back-end fails.
///
/// # Example
///
/// ```rust
/// use readability_sandbox::{extract_tagged, Error};
///
/// let err = extract_tagged("<p>x</p>", "Readability").unwrap_err();
/// assert!(matches!(err, Error::UnsupportedBackend(_)));
/// ```
pub fn extract_tagged(html: &str, tag: &str) -> Result<ExtractionResult> {
    let backend: Backend = tag.parse()?;
    extract(html, backend)
}

/// Render an extraction result as Markdown.
#[must_use]
pub fn render(result: &ExtractionResult) -> String {
    markdown::render(result)
}

/// Extract with the back-end named by `tag` and render the result.
///
/// This is the whole `POST /api/parse` operation minus the transport.
///
/// # Errors
///
/// Same as [`extract_tagged`].
pub fn parse(html: &str, tag: &str) -> Result<ParseOutput> {
    let result = extract_tagged(html, tag)?;
    let markdown = render(&result);
    Ok(ParseOutput { result, markdown })
}
