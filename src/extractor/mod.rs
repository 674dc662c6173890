//! Extraction dispatcher.
//!
//! Each back-end module exposes its capability (`parse_*`) in the shape the
//! corresponding library answers with, plus an `extract` function that maps
//! that shape onto [`ExtractionResult`]. This module only picks the module.
//!
//! # Module Structure
//!
//! - `readability`: Mozilla Readability via `dom_smoothie`
//! - `simple`: `<article>` or paragraph scraping
//! - `postlight`: Mercury-style lookup tables over the Readability node
//! - `defuddle`: clutter removal and content entry points
//! - `cleaning`: attribute whitelists and empty-node pruning shared by the
//!   last two

pub mod cleaning;
pub mod defuddle;
pub mod postlight;
pub mod readability;
pub mod simple;

use crate::backend::Backend;
use crate::error::Result;
use crate::result::ExtractionResult;

/// Run `backend` on `html` and normalize its answer.
pub fn extract(html: &str, backend: Backend) -> Result<ExtractionResult> {
    tracing::debug!(%backend, html_len = html.len(), "dispatching extraction");

    let outcome = match backend {
        Backend::Readability => readability::extract(html),
        Backend::Simple => Ok(simple::extract(html)),
        Backend::Postlight => postlight::extract(html),
        Backend::Defuddle => defuddle::extract(html),
    };

    match &outcome {
        Ok(result) => tracing::debug!(
            %backend,
            content_len = result.content.len(),
            text_len = result.text_content.len(),
            "extraction finished"
        ),
        Err(err) => tracing::warn!(%backend, error = %err, "extraction failed"),
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>Test Article</title></head>
<body>
  <article>
    <h1>Test Article</h1>
    <p>The first paragraph has enough words to look like real prose, which keeps
    every extractor interested in it and gives scoring something to work with.</p>
    <p>The second paragraph continues the story with more sentences, commas, and
    detail so that the content is clearly the main body of the page.</p>
  </article>
</body>
</html>"#;

    #[test]
    fn test_every_backend_returns_content() {
        for backend in Backend::ALL {
            let result = extract(ARTICLE, backend);
            match result {
                Ok(result) => {
                    assert!(!result.content.is_empty(), "{backend}: empty content");
                    assert!(
                        result.text_content.contains("first paragraph"),
                        "{backend}: missing text"
                    );
                    assert_eq!(result.dir, "ltr", "{backend}");
                }
                Err(err) => panic!("{backend}: expected Ok(_), got Err({err:?})"),
            }
        }
    }
}
