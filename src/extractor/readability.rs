//! Mozilla Readability back-end.
//!
//! `dom_smoothie` does the work. A document Readability cannot grab an
//! article from is not an error: every field becomes empty and `dir` falls
//! back to the document's own direction.

use dom_smoothie::{Article, Readability};

use crate::dom;
use crate::error::{Error, Result};
use crate::result::{ExtractionResult, RawArticle};

/// Run Readability on `html`.
///
/// Returns `Ok(None)` when no article could be grabbed and an
/// [`Error::ExtractionFailure`] when the reader could not be built at all.
pub fn parse_article(html: &str) -> Result<Option<Article>> {
    let mut reader = Readability::new(html, None, None)
        .map_err(|err| Error::ExtractionFailure(err.to_string()))?;

    match reader.parse() {
        Ok(article) => Ok(Some(article)),
        Err(err) => {
            tracing::debug!(error = %err, "readability found no article");
            Ok(None)
        }
    }
}

/// Extract with Readability and normalize.
pub fn extract(html: &str) -> Result<ExtractionResult> {
    let document_dir = dom::document_dir(&dom::parse(html));
    let article = parse_article(html)?;
    Ok(normalize(article, document_dir))
}

fn normalize(article: Option<Article>, document_dir: Option<&str>) -> ExtractionResult {
    let Some(article) = article else {
        return RawArticle::default().normalize(document_dir);
    };

    RawArticle {
        title: Some(article.title),
        byline: article.byline,
        dir: article.dir,
        excerpt: article.excerpt,
        content: Some(article.content.to_string()),
        text_content: Some(article.text_content.to_string()),
    }
    .normalize(document_dir)
}
