//! Mercury-style back-end.
//!
//! Postlight's Mercury parser answers with `title`, `author`, `content` and
//! `excerpt` chosen through ordered lookup tables, and runs Readability for
//! the body before cleaning it. This module reproduces that shape over
//! `dom_smoothie` and the tables in [`crate::selector::meta`].

use dom_query::{Document, Selection};

use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::{cleaning, readability};
use crate::metadata::{strip_site_name, MetaTags};
use crate::patterns::{BYLINE_PREFIX, BYLINE_START};
use crate::result::{ExtractionResult, RawArticle};
use crate::selector::{self, meta};

/// Excerpt length in characters, before the ellipsis.
pub const EXCERPT_LENGTH: usize = 200;

/// Images with a declared dimension below this are spacers.
const SPACER_MIN_SIZE: u32 = 10;

/// From this many `<h1>` on they are demoted instead of removed.
const H1_DEMOTE_THRESHOLD: usize = 3;

/// What the input string is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentType {
    /// Markup supplied by the caller.
    #[default]
    Html,
    /// A URL to fetch. Never supported here.
    Url,
}

/// Options for [`parse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MercuryOptions {
    pub content_type: ContentType,
}

/// The parser's answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MercuryArticle {
    pub title: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub lead_image_url: Option<String>,
    pub word_count: usize,
}

/// Parse `html` the way Mercury does in HTML mode.
///
/// # Errors
///
/// [`Error::ExtractionFailure`] for [`ContentType::Url`] or when the
/// Readability reader cannot be built.
pub fn parse(html: &str, options: MercuryOptions) -> Result<MercuryArticle> {
    if options.content_type != ContentType::Html {
        return Err(Error::ExtractionFailure(
            "URL fetching is not supported, pass HTML".to_string(),
        ));
    }

    let doc = dom::parse(html);
    let meta_tags = MetaTags::collect(&doc);
    let root = doc.select("html");

    let title = extract_title(&root, &meta_tags);
    let author = extract_author(&root, &meta_tags);
    let content = extract_content(html, title.as_deref())?;

    let content_text = dom::collapse_whitespace(&dom::fragment_text(&content));
    let excerpt = meta_tags
        .first(meta::EXCERPT_META)
        .map(|description| dom::collapse_whitespace(&description))
        .or_else(|| (!content_text.is_empty()).then(|| content_text.clone()))
        .map(|text| ellipsize(&text, EXCERPT_LENGTH));

    Ok(MercuryArticle {
        title,
        author,
        excerpt,
        lead_image_url: meta_tags.first(&["og:image", "twitter:image"]),
        word_count: content_text.split_whitespace().count(),
        content: Some(content),
    })
}

/// Run [`parse`] and map its answer onto [`ExtractionResult`].
///
/// `textContent` is always re-derived from `content`.
pub fn extract(html: &str) -> Result<ExtractionResult> {
    let document_dir = dom::document_dir(&dom::parse(html));
    let article = parse(html, MercuryOptions::default())?;

    let text_content = article.content.as_deref().map(dom::fragment_text);
    Ok(RawArticle {
        title: article.title,
        byline: article.author,
        dir: None,
        excerpt: article.excerpt,
        content: article.content,
        text_content,
    }
    .normalize(document_dir))
}

fn extract_title(root: &Selection, meta_tags: &MetaTags) -> Option<String> {
    meta_tags
        .first(meta::STRONG_TITLE_META)
        .or_else(|| selector::first_text(root, meta::STRONG_TITLE_SELECTORS))
        .or_else(|| meta_tags.first(meta::WEAK_TITLE_META))
        .or_else(|| selector::first_text(root, meta::WEAK_TITLE_SELECTORS))
        .map(|title| strip_site_name(&title, None))
        .filter(|title| !title.is_empty())
}

fn extract_author(root: &Selection, meta_tags: &MetaTags) -> Option<String> {
    let from_meta = meta::AUTHOR_META
        .iter()
        .filter_map(|name| meta_tags.get(name))
        .find(|value| value.chars().count() <= meta::AUTHOR_MAX_LENGTH);

    let from_selectors = || {
        meta::AUTHOR_SELECTORS.iter().find_map(|css| {
            dom::select_each(root, css)
                .iter()
                .map(|sel| dom::collapse_whitespace(&sel.text()))
                .find(|text| !text.is_empty() && text.chars().count() <= meta::AUTHOR_MAX_LENGTH)
        })
    };

    let from_byline = || {
        meta::BYLINE_SELECTORS.iter().find_map(|css| {
            dom::select_each(root, css)
                .iter()
                .map(|sel| sel.text().to_string())
                .find(|text| BYLINE_START.is_match(text))
        })
    };

    from_meta
        .or_else(from_selectors)
        .or_else(from_byline)
        .map(|author| clean_author(&author))
        .filter(|author| !author.is_empty())
}

/// Drop a leading "By", "Posted by" or "Written by" and collapse whitespace.
#[must_use]
pub fn clean_author(author: &str) -> String {
    let collapsed = dom::collapse_whitespace(author);
    BYLINE_PREFIX.replace(&collapsed, "").trim().to_string()
}

fn extract_content(html: &str, title: Option<&str>) -> Result<String> {
    let fragment = match readability::parse_article(html)? {
        Some(article) => article.content.to_string(),
        None => {
            tracing::debug!("no readable article, falling back to body");
            let doc = dom::parse(html);
            let body = doc.select("body");
            let inner = dom::inner_html(&body).to_string();
            inner
        }
    };

    let doc = dom::parse(&fragment);
    let cleaned = clean_content(&doc, title);
    Ok(cleaned)
}

/// Mercury's cleaning pass over the chosen content.
fn clean_content(doc: &Document, title: Option<&str>) -> String {
    let root = doc.select("body");

    for css in ["script", "style", "noscript", "form", "iframe", "object", "embed"] {
        root.select(css).remove();
    }

    let headings = dom::select_each(&root, "h1");
    if headings.len() < H1_DEMOTE_THRESHOLD {
        for heading in &headings {
            heading.remove();
        }
    } else {
        for heading in &headings {
            dom::rename(heading, "h2");
        }
    }

    if let Some(title) = title {
        cleaning::remove_title_headings(&root, title, "h2, h3, h4, h5, h6");
    }
    cleaning::strip_attributes(&root, cleaning::ATTRIBUTE_WHITELIST);
    cleaning::remove_spacer_images(&root, SPACER_MIN_SIZE);
    cleaning::remove_empty(&root, "p");

    dom::inner_html(&root).trim().to_string()
}

/// Cut `text` to at most `max_chars` characters at a word boundary and mark
/// the cut with `…`.
#[must_use]
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let head: String = text.chars().take(max_chars).collect();
    let cut = match head.rfind(char::is_whitespace) {
        Some(index) if index > 0 => &head[..index],
        _ => head.as_str(),
    };
    format!("{}…", cut.trim_end())
}
