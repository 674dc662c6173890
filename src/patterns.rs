//! Compiled regex patterns shared by the extraction back-ends.
//!
//! All patterns are compiled once on first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Title Patterns
// =============================================================================

/// Separators between an article title and the site name
/// ("Story | Site", "Story - Site", "Story — Site", "Site : Story").
///
/// Apart from `|`, a separator needs whitespace on both sides, so
/// "Site: Story" and "Well-known" are left whole.
pub static TITLE_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+[\|\-–—·:]\s+|\s*\|\s*").expect("TITLE_SEPARATOR regex")
});

// =============================================================================
// Author Patterns
// =============================================================================

/// Leading "By", "Posted by", "Written by" (optionally with a colon).
pub static BYLINE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:posted\s+|written\s+)?by\b\s*:?\s*").expect("BYLINE_PREFIX regex")
});

/// Text of a byline container that starts with "By".
pub static BYLINE_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[\n\s]*by\b").expect("BYLINE_START regex"));

// =============================================================================
// Clutter Patterns
// =============================================================================

/// Class/id tokens marking page furniture rather than article text.
///
/// Matched against single class tokens and ids, so compound content classes
/// such as `article-body` are left alone.
pub static CLUTTER_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:ad|ads|advert|advertisement|banner|breadcrumbs?|comments?|cookie[-_]?(?:banner|notice|consent)|footer|menu|nav|navbar|navigation|newsletter|popup|promo|related(?:[-_](?:posts|articles|stories))?|share|sharing|share[-_](?:buttons|bar)|sidebar|social(?:[-_](?:links|share|icons))?|sponsored|subscribe|subscription|toolbar|widget)$",
    )
    .expect("CLUTTER_CLASS regex")
});

/// Inline style hiding the element.
pub static HIDDEN_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:display\s*:\s*none|visibility\s*:\s*hidden)").expect("HIDDEN_STYLE regex")
});
