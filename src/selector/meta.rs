//! Metadata Lookup Tables
//!
//! Ordered meta names and CSS selectors consulted by the Mercury-style and
//! Defuddle-style back-ends. Earlier entries win.

// === Mercury-style title ===

/// Meta names trusted for the title ahead of any selector.
pub const STRONG_TITLE_META: &[&str] = &["tweetmeme-title", "dc.title", "rbtitle", "headline", "title"];

/// Selectors trusted for the title ahead of `og:title`.
pub const STRONG_TITLE_SELECTORS: &[&str] = &[
    ".hentry .entry-title",
    "h1#articleHeader",
    "h1.articleHeader",
    "h1.article",
    ".instapaper_title",
    "#meebo-title",
];

/// Meta names consulted once the strong candidates are exhausted.
pub const WEAK_TITLE_META: &[&str] = &["og:title"];

/// Last-resort title selectors.
pub const WEAK_TITLE_SELECTORS: &[&str] = &[
    "article h1",
    "#entry-title",
    ".entry-title",
    "#entryTitle",
    "#entrytitle",
    ".entryTitle",
    ".entrytitle",
    "#articleTitle",
    ".articleTitle",
    "post post-title",
    "h1.title",
    "h2.article",
    "h1",
    "html head title",
    "title",
];

// === Mercury-style author ===

/// Meta names carrying the author.
pub const AUTHOR_META: &[&str] = &[
    "byl",
    "clmst",
    "dc.author",
    "dcsext.author",
    "dc.creator",
    "rbauthors",
    "authors",
];

/// Author selectors, most specific first.
pub const AUTHOR_SELECTORS: &[&str] = &[
    ".entry .entry-author",
    ".author.vcard .fn",
    ".author .vcard .fn",
    ".byline.vcard .fn",
    ".byline .vcard .fn",
    ".byline .by .author",
    ".byline .by",
    ".byline .author",
    ".post-author.vcard",
    ".post-author .vcard",
    "a[rel=author]",
    "#by_author",
    ".by_author",
    "#entryAuthor",
    ".entryAuthor",
    ".byline a[href*=author]",
    "#author .authorname",
    ".author .authorname",
    "#author",
    ".author",
    ".articleauthor",
    ".ArticleAuthor",
    ".byline",
];

/// Byline containers accepted only when their text starts with "By".
pub const BYLINE_SELECTORS: &[&str] = &["#byline", ".byline"];

/// Longest author string still considered a name.
pub const AUTHOR_MAX_LENGTH: usize = 300;

// === Mercury-style excerpt ===

/// Meta names carrying a summary.
pub const EXCERPT_META: &[&str] = &["og:description", "twitter:description"];

// === Defuddle-style ===

/// Meta names for the title, before schema.org `headline`.
pub const DEFUDDLE_TITLE_META: &[&str] = &["og:title", "twitter:title"];

/// Meta names for the description, before schema.org `description`.
pub const DEFUDDLE_DESCRIPTION_META: &[&str] =
    &["description", "og:description", "twitter:description"];

/// Meta names for the site name.
pub const DEFUDDLE_SITE_META: &[&str] = &["og:site_name", "application-name", "twitter:site"];

/// Author selectors once meta tags and schema.org are exhausted.
pub const DEFUDDLE_AUTHOR_SELECTORS: &[&str] = &["[itemprop=author]", ".author", "[rel=author]"];

/// Main content entry points, highest priority first.
pub const CONTENT_ENTRY_POINTS: &[&str] = &[
    "article",
    "[role=article]",
    "main",
    "[role=main]",
    ".post-content",
    ".entry-content",
    ".article-content",
    ".post-body",
    "#content",
];
