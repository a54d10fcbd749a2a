//! Headline and body extraction from raw HTML.
//!
//! This module recovers the two fields the analysis pipeline operates on:
//! a headline and the article body text. It never fails; malformed or
//! unhelpful HTML degrades to empty fields that the orchestrator treats
//! as an unusable article.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::article::ScrapedArticle;

static OG_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:title"]"#).unwrap());
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Extracts a [`ScrapedArticle`] from raw HTML.
///
/// Headline resolution order:
/// 1. `og:title` metadata content attribute — link-preview titles are
///    usually closer to the published headline than `<title>`,
/// 2. the `<title>` element text,
/// 3. empty string.
///
/// The body is the text of every `<p>` element in document order, each
/// paragraph's whitespace collapsed, joined with single spaces. A page with
/// no paragraphs yields an empty body.
///
/// # Example
///
/// ```rust
/// use newsprobe_core::extract_article;
///
/// let html = "<title>Breaking</title><p>First.</p><p>Second.</p>";
/// let article = extract_article(html);
/// assert_eq!(article.headline, "Breaking");
/// assert_eq!(article.body, "First. Second.");
/// ```
pub fn extract_article(html: &str) -> ScrapedArticle {
    let doc = Html::parse_document(html);

    let headline = doc
        .select(&OG_TITLE)
        .find_map(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .or_else(|| {
            doc.select(&TITLE)
                .next()
                .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        })
        .unwrap_or_default();

    let body = doc
        .select(&PARAGRAPH)
        .map(|p| collapse_whitespace(&p.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    ScrapedArticle { headline, body }
}

/// Collapse runs of whitespace to single spaces and trim the ends.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
