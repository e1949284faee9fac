//! Listing-page parsers
//!
//! Parses search-results pages: the pagination navigation bar and the
//! movie detail-page links embedded in result headings.

use std::collections::BTreeSet;

use scraper::{Html, Selector};

use crate::error::{Result, ShowtimesError};
use crate::types::MovieLink;

/// Extract the movie id from a detail-page URL.
///
/// Scans the URL's query segments for a `mid` key.
///
/// # Examples
/// ```
/// use showtimes_core::parser::extract_movie_id;
///
/// assert_eq!(
///     extract_movie_id("http://www.google.com/movies?near=Taipei&mid=abc123"),
///     Some("abc123".to_string())
/// );
/// assert_eq!(extract_movie_id("http://www.google.com/movies?near=Taipei"), None);
/// ```
pub fn extract_movie_id(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;

    for segment in query.split('&') {
        if let Some((key, value)) = segment.split_once('=') {
            if key == "mid" && !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}

/// Extract page indexes from the navigation bar of a listing page.
///
/// The navigation bar is `div#navbar`; its `td` cells carry numeric
/// page labels mixed with non-numeric ones ("next", "previous") that
/// are skipped. A missing navigation bar means a single page of
/// results (or none) and yields an empty list, not an error.
///
/// Indexes are deduplicated and returned in ascending order; the page
/// itself makes no ordering guarantee.
pub fn parse_page_indexes(html: &str) -> Result<Vec<u32>> {
    let document = Html::parse_document(html);

    let navbar_selector = Selector::parse("div#navbar")
        .map_err(|e| ShowtimesError::Parse(format!("Invalid selector: {:?}", e)))?;
    let cell_selector = Selector::parse("td")
        .map_err(|e| ShowtimesError::Parse(format!("Invalid selector: {:?}", e)))?;

    let Some(navbar) = document.select(&navbar_selector).next() else {
        return Ok(Vec::new());
    };

    let mut pages = BTreeSet::new();
    for cell in navbar.select(&cell_selector) {
        for text in cell.text() {
            let text = text.trim();
            if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(page) = text.parse::<u32>() {
                    pages.insert(page);
                }
            }
        }
    }

    Ok(pages.into_iter().collect())
}

/// Extract every movie detail-page link from a listing page.
///
/// Links live as anchors inside `h2[itemprop="name"]` headings; each
/// href is resolved against `base_url` into an absolute [`MovieLink`].
/// A page without such headings yields an empty vec, not an error.
pub fn parse_movie_links(html: &str, base_url: &str) -> Result<Vec<MovieLink>> {
    let document = Html::parse_document(html);

    let heading_selector = Selector::parse(r#"h2[itemprop="name"]"#)
        .map_err(|e| ShowtimesError::Parse(format!("Invalid selector: {:?}", e)))?;
    let anchor_selector = Selector::parse("a")
        .map_err(|e| ShowtimesError::Parse(format!("Invalid selector: {:?}", e)))?;

    let mut links = Vec::new();
    for heading in document.select(&heading_selector) {
        // Headings without an anchor (the detail page's own title) are
        // skipped.
        if let Some(anchor) = heading.select(&anchor_selector).next() {
            if let Some(href) = anchor.value().attr("href") {
                links.push(MovieLink(format!("{}{}", base_url, href)));
            }
        }
    }

    Ok(links)
}
