//! Detail-page parser
//!
//! Parses a single movie's detail page into a [`MovieRecord`]: name,
//! description, the dash-delimited info fields and every theater block
//! with its showtimes.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ShowtimesError};
use crate::types::{MovieRecord, Theater};

/// Showtime pattern inside a time-slot span: `&nbsp` boilerplate
/// followed by an `HH:MM` time. Spans that do not match carry no
/// showtime (ticketing links, separators) and are skipped.
const SHOWTIME_PATTERN: &str = r" &nbsp.*?(\d{2}:\d{2})";

/// Named mapping for the dash-delimited info string.
///
/// The page renders up to five segments in a fixed order; a missing
/// position yields an empty string, extra positions are ignored.
struct InfoFields {
    length: String,
    genre: String,
    language: String,
    subtitle: String,
    actors: String,
}

impl InfoFields {
    fn from_segments(segments: &[&str]) -> Self {
        if segments.len() != 5 {
            log::warn!(
                "info block had {} dash-separated segments, expected 5",
                segments.len()
            );
        }

        let field = |idx: usize| segments.get(idx).map(|s| s.to_string()).unwrap_or_default();

        Self {
            length: field(0),
            genre: field(1),
            language: field(2),
            subtitle: field(3),
            actors: field(4),
        }
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ShowtimesError::Parse(format!("Invalid selector: {:?}", e)))
}

/// Parse a movie detail page into a [`MovieRecord`].
///
/// The name heading and the info block are required; their absence is
/// an [`ShowtimesError::ElementNotFound`]. The continued-description
/// block and individual showtime spans are optional.
pub fn parse_movie_detail(html: &str) -> Result<MovieRecord> {
    let document = Html::parse_document(html);

    let name_selector = selector(r#"h2[itemprop="name"]"#)?;
    let name = document
        .select(&name_selector)
        .next()
        .ok_or_else(|| ShowtimesError::ElementNotFound(r#"h2[itemprop="name"]"#.to_string()))?
        .text()
        .collect::<String>()
        .trim()
        .to_string();

    let description = parse_description(&document)?;

    let info_selector = selector("div.info")?;
    let info_text = document
        .select(&info_selector)
        .next()
        .ok_or_else(|| ShowtimesError::ElementNotFound("div.info".to_string()))?
        .text()
        .collect::<String>();
    let segments: Vec<&str> = info_text.split('-').map(str::trim).collect();
    let info = InfoFields::from_segments(&segments);

    let theaters = parse_theaters(&document)?;

    Ok(MovieRecord {
        name,
        description,
        length: info.length,
        genre: info.genre,
        language: info.language,
        subtitle: info.subtitle,
        actors: info.actors,
        theaters,
    })
}

/// Assemble the description from the short synopsis element plus, when
/// the page carries a continued block, only that block's first text
/// fragment. The continued block nests the same text again in child
/// nodes, so taking more than the first fragment would duplicate it.
fn parse_description(document: &Html) -> Result<String> {
    let short_selector = selector(r#"span[itemprop="description"]"#)?;
    let continued_selector = selector("span#SynopsisSecond0")?;

    let mut description = document
        .select(&short_selector)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    if let Some(continued) = document.select(&continued_selector).next() {
        if let Some(first) = continued.text().map(str::trim).find(|t| !t.is_empty()) {
            description.push_str(first);
        }
    }

    Ok(description)
}

/// Parse every `div.theater` block on the page, in page order.
fn parse_theaters(document: &Html) -> Result<Vec<Theater>> {
    let theater_selector = selector("div.theater")?;
    let name_selector = selector("div.name")?;
    let address_selector = selector("div.address")?;
    let times_selector = selector("div.times")?;
    let span_selector = selector("span")?;

    let time_re = regex_lite::Regex::new(SHOWTIME_PATTERN)
        .map_err(|e| ShowtimesError::Parse(format!("Invalid showtime pattern: {}", e)))?;

    let mut theaters = Vec::new();
    for block in document.select(&theater_selector) {
        let name = required_text(&block, &name_selector, "div.theater div.name")?;
        let address = required_text(&block, &address_selector, "div.theater div.address")?;

        let times = block
            .select(&times_selector)
            .next()
            .ok_or_else(|| ShowtimesError::ElementNotFound("div.theater div.times".to_string()))?;

        let mut showtimes = Vec::new();
        for span in times.select(&span_selector) {
            let text = span.text().collect::<String>();
            if let Some(caps) = time_re.captures(&text) {
                if let Some(time) = caps.get(1) {
                    showtimes.push(time.as_str().to_string());
                }
            }
        }

        theaters.push(Theater {
            name,
            address,
            showtimes,
        });
    }

    Ok(theaters)
}

fn required_text(block: &ElementRef, sel: &Selector, label: &str) -> Result<String> {
    Ok(block
        .select(sel)
        .next()
        .ok_or_else(|| ShowtimesError::ElementNotFound(label.to_string()))?
        .text()
        .collect::<String>()
        .trim()
        .to_string())
}
