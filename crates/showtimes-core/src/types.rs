//! Data types for the showtimes scraper
//!
//! All record types implement Serialize and Deserialize so callers can
//! dump the result set as JSON.

use serde::{Deserialize, Serialize};

/// Absolute URL of a movie detail page, as extracted from a listing
/// page heading.
///
/// The URL is opaque except for an embedded `mid` query parameter,
/// which is recovered later to rebuild a canonical detail request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieLink(pub String);

impl MovieLink {
    /// The underlying URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One theater screening a movie, with its scheduled showtimes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theater {
    /// Display name of the theater
    pub name: String,
    /// Street address
    pub address: String,
    /// Showtimes as `HH:MM` strings, in page order
    pub showtimes: Vec<String>,
}

/// One movie with its metadata and the theaters screening it.
///
/// Metadata fields that the detail page does not provide are empty
/// strings, never absent. Theaters are kept in page order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Movie title
    pub name: String,
    /// Synopsis (short text plus the first fragment of the continued
    /// text, when present)
    pub description: String,
    /// Running time, e.g. "120 min"
    pub length: String,
    /// Genre
    pub genre: String,
    /// Audio language
    pub language: String,
    /// Subtitle language
    pub subtitle: String,
    /// Comma-separated cast list
    pub actors: String,
    /// Theaters screening this movie, in page order
    pub theaters: Vec<Theater>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_record_serialization_round_trip() {
        let record = MovieRecord {
            name: "Test Movie".to_string(),
            description: "A test synopsis.".to_string(),
            length: "120 min".to_string(),
            genre: "Drama".to_string(),
            language: "English".to_string(),
            subtitle: "Chinese".to_string(),
            actors: "Actor A, Actor B".to_string(),
            theaters: vec![Theater {
                name: "Grand Cinema".to_string(),
                address: "1 Main St".to_string(),
                showtimes: vec!["10:30".to_string(), "13:00".to_string()],
            }],
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MovieRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
    }

    #[test]
    fn test_theater_preserves_showtime_order() {
        let theater = Theater {
            name: "Grand Cinema".to_string(),
            address: "1 Main St".to_string(),
            showtimes: vec!["22:00".to_string(), "10:30".to_string()],
        };
        // Page order, not sorted order.
        assert_eq!(theater.showtimes, vec!["22:00", "10:30"]);
    }

    #[test]
    fn test_movie_link_serializes_as_plain_string() {
        let link = MovieLink("http://www.google.com/movies?mid=abc".to_string());
        let json = serde_json::to_string(&link).unwrap();
        assert_eq!(json, "\"http://www.google.com/movies?mid=abc\"");
        assert_eq!(link.as_str(), "http://www.google.com/movies?mid=abc");
    }
}
