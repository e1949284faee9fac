//! Error types for the showtimes scraper
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for showtimes scraper operations
#[derive(Error, Debug)]
pub enum ShowtimesError {
    /// HTTP request failed (connection error or non-2xx status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse HTML content
    #[error("Failed to parse HTML: {0}")]
    Parse(String),

    /// Required HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// No search location has been set on the query
    #[error("No search location set - call search_by_coordinates or search_by_location first")]
    MissingLocation,

    /// Detail-page link carries no recoverable movie id
    #[error("No movie id in link: {0}")]
    InvalidLink(String),
}

/// Result type alias for showtimes scraper operations
pub type Result<T> = std::result::Result<T, ShowtimesError>;
