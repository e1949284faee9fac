//! Showtimes Scraper Core Library
//!
//! This crate scrapes a movie-showtimes listing service by geographic
//! query: it paginates through result listings and extracts structured
//! records (movie metadata and per-theater showtimes) from individual
//! detail pages.
//!
//! # Features
//! - Search near a coordinate pair or a free-text place name
//! - Discover listing pages from the results navigation bar
//! - Extract movie metadata, theaters and showtimes from detail pages
//! - Strictly sequential fetching; results returned in memory

pub mod client;
pub mod error;
pub mod parser;
pub mod query;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, MovieClient};
pub use error::{Result, ShowtimesError};
pub use query::{Location, Query, QueryExtras, SortMode};
pub use scraper::MovieScraper;
pub use types::{MovieLink, MovieRecord, Theater};
