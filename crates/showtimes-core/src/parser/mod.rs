//! HTML parsers for the showtimes listing service
//!
//! This module contains parsers for extracting data from the service's
//! HTML pages:
//! - `listing`: pagination navbar and movie links on results pages
//! - `detail`: a single movie's detail page
//!
//! Everything markup-dependent lives here, behind plain
//! `&str -> data` functions, so the rest of the crate is insulated
//! from the site's presentation and the parsers are testable against
//! fixture HTML without network access.

pub mod detail;
pub mod listing;

// Re-export main parsing functions
pub use detail::parse_movie_detail;
pub use listing::{extract_movie_id, parse_movie_links, parse_page_indexes};
