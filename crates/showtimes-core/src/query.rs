//! Search query construction
//!
//! A [`Query`] holds the session-wide search state (language tag,
//! location, sort mode) and builds `/movies` request paths from it.
//! Per-request parameters (result offset, movie id, theater id) are
//! passed separately as [`QueryExtras`] so they never leak between
//! fetches.

use crate::error::{Result, ShowtimesError};

/// Where to search for showtimes.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// Latitude and longitude, e.g. (25.0333, 121.6333)
    Coordinates(f64, f64),
    /// Free-text place name, e.g. "Taipei"
    Place(String),
}

impl Location {
    /// Encode as the `near` parameter value.
    ///
    /// Coordinates are rendered verbatim as `"{lat},{lon}"`; place
    /// names are percent-encoded.
    fn to_near_param(&self) -> String {
        match self {
            Location::Coordinates(lat, lon) => format!("{},{}", lat, lon),
            Location::Place(name) => urlencoding::encode(name).into_owned(),
        }
    }
}

/// Result ordering requested from the listing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Group results by theater (encoded as 0)
    ByTheater,
    /// Group results by movie (encoded as 1) - the service default
    ByMovie,
}

impl SortMode {
    /// Wire encoding of the sort mode.
    pub fn encoded(self) -> u8 {
        match self {
            SortMode::ByTheater => 0,
            SortMode::ByMovie => 1,
        }
    }
}

/// Per-request query parameters.
///
/// Each field is appended to the path only when set; an unset field
/// leaves the base URL untouched.
#[derive(Debug, Clone, Default)]
pub struct QueryExtras {
    /// Zero-based result offset (`start`)
    pub start: Option<u32>,
    /// Movie id (`mid`)
    pub mid: Option<String>,
    /// Theater id (`tid`)
    pub tid: Option<String>,
}

impl QueryExtras {
    /// Extras carrying only a result offset.
    pub fn at_offset(start: u32) -> Self {
        Self {
            start: Some(start),
            ..Self::default()
        }
    }

    /// Extras carrying only a movie id.
    pub fn for_movie(mid: &str) -> Self {
        Self {
            mid: Some(mid.to_string()),
            ..Self::default()
        }
    }
}

/// Session-wide search state.
///
/// A query must have exactly one location descriptor set (via
/// [`Query::search_by_coordinates`] or [`Query::search_by_location`])
/// before any path can be built; building without one fails with
/// [`ShowtimesError::MissingLocation`] before any network call is made.
#[derive(Debug, Clone)]
pub struct Query {
    /// Language tag the service renders pages in (`hl`)
    hl: String,
    /// Location descriptor (`near`); required before any fetch
    near: Option<Location>,
    /// Sort mode; defaults to [`SortMode::ByMovie`] when unset
    sort: Option<SortMode>,
}

impl Query {
    /// Create a query for the given language tag (e.g. "en", "zh-TW").
    pub fn new(hl: &str) -> Self {
        Self {
            hl: hl.to_string(),
            near: None,
            sort: None,
        }
    }

    /// Search near a latitude/longitude pair.
    ///
    /// Replaces any previously set location.
    pub fn search_by_coordinates(&mut self, latitude: f64, longitude: f64) {
        self.near = Some(Location::Coordinates(latitude, longitude));
    }

    /// Search near a free-text place name.
    ///
    /// Replaces any previously set location.
    pub fn search_by_location(&mut self, place: &str) {
        self.near = Some(Location::Place(place.to_string()));
    }

    /// Override the result ordering.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = Some(sort);
    }

    /// Build a `/movies` request path from the query plus per-request
    /// extras.
    ///
    /// # Errors
    /// `ShowtimesError::MissingLocation` if no location descriptor has
    /// been set.
    pub fn build_path(&self, extras: &QueryExtras) -> Result<String> {
        let near = self
            .near
            .as_ref()
            .ok_or(ShowtimesError::MissingLocation)?
            .to_near_param();

        let sort = self.sort.unwrap_or(SortMode::ByMovie).encoded();

        let mut path = format!("/movies?hl={}&near={}&sort={}", self.hl, near, sort);

        if let Some(start) = extras.start {
            path.push_str(&format!("&start={}", start));
        }
        if let Some(mid) = &extras.mid {
            path.push_str(&format!("&mid={}", mid));
        }
        if let Some(tid) = &extras.tid {
            path.push_str(&format!("&tid={}", tid));
        }

        Ok(path)
    }
}
