//! Main scraper API
//!
//! This module provides the high-level API for building a local
//! dataset of movies showing near a location. It combines the HTTP
//! client with the listing and detail parsers; every operation is a
//! single fetch-then-parse step and the orchestration in
//! [`MovieScraper::movies`] runs them strictly in sequence.

use crate::client::MovieClient;
use crate::error::{Result, ShowtimesError};
use crate::parser::{extract_movie_id, parse_movie_detail, parse_movie_links, parse_page_indexes};
use crate::query::{Query, QueryExtras, SortMode};
use crate::types::{MovieLink, MovieRecord};

/// The listing service returns a fixed 10 results per page; the
/// `start` offset is derived from that, not configurable.
const PAGE_SIZE: u32 = 10;

/// Zero-based result offset for a 1-based page number.
fn page_offset(page: u32) -> u32 {
    page.saturating_sub(1) * PAGE_SIZE
}

/// High-level scraper for movie showtimes near a location.
///
/// A location must be set before any fetching method is called;
/// otherwise the first URL build fails with
/// [`ShowtimesError::MissingLocation`] before any network I/O.
///
/// # Example
/// ```no_run
/// use showtimes_core::MovieScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut scraper = MovieScraper::new("en")?;
///     scraper.search_by_location("Taipei");
///
///     let movies = scraper.movies().await?;
///     println!("Found {} screenings", movies.len());
///
///     Ok(())
/// }
/// ```
pub struct MovieScraper {
    client: MovieClient,
    query: Query,
}

impl MovieScraper {
    /// Create a new scraper for the given language tag with default
    /// client configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(hl: &str) -> Result<Self> {
        let client = MovieClient::new()?;
        Ok(Self::with_client(client, hl))
    }

    /// Create a new scraper with a custom client.
    ///
    /// This is how tests point the scraper at a mock server, and how
    /// callers override the timeout.
    pub fn with_client(client: MovieClient, hl: &str) -> Self {
        Self {
            client,
            query: Query::new(hl),
        }
    }

    /// Search near a latitude/longitude pair, e.g. (25.0333, 121.6333).
    pub fn search_by_coordinates(&mut self, latitude: f64, longitude: f64) {
        self.query.search_by_coordinates(latitude, longitude);
    }

    /// Search near a free-text place name, e.g. "Taipei".
    pub fn search_by_location(&mut self, place: &str) {
        self.query.search_by_location(place);
    }

    /// Override the result ordering (the service defaults to
    /// [`SortMode::ByMovie`]).
    pub fn set_sort(&mut self, sort: SortMode) {
        self.query.set_sort(sort);
    }

    /// Discover the set of listing pages from the first page's
    /// navigation bar.
    ///
    /// Returns page numbers deduplicated and sorted ascending. An
    /// absent navigation bar yields an empty list - a single page of
    /// results (or none). [`Self::movies`] then returns no records at
    /// all.
    pub async fn page_indexes(&self) -> Result<Vec<u32>> {
        let path = self.query.build_path(&QueryExtras::default())?;
        let html = self.client.fetch(&path).await?;
        parse_page_indexes(&html)
    }

    /// Fetch one listing page and return every movie detail link on it.
    ///
    /// # Arguments
    /// * `page` - Page number (1-based) as reported by
    ///   [`Self::page_indexes`]
    pub async fn movie_links_on_page(&self, page: u32) -> Result<Vec<MovieLink>> {
        let extras = QueryExtras::at_offset(page_offset(page));
        let path = self.query.build_path(&extras)?;
        let html = self.client.fetch(&path).await?;
        parse_movie_links(&html, self.client.base_url())
    }

    /// Collect movie detail links across every discovered listing page.
    ///
    /// Links are accumulated in page order and are not deduplicated:
    /// a movie listed on two pages appears twice.
    pub async fn movie_links(&self) -> Result<Vec<MovieLink>> {
        let mut links = Vec::new();
        for page in self.page_indexes().await? {
            links.extend(self.movie_links_on_page(page).await?);
        }
        Ok(links)
    }

    /// Fetch and parse the detail page behind a movie link.
    ///
    /// The link's embedded `mid` is recovered and a canonical detail
    /// URL is rebuilt from the query, since the original link may lack
    /// fields needed for a full render.
    ///
    /// # Errors
    /// * `ShowtimesError::InvalidLink` if the link carries no `mid`
    /// * `ShowtimesError::ElementNotFound` if required markup is absent
    pub async fn movie_detail(&self, link: &MovieLink) -> Result<MovieRecord> {
        let mid = extract_movie_id(link.as_str())
            .ok_or_else(|| ShowtimesError::InvalidLink(link.as_str().to_string()))?;

        let path = self.query.build_path(&QueryExtras::for_movie(&mid))?;
        let html = self.client.fetch(&path).await?;
        parse_movie_detail(&html)
    }

    /// Run the full workflow: discover pages, collect every movie
    /// link, fetch every detail page, and return the records in
    /// page-then-link order.
    ///
    /// Fully sequential; the first failure aborts the run with no
    /// partial results.
    pub async fn movies(&self) -> Result<Vec<MovieRecord>> {
        let links = self.movie_links().await?;

        let mut records = Vec::with_capacity(links.len());
        for link in &links {
            records.push(self.movie_detail(link).await?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use proptest::prelude::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1), 0);
        assert_eq!(page_offset(2), 10);
        assert_eq!(page_offset(3), 20);
    }

    proptest! {
        #[test]
        fn prop_page_offset_is_page_minus_one_times_ten(page in 1u32..100_000) {
            prop_assert_eq!(page_offset(page), (page - 1) * 10);
        }
    }

    #[tokio::test]
    async fn test_no_location_fails_before_any_request() {
        let scraper = MovieScraper::new("en").unwrap();
        let result = scraper.page_indexes().await;
        assert!(matches!(result, Err(ShowtimesError::MissingLocation)));
    }

    #[tokio::test]
    async fn test_detail_link_without_mid_is_invalid() {
        let mut scraper = MovieScraper::new("en").unwrap();
        scraper.search_by_location("Taipei");
        let link = MovieLink("http://www.google.com/movies?near=Taipei".to_string());
        let result = scraper.movie_detail(&link).await;
        assert!(matches!(result, Err(ShowtimesError::InvalidLink(_))));
    }

    fn nav_page() -> String {
        r#"<html><body>
            <div id="navbar"><table><tr>
                <td>2</td><td>1</td><td><a>next</a></td>
            </tr></table></div>
        </body></html>"#
            .to_string()
    }

    fn listing_page(mids: &[&str]) -> String {
        let headings: String = mids
            .iter()
            .map(|mid| format!(r#"<h2 itemprop="name"><a href="/movies?mid={mid}">M</a></h2>"#))
            .collect();
        format!("<html><body>{headings}</body></html>")
    }

    fn detail_page(name: &str) -> String {
        format!(
            r#"<html><body>
                <h2 itemprop="name">{name}</h2>
                <span itemprop="description">Synopsis.</span>
                <div class="info">120 min - Drama - English - Chinese - Actor A</div>
                <div class="theater">
                    <div class="name">Grand Cinema</div>
                    <div class="address">1 Main St</div>
                    <div class="times"><span> &amp;nbsp 10:30</span></div>
                </div>
            </body></html>"#
        )
    }

    async fn scraper_against(server: &MockServer) -> MovieScraper {
        let client = MovieClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .unwrap();
        let mut scraper = MovieScraper::with_client(client, "en");
        scraper.search_by_location("Taipei");
        scraper
    }

    #[tokio::test]
    async fn test_page_discovery_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .respond_with(ResponseTemplate::new(200).set_body_string(nav_page()))
            .mount(&server)
            .await;

        let scraper = scraper_against(&server).await;
        assert_eq!(scraper.page_indexes().await.unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_end_to_end_preserves_order_and_duplicates() {
        let server = MockServer::start().await;

        // Listing pages: page 1 links m1, m2; page 2 links m2, m3.
        // m2 appears on both pages and must be fetched twice.
        Mock::given(method("GET"))
            .and(path("/movies"))
            .and(query_param("start", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&["m1", "m2"])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .and(query_param("start", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&["m2", "m3"])))
            .mount(&server)
            .await;

        for (mid, name) in [("m1", "Movie One"), ("m2", "Movie Two"), ("m3", "Movie Three")] {
            Mock::given(method("GET"))
                .and(path("/movies"))
                .and(query_param("mid", mid))
                .respond_with(ResponseTemplate::new(200).set_body_string(detail_page(name)))
                .mount(&server)
                .await;
        }

        // Base listing page (no start, no mid) serves the navbar.
        Mock::given(method("GET"))
            .and(path("/movies"))
            .respond_with(ResponseTemplate::new(200).set_body_string(nav_page()))
            .mount(&server)
            .await;

        let scraper = scraper_against(&server).await;
        let movies = scraper.movies().await.unwrap();

        let names: Vec<&str> = movies.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Movie One", "Movie Two", "Movie Two", "Movie Three"]
        );
        assert_eq!(movies[0].theaters[0].showtimes, vec!["10:30"]);
    }

    #[tokio::test]
    async fn test_missing_navbar_means_no_movies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/movies"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
            .mount(&server)
            .await;

        let scraper = scraper_against(&server).await;
        assert!(scraper.movies().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_aborts_the_run() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let scraper = scraper_against(&server).await;
        assert!(matches!(
            scraper.movies().await,
            Err(ShowtimesError::Http(_))
        ));
    }
}
