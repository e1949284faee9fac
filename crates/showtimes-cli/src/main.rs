//! Thin entry point for the showtimes scraper.
//!
//! Runs the full scrape for a hardcoded language and location and
//! prints the result set as JSON. There are no CLI flags; this binary
//! exists as a usage example of `showtimes-core`.

use showtimes_core::MovieScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut scraper = MovieScraper::new("zh-TW")?;
    scraper.search_by_location("Taipei");

    let movies = scraper.movies().await?;
    println!("{}", serde_json::to_string_pretty(&movies)?);

    Ok(())
}
