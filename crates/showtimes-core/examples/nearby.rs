use showtimes_core::MovieScraper;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut scraper = MovieScraper::new("en")?;

    // Search by latitude/longitude...
    scraper.search_by_coordinates(25.0333, 121.6333);
    // ...or by place name:
    // scraper.search_by_location("Taipei");

    println!("🎬 Looking for showtimes near (25.0333, 121.6333)...\n");

    let movies = scraper.movies().await?;
    println!("Found {} movie records:\n", movies.len());

    for movie in &movies {
        println!("{} [{} / {}]", movie.name, movie.length, movie.genre);
        for theater in &movie.theaters {
            println!("  • {} ({})", theater.name, theater.address);
            println!("    {}", theater.showtimes.join("  "));
        }
        println!();
    }

    Ok(())
}
