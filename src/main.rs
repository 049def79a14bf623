//! xemphim - browse the OPhim movie catalog from the terminal
//!
//! Thin consumer of the catalog client: parses arguments, wires up the disk
//! cache, runs one command, and prints the result. All network and cache
//! semantics live in the library.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use xemphim::cache::DiskStore;
use xemphim::catalog::{self, CatalogClient};
use xemphim::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let store = match &args.cache_dir {
        Some(dir) => DiskStore::open_at(dir.clone())?,
        None => DiskStore::open()?,
    };
    let client = match &args.base_url {
        Some(base_url) => CatalogClient::with_base_url(store, base_url.clone()),
        None => CatalogClient::new(store),
    };

    match args.command {
        Command::Search { keyword, page } => {
            let movies = client.search(&keyword, page).await;
            print!("{}", cli::format_list(&format!("Kết quả cho \"{}\"", keyword), &movies));
        }
        Command::Genre { slug, page } => {
            let heading = catalog::taxonomy::genre_name(&slug).unwrap_or(&slug);
            let movies = client.movies_by_genre(&slug, page).await;
            print!("{}", cli::format_list(heading, &movies));
        }
        Command::Country { slug, page } => {
            let heading = catalog::taxonomy::country_name(&slug).unwrap_or(&slug);
            let movies = client.movies_by_country(&slug, page).await;
            print!("{}", cli::format_list(heading, &movies));
        }
        Command::Category { slug, page } => {
            let heading = catalog::taxonomy::category_name(&slug).unwrap_or(&slug);
            let movies = client.movies_by_category(&slug, page).await;
            print!("{}", cli::format_list(heading, &movies));
        }
        Command::Film { slug } => match client.film_detail(&slug).await {
            Some(detail) => print!("{}", cli::format_detail(&detail)),
            None => println!("No record found for \"{}\"", slug),
        },
        Command::Countries => {
            print!("{}", cli::format_countries(&client.countries().await));
        }
        Command::Home => {
            // the home view of the original front end: nine rows fetched at once
            let (korean, chinese, vietnamese, series, singles, tv, theatrical, upcoming, animated) =
                futures::join!(
                    client.korean_movies(1),
                    client.chinese_movies(1),
                    client.vietnamese_movies(1),
                    client.series_movies(1),
                    client.single_movies(1),
                    client.tv_shows(1),
                    client.theatrical_movies(1),
                    client.upcoming_movies(1),
                    client.animated_movies(1),
                );
            let sections = [
                ("Phim Hàn Quốc mới", korean),
                ("Phim Trung Quốc mới", chinese),
                ("Phim Việt Nam mới", vietnamese),
                ("Phim Bộ", series),
                ("Phim Lẻ", singles),
                ("TV Shows", tv),
                ("Phim Chiếu Rạp", theatrical),
                ("Phim Sắp Chiếu", upcoming),
                ("Hoạt Hình", animated),
            ];
            for (heading, movies) in &sections {
                println!("{}", cli::format_list(heading, movies));
            }
        }
    }

    Ok(())
}
