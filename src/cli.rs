//! Command-line interface for the xemphim catalog browser
//!
//! Argument parsing via clap derive, plus the plain-text rendering of catalog
//! results. Rendering lives here rather than in the catalog module so the
//! client stays a pure data layer.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::catalog::{Country, MovieDetail, MovieSummary};

/// Browse the OPhim movie catalog, with an offline cache fallback
#[derive(Parser, Debug)]
#[command(name = "xemphim")]
#[command(about = "Browse the OPhim movie catalog from the terminal")]
#[command(version)]
pub struct Cli {
    /// Upstream API origin (defaults to the public OPhim instance)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Directory for cached payloads (defaults to the platform cache dir)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search titles by free-text keyword
    Search {
        keyword: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List movies in a genre (e.g. hanh-dong, kinh-di)
    Genre {
        slug: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List movies from a country (e.g. han-quoc, trung-quoc)
    Country {
        slug: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List movies in a category (e.g. phim-bo, phim-le, tv-shows)
    Category {
        slug: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show the full record for one title, including episode servers
    Film { slug: String },
    /// List all countries known to the catalog
    Countries,
    /// Fetch every home-view row concurrently (three countries, six categories)
    Home,
}

/// Renders one list row: `slug  name (origin_name) [quality] episode_current`
pub fn format_summary_line(movie: &MovieSummary) -> String {
    let mut line = format!("{:<30} {}", movie.slug, movie.name);
    if !movie.origin_name.is_empty() {
        line.push_str(&format!(" ({})", movie.origin_name));
    }
    if !movie.quality.is_empty() {
        line.push_str(&format!(" [{}]", movie.quality));
    }
    if !movie.episode_current.is_empty() {
        line.push_str(&format!(" | {}", movie.episode_current));
    }
    line
}

/// Renders a list section with a heading, or an explicit empty marker
pub fn format_list(heading: &str, movies: &[MovieSummary]) -> String {
    let mut out = format!("{} ({} titles)\n", heading, movies.len());
    if movies.is_empty() {
        out.push_str("  (no results)\n");
        return out;
    }
    for movie in movies {
        out.push_str("  ");
        out.push_str(&format_summary_line(movie));
        out.push('\n');
    }
    out
}

/// Renders the detail view for one title
pub fn format_detail(detail: &MovieDetail) -> String {
    let mut out = format!("{} ({})\n", detail.name, detail.origin_name);
    out.push_str(&format!("slug: {}\n", detail.slug));
    if let Some(year) = detail.year {
        out.push_str(&format!("year: {}\n", year));
    }
    if !detail.quality.is_empty() || !detail.lang.is_empty() {
        out.push_str(&format!("quality: {} {}\n", detail.quality, detail.lang));
    }
    if !detail.actor.is_empty() {
        out.push_str(&format!("cast: {}\n", detail.actor.join(", ")));
    }
    if !detail.director.is_empty() {
        out.push_str(&format!("director: {}\n", detail.director.join(", ")));
    }
    if let Some(tmdb) = &detail.tmdb {
        out.push_str(&format!(
            "tmdb: {:.1}/10 ({} votes)\n",
            tmdb.vote_average, tmdb.vote_count
        ));
    }
    if !detail.content.is_empty() {
        out.push_str(&format!("\n{}\n", detail.content));
    }
    for group in &detail.episodes {
        out.push_str(&format!("\n[{}]\n", group.server_name));
        for episode in &group.server_data {
            out.push_str(&format!("  {:<10} {}\n", episode.name, episode.link_m3u8));
        }
    }
    out
}

/// Renders the country listing
pub fn format_countries(countries: &[Country]) -> String {
    let mut out = String::new();
    if countries.is_empty() {
        out.push_str("(no countries returned)\n");
        return out;
    }
    for country in countries {
        out.push_str(&format!("{:<20} {}\n", country.slug, country.name));
    }
    out
}
