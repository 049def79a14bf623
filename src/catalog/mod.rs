//! Catalog data transfer types
//!
//! Plain serde shapes mirroring the OPhim REST API. These are not owned domain
//! objects: they are decoded from upstream JSON, optionally written to the
//! cache, and handed to consumers unchanged. Every field carries a default or is
//! optional so partially populated upstream records still decode.

pub mod client;
pub mod envelope;
pub mod taxonomy;

pub use client::CatalogClient;
pub use taxonomy::{CATEGORIES, COUNTRIES, GENRES};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upstream status value marking a trailer-only placeholder entry
const TRAILER_STATUS: &str = "trailer";

/// One movie or series as returned by the list endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Upstream record id
    #[serde(rename = "_id", default)]
    pub id: String,
    /// URL slug, the unique key used everywhere in this crate
    #[serde(default)]
    pub slug: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Original (untranslated) name
    #[serde(default)]
    pub origin_name: String,
    /// Record kind reported by upstream ("single", "series", "hoathinh", ...)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Release status ("ongoing", "completed", "trailer", ...)
    #[serde(default)]
    pub status: Option<String>,
    /// Poster image path fragment
    #[serde(default)]
    pub poster_url: String,
    /// Thumbnail image path fragment
    #[serde(default)]
    pub thumb_url: String,
    /// Quality tag ("HD", "FHD", "CAM", ...)
    #[serde(default)]
    pub quality: String,
    /// Language/subtitle tag ("Vietsub", "Thuyết Minh", ...)
    #[serde(default)]
    pub lang: String,
    /// Latest available episode, as upstream phrases it ("Tập 12", "Full", ...)
    #[serde(default)]
    pub episode_current: String,
    /// Total episode count, as upstream phrases it
    #[serde(default)]
    pub episode_total: String,
    /// Release year
    #[serde(default)]
    pub year: Option<u32>,
    /// Genre references
    #[serde(default)]
    pub category: Vec<TaxonomyRef>,
    /// Country references
    #[serde(default)]
    pub country: Vec<TaxonomyRef>,
    /// Upstream modification stamp
    #[serde(default)]
    pub modified: Option<ModifiedStamp>,
}

impl MovieSummary {
    /// Whether this entry is a trailer-only placeholder with nothing to play
    pub fn is_trailer(&self) -> bool {
        self.status.as_deref() == Some(TRAILER_STATUS)
    }
}

/// Full record returned by the detail endpoint
///
/// Superset of [`MovieSummary`]; kept as its own flat struct because the two
/// payloads are cached and decoded independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub origin_name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Long-form description; may contain HTML markup
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub poster_url: String,
    #[serde(default)]
    pub thumb_url: String,
    #[serde(default)]
    pub quality: String,
    #[serde(default)]
    pub lang: String,
    /// Running time, as upstream phrases it ("120 phút", "45 phút/tập", ...)
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub episode_current: String,
    #[serde(default)]
    pub episode_total: String,
    #[serde(default)]
    pub year: Option<u32>,
    /// Cast list
    #[serde(default)]
    pub actor: Vec<String>,
    /// Director list
    #[serde(default)]
    pub director: Vec<String>,
    #[serde(default)]
    pub category: Vec<TaxonomyRef>,
    #[serde(default)]
    pub country: Vec<TaxonomyRef>,
    /// TMDB rating reference
    #[serde(default)]
    pub tmdb: Option<TmdbRef>,
    /// IMDB reference
    #[serde(default)]
    pub imdb: Option<ImdbRef>,
    /// Playable streams, grouped per server/language track
    #[serde(default)]
    pub episodes: Vec<ServerGroup>,
    #[serde(default)]
    pub modified: Option<ModifiedStamp>,
}

/// A server/language track with its ordered episode list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerGroup {
    /// Track label, e.g. "Vietsub #1"
    #[serde(default)]
    pub server_name: String,
    /// Episodes in playback order
    #[serde(default)]
    pub server_data: Vec<Episode>,
}

/// One playable episode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    /// Episode name or number ("Tập 01", "Full", ...)
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub filename: String,
    /// Embeddable player URL
    #[serde(default)]
    pub link_embed: String,
    /// Direct HLS stream URL
    #[serde(default)]
    pub link_m3u8: String,
}

/// Genre/country reference attached to a movie record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}

/// TMDB rating reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TmdbRef {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub season: Option<i64>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
}

/// IMDB reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImdbRef {
    #[serde(default)]
    pub id: Option<String>,
}

/// Upstream modification timestamp wrapper
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifiedStamp {
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

/// One entry of the country-list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}
