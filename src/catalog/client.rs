//! OPhim catalog client
//!
//! Stateless request functions over the fixed upstream REST API. Every entry
//! point follows the same contract: build the URL, fetch with cache-bypassing
//! headers, interpret the `{status, data}` envelope, persist the decoded
//! payload into the injected key-value store, and fall back to that stored
//! payload when the transport fails or the server answers 304. Operations never
//! return an error to the caller; lists degrade to an empty `Vec` and the
//! detail lookup to `None`, with diagnostics going to tracing.

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::{key, CacheStore};

use super::envelope::{self, CountryEnvelope, ListEnvelope};
use super::{Country, MovieDetail, MovieSummary};

/// Default upstream API origin
pub const DEFAULT_BASE_URL: &str = "https://ophim1.com";

/// Outcome of one HTTP exchange, before envelope interpretation
///
/// `TransportFailed` covers everything below the envelope: DNS, connect and
/// timeout errors, and failure to read the body. A 304 is a first-class
/// outcome, not an error.
#[derive(Debug)]
enum RawResponse {
    NotModified,
    Body(String),
    TransportFailed,
}

/// Client for the OPhim catalog endpoints
///
/// Cheap to clone is not a goal here; construct one and share it by reference.
/// The cache store is injected so tests can substitute an in-memory fake.
pub struct CatalogClient<S: CacheStore> {
    http: reqwest::Client,
    base_url: String,
    store: S,
}

impl<S: CacheStore> CatalogClient<S> {
    /// Creates a client against the default upstream origin
    pub fn new(store: S) -> Self {
        Self::with_base_url(store, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom origin (tests, mirrors)
    pub fn with_base_url(store: S, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            store,
        }
    }

    /// The injected cache store
    pub fn store(&self) -> &S {
        &self.store
    }

    // --- generic operations ---

    /// Free-text search, one result page
    pub async fn search(&self, keyword: &str, page: u32) -> Vec<MovieSummary> {
        let url = format!(
            "{}/v1/api/tim-kiem?keyword={}&page={}",
            self.base_url,
            urlencoding::encode(keyword),
            page
        );
        self.fetch_list(&key::search(keyword, page), &url, false).await
    }

    /// Movies in a genre, one page
    pub async fn movies_by_genre(&self, genre_slug: &str, page: u32) -> Vec<MovieSummary> {
        let url = format!("{}/v1/api/the-loai/{}?page={}", self.base_url, genre_slug, page);
        self.fetch_list(&key::genre(genre_slug, page), &url, false).await
    }

    /// Movies from a country, one page, newest modifications first
    ///
    /// The only operation that post-filters the decoded list: trailer-only
    /// placeholders are dropped before caching and returning.
    pub async fn movies_by_country(&self, country_slug: &str, page: u32) -> Vec<MovieSummary> {
        let url = format!(
            "{}/v1/api/quoc-gia/{}?sort_field=modified.time&sort_type=desc&page={}",
            self.base_url, country_slug, page
        );
        self.fetch_list(&key::country(country_slug, page), &url, true).await
    }

    /// Movies in a category listing, one page, newest years first
    pub async fn movies_by_category(&self, category_slug: &str, page: u32) -> Vec<MovieSummary> {
        let url = format!(
            "{}/v1/api/danh-sach/{}?page={}&sort_field=year&sort_type=desc",
            self.base_url, category_slug, page
        );
        self.fetch_list(&key::category(category_slug, page), &url, false).await
    }

    /// Full record for a single title, with its episode/server lists
    pub async fn film_detail(&self, slug: &str) -> Option<MovieDetail> {
        let cache_key = key::film(slug);
        let url = format!("{}/v1/api/phim/{}", self.base_url, slug);
        match self.request(&url).await {
            RawResponse::NotModified => {
                debug!(slug, "film detail not modified, serving cached payload");
                self.read_cached(&cache_key)
            }
            RawResponse::Body(body) => self.resolve_detail(&cache_key, &body),
            RawResponse::TransportFailed => self.read_cached(&cache_key),
        }
    }

    /// All countries known to the catalog
    ///
    /// Mirrors the upstream front end: this listing is tiny and changes rarely,
    /// so it is fetched plainly with no revalidation headers and no cache slot.
    pub async fn countries(&self) -> Vec<Country> {
        let url = format!("{}/v1/api/quoc-gia", self.base_url);
        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(%url, error = %err, "country list request failed");
                return Vec::new();
            }
        };
        match response.json::<CountryEnvelope>().await {
            Ok(envelope) if envelope.is_success() => envelope.data,
            Ok(_) => Vec::new(),
            Err(err) => {
                warn!(%url, error = %err, "country list decode failed");
                Vec::new()
            }
        }
    }

    // --- country shortcuts ---

    pub async fn korean_movies(&self, page: u32) -> Vec<MovieSummary> {
        self.movies_by_country("han-quoc", page).await
    }

    pub async fn chinese_movies(&self, page: u32) -> Vec<MovieSummary> {
        self.movies_by_country("trung-quoc", page).await
    }

    pub async fn vietnamese_movies(&self, page: u32) -> Vec<MovieSummary> {
        self.movies_by_country("viet-nam", page).await
    }

    // --- category shortcuts ---

    pub async fn now_showing(&self, page: u32) -> Vec<MovieSummary> {
        self.movies_by_category("phim-moi", page).await
    }

    pub async fn theatrical_movies(&self, page: u32) -> Vec<MovieSummary> {
        self.movies_by_category("phim-chieu-rap", page).await
    }

    pub async fn single_movies(&self, page: u32) -> Vec<MovieSummary> {
        self.movies_by_category("phim-le", page).await
    }

    pub async fn series_movies(&self, page: u32) -> Vec<MovieSummary> {
        self.movies_by_category("phim-bo", page).await
    }

    pub async fn animated_movies(&self, page: u32) -> Vec<MovieSummary> {
        self.movies_by_category("hoat-hinh", page).await
    }

    pub async fn tv_shows(&self, page: u32) -> Vec<MovieSummary> {
        self.movies_by_category("tv-shows", page).await
    }

    pub async fn upcoming_movies(&self, page: u32) -> Vec<MovieSummary> {
        self.movies_by_category("phim-sap-chieu", page).await
    }

    pub async fn vietsub_movies(&self, page: u32) -> Vec<MovieSummary> {
        self.movies_by_category("phim-vietsub", page).await
    }

    pub async fn dubbed_movies(&self, page: u32) -> Vec<MovieSummary> {
        self.movies_by_category("phim-thuyet-minh", page).await
    }

    // --- shared fetch/cache/fallback routine ---

    async fn fetch_list(&self, cache_key: &str, url: &str, drop_trailers: bool) -> Vec<MovieSummary> {
        match self.request(url).await {
            RawResponse::NotModified => {
                debug!(cache_key, "list not modified, serving cached payload");
                self.read_cached(cache_key).unwrap_or_default()
            }
            RawResponse::Body(body) => self.resolve_list(cache_key, &body, drop_trailers),
            RawResponse::TransportFailed => self.read_cached(cache_key).unwrap_or_default(),
        }
    }

    /// Performs one GET with revalidation-forcing headers
    async fn request(&self, url: &str) -> RawResponse {
        let result = async {
            let response = self
                .http
                .get(url)
                .header(CACHE_CONTROL, "no-cache")
                .header(PRAGMA, "no-cache")
                .send()
                .await?;
            if response.status() == StatusCode::NOT_MODIFIED {
                return Ok(RawResponse::NotModified);
            }
            let body = response.text().await?;
            Ok::<RawResponse, reqwest::Error>(RawResponse::Body(body))
        }
        .await;
        match result {
            Ok(raw) => raw,
            Err(err) => {
                warn!(%url, error = %err, "request failed, will fall back to cache");
                RawResponse::TransportFailed
            }
        }
    }

    /// Interprets a list envelope body
    ///
    /// Explicit failure envelopes yield an empty list without touching the
    /// cache; a body that does not decode at all is treated like a transport
    /// failure and falls back to the cached payload.
    fn resolve_list(&self, cache_key: &str, body: &str, drop_trailers: bool) -> Vec<MovieSummary> {
        match serde_json::from_str::<ListEnvelope>(body) {
            Ok(envelope) if envelope.is_success() => {
                let mut items = envelope.data.items;
                if drop_trailers {
                    items.retain(|movie| !movie.is_trailer());
                }
                self.write_cached(cache_key, &items);
                items
            }
            Ok(envelope) => {
                debug!(cache_key, status = %envelope.status, "upstream returned failure envelope");
                Vec::new()
            }
            Err(err) => {
                warn!(cache_key, error = %err, "list body decode failed, falling back to cache");
                self.read_cached(cache_key).unwrap_or_default()
            }
        }
    }

    /// Interprets a detail envelope body; same failure semantics as lists
    fn resolve_detail(&self, cache_key: &str, body: &str) -> Option<MovieDetail> {
        let raw: Value = match serde_json::from_str(body) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(cache_key, error = %err, "detail body decode failed, falling back to cache");
                return self.read_cached(cache_key);
            }
        };
        if !envelope::is_success_envelope(&raw) {
            debug!(cache_key, "upstream returned failure envelope for detail");
            return None;
        }
        let detail = envelope::extract_detail(&raw)?;
        self.write_cached(cache_key, &detail);
        Some(detail)
    }

    fn read_cached<T: DeserializeOwned>(&self, cache_key: &str) -> Option<T> {
        let stored = self.store.get(cache_key)?;
        match serde_json::from_str(&stored) {
            Ok(payload) => Some(payload),
            Err(err) => {
                warn!(cache_key, error = %err, "cached payload is unreadable, ignoring it");
                None
            }
        }
    }

    fn write_cached<T: Serialize>(&self, cache_key: &str, payload: &T) {
        match serde_json::to_string(payload) {
            Ok(json) => self.store.set(cache_key, &json),
            Err(err) => warn!(cache_key, error = %err, "failed to serialize payload for cache"),
        }
    }
}
