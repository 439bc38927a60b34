//! Catalog API client
//!
//! Talks to the site's backend: the composed home page, per-title detail
//! with embed servers, and search.

use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use crate::models::{
    CatalogPage, Language, MediaKind, MovieExpanded, MovieSummary, SearchHit, Section,
    SectionKind, ServerLink, TimeWindow,
};

/// Catalog API error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Resource not found (404)")]
    NotFound,

    #[error("Rate limited (429), retries exhausted")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Catalog API client
#[derive(Clone)]
pub struct CatalogClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
    max_retries: u32,
}

impl CatalogClient {
    /// Create a client for the given backend base URL
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            max_retries: 3,
        }
    }

    /// Make an authenticated GET request with retry logic for rate limits
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut retries = 0;

        loop {
            let response = self
                .client
                .get(&url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .header("Accept", "application/json")
                .send()
                .await?;

            match response.status() {
                StatusCode::OK => {
                    let body = response.text().await?;
                    let parsed: T = serde_json::from_str(&body).map_err(|e| {
                        CatalogError::InvalidResponse(format!("JSON parse error: {}", e))
                    })?;
                    return Ok(parsed);
                }
                StatusCode::NOT_FOUND => {
                    return Err(CatalogError::NotFound.into());
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    retries += 1;
                    if retries >= self.max_retries {
                        return Err(CatalogError::RateLimited.into());
                    }

                    // Honor Retry-After, else exponential backoff
                    let wait_secs = response
                        .headers()
                        .get("Retry-After")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(2u64.pow(retries));

                    tokio::time::sleep(Duration::from_secs(wait_secs)).await;
                    continue;
                }
                status => {
                    return Err(CatalogError::ServerError(status.as_u16()).into());
                }
            }
        }
    }

    /// Fetch the composed home page for a trending time window
    pub async fn page(&self, window: TimeWindow) -> Result<CatalogPage> {
        let endpoint = format!(
            "/api/v1/page?type=inicio&time_window={}",
            window.as_param()
        );
        let response: PageResponse = self.get(&endpoint).await?;
        Ok(response.into_page(window))
    }

    /// Fetch one title's expanded record with its embed servers
    pub async fn movie(&self, id: &str) -> Result<MovieExpanded> {
        let endpoint = format!("/api/v1/get-movie?id={}", urlencoding::encode(id));
        let response: GetMovieResponse = self.get(&endpoint).await?;
        response.into_expanded(id)
    }

    /// Search the catalog by free-text query
    pub async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let endpoint = format!("/api/v1/search?query={}", urlencoding::encode(query));
        let response: SearchResponse = self.get(&endpoint).await?;
        Ok(response.into_hits())
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct PageResponse {
    sections: HashMap<String, SectionRaw>,
}

impl PageResponse {
    /// Assemble sections in display order; buckets the backend omitted are
    /// skipped rather than rendered empty
    fn into_page(mut self, window: TimeWindow) -> CatalogPage {
        let trending_key = format!("trending_{}_movies", window.as_param());
        let order = [
            (trending_key.as_str(), SectionKind::Trending(window)),
            ("now_playing_movies", SectionKind::NowPlaying),
            ("top_rated_movies", SectionKind::TopRated),
            ("upcoming_movies", SectionKind::Upcoming),
        ];

        let sections = order
            .into_iter()
            .filter_map(|(key, kind)| {
                let raw = self.sections.remove(key)?;
                let titles: Vec<MovieSummary> =
                    raw.results.into_iter().map(|m| m.into_summary()).collect();
                if titles.is_empty() {
                    None
                } else {
                    Some(Section { kind, titles })
                }
            })
            .collect();

        CatalogPage { sections }
    }
}

#[derive(Debug, Deserialize)]
struct SectionRaw {
    #[serde(default)]
    results: Vec<MovieRaw>,
}

#[derive(Debug, Deserialize)]
struct MovieRaw {
    id: u64,
    title: Option<String>,
    poster: Option<String>,
    release_date: Option<String>,
    #[serde(default)]
    genres: Vec<String>,
    vote_average: Option<f32>,
    overview: Option<String>,
    trailer: Option<String>,
}

impl MovieRaw {
    fn into_summary(self) -> MovieSummary {
        let year = self
            .release_date
            .as_deref()
            .and_then(extract_year)
            .unwrap_or(0);

        MovieSummary {
            id: self.id.to_string(),
            title: self.title.unwrap_or_default(),
            poster_url: self.poster,
            year,
            genres: self.genres,
            rating: self.vote_average,
            overview: self.overview,
            trailer_url: self.trailer,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GetMovieResponse {
    success: bool,
    data: Option<MovieDataRaw>,
}

impl GetMovieResponse {
    fn into_expanded(self, id: &str) -> Result<MovieExpanded> {
        if !self.success {
            return Err(CatalogError::NotFound.into());
        }
        let data = self
            .data
            .ok_or_else(|| CatalogError::InvalidResponse("missing data field".to_string()))?;

        let year = data
            .release_date
            .as_deref()
            .and_then(extract_year)
            .unwrap_or(0);

        let servers = data
            .servers
            .into_iter()
            .filter(|s| !s.url.is_empty())
            .map(|s| ServerLink {
                name: s.name,
                url: s.url,
                language: Language::from_tag(&s.language),
            })
            .collect();

        let similar = data
            .similar_movies
            .into_iter()
            .map(|m| m.into_summary())
            .collect();

        Ok(MovieExpanded {
            id: id.to_string(),
            title: data.title.unwrap_or_default(),
            year,
            age_rating: data.age_rating,
            genres: data.genres,
            overview: data.overview.unwrap_or_default(),
            poster_url: data.poster,
            servers,
            similar,
        })
    }
}

#[derive(Debug, Deserialize)]
struct MovieDataRaw {
    title: Option<String>,
    release_date: Option<String>,
    age_rating: Option<String>,
    #[serde(default)]
    genres: Vec<String>,
    overview: Option<String>,
    poster: Option<String>,
    #[serde(default)]
    servers: Vec<ServerRaw>,
    #[serde(default)]
    similar_movies: Vec<MovieRaw>,
}

#[derive(Debug, Deserialize)]
struct ServerRaw {
    name: String,
    url: String,
    #[serde(default)]
    language: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHitRaw>,
}

impl SearchResponse {
    fn into_hits(self) -> Vec<SearchHit> {
        self.results.into_iter().map(|r| r.into_hit()).collect()
    }
}

#[derive(Debug, Deserialize)]
struct SearchHitRaw {
    id: u64,
    title: Option<String>,
    // The backend tags series with "serie"; anything else is a movie
    #[serde(rename = "type")]
    kind: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f32>,
    poster: Option<String>,
    overview: Option<String>,
}

impl SearchHitRaw {
    fn into_hit(self) -> SearchHit {
        let kind = match self.kind.as_deref() {
            Some("serie") => MediaKind::Tv,
            _ => MediaKind::Movie,
        };

        SearchHit {
            id: self.id.to_string(),
            title: self.title.unwrap_or_default(),
            kind,
            year: self.release_date.as_deref().and_then(extract_year),
            rating: self.vote_average,
            poster_url: self.poster,
            overview: self.overview,
        }
    }
}

/// Extract year from a date string like "2024-06-11"
fn extract_year(date: &str) -> Option<u16> {
    if date.len() >= 4 {
        date[..4].parse().ok()
    } else {
        None
    }
}
