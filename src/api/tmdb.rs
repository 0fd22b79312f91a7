//! TMDB (The Movie Database) API client
//!
//! Provides movie search, listings and hydrated details.
//! API docs: https://developer.themoviedb.org/docs

use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::models::{find_director, top_cast, CastMember, CrewMember, Movie, MovieDetails, Video};

/// Public TMDB v3 endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// TMDB API error types
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("Invalid API key (401)")]
    Unauthorized,

    #[error("Resource not found (404)")]
    NotFound,

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, TmdbError>;

/// TMDB API client
#[derive(Debug, Clone)]
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: build_http_client(DEFAULT_TIMEOUT),
        }
    }

    /// Replace the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = build_http_client(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request authenticated with the `api_key` query parameter
    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(endpoint, "tmdb request");

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .header("Accept", "application/json")
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                serde_json::from_str(&body)
                    .map_err(|e| TmdbError::InvalidResponse(format!("JSON parse error: {}", e)))
            }
            StatusCode::UNAUTHORIZED => Err(TmdbError::Unauthorized),
            StatusCode::NOT_FOUND => Err(TmdbError::NotFound),
            status => Err(TmdbError::Status(status.as_u16())),
        }
    }

    /// Search movies by title
    pub async fn search_movies(&self, query: &str) -> Result<Vec<Movie>> {
        let response: ListResponse = self.get("/search/movie", &[("query", query)]).await?;
        Ok(response.into_movies())
    }

    /// Movies currently in theaters
    pub async fn now_playing(&self) -> Result<Vec<Movie>> {
        let response: ListResponse = self.get("/movie/now_playing", &[]).await?;
        Ok(response.into_movies())
    }

    /// One page of the popular movies listing
    pub async fn popular(&self, page: u32) -> Result<Vec<Movie>> {
        let page = page.to_string();
        let response: ListResponse = self.get("/movie/popular", &[("page", &page)]).await?;
        Ok(response.into_movies())
    }

    /// Full details with credits and videos expanded in the same request
    pub async fn movie_details(&self, id: u64) -> Result<MovieDetails> {
        let endpoint = format!("/movie/{}", id);
        let response: DetailsResponse = self
            .get(&endpoint, &[("append_to_response", "credits,videos")])
            .await?;
        Ok(response.into_details())
    }
}

fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListResponse {
    results: Vec<MovieRaw>,
}

impl ListResponse {
    fn into_movies(self) -> Vec<Movie> {
        self.results.into_iter().map(MovieRaw::into_movie).collect()
    }
}

#[derive(Debug, Deserialize)]
struct MovieRaw {
    id: u64,
    title: Option<String>,
    poster_path: Option<String>,
    release_date: Option<String>,
    overview: Option<String>,
}

impl MovieRaw {
    fn into_movie(self) -> Movie {
        Movie {
            id: self.id,
            title: self.title.unwrap_or_default(),
            poster_path: self.poster_path,
            release_date: self.release_date.unwrap_or_default(),
            overview: self.overview.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    id: u64,
    title: String,
    poster_path: Option<String>,
    release_date: Option<String>,
    overview: Option<String>,
    budget: Option<u64>,
    revenue: Option<u64>,
    runtime: Option<u32>,
    #[serde(default)]
    production_companies: Vec<CompanyRaw>,
    // Required: a details body without the credits expansion is malformed
    credits: CreditsRaw,
    #[serde(default)]
    videos: VideosRaw,
}

impl DetailsResponse {
    fn into_details(self) -> MovieDetails {
        let director = find_director(&self.credits.crew);
        let cast = top_cast(
            self.credits
                .cast
                .into_iter()
                .map(CastRaw::into_member)
                .collect(),
        );

        MovieDetails {
            id: self.id,
            title: self.title,
            poster_path: self.poster_path,
            release_date: self.release_date.unwrap_or_default(),
            overview: self.overview.unwrap_or_default(),
            budget: self.budget.unwrap_or(0),
            revenue: self.revenue.unwrap_or(0),
            runtime: self.runtime.unwrap_or(0),
            director,
            production_companies: self
                .production_companies
                .into_iter()
                .map(|c| c.name)
                .collect(),
            videos: self.videos.results,
            cast,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompanyRaw {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CreditsRaw {
    #[serde(default)]
    cast: Vec<CastRaw>,
    #[serde(default)]
    crew: Vec<CrewMember>,
}

#[derive(Debug, Deserialize)]
struct CastRaw {
    id: u64,
    name: String,
    character: Option<String>,
    profile_path: Option<String>,
}

impl CastRaw {
    fn into_member(self) -> CastMember {
        CastMember {
            id: self.id,
            name: self.name,
            character: self.character.unwrap_or_default(),
            profile_path: self.profile_path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct VideosRaw {
    #[serde(default)]
    results: Vec<Video>,
}
