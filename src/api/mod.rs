//! API clients for external services
//!
//! - TMDB: movie search, listings and details
//!
//! [`MovieApi`] is the seam the query layer talks to; [`TmdbClient`] is the
//! production implementation.

pub mod tmdb;

pub use tmdb::{TmdbClient, TmdbError};

use async_trait::async_trait;

use crate::models::{Movie, MovieDetails};

/// Movie metadata source used by the query client
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Title search
    async fn search_movies(&self, query: &str) -> tmdb::Result<Vec<Movie>>;

    /// Currently-in-theaters listing
    async fn now_playing(&self) -> tmdb::Result<Vec<Movie>>;

    /// One page (1-based) of the popular listing
    async fn popular(&self, page: u32) -> tmdb::Result<Vec<Movie>>;

    /// Details with credits and videos
    async fn movie_details(&self, id: u64) -> tmdb::Result<MovieDetails>;
}

#[async_trait]
impl MovieApi for TmdbClient {
    async fn search_movies(&self, query: &str) -> tmdb::Result<Vec<Movie>> {
        TmdbClient::search_movies(self, query).await
    }

    async fn now_playing(&self) -> tmdb::Result<Vec<Movie>> {
        TmdbClient::now_playing(self).await
    }

    async fn popular(&self, page: u32) -> tmdb::Result<Vec<Movie>> {
        TmdbClient::popular(self, page).await
    }

    async fn movie_details(&self, id: u64) -> tmdb::Result<MovieDetails> {
        TmdbClient::movie_details(self, id).await
    }
}
