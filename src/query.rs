//! Movie query client
//!
//! Runs the four query operations (suggestions, search, random pick, detail
//! hydration) plus the now-playing load against a [`MovieApi`], and turns
//! each [`Effect`] from the store into the completion [`Action`] that reports
//! its outcome. Failures are logged here and never surfaced further.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::api::{MovieApi, TmdbError};
use crate::models::{Movie, MovieDetails};
use crate::store::{Action, Effect};

/// Highest page of the popular listing TMDB will serve
pub const POPULAR_PAGE_LIMIT: u32 = 500;

/// Query operation errors
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Search text is empty")]
    EmptyQuery,

    #[error("Popular page {0} has no movies")]
    EmptyPage(u32),

    #[error(transparent)]
    Api(#[from] TmdbError),
}

// =============================================================================
// Random Source
// =============================================================================

/// Source of the two random draws made by the random picker
pub trait PagePicker: Send + Sync {
    /// Page number in `1..=POPULAR_PAGE_LIMIT`
    fn page(&self) -> u32;

    /// Index in `0..len`; only called with `len > 0`
    fn index(&self, len: usize) -> usize;
}

/// Uniform draws from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl PagePicker for ThreadRngPicker {
    fn page(&self) -> u32 {
        rand::rng().random_range(1..=POPULAR_PAGE_LIMIT)
    }

    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

// =============================================================================
// Query Client
// =============================================================================

/// Executes query operations against a movie API
pub struct QueryClient<A, P = ThreadRngPicker> {
    api: A,
    picker: P,
}

impl<A: MovieApi> QueryClient<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            picker: ThreadRngPicker,
        }
    }
}

impl<A: MovieApi, P: PagePicker> QueryClient<A, P> {
    /// Use a custom random source (deterministic picks in tests)
    pub fn with_picker(api: A, picker: P) -> Self {
        Self { api, picker }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Suggestion titles for partially typed text; empty text makes no request
    pub async fn suggestions(&self, query: &str) -> Result<Vec<String>, QueryError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let movies = self.api.search_movies(query).await?;
        Ok(movies.into_iter().map(|m| m.title).collect())
    }

    /// Full title search
    pub async fn search(&self, query: &str) -> Result<Vec<Movie>, QueryError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(QueryError::EmptyQuery);
        }
        Ok(self.api.search_movies(query).await?)
    }

    pub async fn now_playing(&self) -> Result<Vec<Movie>, QueryError> {
        Ok(self.api.now_playing().await?)
    }

    /// Hydrate a random entry from a random popular page
    pub async fn random_movie(&self) -> Result<MovieDetails, QueryError> {
        let page = self.picker.page();
        let movies = self.api.popular(page).await?;
        if movies.is_empty() {
            return Err(QueryError::EmptyPage(page));
        }
        let index = self.picker.index(movies.len()).min(movies.len() - 1);
        let chosen = &movies[index];
        debug!(page, index, id = chosen.id, "random pick");
        self.hydrate(chosen.id).await
    }

    /// Full details for one movie (director derived, cast capped)
    pub async fn hydrate(&self, id: u64) -> Result<MovieDetails, QueryError> {
        Ok(self.api.movie_details(id).await?)
    }

    /// Execute one effect and report its outcome as an action
    pub async fn run(&self, effect: Effect) -> Action {
        match effect {
            Effect::FetchSuggestions { seq, query } => match self.suggestions(&query).await {
                Ok(titles) => Action::SuggestionsLoaded { seq, titles },
                Err(e) => {
                    warn!(%query, error = %e, "suggestion fetch failed");
                    Action::SuggestionsFailed {
                        seq,
                        error: e.to_string(),
                    }
                }
            },

            Effect::Search { query } => match self.search(&query).await {
                Ok(movies) => {
                    info!(%query, count = movies.len(), "search completed");
                    Action::SearchCompleted { query, movies }
                }
                Err(e) => {
                    error!(%query, error = %e, "search failed");
                    Action::SearchFailed {
                        error: e.to_string(),
                    }
                }
            },

            Effect::PickRandom => match self.random_movie().await {
                Ok(details) => Action::DetailsLoaded(Box::new(details)),
                Err(e) => {
                    error!(error = %e, "random pick failed");
                    Action::DetailsFailed {
                        error: e.to_string(),
                    }
                }
            },

            Effect::Hydrate { id } => match self.hydrate(id).await {
                Ok(details) => Action::DetailsLoaded(Box::new(details)),
                Err(e) => {
                    error!(id, error = %e, "detail hydration failed");
                    Action::DetailsFailed {
                        error: e.to_string(),
                    }
                }
            },

            Effect::LoadNowPlaying => match self.now_playing().await {
                Ok(movies) => Action::NowPlayingLoaded(movies),
                Err(e) => {
                    warn!(error = %e, "now playing fetch failed");
                    Action::NowPlayingFailed {
                        error: e.to_string(),
                    }
                }
            },
        }
    }
}
