//! Query state container
//!
//! All screen state lives in [`QueryState`] and changes only through
//! [`reduce`]. Reducing never performs I/O: network work is described by the
//! returned [`Effect`]s, executed by [`crate::query::QueryClient`], and fed
//! back in as completion actions.

use tracing::debug;

use crate::models::{CastMember, Movie, MovieDetails};

/// Validation message for an empty search submission
pub const EMPTY_QUERY_ALERT: &str = "Please enter a movie title to search.";

// =============================================================================
// Actions & Effects
// =============================================================================

/// Everything that can happen to the query state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Search text edited (one per keystroke)
    QueryChanged(String),
    /// A suggestion was picked as the new search text
    SuggestionChosen(String),
    SuggestionsLoaded { seq: u64, titles: Vec<String> },
    SuggestionsFailed { seq: u64, error: String },

    /// Explicit search submit
    SearchSubmitted,
    SearchCompleted { query: String, movies: Vec<Movie> },
    SearchFailed { error: String },
    /// Drop the search and fall back to now playing
    SearchCleared,

    RandomRequested,
    /// User picked a movie from a listing
    MovieSelected(u64),
    DetailsLoaded(Box<MovieDetails>),
    DetailsFailed { error: String },

    NowPlayingRequested,
    NowPlayingLoaded(Vec<Movie>),
    NowPlayingFailed { error: String },

    ModalClosed,
    AlertDismissed,
}

/// Network work requested by a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchSuggestions { seq: u64, query: String },
    Search { query: String },
    /// Random popular page, random entry, then hydrate it
    PickRandom,
    Hydrate { id: u64 },
    LoadNowPlaying,
}

// =============================================================================
// State
// =============================================================================

/// Detail modal
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal {
    #[default]
    Closed,
    /// Details carry their own (already capped) cast list
    Open(Box<MovieDetails>),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open(_))
    }
}

/// What the main list area shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Listing<'a> {
    SearchResults(&'a [Movie]),
    /// Last search came back empty; carries the query text as submitted
    NoResults(&'a str),
    NowPlaying(&'a [Movie]),
}

/// Screen state shared by the four query operations
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    /// Current search text
    pub query: String,
    pub results: Vec<Movie>,
    pub suggestions: Vec<String>,
    pub now_playing: Vec<Movie>,
    /// Last completed search returned nothing
    pub no_results: bool,
    /// Query text of the last completed search
    pub last_search: Option<String>,
    pub modal: Modal,
    /// Pending validation message
    pub alert: Option<String>,
    in_flight: usize,
    suggestion_seq: u64,
    /// Suggestion sequence at the last search submit
    submitted_seq: Option<u64>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while any search, random pick or hydration is outstanding
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Sequence number of the most recent suggestion request
    pub fn suggestion_seq(&self) -> u64 {
        self.suggestion_seq
    }

    pub fn listing(&self) -> Listing<'_> {
        if !self.results.is_empty() {
            Listing::SearchResults(&self.results)
        } else if self.no_results {
            Listing::NoResults(self.last_search.as_deref().unwrap_or_default())
        } else {
            Listing::NowPlaying(&self.now_playing)
        }
    }

    /// Movies currently visible in the list area
    pub fn visible_movies(&self) -> &[Movie] {
        match self.listing() {
            Listing::SearchResults(movies) | Listing::NowPlaying(movies) => movies,
            Listing::NoResults(_) => &[],
        }
    }

    pub fn no_results_message(&self) -> Option<String> {
        match self.listing() {
            Listing::NoResults(query) => Some(format!("No results found for \"{}\".", query)),
            _ => None,
        }
    }

    pub fn details(&self) -> Option<&MovieDetails> {
        match &self.modal {
            Modal::Open(details) => Some(&**details),
            Modal::Closed => None,
        }
    }

    pub fn cast(&self) -> &[CastMember] {
        self.details().map(|d| d.cast.as_slice()).unwrap_or_default()
    }

    fn begin_loading(&mut self) {
        self.in_flight += 1;
    }

    fn end_loading(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Invalidate every suggestion request issued so far
    fn next_suggestion_seq(&mut self) -> u64 {
        self.suggestion_seq += 1;
        self.suggestion_seq
    }
}

// =============================================================================
// Reducer
// =============================================================================

/// Apply an action and return the network work it requires
pub fn reduce(state: &mut QueryState, action: Action) -> Vec<Effect> {
    match action {
        Action::QueryChanged(text) => {
            let seq = state.next_suggestion_seq();
            let trimmed = text.trim().to_string();
            state.query = text;
            if trimmed.is_empty() {
                state.suggestions.clear();
                return Vec::new();
            }
            vec![Effect::FetchSuggestions {
                seq,
                query: trimmed,
            }]
        }

        Action::SuggestionChosen(title) => {
            state.next_suggestion_seq();
            state.query = title;
            state.suggestions.clear();
            Vec::new()
        }

        Action::SuggestionsLoaded { seq, titles } => {
            if seq == state.suggestion_seq {
                state.suggestions = titles;
            } else {
                debug!(seq, latest = state.suggestion_seq, "discarding stale suggestions");
            }
            Vec::new()
        }

        Action::SuggestionsFailed { .. } => Vec::new(),

        Action::SearchSubmitted => {
            let query = state.query.trim().to_string();
            if query.is_empty() {
                state.alert = Some(EMPTY_QUERY_ALERT.to_string());
                return Vec::new();
            }
            state.begin_loading();
            state.submitted_seq = Some(state.suggestion_seq);
            vec![Effect::Search { query }]
        }

        Action::SearchCompleted { query, movies } => {
            state.end_loading();
            // Late suggestions for the submitted text must not reopen the dropdown.
            // Text typed after the submit keeps its own pending request.
            if state.submitted_seq.take() == Some(state.suggestion_seq) {
                state.next_suggestion_seq();
                state.suggestions.clear();
            }
            state.no_results = movies.is_empty();
            state.results = movies;
            state.last_search = Some(query);
            Vec::new()
        }

        Action::SearchFailed { .. } => {
            state.end_loading();
            state.submitted_seq = None;
            Vec::new()
        }

        Action::SearchCleared => {
            state.next_suggestion_seq();
            state.query.clear();
            state.results.clear();
            state.suggestions.clear();
            state.no_results = false;
            state.last_search = None;
            Vec::new()
        }

        Action::RandomRequested => {
            state.begin_loading();
            vec![Effect::PickRandom]
        }

        Action::MovieSelected(id) => {
            state.begin_loading();
            vec![Effect::Hydrate { id }]
        }

        Action::DetailsLoaded(details) => {
            state.end_loading();
            state.modal = Modal::Open(details);
            Vec::new()
        }

        Action::DetailsFailed { .. } => {
            state.end_loading();
            Vec::new()
        }

        Action::NowPlayingRequested => vec![Effect::LoadNowPlaying],

        Action::NowPlayingLoaded(movies) => {
            state.now_playing = movies;
            Vec::new()
        }

        Action::NowPlayingFailed { .. } => Vec::new(),

        Action::ModalClosed => {
            state.modal = Modal::Closed;
            Vec::new()
        }

        Action::AlertDismissed => {
            state.alert = None;
            Vec::new()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
