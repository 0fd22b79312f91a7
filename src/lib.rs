//! Marquee - terminal movie browser backed by TMDB
//!
//! Search-as-you-type title suggestions, full title search, a random pick
//! from the popular listing, and detail hydration with director, trailer
//! and top-billed cast.
//!
//! # Modules
//!
//! - `models` - Movie summaries, hydrated details, image URLs
//! - `api` - TMDB client and the `MovieApi` seam
//! - `store` - Query state, actions and the reducer
//! - `query` - Query operations; runs store effects against the API
//! - `config` / `logging` - Config file, API key and tracing setup
//! - `cli` / `commands` - Scriptable subcommands
//! - `app` / `ui` - Interactive TUI

pub mod models;
pub mod api;
pub mod store;
pub mod query;
pub mod config;
pub mod logging;
pub mod cli;
pub mod commands;
pub mod app;
pub mod ui;

// Re-export commonly used types
pub use models::{CastMember, ImageBase, Movie, MovieDetails};
pub use api::{MovieApi, TmdbClient, TmdbError};
pub use store::{reduce, Action, Effect, QueryState};
pub use query::{PagePicker, QueryClient, QueryError};
pub use config::Config;
pub use app::App;
