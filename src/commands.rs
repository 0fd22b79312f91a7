//! CLI Command Handlers
//!
//! Implements all CLI commands on top of the query client.
//! Each handler takes CLI args and Output, returns ExitCode.

use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::api::MovieApi;
use crate::cli::{ExitCode, InfoCmd, NowPlayingCmd, Output, RandomCmd, SearchCmd, SuggestCmd};
use crate::config::Config;
use crate::models::{format_money, format_runtime, CastMember, ImageBase, Movie, MovieDetails};
use crate::query::{PagePicker, QueryClient, QueryError};
use crate::store::EMPTY_QUERY_ALERT;

// =============================================================================
// Output Records
// =============================================================================

/// Movie summary with its resolved poster URL
#[derive(Debug, Serialize)]
pub struct MovieRow {
    #[serde(flatten)]
    pub movie: Movie,
    pub poster_url: String,
}

impl MovieRow {
    pub fn new(movie: Movie, images: &ImageBase) -> Self {
        let poster_url = images.poster(&movie);
        Self { movie, poster_url }
    }
}

impl fmt::Display for MovieRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>8}  {}", self.movie.id, self.movie)
    }
}

/// Cast entry with its resolved profile URL
#[derive(Debug, Serialize)]
pub struct CastRow {
    #[serde(flatten)]
    pub member: CastMember,
    pub profile_url: String,
}

/// Hydrated details with resolved image and trailer URLs
#[derive(Debug, Serialize)]
pub struct DetailsReport {
    #[serde(flatten)]
    pub details: MovieDetails,
    pub poster_url: String,
    pub trailer_url: Option<String>,
    pub cast_urls: Vec<CastRow>,
}

impl DetailsReport {
    pub fn new(details: MovieDetails, images: &ImageBase) -> Self {
        let poster_url = images.url(details.poster_path.as_deref());
        let trailer_url = details.trailer_url();
        let cast_urls = details
            .cast
            .iter()
            .map(|m| CastRow {
                member: m.clone(),
                profile_url: images.profile(m),
            })
            .collect();
        Self {
            details,
            poster_url,
            trailer_url,
            cast_urls,
        }
    }
}

impl fmt::Display for DetailsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.details;
        writeln!(f, "{}", d.summary())?;
        writeln!(f, "  Director:  {}", d.director)?;
        writeln!(f, "  Released:  {}", d.release_date)?;
        writeln!(f, "  Runtime:   {}", format_runtime(d.runtime))?;
        writeln!(f, "  Budget:    {}", format_money(d.budget))?;
        writeln!(f, "  Revenue:   {}", format_money(d.revenue))?;
        if !d.production_companies.is_empty() {
            writeln!(f, "  Studios:   {}", d.production_companies.join(", "))?;
        }
        if let Some(url) = &self.trailer_url {
            writeln!(f, "  Trailer:   {}", url)?;
        }
        writeln!(f, "  Poster:    {}", self.poster_url)?;
        if !d.cast.is_empty() {
            writeln!(f, "  Cast:")?;
            for member in &d.cast {
                writeln!(f, "    - {}", member)?;
            }
        }
        if !d.overview.is_empty() {
            writeln!(f)?;
            write!(f, "  {}", d.overview)?;
        }
        Ok(())
    }
}

fn failure(output: &Output, context: &str, err: QueryError) -> ExitCode {
    match err {
        QueryError::EmptyQuery => output.error(EMPTY_QUERY_ALERT, ExitCode::InvalidArgs),
        QueryError::EmptyPage(_) => output.error(format!("{}: {}", context, err), ExitCode::NoResults),
        QueryError::Api(_) => output.error(format!("{}: {}", context, err), ExitCode::NetworkError),
    }
}

fn print_rows(rows: &[MovieRow], output: &Output) -> ExitCode {
    if let Err(e) = output.print_list(rows) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd<A: MovieApi, P: PagePicker>(
    client: &QueryClient<A, P>,
    images: &ImageBase,
    cmd: SearchCmd,
    output: &Output,
) -> ExitCode {
    output.info(format!("Searching for: {}", cmd.query));

    match client.search(&cmd.query).await {
        Ok(mut movies) => {
            if movies.is_empty() {
                return output.error(
                    format!("No results found for \"{}\".", cmd.query.trim()),
                    ExitCode::NoResults,
                );
            }
            movies.truncate(cmd.limit);
            let rows: Vec<MovieRow> = movies
                .into_iter()
                .map(|m| MovieRow::new(m, images))
                .collect();
            print_rows(&rows, output)
        }
        Err(e) => failure(output, "Search failed", e),
    }
}

// =============================================================================
// Suggest Command
// =============================================================================

pub async fn suggest_cmd<A: MovieApi, P: PagePicker>(
    client: &QueryClient<A, P>,
    cmd: SuggestCmd,
    output: &Output,
) -> ExitCode {
    match client.suggestions(&cmd.query).await {
        Ok(titles) => {
            if let Err(e) = output.print_list(&titles) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => failure(output, "Suggestions failed", e),
    }
}

// =============================================================================
// Now Playing Command
// =============================================================================

pub async fn now_playing_cmd<A: MovieApi, P: PagePicker>(
    client: &QueryClient<A, P>,
    images: &ImageBase,
    cmd: NowPlayingCmd,
    output: &Output,
) -> ExitCode {
    output.info("Fetching now playing...");

    match client.now_playing().await {
        Ok(mut movies) => {
            movies.truncate(cmd.limit);
            let rows: Vec<MovieRow> = movies
                .into_iter()
                .map(|m| MovieRow::new(m, images))
                .collect();
            print_rows(&rows, output)
        }
        Err(e) => failure(output, "Now playing fetch failed", e),
    }
}

// =============================================================================
// Random & Info Commands
// =============================================================================

pub async fn random_cmd<A: MovieApi, P: PagePicker>(
    client: &QueryClient<A, P>,
    images: &ImageBase,
    _cmd: RandomCmd,
    output: &Output,
) -> ExitCode {
    output.info("Picking a random popular movie...");

    match client.random_movie().await {
        Ok(details) => print_details(details, images, output),
        Err(e) => failure(output, "Random pick failed", e),
    }
}

pub async fn info_cmd<A: MovieApi, P: PagePicker>(
    client: &QueryClient<A, P>,
    images: &ImageBase,
    cmd: InfoCmd,
    output: &Output,
) -> ExitCode {
    output.info(format!("Getting info for: {}", cmd.id));

    match client.hydrate(cmd.id).await {
        Ok(details) => print_details(details, images, output),
        Err(e) => failure(output, "Movie info failed", e),
    }
}

/// Config for a CLI run; an unreadable `--config` is reported as bad arguments
pub fn load_config(path: Option<&Path>, output: &Output) -> Result<Config, ExitCode> {
    Config::resolve(path).map_err(|e| output.error(format!("{:#}", e), ExitCode::InvalidArgs))
}

fn print_details(details: MovieDetails, images: &ImageBase, output: &Output) -> ExitCode {
    let report = DetailsReport::new(details, images);
    if let Err(e) = output.print_item(&report) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}
