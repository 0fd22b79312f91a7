//! Data structures and types for Marquee
//!
//! Contains all shared models used across the application:
//! - **Listings**: movie summaries from search, now playing and popular
//! - **Details**: hydrated movie details with credits and videos
//! - **Images**: poster/profile URL construction against the image CDN

use serde::{Deserialize, Serialize};
use std::fmt;

/// Director shown when the crew list has no "Director" entry
pub const UNKNOWN_DIRECTOR: &str = "Unknown";

/// Maximum number of cast members exposed to the UI
pub const MAX_CAST: usize = 5;

/// TMDB image CDN base (w500 rendition)
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Substituted whenever a poster or profile path is missing
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100x150";

// =============================================================================
// Listing Models
// =============================================================================

/// Movie summary as returned by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: String,
    pub overview: String,
}

impl Movie {
    /// Release year, if the release date carries one
    pub fn year(&self) -> Option<u16> {
        extract_year(&self.release_date)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year_str = self.year().map(|y| format!(" ({})", y)).unwrap_or_default();
        write!(f, "{}{}", self.title, year_str)
    }
}

// =============================================================================
// Detail Models
// =============================================================================

/// Cast entry from the credits expansion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: String,
    pub profile_path: Option<String>,
}

impl fmt::Display for CastMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.character.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} as {}", self.name, self.character)
        }
    }
}

/// Crew entry; only the fields needed to derive the director
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewMember {
    pub job: String,
    pub name: String,
}

/// Video entry from the videos expansion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub key: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

impl Video {
    /// Only YouTube entries can be turned into a watch URL
    pub fn is_playable(&self) -> bool {
        self.site.eq_ignore_ascii_case("youtube")
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.key)
    }
}

/// Fully hydrated movie: summary fields plus financials, credits and videos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    pub release_date: String,
    pub overview: String,
    pub budget: u64,
    pub revenue: u64,
    pub runtime: u32,
    pub director: String,
    pub production_companies: Vec<String>,
    pub videos: Vec<Video>,
    /// Top-billed cast, never more than [`MAX_CAST`] entries
    pub cast: Vec<CastMember>,
}

impl MovieDetails {
    pub fn year(&self) -> Option<u16> {
        extract_year(&self.release_date)
    }

    /// First playable video, preferring official trailers
    pub fn trailer(&self) -> Option<&Video> {
        self.videos
            .iter()
            .find(|v| v.is_playable() && v.kind == "Trailer")
            .or_else(|| self.videos.iter().find(|v| v.is_playable()))
    }

    pub fn trailer_url(&self) -> Option<String> {
        self.trailer().map(Video::watch_url)
    }

    /// Summary view of this movie
    pub fn summary(&self) -> Movie {
        Movie {
            id: self.id,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            release_date: self.release_date.clone(),
            overview: self.overview.clone(),
        }
    }
}

impl fmt::Display for MovieDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year_str = self.year().map(|y| format!(" ({})", y)).unwrap_or_default();
        write!(
            f,
            "{}{} - dir. {} - {}",
            self.title,
            year_str,
            self.director,
            format_runtime(self.runtime)
        )
    }
}

// =============================================================================
// Derivations
// =============================================================================

/// Name of the first crew member whose job is exactly "Director"
pub fn find_director(crew: &[CrewMember]) -> String {
    crew.iter()
        .find(|c| c.job == "Director")
        .map(|c| c.name.clone())
        .unwrap_or_else(|| UNKNOWN_DIRECTOR.to_string())
}

/// Keep the first [`MAX_CAST`] entries in API billing order
pub fn top_cast(mut cast: Vec<CastMember>) -> Vec<CastMember> {
    cast.truncate(MAX_CAST);
    cast
}

/// Extract year from a date string like "2010-07-15"
pub fn extract_year(date: &str) -> Option<u16> {
    date.get(..4).and_then(|y| y.parse().ok())
}

/// Format minutes as "2h 28m"; zero means the API had no runtime
pub fn format_runtime(minutes: u32) -> String {
    if minutes == 0 {
        return "runtime n/a".to_string();
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours == 0 {
        format!("{}m", mins)
    } else {
        format!("{}h {}m", hours, mins)
    }
}

/// Format a dollar amount with thousands separators; zero is unreported
pub fn format_money(amount: u64) -> String {
    if amount == 0 {
        return "n/a".to_string();
    }
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Images
// =============================================================================

/// Image CDN location plus the placeholder used for missing paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBase {
    pub base_url: String,
    pub placeholder: String,
}

impl Default for ImageBase {
    fn default() -> Self {
        Self {
            base_url: IMAGE_BASE_URL.to_string(),
            placeholder: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl ImageBase {
    pub fn new(base_url: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            placeholder: placeholder.into(),
        }
    }

    /// Join a path fragment ("/abc.jpg") onto the CDN base
    pub fn url(&self, path: Option<&str>) -> String {
        match path {
            Some(p) if !p.is_empty() => {
                format!("{}{}", self.base_url.trim_end_matches('/'), p)
            }
            _ => self.placeholder.clone(),
        }
    }

    pub fn poster(&self, movie: &Movie) -> String {
        self.url(movie.poster_path.as_deref())
    }

    pub fn profile(&self, member: &CastMember) -> String {
        self.url(member.profile_path.as_deref())
    }
}
