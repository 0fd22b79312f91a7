//! Movie list view
//!
//! Shows search results, the no-results message, or the now-playing
//! fallback in the main content area.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::app::{App, InputMode};
use crate::models::Movie;
use crate::store::Listing;
use crate::ui::Theme;

/// Border title for the current listing
pub fn listing_title(listing: Listing<'_>, selected: usize) -> String {
    match listing {
        Listing::SearchResults(movies) => {
            format!(" RESULTS ({}/{}) ", selected + 1, movies.len())
        }
        Listing::NoResults(_) => " RESULTS (0) ".to_string(),
        Listing::NowPlaying(movies) if movies.is_empty() => " NOW PLAYING ".to_string(),
        Listing::NowPlaying(movies) => {
            format!(" NOW PLAYING ({}/{}) ", selected + 1, movies.len())
        }
    }
}

/// Render the listing into `area`
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let listing = app.state.listing();
    let focused = app.input_mode == InputMode::Normal && !app.state.modal.is_open();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        })
        .title(Span::styled(
            listing_title(listing, app.list.selected),
            Theme::title(),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let movies = match listing {
        Listing::NoResults(_) => {
            let message = app.state.no_results_message().unwrap_or_default();
            render_message(frame, inner, message, Theme::secondary());
            return;
        }
        Listing::NowPlaying(movies) if movies.is_empty() => {
            let message = if app.state.is_loading() {
                "⟳ Loading..."
            } else {
                "Nothing playing yet. Press / to search or r for a random pick."
            };
            render_message(frame, inner, message, Theme::dimmed());
            return;
        }
        Listing::SearchResults(movies) | Listing::NowPlaying(movies) => movies,
    };

    let height = inner.height as usize;
    let offset = app.list.offset(height);

    let items: Vec<ListItem> = movies
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, movie)| movie_item(movie, i == app.list.selected))
        .collect();

    frame.render_widget(List::new(items).style(Theme::text()), inner);
}

/// Format: ▸ Title (Year)  overview...
fn movie_item(movie: &Movie, is_selected: bool) -> ListItem<'static> {
    let marker = if is_selected { "▸ " } else { "  " };
    let year_str = movie.year().map(|y| format!(" ({})", y)).unwrap_or_default();

    let mut spans = vec![
        Span::styled(
            marker,
            if is_selected {
                Theme::accent()
            } else {
                Theme::dimmed()
            },
        ),
        Span::styled(
            movie.title.clone(),
            if is_selected {
                Theme::highlighted()
            } else {
                Theme::text()
            },
        ),
        Span::styled(year_str, Theme::year()),
    ];

    if !movie.overview.is_empty() {
        let teaser: String = movie.overview.chars().take(60).collect();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(teaser, Theme::dimmed()));
    }

    ListItem::new(Line::from(spans))
}

fn render_message(frame: &mut Frame, area: Rect, message: impl Into<String>, style: Style) {
    let text = vec![Line::from(""), Line::from(Span::styled(message.into(), style))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
