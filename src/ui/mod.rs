//! Terminal UI components
//!
//! Built with ratatui. Everything renders from an immutable [`App`], so a
//! frame is a pure function of the current state.

pub mod browser;
pub mod detail;
pub mod search;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, InputMode};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Theme::BACKGROUND)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Listing
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let search_area = render_header(frame, chunks[0], app);
    browser::render(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    search::render_suggestions(frame, search_area, app);

    if let Some(details) = app.state.details() {
        detail::render(frame, details, &app.images, app.detail_scroll);
    }

    if let Some(alert) = &app.state.alert {
        render_alert(frame, area, alert);
    }
}

/// Logo plus search box; returns the search box area
fn render_header(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(1)])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled("★ ", Theme::secondary()),
        Span::styled("MARQUEE", Theme::title()),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, header[0]);

    search::render_input(frame, header[1], app);
    header[1]
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " SEARCH ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::ACCENT),
        ),
    };

    let activity = if app.state.is_loading() {
        Span::styled(" ⟳ Loading... ", Theme::loading())
    } else {
        Span::raw("")
    };

    let help = match app.input_mode {
        InputMode::Editing => " ↵:search  ↑↓:suggestions  ESC:done ",
        InputMode::Normal if app.state.modal.is_open() => " ESC:close ",
        InputMode::Normal => " q:quit  /:search  ↵:details  r:random  n:now playing  ESC:clear ",
    };

    let line = Line::from(vec![
        mode,
        activity,
        Span::raw(" │ "),
        Span::styled(help, Theme::dimmed()),
    ]);
    frame.render_widget(Paragraph::new(line).style(Theme::status_bar()), area);
}

fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(area, 60, 5);
    frame.render_widget(Clear, popup);

    let alert = Paragraph::new(vec![
        Line::from(Span::styled(message.to_string(), Theme::error())),
        Line::from(Span::styled("press any key", Theme::dimmed())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Theme::error())
            .title(Span::styled(" ! ", Theme::error()))
            .style(Theme::popup()),
    );
    frame.render_widget(alert, popup);
}

/// Rect of at most `width` x `height` centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
