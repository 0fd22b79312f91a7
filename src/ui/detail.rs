//! Detail modal
//!
//! Centered popup over the listing with the hydrated movie: director,
//! financials, studios, trailer link, poster URL and top cast.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::models::{format_money, format_runtime, ImageBase, MovieDetails};
use crate::ui::{centered_rect, Theme};

/// Lines shown inside the modal
pub fn detail_lines(details: &MovieDetails, images: &ImageBase) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let year_str = details.year().map(|y| format!(" ({})", y)).unwrap_or_default();
    lines.push(Line::from(vec![
        Span::styled("▶ ", Theme::accent()),
        Span::styled(details.title.clone(), Theme::title()),
        Span::styled(year_str, Theme::year()),
    ]));
    lines.push(Line::from(""));

    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), Theme::label()),
            Span::styled(value, Theme::text()),
        ])
    };

    lines.push(field("Director", details.director.clone()));
    lines.push(field("Released", details.release_date.clone()));
    lines.push(field("Runtime", format_runtime(details.runtime)));
    lines.push(field("Budget", format_money(details.budget)));
    lines.push(field("Revenue", format_money(details.revenue)));
    if !details.production_companies.is_empty() {
        lines.push(field("Studios", details.production_companies.join(", ")));
    }

    if !details.cast.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("CAST", Theme::accent())));
        for member in &details.cast {
            let mut spans = vec![
                Span::styled("  • ", Theme::dimmed()),
                Span::styled(member.name.clone(), Theme::text()),
            ];
            if !member.character.is_empty() {
                spans.push(Span::styled(format!(" as {}", member.character), Theme::secondary()));
            }
            lines.push(Line::from(spans));
        }
    }

    if !details.overview.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(details.overview.clone(), Theme::text())));
    }

    lines.push(Line::from(""));
    lines.push(field(
        "Trailer",
        details
            .trailer_url()
            .unwrap_or_else(|| "none".to_string()),
    ));
    lines.push(field("Poster", images.url(details.poster_path.as_deref())));

    if !details.cast.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("PROFILES", Theme::accent())));
        for member in &details.cast {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", member.name), Theme::text()),
                Span::styled(images.profile(member), Theme::dimmed()),
            ]));
        }
    }

    lines
}

/// Draw the modal with its content scrolled down by `scroll` rows
pub fn render(frame: &mut Frame, details: &MovieDetails, images: &ImageBase, scroll: u16) {
    let area = centered_rect(frame.area(), 80, 28);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Theme::border_focused())
        .title(Span::styled(" DETAILS ", Theme::title()))
        .title_bottom(Line::from(vec![
            Span::styled(" j/k ", Theme::keybind()),
            Span::styled("scroll ", Theme::dimmed()),
            Span::styled(" ESC ", Theme::keybind()),
            Span::styled("close ", Theme::dimmed()),
        ]))
        .style(Theme::popup());

    let paragraph = Paragraph::new(Text::from(detail_lines(details, images)))
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(block);

    frame.render_widget(paragraph, area);
}
