//! Search box and suggestion dropdown

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

use crate::app::{App, InputMode};
use crate::ui::Theme;

/// Most suggestions shown at once
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;

/// Query text with a bar at the char cursor
pub fn with_cursor(query: &str, cursor: usize) -> String {
    let split = query
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(query.len());
    let (before, after) = query.split_at(split);
    format!("{}│{}", before, after)
}

pub fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Editing;
    let query = &app.state.query;

    let text = if editing {
        format!("⌕ {}", with_cursor(query, app.cursor))
    } else if query.is_empty() {
        "⌕ Type / to search...".to_string()
    } else {
        format!("⌕ {}", query)
    };

    let input = Paragraph::new(text)
        .style(if editing {
            Theme::input().fg(Theme::PRIMARY)
        } else {
            Theme::input()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if editing {
                    Theme::border_focused()
                } else {
                    Theme::border()
                })
                .title(Span::styled(" SEARCH ", Theme::title())),
        );
    frame.render_widget(input, area);
}

/// Dropdown under the search box; drawn only while editing
pub fn render_suggestions(frame: &mut Frame, below: Rect, app: &App) {
    let suggestions = &app.state.suggestions;
    if app.input_mode != InputMode::Editing || suggestions.is_empty() {
        return;
    }

    let area = frame.area();
    let rows = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS) as u16;
    let y = below.y + below.height;
    let popup = Rect {
        x: below.x,
        y,
        width: below.width,
        height: (rows + 2).min(area.height.saturating_sub(y)),
    };
    if popup.height < 3 {
        return;
    }

    let items: Vec<ListItem> = suggestions
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .enumerate()
        .map(|(i, title)| {
            let style = if app.suggestion == Some(i) {
                Theme::highlighted()
            } else {
                Theme::popup()
            };
            ListItem::new(Span::styled(format!(" {} ", title), style))
        })
        .collect();

    frame.render_widget(Clear, popup);
    frame.render_widget(
        List::new(items).style(Theme::popup()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Theme::border())
                .title(Span::styled(" ↑↓ suggestions ", Theme::dimmed())),
        ),
        popup,
    );
}
