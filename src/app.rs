//! App state and core application logic
//!
//! Wraps the query state with the screen-only bits (input mode, cursor,
//! list selection) and maps key presses onto store actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::ImageBase;
use crate::store::{reduce, Action, Effect, QueryState};
use crate::ui::detail::detail_lines;

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// List navigation
    #[default]
    Normal,
    /// Search box focused
    Editing,
}

// =============================================================================
// Selection State
// =============================================================================

/// Selection within a list of `len` items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListState {
    pub selected: usize,
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }

    /// Update length, clamping the selection into range
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// First row to draw so the selection stays inside `height` rows
    pub fn offset(&self, height: usize) -> usize {
        if height == 0 {
            return self.selected;
        }
        (self.selected + 1).saturating_sub(height)
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    pub state: QueryState,
    pub running: bool,
    pub input_mode: InputMode,
    /// Cursor position in the query, counted in chars
    pub cursor: usize,
    /// Selection in the visible movie list
    pub list: ListState,
    /// Highlighted suggestion while editing
    pub suggestion: Option<usize>,
    /// Where poster and profile URLs point
    pub images: ImageBase,
    /// Rows scrolled off the top of the detail modal
    pub detail_scroll: u16,
}

impl Default for App {
    fn default() -> Self {
        Self {
            state: QueryState::new(),
            running: true,
            input_mode: InputMode::Normal,
            cursor: 0,
            list: ListState::default(),
            suggestion: None,
            images: ImageBase::default(),
            detail_scroll: 0,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_images(images: ImageBase) -> Self {
        Self {
            images,
            ..Self::default()
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Feed an action through the reducer and resync screen-only state
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let reset_selection = matches!(
            action,
            Action::SearchCompleted { .. } | Action::SearchCleared
        );
        let reset_scroll = matches!(action, Action::DetailsLoaded(_) | Action::ModalClosed);
        let effects = reduce(&mut self.state, action);

        if reset_selection {
            self.list.first();
        }
        if reset_scroll {
            self.detail_scroll = 0;
        }
        self.list.set_len(self.state.visible_movies().len());

        let suggestions = self.state.suggestions.len();
        self.suggestion = self.suggestion.filter(|&i| i < suggestions);
        self.cursor = self.cursor.min(self.state.query.chars().count());

        effects
    }

    pub fn focus_search(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor = self.state.query.chars().count();
    }

    /// Movie under the list cursor
    pub fn selected_movie_id(&self) -> Option<u64> {
        self.state
            .visible_movies()
            .get(self.list.selected)
            .map(|m| m.id)
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a key press, returning the network work it triggered
    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return Vec::new();
        }

        // Alert swallows the key that dismisses it
        if self.state.alert.is_some() {
            return self.dispatch(Action::AlertDismissed);
        }

        if self.state.modal.is_open() {
            return self.handle_modal_key(key);
        }

        match self.input_mode {
            InputMode::Editing => self.handle_editing_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                return self.dispatch(Action::ModalClosed);
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll_detail(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_detail(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_detail(10),
            KeyCode::PageUp => self.scroll_detail(-10),
            KeyCode::Home | KeyCode::Char('g') => self.detail_scroll = 0,
            KeyCode::End | KeyCode::Char('G') => self.scroll_detail(isize::MAX),
            _ => {}
        }
        Vec::new()
    }

    /// Move the modal content by `delta` rows, keeping at least one line on screen
    fn scroll_detail(&mut self, delta: isize) {
        let Some(details) = self.state.details() else {
            return;
        };
        let max = detail_lines(details, &self.images).len().saturating_sub(1);
        let next = (self.detail_scroll as isize).saturating_add(delta).clamp(0, max as isize);
        self.detail_scroll = u16::try_from(next).unwrap_or(u16::MAX);
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.suggestion = None;
                Vec::new()
            }
            KeyCode::Enter => {
                let mut effects = Vec::new();
                let chosen = self
                    .suggestion
                    .take()
                    .and_then(|i| self.state.suggestions.get(i).cloned());
                if let Some(title) = chosen {
                    effects.extend(self.dispatch(Action::SuggestionChosen(title)));
                    self.cursor = self.state.query.chars().count();
                }
                effects.extend(self.dispatch(Action::SearchSubmitted));
                if self.state.alert.is_none() {
                    self.input_mode = InputMode::Normal;
                }
                effects
            }
            KeyCode::Down | KeyCode::Tab => {
                let len = self.state.suggestions.len();
                if len > 0 {
                    self.suggestion = Some(match self.suggestion {
                        Some(i) if i + 1 < len => i + 1,
                        Some(i) => i,
                        None => 0,
                    });
                }
                Vec::new()
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.suggestion = match self.suggestion {
                    Some(0) | None => None,
                    Some(i) => Some(i - 1),
                };
                Vec::new()
            }
            KeyCode::Char(c) => self.edit(|query, cursor| {
                query.insert(byte_index(query, cursor), c);
                cursor + 1
            }),
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return Vec::new();
                }
                self.edit(|query, cursor| {
                    query.remove(byte_index(query, cursor - 1));
                    cursor - 1
                })
            }
            KeyCode::Delete => {
                if self.cursor >= self.state.query.chars().count() {
                    return Vec::new();
                }
                self.edit(|query, cursor| {
                    query.remove(byte_index(query, cursor));
                    cursor
                })
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Vec::new()
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.state.query.chars().count());
                Vec::new()
            }
            KeyCode::Home => {
                self.cursor = 0;
                Vec::new()
            }
            KeyCode::End => {
                self.cursor = self.state.query.chars().count();
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Apply a text edit at the cursor and report it as a query change
    fn edit(&mut self, f: impl FnOnce(&mut String, usize) -> usize) -> Vec<Effect> {
        let mut query = self.state.query.clone();
        let cursor = f(&mut query, self.cursor);
        self.suggestion = None;
        let effects = self.dispatch(Action::QueryChanged(query));
        self.cursor = cursor;
        effects
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                Vec::new()
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.focus_search();
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.list.up();
                Vec::new()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.list.down();
                Vec::new()
            }
            KeyCode::PageUp => {
                self.list.page_up(10);
                Vec::new()
            }
            KeyCode::PageDown => {
                self.list.page_down(10);
                Vec::new()
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.list.first();
                Vec::new()
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.list.last();
                Vec::new()
            }
            KeyCode::Enter => match self.selected_movie_id() {
                Some(id) => self.dispatch(Action::MovieSelected(id)),
                None => Vec::new(),
            },
            KeyCode::Char('r') => self.dispatch(Action::RandomRequested),
            KeyCode::Char('n') => self.dispatch(Action::NowPlayingRequested),
            KeyCode::Esc => self.dispatch(Action::SearchCleared),
            _ => Vec::new(),
        }
    }
}

/// Byte offset of the `chars`-th char, or the end of the string
fn byte_index(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map(|(i, _)| i).unwrap_or(s.len())
}

// =============================================================================
// Unit Tests
// =============================================================================
