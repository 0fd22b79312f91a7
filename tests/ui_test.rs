//! UI rendering tests
//!
//! Renders the full screen into a TestBackend and checks what a user would
//! see: listings, the no-results message, suggestions, the detail modal and
//! the empty-search alert.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use marquee::app::App;
use marquee::models::{CastMember, Movie, MovieDetails};
use marquee::store::{Action, EMPTY_QUERY_ALERT};
use marquee::ui;
use ratatui::{backend::TestBackend, Terminal};

fn movie(id: u64, title: &str, date: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        poster_path: None,
        release_date: date.to_string(),
        overview: String::new(),
    }
}

/// Render the app and return the screen as text, one line per row
fn draw(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::empty()));
}

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_renders_at_minimum_and_large_sizes() {
    let mut app = App::new();
    app.dispatch(Action::NowPlayingLoaded(vec![movie(1, "Heat", "1995-12-15")]));

    for (w, h) in [(80, 24), (200, 50), (20, 6)] {
        let screen = draw(&app, w, h);
        assert_eq!(screen.lines().count(), h as usize);
    }
}

#[test]
fn test_now_playing_listing() {
    let mut app = App::new();
    app.dispatch(Action::NowPlayingLoaded(vec![
        movie(1, "Heat", "1995-12-15"),
        movie(2, "Alien", "1979-05-25"),
    ]));

    let screen = draw(&app, 80, 24);
    assert!(screen.contains("MARQUEE"));
    assert!(screen.contains("NOW PLAYING (1/2)"));
    assert!(screen.contains("Heat (1995)"));
    assert!(screen.contains("Alien (1979)"));
    assert!(screen.contains("NORMAL"));
}

#[test]
fn test_search_results_and_no_results() {
    let mut app = App::new();
    app.dispatch(Action::SearchCompleted {
        query: "Inception".into(),
        movies: vec![movie(27205, "Inception", "2010-07-15")],
    });
    let screen = draw(&app, 80, 24);
    assert!(screen.contains("RESULTS (1/1)"));
    assert!(screen.contains("Inception (2010)"));

    app.dispatch(Action::SearchCompleted {
        query: "zzzznomatch".into(),
        movies: vec![],
    });
    let screen = draw(&app, 80, 24);
    assert!(screen.contains("No results found for \"zzzznomatch\"."));
}

#[test]
fn test_loading_indicator() {
    let mut app = App::new();
    app.dispatch(Action::RandomRequested);
    assert!(draw(&app, 80, 24).contains("Loading"));

    app.dispatch(Action::DetailsFailed {
        error: "offline".into(),
    });
    assert!(!draw(&app, 80, 24).contains("Loading"));
}

// =============================================================================
// Search box
// =============================================================================

#[test]
fn test_suggestions_dropdown_while_editing() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('/'));
    for c in "inc".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let seq = app.state.suggestion_seq();
    app.dispatch(Action::SuggestionsLoaded {
        seq,
        titles: vec!["Inception".into(), "Incendies".into()],
    });

    let screen = draw(&app, 80, 24);
    assert!(screen.contains("inc│"));
    assert!(screen.contains("Inception"));
    assert!(screen.contains("Incendies"));

    // Leaving the search box hides the dropdown
    press(&mut app, KeyCode::Esc);
    assert!(!draw(&app, 80, 24).contains("Incendies"));
}

#[test]
fn test_empty_search_alert() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Enter);

    let screen = draw(&app, 100, 30);
    assert!(screen.contains(EMPTY_QUERY_ALERT));

    press(&mut app, KeyCode::Char(' '));
    assert!(!draw(&app, 100, 30).contains(EMPTY_QUERY_ALERT));
}

// =============================================================================
// Detail modal
// =============================================================================

fn inception_details() -> MovieDetails {
    let cast = [
        ("Leonardo DiCaprio", "Cobb"),
        ("Joseph Gordon-Levitt", "Arthur"),
        ("Ken Watanabe", "Saito"),
        ("Tom Hardy", "Eames"),
        ("Elliot Page", "Ariadne"),
    ];
    MovieDetails {
        id: 27205,
        title: "Inception".into(),
        poster_path: Some("/inception.jpg".into()),
        release_date: "2010-07-15".into(),
        overview: "Cobb, a skilled thief who commits corporate espionage by infiltrating \
                   the subconscious of his targets is offered a chance to regain his old \
                   life as payment for a task considered to be impossible: \"inception\", \
                   the implantation of another person's idea into a target's subconscious."
            .into(),
        budget: 160_000_000,
        revenue: 825_532_764,
        runtime: 148,
        director: "Christopher Nolan".into(),
        production_companies: vec!["Legendary Pictures".into(), "Syncopy".into()],
        videos: vec![],
        cast: cast
            .iter()
            .enumerate()
            .map(|(i, (name, character))| CastMember {
                id: i as u64,
                name: name.to_string(),
                character: character.to_string(),
                profile_path: None,
            })
            .collect(),
    }
}

#[test]
fn test_detail_modal() {
    let mut app = App::new();
    app.dispatch(Action::DetailsLoaded(Box::new(inception_details())));

    let screen = draw(&app, 120, 40);
    assert!(screen.contains("DETAILS"));
    assert!(screen.contains("Christopher Nolan"));
    assert!(screen.contains("$160,000,000"));
    assert!(screen.contains("2h 28m"));
    assert!(screen.contains("Leonardo DiCaprio"));

    press(&mut app, KeyCode::Esc);
    assert!(!draw(&app, 120, 40).contains("Christopher Nolan"));
}

#[test]
fn test_detail_modal_shows_full_cast_at_80x24() {
    let mut app = App::new();
    app.dispatch(Action::DetailsLoaded(Box::new(inception_details())));

    let screen = draw(&app, 80, 24);
    assert!(screen.contains("Christopher Nolan"));
    for name in [
        "Leonardo DiCaprio",
        "Joseph Gordon-Levitt",
        "Ken Watanabe",
        "Tom Hardy",
        "Elliot Page",
    ] {
        assert!(screen.contains(name), "{} missing from:\n{}", name, screen);
    }
}

#[test]
fn test_detail_modal_scrolls_to_links() {
    let mut app = App::new();
    app.dispatch(Action::DetailsLoaded(Box::new(inception_details())));
    assert!(!draw(&app, 80, 24).contains("/inception.jpg"));

    press(&mut app, KeyCode::PageDown);
    let screen = draw(&app, 80, 24);
    assert!(screen.contains("https://image.tmdb.org/t/p/w500/inception.jpg"));
    assert!(!screen.contains("Christopher Nolan"));

    press(&mut app, KeyCode::Home);
    assert!(draw(&app, 80, 24).contains("Christopher Nolan"));
}
