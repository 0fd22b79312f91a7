//! Marquee - terminal movie browser backed by TMDB
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! marquee
//!
//! # CLI mode (for automation)
//! marquee search "blade runner"
//! marquee info 78 --json
//! ```

use std::io::{stdout, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use marquee::api::TmdbClient;
use marquee::app::App;
use marquee::cli::{Cli, Command, ExitCode, Output};
use marquee::config::Config;
use marquee::models::ImageBase;
use marquee::query::QueryClient;
use marquee::store::{Action, Effect};
use marquee::{commands, logging, ui};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

type Client = Arc<QueryClient<TmdbClient>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli).await;
        std::process::exit(exit_code.into());
    }

    let config = Config::resolve(cli.config.as_deref())?;
    let _guard = logging::init_file(&config);
    let api_key = config.api_key(cli.api_key.as_deref())?;
    let client = Arc::new(QueryClient::new(config.tmdb_client(api_key)));
    run_tui(client, config.images()).await
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    let config = match commands::load_config(cli.config.as_deref(), &output) {
        Ok(config) => config,
        Err(code) => return code,
    };
    logging::init_stderr(&config, cli.quiet);

    let api_key = match config.api_key(cli.api_key.as_deref()) {
        Ok(key) => key,
        Err(e) => return output.error(e.to_string(), ExitCode::InvalidArgs),
    };
    let client = QueryClient::new(config.tmdb_client(api_key));
    let images = config.images();

    match cli.command {
        Some(Command::Search(cmd)) => commands::search_cmd(&client, &images, cmd, &output).await,
        Some(Command::Suggest(cmd)) => commands::suggest_cmd(&client, cmd, &output).await,
        Some(Command::NowPlaying(cmd)) => {
            commands::now_playing_cmd(&client, &images, cmd, &output).await
        }
        Some(Command::Random(cmd)) => commands::random_cmd(&client, &images, cmd, &output).await,
        Some(Command::Info(cmd)) => commands::info_cmd(&client, &images, cmd, &output).await,
        // Handled by the is_cli_mode check
        None => ExitCode::Success,
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_tui(client: Client, images: ImageBase) -> Result<()> {
    info!("starting TUI");
    let mut terminal = init_terminal()?;
    let mut app = App::with_images(images);

    let result = run_event_loop(&mut terminal, &mut app, client).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;
    info!("TUI closed");

    result
}

/// Run each effect on its own task; completions come back over `tx`
fn spawn_effects(client: &Client, tx: &UnboundedSender<Action>, effects: Vec<Effect>) {
    for effect in effects {
        debug!(?effect, "spawning effect");
        let client = Arc::clone(client);
        let tx = tx.clone();
        tokio::spawn(async move {
            let action = client.run(effect).await;
            // Receiver is gone once the UI has quit
            let _ = tx.send(action);
        });
    }
}

/// Apply every completion that has arrived since the last frame
fn drain_completions(
    app: &mut App,
    client: &Client,
    tx: &UnboundedSender<Action>,
    rx: &mut UnboundedReceiver<Action>,
) {
    while let Ok(action) = rx.try_recv() {
        let effects = app.dispatch(action);
        spawn_effects(client, tx, effects);
    }
}

/// Main event loop - handles input, applies completions, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App, client: Client) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(50);

    let (tx, mut rx) = mpsc::unbounded_channel();

    let effects = app.dispatch(Action::NowPlayingRequested);
    spawn_effects(&client, &tx, effects);

    while app.running {
        drain_completions(app, &client, &tx, &mut rx);

        terminal.draw(|frame| ui::render(frame, app))?;

        // Blocking poll, kept off the async worker
        if tokio::task::block_in_place(|| event::poll(TICK_RATE))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    let effects = app.handle_key(key);
                    spawn_effects(&client, &tx, effects);
                }
            }
        }
    }

    Ok(())
}
