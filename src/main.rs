//! FlickTUI binary: CLI dispatch and the interactive event loop
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! flicktui
//!
//! # CLI mode (for automation)
//! flicktui page --window week --json
//! flicktui search "dune"
//! flicktui info 550 --json
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use flicktui::app::{Action, App, DataEvent};
use flicktui::cli::{Cli, Command, ExitCode, Output};
use flicktui::commands;
use flicktui::config::Config;
use flicktui::{ui, CatalogClient};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    if cli.is_cli_mode() {
        let exit_code = run_cli(cli, &config).await;
        std::process::exit(exit_code.into());
    } else {
        run_tui(&config).await
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, config: &Config) -> ExitCode {
    let output = Output::new(&cli);

    match cli.command {
        Some(Command::Page(cmd)) => commands::page_cmd(cmd, &output, config).await,
        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &output, config).await,
        Some(Command::Info(cmd)) => commands::info_cmd(cmd, &output, config).await,
        Some(Command::Resolve(cmd)) => commands::resolve_cmd(cmd, &output),
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
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(config: &Config) -> Result<()> {
    let client = CatalogClient::new(config.api_base_url(), config.api_key());

    let mut terminal = init_terminal()?;
    let mut app = App::new(config);

    let result = run_event_loop(&mut terminal, &mut app, client, config).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    // Remember the trending window for the next launch, best effort
    if config.time_window != Some(app.home.window) {
        let mut updated = config.clone();
        updated.time_window = Some(app.home.window);
        let _ = updated.save();
    }

    result
}

/// Main event loop: draw, handle input, dispatch async work, absorb results
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    client: CatalogClient,
    config: &Config,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    let (tx, mut rx) = mpsc::unbounded_channel::<DataEvent>();

    // Initial page load
    dispatch(Action::LoadPage(app.home.window), &client, &tx, config);

    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = app.handle_key(key) {
                        dispatch(action, &client, &tx, config);
                    }
                }
            }
        }

        while let Ok(data) = rx.try_recv() {
            app.apply_event(data);
        }
    }

    Ok(())
}

/// Spawn the async work an [`Action`] asks for
fn dispatch(
    action: Action,
    client: &CatalogClient,
    tx: &mpsc::UnboundedSender<DataEvent>,
    config: &Config,
) {
    match action {
        Action::LoadPage(window) => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client.page(window).await.map_err(|e| e.to_string());
                let _ = tx.send(DataEvent::Page(result));
            });
        }
        Action::LoadWatch(id) => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client.movie(&id).await.map_err(|e| e.to_string());
                let _ = tx.send(DataEvent::Movie(result));
            });
        }
        Action::Search(query) => {
            let client = client.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = client.search(&query).await.map_err(|e| e.to_string());
                let _ = tx.send(DataEvent::SearchResults(result));
            });
        }
        Action::OpenUrl(url) => open_in_browser(&url, config),
    }
}

/// Hand a URL to the configured browser, falling back to the platform opener
fn open_in_browser(url: &str, config: &Config) {
    let command = config
        .browser_command()
        .unwrap_or_else(|| default_opener().to_string());
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return;
    };
    let _ = std::process::Command::new(program)
        .args(parts)
        .arg(url)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn();
}

fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}
