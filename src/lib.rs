pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod render;
pub mod terrain;
pub mod ui;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use app::events::{AppEvent, input_event, spawn_input_task};
use app::state::{AppMode, AppState};
use cli::Cli;
use config::SceneConfig;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

/// Terminal size assumed for `--one-shot` when stdout is not a terminal.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;
    let config = cli
        .config
        .as_deref()
        .map(SceneConfig::load)
        .transpose()?;

    if cli.one_shot {
        return run_one_shot(&cli, config.as_ref());
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &cli, config.as_ref()).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    cli: &Cli,
    config: Option<&SceneConfig>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);

    let size = terminal.size()?;
    let (width, height) = ui::framebuffer_size(size.width, size.height);
    let mut app = AppState::new(cli, config, width, height)?;
    log::info!("starting with a {width}x{height} framebuffer");

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                app.handle_event(input_event(maybe_input), &tx, cli)?;
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx, cli)?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    log::info!("exiting after {} frames", app.frame_tick);
    Ok(())
}

/// Renders a single frame as ANSI true color to stdout.
fn run_one_shot(cli: &Cli, config: Option<&SceneConfig>) -> Result<()> {
    let (columns, rows) = match (cli.width, cli.height) {
        (Some(columns), Some(rows)) => (columns, rows),
        (columns, rows) => {
            let (term_columns, term_rows) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
            (
                columns.unwrap_or(term_columns),
                rows.unwrap_or(term_rows.saturating_sub(1).max(1)),
            )
        }
    };

    let state = AppState::new(cli, config, usize::from(columns), usize::from(rows) * 2)?;
    let mut stdout = io::stdout().lock();
    ui::ansi::write_frame(&mut stdout, state.framebuffer()).context("writing frame failed")
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        existing(panic);
    }));
}
