use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

mod app;
mod chat;
mod cli;
mod compat;
mod journey;
mod models;
mod registration;
mod store;
mod theme;
mod ui;
mod utils;

use app::App;
use store::Store;

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;

    // Evaluation tasks spawn onto this runtime from the sync event loop
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let store = Store::default_path()
        .map(Store::open)
        .unwrap_or_else(Store::ephemeral);
    let mut app = App::new(&config, store, Instant::now());

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    // Deferred warnings now that the alternate screen is gone
    if let Some(error) = app.store.take_write_error() {
        eprintln!("Warning: failed to save portal state: {}", error);
    }
    if let Some(error) = app.evaluation.last_error.take() {
        eprintln!("Warning: license compatibility evaluation failed: {}", error);
    }

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key, Instant::now());
                }
            }
        }

        app.on_tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
