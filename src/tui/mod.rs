//! Terminal UI for Strictly Trivia.

mod app;
mod ui;

pub use app::{AppCommand, CORRECT_FEEDBACK, Status, TriviaApp};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tokio::time::{Duration, Instant};
use tracing::{error, info, instrument};

use crate::config::GameConfig;
use crate::trivia::{CategoryProvider, HttpCategorySource, TriviaGame};

/// Runs the TUI against the configured category API.
#[instrument(skip(config), fields(api_base_url = %config.api_base_url()))]
pub async fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting Strictly Trivia TUI");

    let source = HttpCategorySource::new(config.api_base_url());
    let provider = CategoryProvider::new(source, config.board_shape(), *config.listing_count());
    let mut app = TriviaApp::new(TriviaGame::new(provider, config.result_delay()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut TriviaApp<HttpCategorySource>,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app))?;

        // Short poll timeout keeps the scheduled dismissal responsive.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match app.handle_key(key) {
                AppCommand::None => {}
                AppCommand::Quit => {
                    info!("Quit requested");
                    return Ok(());
                }
                AppCommand::NewGame => {
                    app.begin_loading();
                    terminal.draw(|f| ui::draw(f, app))?;
                    app.new_game().await;
                }
            }
        }
    }
}
