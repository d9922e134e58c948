use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use miette::{IntoDiagnostic, Result};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use lore_engine_tui::config::AppConfig;
use lore_engine_tui::core::logging;
use lore_engine_tui::tui::{services::Services, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // File-only logging: stdout belongs to the terminal UI.
    let _log_guard = logging::init_tui();
    log::info!("{} v{} starting", lore_engine_tui::NAME, lore_engine_tui::VERSION);

    let config = AppConfig::load();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let services = Services::init(&config, event_tx)?;
    let mut app = AppState::new(event_rx, services, config.tui.clone());

    // Setup terminal
    enable_raw_mode().into_diagnostic()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).into_diagnostic()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).into_diagnostic()?;

    // Run the app
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode().into_diagnostic()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).into_diagnostic()?;
    terminal.show_cursor().into_diagnostic()?;

    log::info!("Shutting down");
    result.into_diagnostic()
}
