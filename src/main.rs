use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use rxscope::api;
use rxscope::app::App;
use rxscope::cli::Cli;
use rxscope::config;
use rxscope::dataset::SummaryStore;
use rxscope::suggest::SuggestionIndex;

/// How long to wait for a terminal event before ticking the spinner and
/// draining worker responses
const POLL_INTERVAL_MS: u64 = 100;

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging is compiled in for debug builds only
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    let base_url = cli.base_url.unwrap_or(config.api.base_url);
    let timeout = Duration::from_secs(config.api.timeout_secs);

    let index = match &cli.names {
        Some(path) => SuggestionIndex::from_file(path)?,
        None => SuggestionIndex::bundled()?,
    };
    let summaries = match &cli.data {
        Some(path) => SummaryStore::from_file(path)?,
        None => SummaryStore::bundled()?,
    };

    let mut app = App::new(index, summaries);

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    api::spawn_worker(&base_url, timeout, request_rx, response_tx);
    app.set_channels(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    // ratatui::init() does not enable mouse reporting
    let _ = crossterm::execute!(std::io::stdout(), event::EnableMouseCapture);
    let result = run(terminal, app);
    let _ = crossterm::execute!(std::io::stdout(), event::DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        app.drain_responses();

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            match event::read()? {
                // Only process key press events (avoid duplicates on Windows)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse_event(mouse);
                }
                _ => {}
            }
        } else {
            app.spinner.tick();
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
