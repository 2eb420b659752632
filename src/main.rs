use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use salescope::ai::spawn_worker;
use salescope::app::App;
use salescope::config;

/// How long the event loop waits for input before processing timers and
/// worker responses
const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Parser)]
#[command(name = "salescope", version, about = "Terminal sales-research assistant")]
struct Cli {
    /// Path to a config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the lookup debounce window in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Gemini API key (overrides config file and GEMINI_API_KEY)
    #[arg(long)]
    api_key: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging is only active in debug builds; redirect stderr to capture it
    #[cfg(debug_assertions)]
    let _ = env_logger::try_init();

    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(debounce_ms) = cli.debounce_ms {
        config.lookup.debounce_ms = debounce_ms;
    }
    if let Some(api_key) = cli.api_key {
        config.gemini.api_key = Some(api_key);
    }

    // Wire up the AI worker thread
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(&config.gemini, request_rx, response_tx);

    let mut app = App::new(config);
    app.set_channels(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let _ = crossterm::execute!(std::io::stdout(), EnableMouseCapture);

    let result = run(terminal, app);

    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Poll with a timeout so debounce deadlines and worker responses are
        // processed even while the keyboard is idle
        if event::poll(TICK_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                }
                Event::Mouse(mouse) => app.handle_mouse_event(mouse),
                _ => {}
            }
        }

        app.on_tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
