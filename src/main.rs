use shopdeck::app::{start_note_feed, App, AppMessage};
use shopdeck::config::{self, AppConfig};
use shopdeck::lifecycle::AppActivityEvent;
use shopdeck::orders::sync::SyncReason;
use shopdeck::ui;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableFocusChange, EnableFocusChange, Event, EventStream, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Handle --version flag before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("shopdeck {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;

    // Logs go to a file; stdout belongs to the TUI.
    init_tracing();

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let config = AppConfig::from_env();
    tracing::info!(
        "Starting shopdeck against {} (site {})",
        config.store_url,
        config.site_id
    );

    // Create Tokio runtime for the entire application
    let runtime = tokio::runtime::Runtime::new()?;

    // Setup terminal. Focus change reporting drives the order list's
    // active/backgrounded tracking.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Initialize application state
    let mut app = App::new(config)?;

    // Start the note feed poller; it publishes store-order notes that the
    // coordinator turns into resync requests.
    let note_feed_handle = runtime.block_on(async {
        start_note_feed(
            Arc::clone(&app.client),
            app.notes_hub.clone(),
            app.config.site_id,
            std::time::Duration::from_secs(app.config.note_poll_secs),
            app.message_sender(),
        )
    });

    // Main event loop
    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    // Restore terminal
    restore_terminal(&mut terminal)?;

    note_feed_handle.abort();

    result
}

/// Route log output to the shopdeck log file.
///
/// `SHOPDECK_LOG` takes an env-filter expression (default `info`). When the
/// log file cannot be opened the app runs without logging rather than
/// writing over the TUI.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let log_path = config::log_file_path();
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter =
        EnvFilter::try_from_env("SHOPDECK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableFocusChange, LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);

        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    // First sync happens as if the orders screen had just been opened.
    app.resync_orders(SyncReason::ViewOpened);

    loop {
        // Draw the UI only when needed (dirty flag)
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, app);
            })?;
            app.needs_redraw = false;
        }

        // Poll keyboard events and the message channel using tokio::select!
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            // Tick for animations
            _ = timeout => {
                app.tick();
            }

            // Handle terminal events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::FocusLost => {
                            app.activity.post(AppActivityEvent::WillResignActive);
                        }
                        Event::FocusGained => {
                            app.activity.post(AppActivityEvent::DidBecomeActive);
                            app.mark_dirty();
                        }
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            match key.code {
                                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                    app.quit();
                                    return Ok(());
                                }
                                KeyCode::Char('q') => {
                                    app.quit();
                                    return Ok(());
                                }
                                KeyCode::Char('r') => {
                                    app.resync_orders(SyncReason::PullToRefresh);
                                }
                                KeyCode::Tab => {
                                    app.next_screen();
                                }
                                KeyCode::Char('1') => {
                                    app.show_orders();
                                }
                                KeyCode::Char('2') => {
                                    app.show_product_settings();
                                }
                                _ => {}
                            }
                        }
                        _ => {
                            // Ignore other events
                        }
                    }
                }
            }

            // Handle async messages from syncs and the note feed
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
