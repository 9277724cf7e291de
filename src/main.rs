//! Resttest - pick an endpoint, fire it, read the answer
//!
//! Input, transport outcomes and spinner ticks all feed one event queue;
//! a single loop applies them to state and redraws.

use std::io;

use crossterm::{
    event::{self, Event as TermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use resttest::constants::{INPUT_POLL, LOG_FILE};
use resttest::messages::{create_channel, Event, EventSender};
use resttest::{AppActor, AppState, Catalog, Viewport};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let catalog = Catalog::load()?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let size = terminal.size()?;

    let (events_tx, mut events_rx) = create_channel();
    spawn_input_reader(events_tx.clone());

    let state = AppState::new(catalog, Viewport::new(size.width, size.height));
    let mut actor = AppActor::new(state, terminal, events_tx);
    actor.run(&mut events_rx).await?;

    tracing::info!("Shutting down");
    Ok(())
}

/// Forward key presses and resizes into the event queue.
///
/// Polls with a timeout so the thread notices when the loop has exited.
fn spawn_input_reader(events_tx: EventSender) {
    tokio::task::spawn_blocking(move || {
        while !events_tx.is_closed() {
            match event::poll(INPUT_POLL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    tracing::error!(error = %e, "Terminal poll failed");
                    break;
                }
            }
            let forwarded = match event::read() {
                Ok(TermEvent::Key(key)) => Event::Key(key),
                Ok(TermEvent::Resize(width, height)) => Event::Resize { width, height },
                Ok(_) => continue,
                Err(e) => {
                    tracing::error!(error = %e, "Terminal read failed");
                    break;
                }
            };
            if events_tx.send(forwarded).is_err() {
                break;
            }
        }
    });
}
