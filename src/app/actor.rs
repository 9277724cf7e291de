//! App actor - the event loop: dequeue, dispatch, schedule, redraw

use ratatui::{backend::Backend, Terminal};

use crate::app::state::AppState;
use crate::constants::TICK_INTERVAL;
use crate::messages::{Command, Event, EventReceiver, EventSender};
use crate::network::{AnimationTicker, HttpTransport};
use crate::ui;

/// Owns the state and the terminal; nothing else mutates either
pub struct AppActor<B: Backend> {
    state: AppState,
    terminal: Terminal<B>,
    events_tx: EventSender,
    transport: HttpTransport,
    ticker: AnimationTicker,
}

impl<B: Backend> AppActor<B> {
    pub fn new(state: AppState, terminal: Terminal<B>, events_tx: EventSender) -> Self {
        AppActor {
            state,
            terminal,
            events_tx,
            transport: HttpTransport::new(),
            ticker: AnimationTicker::new(TICK_INTERVAL),
        }
    }

    /// Replace the transport, e.g. with a client configured for a test server
    pub fn with_transport(mut self, transport: HttpTransport) -> Self {
        self.transport = transport;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Run until quit is requested or the queue is closed.
    ///
    /// An in-flight request is abandoned on quit.
    pub async fn run(&mut self, events_rx: &mut EventReceiver) -> anyhow::Result<()> {
        self.render()?;

        while let Some(event) = events_rx.recv().await {
            if !self.handle_event(event)? {
                break;
            }
        }

        self.ticker.stop();
        Ok(())
    }

    /// Dispatch one event, schedule its commands and redraw.
    ///
    /// Returns `false` once quit has been requested; nothing is scheduled or drawn then.
    pub fn handle_event(&mut self, event: Event) -> anyhow::Result<bool> {
        let commands = self.state.dispatch(event);
        if self.state.quit_requested() {
            tracing::info!(in_flight = self.state.lifecycle.in_flight(), "Quit requested");
            self.ticker.stop();
            return Ok(false);
        }
        for command in commands {
            self.execute(command);
        }
        self.render()?;
        Ok(true)
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Issue(request) => {
                self.transport.issue(request, self.events_tx.clone());
            }
            Command::StartTicker => self.ticker.start(self.events_tx.clone()),
            Command::StopTicker => self.ticker.stop(),
        }
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let state = &self.state;
        self.terminal.draw(|f| ui::draw(f, state))?;
        Ok(())
    }
}
