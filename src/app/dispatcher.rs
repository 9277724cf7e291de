//! Event dispatch - routes each event to focus navigation or the request lifecycle

use crate::app::focus::{CursorMove, Panel};
use crate::app::state::{AppState, Viewport};
use crate::error::LaunchError;
use crate::messages::{Action, Command, Event};

impl AppState {
    /// Apply one event and return the tasks to schedule.
    ///
    /// Once quit has been requested every further event is dropped.
    pub fn dispatch(&mut self, event: Event) -> Vec<Command> {
        if self.quit_requested() {
            return Vec::new();
        }

        match event {
            Event::Key(key) => match Action::from_key(&key) {
                Some(action) => self.handle_action(action),
                None => Vec::new(),
            },
            Event::Resize { width, height } => {
                self.viewport = Viewport::new(width, height);
                Vec::new()
            }
            // Outcomes and ticks bypass focus: the request may finish after focus moved on
            Event::Outcome(outcome) => {
                let shown = self.lifecycle.reconcile(outcome);
                tracing::info!(result = %shown, "Request reconciled");
                vec![Command::StopTicker]
            }
            Event::Tick => {
                if !self.lifecycle.in_flight() {
                    tracing::debug!("Tick while idle");
                }
                self.lifecycle.on_tick();
                Vec::new()
            }
        }
    }

    fn handle_action(&mut self, action: Action) -> Vec<Command> {
        match action {
            Action::Quit => self.request_quit(),
            Action::NextPanel => {
                self.focus.rotate();
            }
            Action::PrevPanel => {
                self.focus.rotate_back();
            }
            // Only the catalog panel reacts to cursor and launch keys
            _ if self.focus.panel() != Panel::Catalog => {}
            Action::CursorUp => {
                self.focus.move_cursor(CursorMove::Up, self.catalog.len());
            }
            Action::CursorDown => {
                self.focus.move_cursor(CursorMove::Down, self.catalog.len());
            }
            Action::Launch => return self.launch_selected(),
        }
        Vec::new()
    }

    fn launch_selected(&mut self) -> Vec<Command> {
        let index = self.focus.cursor();
        match self.lifecycle.launch(&self.catalog, index) {
            Ok(request) => {
                tracing::info!(index, method = %request.method, url = %request.url, "Launching request");
                vec![Command::Issue(request), Command::StartTicker]
            }
            Err(LaunchError::Busy) => {
                tracing::debug!(index, "Launch ignored, request already in flight");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(index, error = %e, "Launch rejected");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::TransportError;
    use crate::models::{EndpointDefinition, HttpMethod, RequestOutcome};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::time::Duration;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> AppState {
        let catalog = Catalog::new(vec![
            EndpointDefinition::new("one", HttpMethod::GET, "https://api.test/todos/1"),
            EndpointDefinition::new("two", HttpMethod::GET, "https://api.test/todos/2"),
            EndpointDefinition::new("three", HttpMethod::GET, "https://api.test/todos/3"),
        ])
        .unwrap();
        AppState::new(catalog, Viewport::new(80, 24))
    }

    #[test]
    fn test_select_launch_and_reconcile() {
        let mut state = app();
        state.dispatch(key(KeyCode::Down));
        state.dispatch(key(KeyCode::Down));
        assert_eq!(state.focus.cursor(), 2);

        let commands = state.dispatch(key(KeyCode::Enter));
        assert!(state.lifecycle.in_flight());
        assert_eq!(state.lifecycle.armed_index(), Some(2));
        assert_eq!(commands.len(), 2);
        match &commands[0] {
            Command::Issue(req) => {
                assert_eq!(req.url, "https://api.test/todos/3");
                assert_eq!(req.method, HttpMethod::GET);
            }
            other => panic!("expected Issue, got {:?}", other),
        }
        assert_eq!(commands[1], Command::StartTicker);

        let commands = state.dispatch(Event::Outcome(RequestOutcome::completed(
            200,
            "ok",
            Duration::from_millis(100),
        )));
        assert_eq!(commands, vec![Command::StopTicker]);
        assert!(!state.lifecycle.in_flight());
        let msg = state.lifecycle.last_message();
        assert!(msg.contains("✅"));
        assert!(msg.contains("https://api.test/todos/3"));
        assert!(msg.contains("[200]"));
        assert!(msg.contains("0.10s"));
        assert!(msg.ends_with("ok"));
    }

    #[test]
    fn test_second_launch_is_absorbed() {
        let mut state = app();
        assert_eq!(state.dispatch(key(KeyCode::Enter)).len(), 2);
        state.dispatch(key(KeyCode::Down));
        assert!(state.dispatch(key(KeyCode::Char(' '))).is_empty());
        assert_eq!(state.lifecycle.armed_index(), Some(0));
    }

    #[test]
    fn test_outcome_reconciled_after_focus_moves() {
        let mut state = app();
        state.dispatch(key(KeyCode::Enter));
        state.dispatch(key(KeyCode::Tab));
        state.dispatch(key(KeyCode::Tab));
        assert_eq!(state.focus.panel(), Panel::Response);

        state.dispatch(Event::Tick);
        assert_eq!(state.lifecycle.spinner_phase(), 1);

        let failure = RequestOutcome::failed(TransportError::Timeout, Duration::from_secs(30));
        state.dispatch(Event::Outcome(failure));
        assert!(!state.lifecycle.in_flight());
        assert!(state.lifecycle.last_message().contains("timed out"));
    }

    #[test]
    fn test_non_catalog_panels_ignore_navigation_and_launch() {
        let mut state = app();
        state.dispatch(key(KeyCode::Tab));
        state.dispatch(key(KeyCode::Down));
        assert_eq!(state.focus.cursor(), 0);
        assert!(state.dispatch(key(KeyCode::Enter)).is_empty());
        assert!(!state.lifecycle.in_flight());
    }

    #[test]
    fn test_resize_in_any_panel() {
        let mut state = app();
        state.dispatch(key(KeyCode::Tab));
        state.dispatch(Event::Resize { width: 120, height: 40 });
        assert_eq!(state.viewport, Viewport::new(120, 40));
    }

    #[test]
    fn test_tick_after_outcome_is_harmless() {
        let mut state = app();
        state.dispatch(key(KeyCode::Enter));
        state.dispatch(Event::Outcome(RequestOutcome::completed(200, "ok", Duration::ZERO)));
        let phase = state.lifecycle.spinner_phase();
        assert!(state.dispatch(Event::Tick).is_empty());
        assert_eq!(state.lifecycle.spinner_phase(), phase);
    }

    #[test]
    fn test_quit_from_any_panel_stops_dispatch() {
        let mut state = app();
        state.dispatch(key(KeyCode::Tab));
        state.dispatch(key(KeyCode::Char('q')));
        assert!(state.quit_requested());

        state.dispatch(key(KeyCode::BackTab));
        assert_eq!(state.focus.panel(), Panel::Detail);
    }

    #[test]
    fn test_unresolved_launch_shows_error_without_request() {
        let catalog = Catalog::new(vec![EndpointDefinition::new(
            "todo",
            HttpMethod::GET,
            "/todos/{id}",
        )])
        .unwrap();
        let mut state = AppState::new(catalog, Viewport::default());

        assert!(state.dispatch(key(KeyCode::Enter)).is_empty());
        assert!(!state.lifecycle.in_flight());
        assert!(state.lifecycle.last_message().contains("unresolved path parameter"));
    }
}
