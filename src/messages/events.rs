//! Events - everything the loop reacts to, plus key-to-action mapping

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::models::RequestOutcome;

/// One item on the event queue
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal was resized
    Resize { width: u16, height: u16 },
    /// The outstanding request finished
    Outcome(RequestOutcome),
    /// Spinner animation step
    Tick,
}

/// Event sender for the input reader, transport tasks and the ticker
pub type EventSender = mpsc::UnboundedSender<Event>;
/// Event receiver owned by the loop
pub type EventReceiver = mpsc::UnboundedReceiver<Event>;

/// Create the event queue
pub fn create_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// What a key press means, independent of which panel has focus
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    CursorUp,
    CursorDown,
    NextPanel,
    PrevPanel,
    Launch,
    Quit,
}

impl Action {
    /// Map a key event; releases and unbound keys yield `None`
    pub fn from_key(key: &KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorDown),
            KeyCode::Tab => Some(Action::NextPanel),
            KeyCode::BackTab => Some(Action::PrevPanel),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Launch),
            _ => None,
        }
    }
}
