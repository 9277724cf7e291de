//! App layer - the single-threaded state machine
//!
//! The loop receives one `Event` at a time, updates state through `dispatch`,
//! schedules the returned commands and redraws.

pub mod actor;
pub mod dispatcher;
pub mod focus;
pub mod lifecycle;
pub mod state;

pub use actor::AppActor;
pub use focus::{FocusState, Panel};
pub use lifecycle::RequestLifecycle;
pub use state::{AppState, Viewport};
