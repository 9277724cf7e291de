//! # Resttest
//!
//! A terminal client that fires HTTP requests at a list of named endpoints
//! and shows how each one answered.
//!
//! ## Architecture
//! One event queue, one loop:
//! - Input reader, transport tasks and the spinner ticker push `Event`s
//! - `AppState::dispatch` applies each event and returns follow-up `Command`s
//! - The view is redrawn from state after every event
//!
//! At most one request is in flight at a time; launches while busy are ignored.

pub mod app;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, Panel, RequestLifecycle, Viewport};
pub use catalog::Catalog;
pub use error::{CatalogError, LaunchError, TransportError};
pub use messages::{Command, Event, ResolvedRequest};
pub use models::{EndpointDefinition, HttpMethod, RequestOutcome};
pub use network::{AnimationTicker, HttpTransport};
