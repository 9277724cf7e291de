//! Message types flowing through the single event queue.
//!
//! `Event`s go into the loop; `Command`s are the follow-up tasks the loop schedules.

pub mod events;
pub mod network;

pub use events::{create_channel, Action, Event, EventReceiver, EventSender};
pub use network::{Command, ResolvedRequest};
