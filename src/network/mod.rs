//! Network layer - HTTP execution and the spinner ticker
//!
//! Both run as Tokio tasks and report back through the event queue.

pub mod client;
pub mod ticker;

pub use client::HttpTransport;
pub use ticker::AnimationTicker;
