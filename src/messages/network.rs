//! Network messages - what the loop asks the transport and ticker to do

use crate::models::HttpMethod;

/// A catalog entry with its path parameters substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Follow-up tasks produced by one dispatch step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Issue the request off the loop; exactly one `Event::Outcome` comes back
    Issue(ResolvedRequest),
    /// Begin emitting `Event::Tick` for the spinner
    StartTicker,
    /// No operation is in flight any more
    StopTicker,
}
