//! Request lifecycle - arming, in-flight tracking and outcome attribution.
//!
//! At most one request is ever outstanding. `launch` is the only place that
//! checks the gate; callers never re-check it.

use crate::catalog::{self, Catalog};
use crate::constants::{BODY_EXCERPT_CHARS, FAILURE_GLYPH, SPINNER_FRAMES, SUCCESS_GLYPH};
use crate::error::LaunchError;
use crate::messages::ResolvedRequest;
use crate::models::RequestOutcome;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestLifecycle {
    armed_index: Option<usize>,
    armed_url: Option<String>,
    in_flight: bool,
    last_display_message: String,
    spinner_phase: usize,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn armed_index(&self) -> Option<usize> {
        self.armed_index
    }

    pub fn last_message(&self) -> &str {
        &self.last_display_message
    }

    pub fn spinner_phase(&self) -> usize {
        self.spinner_phase
    }

    pub fn spinner_glyph(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_phase % SPINNER_FRAMES.len()]
    }

    /// Arm the endpoint at `index` and hand back the request to issue.
    ///
    /// `Busy` leaves the state untouched. An unresolved path parameter is
    /// recorded as the display message and nothing is armed.
    pub fn launch(&mut self, catalog: &Catalog, index: usize) -> Result<ResolvedRequest, LaunchError> {
        if self.in_flight {
            return Err(LaunchError::Busy);
        }

        let endpoint = catalog.get(index).ok_or(LaunchError::UnknownEndpoint(index))?;

        let request = match catalog::resolve(endpoint) {
            Ok(request) => request,
            Err(e) => {
                self.last_display_message = format!("{} {}", FAILURE_GLYPH, e);
                return Err(e);
            }
        };

        self.in_flight = true;
        self.armed_index = Some(index);
        self.armed_url = Some(request.url.clone());
        self.spinner_phase = 0;
        Ok(request)
    }

    /// Fold the outcome of the armed request into the display message
    pub fn reconcile(&mut self, outcome: RequestOutcome) -> &str {
        if !self.in_flight {
            tracing::warn!("Outcome arrived with nothing in flight");
        }
        self.in_flight = false;
        self.armed_index = None;
        let url = self.armed_url.take().unwrap_or_default();
        let secs = outcome.elapsed.as_secs_f64();

        self.last_display_message = match &outcome.failure {
            Some(err) => format!("{} {} failed after {:.2}s - {}", FAILURE_GLYPH, url, secs, err),
            None => {
                let glyph = if outcome.is_success() { SUCCESS_GLYPH } else { FAILURE_GLYPH };
                format!(
                    "{} {} Responded with [{}] in {:.2}s - {}",
                    glyph,
                    url,
                    outcome.status_code,
                    secs,
                    excerpt(&outcome.body, BODY_EXCERPT_CHARS)
                )
            }
        };

        &self.last_display_message
    }

    /// Advance the spinner; ticks while idle are dropped
    pub fn on_tick(&mut self) -> usize {
        if self.in_flight {
            self.spinner_phase = self.spinner_phase.wrapping_add(1);
        }
        self.spinner_phase
    }
}

/// Cap a body at `max` characters so it fits the response panel
fn excerpt(body: &str, max: usize) -> String {
    match body.char_indices().nth(max) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}
