//! HTTP transport - executes a resolved request off the loop and reports one outcome

use std::time::Instant;

use tokio::task::JoinHandle;

use crate::constants::REQUEST_TIMEOUT;
use crate::error::TransportError;
use crate::messages::{Event, EventSender, ResolvedRequest};
use crate::models::{HttpMethod, RequestOutcome};

/// Issues requests on spawned Tokio tasks
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport {
    pub fn new() -> Self {
        HttpTransport {
            client: create_client(),
        }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        HttpTransport { client }
    }

    /// Spawn the request. Exactly one `Event::Outcome` is sent, success or not.
    ///
    /// The task is never cancelled; if the loop has gone away the outcome is dropped.
    pub fn issue(&self, request: ResolvedRequest, events: EventSender) -> JoinHandle<()> {
        let client = self.client.clone();
        tokio::spawn(async move {
            tracing::info!(url = %request.url, method = %request.method, "Executing request");
            let outcome = execute_request(&client, &request).await;
            tracing::info!(
                status = outcome.status_code,
                elapsed_ms = outcome.elapsed.as_millis() as u64,
                failed = outcome.failure.is_some(),
                "Request completed"
            );
            if events.send(Event::Outcome(outcome)).is_err() {
                tracing::debug!(url = %request.url, "Event loop closed, outcome discarded");
            }
        })
    }
}

fn build_request(client: &reqwest::Client, request: &ResolvedRequest) -> reqwest::RequestBuilder {
    let mut req_builder = match request.method {
        HttpMethod::GET => client.get(&request.url),
        HttpMethod::POST => client.post(&request.url),
        HttpMethod::PUT => client.put(&request.url),
        HttpMethod::DELETE => client.delete(&request.url),
    };

    if !request.query.is_empty() {
        req_builder = req_builder.query(&request.query);
    }

    if let Some(body) = &request.body {
        req_builder = req_builder
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.clone());
    }

    req_builder
}

/// Execute an HTTP request and return the buffered outcome
pub async fn execute_request(client: &reqwest::Client, request: &ResolvedRequest) -> RequestOutcome {
    let start = Instant::now();
    let result = build_request(client, request).send().await;

    let resp = match result {
        Ok(resp) => resp,
        Err(e) => return RequestOutcome::failed(TransportError::from(e), start.elapsed()),
    };

    let status = resp.status().as_u16();
    match resp.text().await {
        Ok(body) => RequestOutcome::completed(status, pretty_json(body), start.elapsed()),
        Err(e) => RequestOutcome::failed(TransportError::Body(e.to_string()), start.elapsed()),
    }
}

/// Re-indent the body if it parses as JSON
fn pretty_json(body: String) -> String {
    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(json) => serde_json::to_string_pretty(&json).unwrap_or(body),
        Err(_) => body,
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
