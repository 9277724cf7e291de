use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::TransportError;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }

    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::GET),
            "POST" => Ok(HttpMethod::POST),
            "PUT" => Ok(HttpMethod::PUT),
            "DELETE" => Ok(HttpMethod::DELETE),
            other => Err(format!("unsupported method: {}", other)),
        }
    }
}

impl TryFrom<String> for HttpMethod {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<HttpMethod> for String {
    fn from(m: HttpMethod) -> Self {
        m.as_str().to_string()
    }
}

/// One named request in the catalog. Never mutated after load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointDefinition {
    pub name: String,
    pub method: HttpMethod,
    /// URL template, may contain `{param}` placeholders
    pub url: String,
    /// Ordered placeholder names the template expects
    #[serde(default)]
    pub path_params: Vec<String>,
    /// Bindings for path placeholders
    #[serde(default)]
    pub params: BTreeMap<String, String>,
    #[serde(default)]
    pub query: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl EndpointDefinition {
    pub fn new(name: impl Into<String>, method: HttpMethod, url: impl Into<String>) -> Self {
        EndpointDefinition {
            name: name.into(),
            method,
            url: url.into(),
            path_params: Vec::new(),
            params: BTreeMap::new(),
            query: BTreeMap::new(),
            body: None,
        }
    }

    pub fn with_path_param(mut self, name: impl Into<String>) -> Self {
        self.path_params.push(name.into());
        self
    }

    pub fn with_binding(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// The terminal result of one transport attempt
#[derive(Clone, Debug, PartialEq)]
pub struct RequestOutcome {
    /// 0 when the transport failed before a status arrived
    pub status_code: u16,
    pub body: String,
    pub elapsed: Duration,
    pub failure: Option<TransportError>,
}

impl RequestOutcome {
    pub fn completed(status_code: u16, body: impl Into<String>, elapsed: Duration) -> Self {
        RequestOutcome {
            status_code,
            body: body.into(),
            elapsed,
            failure: None,
        }
    }

    pub fn failed(error: TransportError, elapsed: Duration) -> Self {
        RequestOutcome {
            status_code: 0,
            body: String::new(),
            elapsed,
            failure: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none() && (200..=299).contains(&self.status_code)
    }
}
