//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

use std::time::Duration;

/// Application name, shown in the title bar
pub const APP_NAME: &str = "Resttest";

/// Log file written in the working directory
pub const LOG_FILE: &str = "resttest.log";

/// Environment variable naming an endpoint catalog file
pub const CATALOG_ENV_VAR: &str = "RESTTEST_CATALOG";

/// Config directory under the user's home
pub const CONFIG_DIR: &str = ".resttest";

/// Catalog file looked up inside the config directory
pub const CATALOG_FILE: &str = "endpoints.yaml";

/// Number of focusable panels: catalog, detail, response
pub const PANEL_COUNT: usize = 3;

/// Spinner animation period
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// How long the input reader blocks waiting for a terminal event
pub const INPUT_POLL: Duration = Duration::from_millis(50);

/// HTTP client timeout, owned by the transport
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Max characters of a response body kept in the response panel
pub const BODY_EXCERPT_CHARS: usize = 500;

/// MiniDot spinner frames
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Static cursor marker, replaced by the spinner while the armed row is in flight
pub const CURSOR_MARKER: &str = ">";

pub const SUCCESS_GLYPH: &str = "✅";
pub const FAILURE_GLYPH: &str = "❌";
