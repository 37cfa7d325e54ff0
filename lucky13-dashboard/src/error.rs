//! Error types for the dashboard client
//!
//! Uses thiserror for ergonomic error definitions.
//! Push-channel failures get their own enum so a rejected frame can be
//! reported without touching the rest of the client.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Dashboard client errors
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request errors (settings, start/stop)
    #[error("HTTP error: {0}")]
    Http(String),

    /// Request refused by the server, with the server's own message
    #[error("Rejected by server: {0}")]
    Rejected(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Push channel transport errors
    #[error("Transport error: {0}")]
    Transport(String),

    /// DOM binding errors (browser only)
    #[error("DOM error: {0}")]
    Dom(String),

    /// Form input that does not parse
    #[error("Invalid input for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    /// Export requested before any chart data arrived
    #[error("No chart data available for export")]
    NoChartData,

    /// Push channel errors
    #[error(transparent)]
    Channel(#[from] ChannelError),
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Http(err.to_string())
    }
}

impl From<url::ParseError> for DashboardError {
    fn from(err: url::ParseError) -> Self {
        DashboardError::Config(format!("invalid URL: {err}"))
    }
}

/// Push channel errors
///
/// Each variant aborts exactly one delivery. The view-model and the other
/// handlers are never touched by a rejected frame.
#[derive(Error, Debug)]
pub enum ChannelError {
    /// Frame is not a `{"event", "data"}` envelope
    #[error("Invalid frame: {0}")]
    InvalidFrame(#[source] serde_json::Error),

    /// Event name outside the subscribed set
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    /// Event name from the retired time-series chart contract
    #[error("Deprecated event: {0}")]
    DeprecatedEvent(String),

    /// Payload does not match the event's schema
    #[error("Malformed payload for {event}: {source}")]
    MalformedPayload {
        event: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
