//! Configuration management for the dashboard client

use url::Url;

use crate::error::{DashboardError, Result};

/// Origin used when the client runs outside a browser page
pub const DEFAULT_ORIGIN: &str = "http://localhost:5000";

/// Push channel path on the server
pub const DEFAULT_SOCKET_PATH: &str = "/ws";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Dashboard client configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Server origin (scheme, host, port) for both HTTP and the push channel
    pub origin: Url,

    /// Path of the push channel endpoint
    pub socket_path: String,

    /// Log level for the console subscriber
    pub log_level: String,
}

impl DashboardConfig {
    /// Build a configuration for the given server origin
    pub fn new(origin: &str) -> Result<Self> {
        Ok(Self {
            origin: Url::parse(origin)?,
            socket_path: DEFAULT_SOCKET_PATH.to_string(),
            log_level: "info".to_string(),
        })
    }

    /// Override the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// WebSocket URL of the push channel (http → ws, https → wss)
    pub fn socket_url(&self) -> Result<Url> {
        let mut url = self.origin.join(&self.socket_path)?;
        let scheme = match url.scheme() {
            "https" => "wss",
            "http" => "ws",
            other => {
                return Err(DashboardError::Config(format!(
                    "unsupported origin scheme: {other}"
                )));
            }
        };
        url.set_scheme(scheme)
            .map_err(|()| DashboardError::Config(format!("cannot switch scheme to {scheme}")))?;
        Ok(url)
    }

    /// Absolute URL of a REST endpoint
    pub fn api_url(&self, path: &str) -> Result<Url> {
        Ok(self.origin.join(path)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.origin.scheme(), "http" | "https") {
            return Err(DashboardError::Config("origin must be http or https".into()));
        }
        if !self.socket_path.starts_with('/') {
            return Err(DashboardError::Config("socket_path must start with '/'".into()));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(DashboardError::Config(format!(
                "unknown log level: {}",
                self.log_level
            )));
        }
        Ok(())
    }
}
