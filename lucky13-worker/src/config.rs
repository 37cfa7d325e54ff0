//! Configuration management for the stub server

use crate::error::{Result, WorkerError};
use worker::Env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Stub server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (production, staging, development)
    pub environment: String,

    /// Log level
    pub log_level: String,

    /// Balance pushed to every new dashboard connection (USDT)
    pub initial_balance: f64,

    /// Plain-text reply of `GET /`
    pub greeting: String,

    /// Base URL of the built dashboard package (`lucky13_dashboard.js` + wasm)
    pub dashboard_pkg_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "production".to_string(),
            log_level: "info".to_string(),
            initial_balance: 100.0,
            greeting: "Lucky13 Trading Bot".to_string(),
            dashboard_pkg_url: "/pkg".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from Cloudflare environment variables
    pub fn from_env(env: &Env) -> Result<Self> {
        let defaults = Self::default();
        let var = |name: &str| env.var(name).ok().map(|v| v.to_string());

        let config = Self {
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: var("LOG_LEVEL").unwrap_or(defaults.log_level),
            initial_balance: var("INITIAL_BALANCE")
                .map(|v| v.parse().unwrap_or(defaults.initial_balance))
                .unwrap_or(defaults.initial_balance),
            greeting: var("GREETING").unwrap_or(defaults.greeting),
            dashboard_pkg_url: var("DASHBOARD_PKG_URL").unwrap_or(defaults.dashboard_pkg_url),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.initial_balance.is_finite() || self.initial_balance < 0.0 {
            return Err(WorkerError::Config("initial_balance must be a non-negative number".into()));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(WorkerError::Config(format!("unknown log level: {}", self.log_level)));
        }
        if self.dashboard_pkg_url.trim().is_empty() {
            return Err(WorkerError::Config("dashboard_pkg_url must not be empty".into()));
        }
        Ok(())
    }

    /// Dashboard package URL without a trailing slash
    pub fn pkg_base(&self) -> &str {
        self.dashboard_pkg_url.trim_end_matches('/')
    }
}
