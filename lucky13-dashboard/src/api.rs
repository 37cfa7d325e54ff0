//! REST client for the settings and bot-control endpoints
//!
//! Implements:
//! - `GET /api/settings`, `POST /api/settings`
//! - `POST /start-bot`, `POST /stop-bot`
//!
//! Plain request/response: no retry, no caching.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::types::{BotCommandResponse, MessageResponse, Settings, SettingsResponse};

pub const SETTINGS_PATH: &str = "/api/settings";
pub const START_BOT_PATH: &str = "/start-bot";
pub const STOP_BOT_PATH: &str = "/stop-bot";

/// Server calls the panels depend on
///
/// Futures are not `Send`: everything runs on the page's single thread.
pub trait DashboardApi {
    async fn fetch_settings(&self) -> Result<SettingsResponse>;
    async fn save_settings(&self, settings: &Settings) -> Result<MessageResponse>;
    async fn start_bot(&self) -> Result<BotCommandResponse>;
    async fn stop_bot(&self) -> Result<BotCommandResponse>;
}

/// reqwest-backed client (fetch on wasm32)
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: DashboardConfig,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Use an already configured reqwest client
    pub fn with_client(config: DashboardConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// Perform GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.api_url(path)?;
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Perform POST request, with an optional JSON body
    async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.config.api_url(path)?;
        let mut request = self.http.post(url).header("Accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle API response, checking for errors
    ///
    /// A failed request whose body is a `{message}` object becomes
    /// [`DashboardError::Rejected`] carrying that message.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            if let Ok(body) = serde_json::from_str::<MessageResponse>(&error_text) {
                return Err(DashboardError::Rejected(body.message));
            }
            return Err(DashboardError::Http(format!("HTTP {status}: {error_text}")));
        }

        response.json().await.map_err(DashboardError::from)
    }
}

impl DashboardApi for ApiClient {
    async fn fetch_settings(&self) -> Result<SettingsResponse> {
        self.get(SETTINGS_PATH).await
    }

    async fn save_settings(&self, settings: &Settings) -> Result<MessageResponse> {
        self.post(SETTINGS_PATH, Some(settings)).await
    }

    async fn start_bot(&self) -> Result<BotCommandResponse> {
        self.post::<_, ()>(START_BOT_PATH, None).await
    }

    async fn stop_bot(&self) -> Result<BotCommandResponse> {
        self.post::<_, ()>(STOP_BOT_PATH, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{local_client as client, serve_once};

    #[test]
    fn test_endpoint_urls() {
        let config = DashboardConfig::new("https://bot.example.com").unwrap();
        assert_eq!(
            config.api_url(SETTINGS_PATH).unwrap().as_str(),
            "https://bot.example.com/api/settings"
        );
        assert_eq!(
            config.api_url(STOP_BOT_PATH).unwrap().as_str(),
            "https://bot.example.com/stop-bot"
        );
    }

    #[test]
    fn test_settings_request_serialization() {
        let json = serde_json::to_string(&Settings::default())
            .expect("Settings serialization should succeed");
        assert_eq!(
            json,
            r#"{"trade_percentage":0.02,"stop_loss_percentage":0.03,"take_profit_percentage":0.05}"#
        );
    }

    #[tokio::test]
    async fn test_fetch_settings_parses_body() {
        let origin = serve_once(
            "200 OK",
            "application/json",
            r#"{"trade_percentage": 0.1, "take_profit_percentage": 0.2}"#,
        )
        .await;

        let response = client(&origin).fetch_settings().await.unwrap();

        assert_eq!(response.trade_percentage, Some(0.1));
        assert_eq!(response.stop_loss_percentage, None);
        assert_eq!(response.take_profit_percentage, Some(0.2));
    }

    #[tokio::test]
    async fn test_refused_request_carries_server_message() {
        let origin = serve_once(
            "400 Bad Request",
            "application/json",
            r#"{"message": "trade_percentage must be a number in (0, 1]"}"#,
        )
        .await;

        let err = client(&origin)
            .save_settings(&Settings::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DashboardError::Rejected(ref message)
                if message == "trade_percentage must be a number in (0, 1]"
        ));
    }

    #[tokio::test]
    async fn test_failure_without_message_is_http_error() {
        let origin = serve_once("500 Internal Server Error", "text/plain", "worker crashed").await;

        let err = client(&origin).start_bot().await.unwrap_err();

        match err {
            DashboardError::Http(text) => {
                assert!(text.contains("500"));
                assert!(text.contains("worker crashed"));
            }
            other => panic!("expected HTTP error, got {other:?}"),
        }
    }
}
