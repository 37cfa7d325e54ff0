//! Shared test doubles

use std::cell::{Cell, RefCell};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::api::{ApiClient, DashboardApi};
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::types::{BotCommandResponse, MessageResponse, Settings, SettingsResponse};

/// Records every call; answers with canned responses or fails on demand
#[derive(Debug, Default)]
pub struct FakeApi {
    pub stored: RefCell<SettingsResponse>,
    pub calls: RefCell<Vec<&'static str>>,
    pub saved: RefCell<Vec<Settings>>,
    pub fail: Cell<bool>,
}

impl FakeApi {
    pub fn failing() -> Self {
        let api = Self::default();
        api.fail.set(true);
        api
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: &'static str) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.fail.get() {
            return Err(DashboardError::Http("HTTP 500 Internal Server Error: down".into()));
        }
        Ok(())
    }
}

impl DashboardApi for FakeApi {
    async fn fetch_settings(&self) -> Result<SettingsResponse> {
        self.record("fetch_settings")?;
        Ok(*self.stored.borrow())
    }

    async fn save_settings(&self, settings: &Settings) -> Result<MessageResponse> {
        self.record("save_settings")?;
        self.saved.borrow_mut().push(*settings);
        Ok(MessageResponse {
            message: "Instellingen opgeslagen".to_string(),
        })
    }

    async fn start_bot(&self) -> Result<BotCommandResponse> {
        self.record("start_bot")?;
        Ok(BotCommandResponse {
            status: "Bot gestart".to_string(),
        })
    }

    async fn stop_bot(&self) -> Result<BotCommandResponse> {
        self.record("stop_bot")?;
        Ok(BotCommandResponse {
            status: "Bot gestopt".to_string(),
        })
    }
}

/// Real client for a local origin, bypassing any system proxy
pub fn local_client(origin: &str) -> ApiClient {
    ApiClient::with_client(
        DashboardConfig::new(origin).unwrap(),
        reqwest::Client::builder().no_proxy().build().unwrap(),
    )
}

/// Answer one request on a local port with a canned response
///
/// Returns the `http://127.0.0.1:<port>` origin to point a client at.
pub async fn serve_once(status: &str, content_type: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\n\
         Connection: close\r\n\r\n{body}",
        body.len()
    );

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        read_request(&mut socket).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}

/// Drain the request head and its `Content-Length` body
async fn read_request(socket: &mut TcpStream) {
    let mut received = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = socket.read(&mut buf).await.unwrap();
        if n == 0 {
            return;
        }
        received.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&received);
        let Some(head_end) = text.find("\r\n\r\n") else {
            continue;
        };
        let length = text[..head_end]
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if received.len() >= head_end + 4 + length {
            return;
        }
    }
}
