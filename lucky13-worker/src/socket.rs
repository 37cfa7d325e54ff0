//! Push channel endpoint
//!
//! Accepts the dashboard's WebSocket, sends the opening balance and bot
//! status, and logs until the client goes away. Incoming client frames are
//! not part of the protocol and are ignored.

use futures::StreamExt;
use lucky13_dashboard::{BalanceUpdate, BotStatus, Envelope, EventKind};
use worker::{
    Env, Request, Response, WebSocketPair, WebsocketEvent, console_error, console_log,
    console_warn,
};

use crate::config::Config;
use crate::error::Result;
use crate::state;

/// Frames sent right after a client connects
pub fn opening_frames(balance: f64, running: bool) -> Result<Vec<String>> {
    Ok(vec![
        Envelope::new(EventKind::Balance, &BalanceUpdate { balance })?.to_frame()?,
        Envelope::new(EventKind::BotStatus, &BotStatus { running })?.to_frame()?,
    ])
}

fn is_upgrade(req: &Request) -> bool {
    req.headers()
        .get("Upgrade")
        .ok()
        .flatten()
        .is_some_and(|v| v.eq_ignore_ascii_case("websocket"))
}

/// `GET /ws`
pub async fn handle(req: Request, env: &Env) -> worker::Result<Response> {
    if !is_upgrade(&req) {
        return Response::error("Expected Upgrade: websocket", 426);
    }

    let config = Config::from_env(env)?;
    let running = state::get_running(env).await?;

    let pair = WebSocketPair::new()?;
    let server = pair.server;
    server.accept()?;

    let id = uuid::Uuid::new_v4();
    console_log!("🔌 Dashboard connected ({})", id);

    for frame in opening_frames(config.initial_balance, running)? {
        server.send_with_str(&frame)?;
    }

    wasm_bindgen_futures::spawn_local(async move {
        let mut events = match server.events() {
            Ok(events) => events,
            Err(e) => {
                console_error!("❌ Cannot read socket events ({}): {}", id, e);
                return;
            }
        };

        while let Some(event) = events.next().await {
            match event {
                Ok(WebsocketEvent::Message(_)) => {}
                Ok(WebsocketEvent::Close(close)) => {
                    console_log!("🔌 Dashboard disconnected ({}): code {}", id, close.code());
                    return;
                }
                Err(e) => {
                    console_warn!("⚠️ Socket error ({}): {}", id, e);
                    return;
                }
            }
        }
        console_log!("🔌 Dashboard disconnected ({})", id);
    });

    Response::from_websocket(pair.client)
}
