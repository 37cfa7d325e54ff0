//! Lucky13 Worker - stub server for the Lucky13 dashboard on Cloudflare Workers
//!
//! Serves the dashboard shell, the push channel and the settings and
//! bot-control endpoints the dashboard client talks to.
//!
//! # Architecture
//! - Main entry point routes HTTP requests
//! - KV storage for settings and the running flag
//! - WebSocket push channel with the shared `{"event", "data"}` envelope
//!
//! # Routes
//! - `GET /` greeting, `GET /dashboard` HTML shell, `GET /ws` push channel
//! - `GET|POST /api/settings`, `POST /start-bot`, `POST /stop-bot`
//! - `GET /health`

#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::float_cmp)] // Exact comparisons on configured values in tests
#![allow(clippy::needless_pass_by_value)] // Worker framework patterns

mod config;
mod dashboard;
mod error;
mod socket;
mod state;

use lucky13_dashboard::{MessageResponse, Settings, SettingsResponse};
use worker::{Context, Env, Request, Response, Router, console_log, console_warn, event};

pub use config::Config;
pub use error::WorkerError;

/// Result type alias for worker operations
type WResult<T> = std::result::Result<T, worker::Error>;

/// Main Worker entry point
#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> WResult<Response> {
    console_error_panic_hook::set_once();

    let router = Router::new();

    router
        // Health check
        .get_async("/health", |_req, ctx| async move {
            let config = match Config::from_env(&ctx.env) {
                Ok(c) => c,
                Err(e) => return Response::error(format!("Config error: {e}"), 500),
            };

            Response::from_json(&serde_json::json!({
                "status": "healthy",
                "version": env!("CARGO_PKG_VERSION"),
                "environment": config.environment,
                "log_level": config.log_level,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }))
        })
        .get_async("/", |_req, ctx| async move {
            let config = Config::from_env(&ctx.env)?;
            Response::ok(config.greeting)
        })
        // Dashboard UI
        .get_async("/dashboard", |_req, ctx| async move {
            let config = Config::from_env(&ctx.env)?;
            Response::from_html(dashboard::dashboard_html(config.pkg_base(), &config.log_level))
        })
        // Push channel
        .get_async("/ws", |req, ctx| async move { socket::handle(req, &ctx.env).await })
        .get_async("/api/settings", |_req, ctx| async move {
            let settings = state::get_settings(&ctx.env).await?;
            Response::from_json(&SettingsResponse::from(settings))
        })
        .post_async("/api/settings", |mut req, ctx| async move {
            let settings = match req.json::<Settings>().await {
                Ok(s) => s,
                Err(e) => return reject(&format!("Ongeldige instellingen: {e}")),
            };
            if let Err(e) = state::validate_settings(&settings) {
                return reject(&e.to_string());
            }

            state::save_settings(&ctx.env, &settings).await?;
            console_log!("💾 Settings saved: {:?}", settings);
            Response::from_json(&MessageResponse {
                message: state::SETTINGS_SAVED.to_string(),
            })
        })
        .post_async("/start-bot", |_req, ctx| async move { set_running(&ctx.env, true).await })
        .post_async("/stop-bot", |_req, ctx| async move { set_running(&ctx.env, false).await })
        // Fallback
        .run(req, env)
        .await
}

/// `400` with a `{message}` body
fn reject(message: &str) -> WResult<Response> {
    console_warn!("⚠️ Settings rejected: {}", message);
    Ok(Response::from_json(&MessageResponse {
        message: message.to_string(),
    })?
    .with_status(400))
}

async fn set_running(env: &Env, running: bool) -> WResult<Response> {
    state::save_running(env, running).await?;
    console_log!("🤖 Bot {}", if running { "started" } else { "stopped" });
    Response::from_json(&state::command_reply(running))
}
