//! Lucky13 Dashboard - live-state client for the Lucky13 trading bot
//!
//! Browser-side dashboard that mirrors the bot's state pushed over a
//! WebSocket and drives the bot's settings and start/stop endpoints.
//!
//! # Architecture
//! - Push channel client over an injected transport (`channel`)
//! - Renderer projecting events onto page regions through an injected DOM (`render`)
//! - Settings panel, tab switcher and bot control over a REST client (`api`)
//! - CSV export of the winnings chart (`export`)
//!
//! # Targets
//! Everything except `web` runs headless with [`dom::MemoryDom`]. The `browser`
//! feature on wasm32 adds the web-sys document, the gloo-net socket and the
//! page start hook.

#![allow(clippy::cast_precision_loss)] // Float casts OK for chart layout
#![allow(clippy::doc_markdown)] // Doc style flexibility
#![allow(clippy::float_cmp)] // Exact comparisons on wire values in tests
#![allow(clippy::future_not_send)] // Single-threaded page event loop

pub mod api;
pub mod app;
pub mod channel;
pub mod chart;
pub mod config;
pub mod control;
pub mod dom;
pub mod error;
pub mod export;
pub mod render;
pub mod settings;
pub mod tabs;
pub mod types;

#[cfg(test)]
mod test_support;

#[cfg(all(target_arch = "wasm32", feature = "browser"))]
mod web;

pub use api::{ApiClient, DashboardApi};
pub use app::Dashboard;
pub use channel::{ChannelClient, Frame, LiveEvent, ReplayTransport, Transport, ViewModel};
pub use chart::{BarChart, ChartData};
pub use config::DashboardConfig;
pub use control::BotControl;
pub use dom::{Dom, Element, MemoryDom};
pub use error::{ChannelError, DashboardError, Result};
pub use render::Renderer;
pub use settings::SettingsPanel;
pub use tabs::{Tab, TabSwitcher};
pub use types::*;

#[cfg(all(target_arch = "wasm32", feature = "browser"))]
pub use web::{GlooTransport, WebDom, WebElement};
