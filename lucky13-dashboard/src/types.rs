//! Wire types shared by the dashboard client and the stub server
//!
//! Push-channel payloads, the envelope that carries them, and the
//! settings / bot-control REST bodies.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TRADE_PERCENTAGE: f64 = 0.02;
pub const DEFAULT_STOP_LOSS_PERCENTAGE: f64 = 0.03;
pub const DEFAULT_TAKE_PROFIT_PERCENTAGE: f64 = 0.05;

/// Push event kinds the client subscribes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Balance,
    Trades,
    Graph,
    Errors,
    BotStatus,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Balance,
        EventKind::Trades,
        EventKind::Graph,
        EventKind::Errors,
        EventKind::BotStatus,
    ];

    /// Event name on the wire
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Balance => "update_balance",
            EventKind::Trades => "update_trades",
            EventKind::Graph => "update_graph",
            EventKind::Errors => "error_messages",
            EventKind::BotStatus => "bot_status",
        }
    }

    /// Look up a kind by its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One push-channel text frame: `{"event": "...", "data": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub event: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    /// Wrap a payload for the given event
    pub fn new<T: Serialize>(kind: EventKind, payload: &T) -> serde_json::Result<Self> {
        Ok(Self {
            event: kind.name().to_string(),
            data: serde_json::to_value(payload)?,
        })
    }

    /// Serialize to a text frame
    pub fn to_frame(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// USDT account balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceUpdate {
    pub balance: f64,
}

/// An active trade as pushed by the bot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: String,
    /// Fractional profit/loss: 0.0123 = +1.23%
    pub current_profit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Trade {
    /// Strictly positive profit counts as success; zero is a loss
    pub fn is_profitable(&self) -> bool {
        self.current_profit > 0.0
    }
}

/// Full replacement of the active trade list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSnapshot {
    pub trades: Vec<Trade>,
}

/// Aggregate chart data: winnings against deposits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphTotals {
    pub winnings: f64,
    pub deposits: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBatchWire {
    List(Vec<String>),
    Wrapped { messages: Vec<String> },
}

impl From<ErrorBatchWire> for ErrorBatch {
    fn from(wire: ErrorBatchWire) -> Self {
        match wire {
            ErrorBatchWire::List(messages) | ErrorBatchWire::Wrapped { messages } => {
                Self { messages }
            }
        }
    }
}

/// Full replacement of the error message list
///
/// Accepts a bare array (what the bot emits) or `{"messages": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ErrorBatchWire")]
pub struct ErrorBatch {
    pub messages: Vec<String>,
}

/// Bot running indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BotStatus {
    pub running: bool,
}

/// Bot settings posted from the settings form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub trade_percentage: f64,
    pub stop_loss_percentage: f64,
    pub take_profit_percentage: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            trade_percentage: DEFAULT_TRADE_PERCENTAGE,
            stop_loss_percentage: DEFAULT_STOP_LOSS_PERCENTAGE,
            take_profit_percentage: DEFAULT_TAKE_PROFIT_PERCENTAGE,
        }
    }
}

impl Settings {
    /// First field that is not a finite fraction in (0, 1], if any
    pub fn invalid_field(&self) -> Option<&'static str> {
        [
            ("trade_percentage", self.trade_percentage),
            ("stop_loss_percentage", self.stop_loss_percentage),
            ("take_profit_percentage", self.take_profit_percentage),
        ]
        .into_iter()
        .find(|(_, value)| !(value.is_finite() && *value > 0.0 && *value <= 1.0))
        .map(|(field, _)| field)
    }
}

/// Settings as returned by `GET /api/settings`; any field may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsResponse {
    #[serde(default)]
    pub trade_percentage: Option<f64>,
    #[serde(default)]
    pub stop_loss_percentage: Option<f64>,
    #[serde(default)]
    pub take_profit_percentage: Option<f64>,
}

impl SettingsResponse {
    /// Fill gaps with defaults; zero and non-finite count as missing
    pub fn or_defaults(&self) -> Settings {
        fn pick(value: Option<f64>, default: f64) -> f64 {
            value
                .filter(|v| v.is_finite() && *v != 0.0)
                .unwrap_or(default)
        }

        Settings {
            trade_percentage: pick(self.trade_percentage, DEFAULT_TRADE_PERCENTAGE),
            stop_loss_percentage: pick(self.stop_loss_percentage, DEFAULT_STOP_LOSS_PERCENTAGE),
            take_profit_percentage: pick(
                self.take_profit_percentage,
                DEFAULT_TAKE_PROFIT_PERCENTAGE,
            ),
        }
    }
}

impl From<Settings> for SettingsResponse {
    fn from(settings: Settings) -> Self {
        Self {
            trade_percentage: Some(settings.trade_percentage),
            stop_loss_percentage: Some(settings.stop_loss_percentage),
            take_profit_percentage: Some(settings.take_profit_percentage),
        }
    }
}

/// Reply to `POST /api/settings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Reply to `POST /start-bot` and `POST /stop-bot`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotCommandResponse {
    pub status: String,
}
