//! Live-state channel client
//!
//! Receives push frames from an injected transport, validates them against
//! the event schemas, replaces the matching view-model slice and invokes the
//! one handler subscribed to that event.
//!
//! # Guarantees
//! - Frames are handled in transport delivery order, one at a time
//! - A rejected frame never reaches the view-model or any handler
//! - No reconnect: when the transport ends, `run` returns

use std::collections::{HashMap, VecDeque};

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::ChannelError;
use crate::types::{
    BalanceUpdate, BotStatus, Envelope, ErrorBatch, EventKind, GraphTotals, Trade, TradeSnapshot,
};

/// Event name of the retired time-series chart contract
pub const DEPRECATED_CHART_EVENT: &str = "update_chart";

/// A frame as delivered by the transport
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Text(String),
    Binary(Vec<u8>),
    Closed { code: Option<u16>, reason: String },
}

/// Push-channel connection
///
/// Implementations own the socket; the client only pulls frames.
pub trait Transport {
    /// Next frame from the connection, `None` once the connection is gone
    async fn next_frame(&mut self) -> Option<Frame>;
}

/// Transport that replays a fixed sequence of frames, then ends
#[derive(Debug, Default)]
pub struct ReplayTransport {
    frames: VecDeque<Frame>,
}

impl ReplayTransport {
    pub fn new(frames: impl IntoIterator<Item = Frame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Replay text frames only
    pub fn from_texts<S: Into<String>>(texts: impl IntoIterator<Item = S>) -> Self {
        Self::new(texts.into_iter().map(|t| Frame::Text(t.into())))
    }
}

impl Transport for ReplayTransport {
    async fn next_frame(&mut self) -> Option<Frame> {
        self.frames.pop_front()
    }
}

/// A validated push event
#[derive(Debug, Clone, PartialEq)]
pub enum LiveEvent {
    Balance(BalanceUpdate),
    Trades(TradeSnapshot),
    Graph(GraphTotals),
    Errors(ErrorBatch),
    BotStatus(BotStatus),
}

impl LiveEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            LiveEvent::Balance(_) => EventKind::Balance,
            LiveEvent::Trades(_) => EventKind::Trades,
            LiveEvent::Graph(_) => EventKind::Graph,
            LiveEvent::Errors(_) => EventKind::Errors,
            LiveEvent::BotStatus(_) => EventKind::BotStatus,
        }
    }

    /// Decode and validate one text frame
    pub fn decode(text: &str) -> Result<Self, ChannelError> {
        let envelope: Envelope = serde_json::from_str(text).map_err(ChannelError::InvalidFrame)?;

        if envelope.event == DEPRECATED_CHART_EVENT {
            return Err(ChannelError::DeprecatedEvent(envelope.event));
        }
        let Some(kind) = EventKind::from_name(&envelope.event) else {
            return Err(ChannelError::UnknownEvent(envelope.event));
        };

        let data = envelope.data;
        Ok(match kind {
            EventKind::Balance => LiveEvent::Balance(payload(kind, data)?),
            EventKind::Trades => LiveEvent::Trades(payload(kind, data)?),
            EventKind::Graph => LiveEvent::Graph(payload(kind, data)?),
            EventKind::Errors => LiveEvent::Errors(payload(kind, data)?),
            EventKind::BotStatus => LiveEvent::BotStatus(payload(kind, data)?),
        })
    }
}

fn payload<T>(kind: EventKind, data: serde_json::Value) -> Result<T, ChannelError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(data).map_err(|source| ChannelError::MalformedPayload {
        event: kind.name(),
        source,
    })
}

/// Most recent value of every tracked slice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    pub balance: Option<f64>,
    pub trades: Vec<Trade>,
    pub graph: Option<GraphTotals>,
    pub errors: Vec<String>,
    pub bot_running: Option<bool>,
}

impl ViewModel {
    /// Replace the slice the event belongs to
    pub fn apply(&mut self, event: &LiveEvent) {
        match event {
            LiveEvent::Balance(update) => self.balance = Some(update.balance),
            LiveEvent::Trades(snapshot) => self.trades.clone_from(&snapshot.trades),
            LiveEvent::Graph(totals) => self.graph = Some(*totals),
            LiveEvent::Errors(batch) => self.errors.clone_from(&batch.messages),
            LiveEvent::BotStatus(status) => self.bot_running = Some(status.running),
        }
    }
}

type Handler = Box<dyn FnMut(&LiveEvent)>;
type ErrorHook = Box<dyn FnMut(&ChannelError)>;

/// Subscribe-by-event-name client over an injected transport
pub struct ChannelClient<T> {
    transport: T,
    handlers: HashMap<EventKind, Handler>,
    on_error: Option<ErrorHook>,
    view: ViewModel,
}

impl<T> ChannelClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            handlers: HashMap::new(),
            on_error: None,
            view: ViewModel::default(),
        }
    }

    /// Register the handler for an event kind, replacing any earlier one
    ///
    /// Handlers run synchronously on delivery and must not block.
    pub fn subscribe(
        &mut self,
        kind: EventKind,
        handler: impl FnMut(&LiveEvent) + 'static,
    ) -> &mut Self {
        self.handlers.insert(kind, Box::new(handler));
        self
    }

    /// Register a hook that receives every rejected frame's error
    pub fn on_error(&mut self, hook: impl FnMut(&ChannelError) + 'static) -> &mut Self {
        self.on_error = Some(Box::new(hook));
        self
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// Validate one text frame, update the view-model and run its handler
    pub fn dispatch(&mut self, text: &str) -> Result<EventKind, ChannelError> {
        let event = LiveEvent::decode(text)?;
        let kind = event.kind();
        debug!(event = %kind, "📨 Push event received");

        self.view.apply(&event);
        if let Some(handler) = self.handlers.get_mut(&kind) {
            handler(&event);
        }
        Ok(kind)
    }

    fn report(&mut self, err: &ChannelError) {
        warn!(error = %err, "⚠️ Push frame rejected");
        if let Some(hook) = self.on_error.as_mut() {
            hook(err);
        }
    }
}

impl<T: Transport> ChannelClient<T> {
    /// Drain the transport until it closes
    ///
    /// Returns the number of frames delivered to the view-model.
    pub async fn run(&mut self) -> usize {
        let mut delivered = 0;

        while let Some(frame) = self.transport.next_frame().await {
            match frame {
                Frame::Text(text) => match self.dispatch(&text) {
                    Ok(_) => delivered += 1,
                    Err(err) => self.report(&err),
                },
                Frame::Binary(bytes) => {
                    warn!(len = bytes.len(), "⚠️ Ignoring binary push frame");
                }
                Frame::Closed { code, reason } => {
                    info!(?code, %reason, "🔌 Push channel closed");
                    return delivered;
                }
            }
        }

        info!("🔌 Push channel ended");
        delivered
    }
}
