//! Renderer - projects push payloads onto page regions
//!
//! One projection per event type. Every projection resolves its target
//! through the injected [`Dom`] and does nothing when the region is absent.
//! Projections fully replace what the region showed before, so replaying a
//! payload leaves the page unchanged.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::channel::LiveEvent;
use crate::chart::{BarChart, ChartData};
use crate::dom::{Dom, Element, ListItem, ids};
use crate::types::{GraphTotals, Trade};

const COLOR_RUNNING: &str = "green";
const COLOR_STOPPED: &str = "red";

/// Fixed-point text with ties rounded away from zero, as browsers print
/// `Number.prototype.toFixed`; negative zero prints as zero
pub fn to_fixed(value: f64, digits: u32) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let places = digits as usize;
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.places$}")
        }
        None => format!("{value:.places$}"),
    }
}

/// `Saldo: 1234.50 USDT`
pub fn format_balance(balance: f64) -> String {
    format!("Saldo: {} USDT", to_fixed(balance, 2))
}

/// Fractional profit as a percentage; `+` only for strictly positive values
pub fn format_profit(current_profit: f64) -> String {
    let sign = if current_profit > 0.0 { "+" } else { "" };
    format!("{sign}{}%", to_fixed(current_profit * 100.0, 2))
}

/// List entry for one active trade
pub fn trade_item(trade: &Trade) -> ListItem {
    let (class, status) = if trade.is_profitable() {
        ("trade-item success", "Profit")
    } else {
        ("trade-item failure", "Loss")
    };

    ListItem::new(
        class,
        vec![
            format!("Trade: {}", trade.symbol),
            format!("Status: {status}"),
            format!("Winst/Verlies: {}", format_profit(trade.current_profit)),
        ],
    )
}

/// Indicator text and color for the bot status
pub fn bot_status_label(running: bool) -> (&'static str, &'static str) {
    if running {
        ("✅ Bot is actief", COLOR_RUNNING)
    } else {
        ("❌ Bot is gestopt", COLOR_STOPPED)
    }
}

/// Page renderer; owns the chart instance
pub struct Renderer<D> {
    dom: D,
    chart: Option<BarChart>,
}

impl<D: Dom> Renderer<D> {
    pub fn new(dom: D) -> Self {
        Self { dom, chart: None }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Project any validated event onto its region
    pub fn render(&mut self, event: &LiveEvent) {
        match event {
            LiveEvent::Balance(update) => self.render_balance(update.balance),
            LiveEvent::Trades(snapshot) => self.render_trades(&snapshot.trades),
            LiveEvent::Graph(totals) => self.render_graph(totals),
            LiveEvent::Errors(batch) => self.render_errors(&batch.messages),
            LiveEvent::BotStatus(status) => self.render_bot_status(status.running),
        }
    }

    pub fn render_balance(&self, balance: f64) {
        if let Some(el) = self.dom.element(ids::BALANCE) {
            el.set_text(&format_balance(balance));
        }
    }

    /// Rebuild the trade list from scratch
    pub fn render_trades(&self, trades: &[Trade]) {
        let Some(list) = self.dom.element(ids::TRADES_LIST) else {
            return;
        };

        list.clear();
        for trade in trades {
            list.append_item(&trade_item(trade));
        }
    }

    /// Create the chart on first data, update it afterwards
    ///
    /// No chart is created while the page has no chart region.
    pub fn render_graph(&mut self, totals: &GraphTotals) {
        let Some(region) = self.dom.element(ids::CHART) else {
            return;
        };

        let chart = self.chart.get_or_insert_with(|| {
            debug!("📊 Creating winnings chart");
            BarChart::new(totals)
        });
        chart.update(totals);
        region.set_markup(&chart.to_svg());
    }

    /// Rebuild the error list from scratch
    pub fn render_errors(&self, messages: &[String]) {
        let Some(list) = self.dom.element(ids::ERROR_MESSAGES) else {
            return;
        };

        list.clear();
        for message in messages {
            list.append_item(&ListItem::new("error-message", vec![message.clone()]));
        }
    }

    pub fn render_bot_status(&self, running: bool) {
        if let Some(indicator) = self.dom.element(ids::BOT_STATUS) {
            let (text, color) = bot_status_label(running);
            indicator.set_text(text);
            indicator.set_color(color);
        }
    }

    /// Copy of the chart's current data, `None` before the first graph update
    pub fn chart_snapshot(&self) -> Option<ChartData> {
        self.chart.as_ref().map(|chart| chart.data().clone())
    }
}
