//! DOM abstraction for the renderer and the panels
//!
//! The renderer never looks elements up globally; it asks an injected
//! [`Dom`] resolver for an element by id and gets `None` when the page has
//! no such region.
//!
//! # Backends
//! - `memory`: in-memory document used headless and in tests
//! - `crate::web`: web-sys document (feature `browser`, wasm32 only)

pub mod memory;

pub use memory::{Download, MemoryDom, MemoryElement, NodeState};

use crate::error::Result;

/// Element ids shared with the server's HTML shell
pub mod ids {
    pub const BALANCE: &str = "balance";
    pub const TRADES_LIST: &str = "trades-list";
    pub const CHART: &str = "winningsChart";
    pub const ERROR_MESSAGES: &str = "errorMessages";
    pub const BOT_STATUS: &str = "bot-status";
    pub const EXPORT_CHART: &str = "exportChart";
    pub const HOME_TAB: &str = "home-tab";
    pub const SETTINGS_TAB: &str = "settings-tab";
    pub const HOME_CONTENT: &str = "home-content";
    pub const SETTINGS_CONTENT: &str = "settings-content";
    pub const SETTINGS_FORM: &str = "settings-form";
    pub const TRADE_PERCENTAGE: &str = "trade-percentage";
    pub const STOP_LOSS_PERCENTAGE: &str = "stop-loss-percentage";
    pub const TAKE_PROFIT_PERCENTAGE: &str = "take-profit-percentage";
    pub const START_BOT: &str = "start-bot";
    pub const STOP_BOT: &str = "stop-bot";

    /// Every id the dashboard touches
    pub const ALL: [&str; 16] = [
        BALANCE,
        TRADES_LIST,
        CHART,
        ERROR_MESSAGES,
        BOT_STATUS,
        EXPORT_CHART,
        HOME_TAB,
        SETTINGS_TAB,
        HOME_CONTENT,
        SETTINGS_CONTENT,
        SETTINGS_FORM,
        TRADE_PERCENTAGE,
        STOP_LOSS_PERCENTAGE,
        TAKE_PROFIT_PERCENTAGE,
        START_BOT,
        STOP_BOT,
    ];
}

/// A list entry: a `div` with a class and one `span` per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub class: String,
    pub lines: Vec<String>,
}

impl ListItem {
    pub fn new(class: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            class: class.into(),
            lines,
        }
    }
}

/// A resolved page region
///
/// Methods take `&self`: elements are handles into a document owned
/// elsewhere, as in the browser.
pub trait Element {
    /// Replace all content with plain text
    fn set_text(&self, text: &str);

    /// Set the foreground color
    fn set_color(&self, color: &str);

    /// Show (`display: block`) or hide (`display: none`)
    fn set_visible(&self, visible: bool);

    /// Replace all content with renderer-generated markup
    fn set_markup(&self, markup: &str);

    /// Remove all content
    fn clear(&self);

    /// Append one list entry; text is never interpreted as markup
    fn append_item(&self, item: &ListItem);

    /// Current value of a form input, `None` for non-inputs
    fn value(&self) -> Option<String>;

    /// Set the value of a form input
    fn set_value(&self, value: &str);
}

/// Element resolver plus the two page-level side effects the dashboard needs
pub trait Dom {
    type Element: Element;

    fn element(&self, id: &str) -> Option<Self::Element>;

    /// Blocking alert dialog
    fn alert(&self, message: &str);

    /// Offer `contents` as a client-side file download
    fn download(&self, file_name: &str, mime: &str, contents: &str) -> Result<()>;
}
