//! Browser bindings (wasm32, feature `browser`)
//!
//! web-sys document behind [`Dom`], gloo-net socket behind [`Transport`],
//! console logging, and the start hook that wires the page.

use std::io;
use std::rc::Rc;

use futures::StreamExt;
use gloo_net::websocket::{Message, WebSocketError, futures::WebSocket};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Blob, BlobPropertyBag, Document, Event, HtmlAnchorElement, HtmlElement, HtmlInputElement, Url,
    Window,
};

use crate::api::ApiClient;
use crate::app::Dashboard;
use crate::channel::{ChannelClient, Frame, Transport};
use crate::config::DashboardConfig;
use crate::dom::{self, Dom, ListItem, ids};
use crate::error::{DashboardError, Result};
use crate::tabs::Tab;

const LOG_LEVEL_ATTRIBUTE: &str = "data-log-level";

fn dom_error(err: JsValue) -> DashboardError {
    DashboardError::Dom(format!("{err:?}"))
}

fn to_js(err: DashboardError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The page's document
#[derive(Debug, Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    pub fn new(window: Window) -> Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| DashboardError::Dom("no document".into()))?;
        Ok(Self { window, document })
    }

    /// `data-log-level` of the page body, set by the server that serves it
    fn log_level(&self) -> Option<String> {
        self.document
            .body()?
            .get_attribute(LOG_LEVEL_ATTRIBUTE)
            .filter(|level| !level.trim().is_empty())
    }

    /// Run `handler` on every `event` of element `id`; absent elements are skipped
    fn listen(
        &self,
        id: &str,
        event: &str,
        handler: impl FnMut(Event) + 'static,
    ) -> std::result::Result<(), JsValue> {
        let Some(target) = self.document.get_element_by_id(id) else {
            warn!(id, "⚠️ Element missing, listener not attached");
            return Ok(());
        };

        let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

impl Dom for WebDom {
    type Element = WebElement;

    fn element(&self, id: &str) -> Option<WebElement> {
        let el = self.document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
        Some(WebElement {
            el,
            document: self.document.clone(),
        })
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            warn!(error = ?e, "⚠️ Alert failed");
        }
    }

    fn download(&self, file_name: &str, mime: &str, contents: &str) -> Result<()> {
        let parts = js_sys::Array::of1(&JsValue::from_str(contents));
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(dom_error)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(dom_error)?;

        let anchor: HtmlAnchorElement = self
            .document
            .create_element("a")
            .map_err(dom_error)?
            .dyn_into()
            .map_err(|_| DashboardError::Dom("anchor element expected".into()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        Url::revoke_object_url(&url).map_err(dom_error)
    }
}

/// One page element
#[derive(Debug, Clone)]
pub struct WebElement {
    el: HtmlElement,
    document: Document,
}

impl WebElement {
    fn style(&self, property: &str, value: &str) {
        if let Err(e) = self.el.style().set_property(property, value) {
            warn!(property, error = ?e, "⚠️ Style update failed");
        }
    }

    fn build_item(&self, item: &ListItem) -> std::result::Result<(), JsValue> {
        let entry = self.document.create_element("div")?;
        entry.set_class_name(&item.class);
        for line in &item.lines {
            let span = self.document.create_element("span")?;
            span.set_text_content(Some(line));
            entry.append_child(&span)?;
        }
        self.el.append_child(&entry)?;
        Ok(())
    }
}

impl dom::Element for WebElement {
    fn set_text(&self, text: &str) {
        self.el.set_text_content(Some(text));
    }

    fn set_color(&self, color: &str) {
        self.style("color", color);
    }

    fn set_visible(&self, visible: bool) {
        self.style("display", if visible { "block" } else { "none" });
    }

    fn set_markup(&self, markup: &str) {
        self.el.set_inner_html(markup);
    }

    fn clear(&self) {
        self.el.set_inner_html("");
    }

    fn append_item(&self, item: &ListItem) {
        if let Err(e) = self.build_item(item) {
            warn!(error = ?e, "⚠️ List item not appended");
        }
    }

    fn value(&self) -> Option<String> {
        self.el.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value)
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        }
    }
}

/// gloo-net WebSocket as a push transport
pub struct GlooTransport {
    ws: WebSocket,
}

impl GlooTransport {
    pub fn open(url: &str) -> Result<Self> {
        let ws = WebSocket::open(url).map_err(|e| DashboardError::Transport(e.to_string()))?;
        Ok(Self { ws })
    }
}

impl Transport for GlooTransport {
    async fn next_frame(&mut self) -> Option<Frame> {
        Some(match self.ws.next().await? {
            Ok(Message::Text(text)) => Frame::Text(text),
            Ok(Message::Bytes(bytes)) => Frame::Binary(bytes),
            Err(WebSocketError::ConnectionClose(event)) => Frame::Closed {
                code: Some(event.code),
                reason: event.reason,
            },
            Err(e) => Frame::Closed {
                code: None,
                reason: e.to_string(),
            },
        })
    }
}

/// Formatted log lines go to the browser console
struct ConsoleWriter;

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let line = String::from_utf8_lossy(buf);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_writer(|| ConsoleWriter)
        .try_init();
}

/// Page entry point
#[wasm_bindgen(start)]
pub fn start() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let dom = WebDom::new(window.clone()).map_err(to_js)?;
    let mut config = DashboardConfig::new(&window.location().origin()?).map_err(to_js)?;
    if let Some(level) = dom.log_level() {
        config = config.with_log_level(level);
    }
    init_logging(&config.log_level);
    config.validate().map_err(to_js)?;

    let dashboard = Rc::new(Dashboard::new(dom.clone(), ApiClient::new(config.clone())));

    for (id, tab) in [(ids::HOME_TAB, Tab::Home), (ids::SETTINGS_TAB, Tab::Settings)] {
        let dashboard = Rc::clone(&dashboard);
        dom.listen(id, "click", move |_| {
            let dashboard = Rc::clone(&dashboard);
            spawn_local(async move { dashboard.tabs().select(tab).await });
        })?;
    }

    {
        let dashboard = Rc::clone(&dashboard);
        dom.listen(ids::SETTINGS_FORM, "submit", move |event: Event| {
            event.prevent_default();
            let dashboard = Rc::clone(&dashboard);
            spawn_local(async move {
                let _ = dashboard.settings().submit().await;
            });
        })?;
    }

    {
        let dashboard = Rc::clone(&dashboard);
        dom.listen(ids::EXPORT_CHART, "click", move |_| {
            // Failures are logged and alerted by the export itself
            let _ = dashboard.export_chart();
        })?;
    }

    for (id, start) in [(ids::START_BOT, true), (ids::STOP_BOT, false)] {
        let dashboard = Rc::clone(&dashboard);
        dom.listen(id, "click", move |_| {
            let dashboard = Rc::clone(&dashboard);
            spawn_local(async move {
                let _ = if start {
                    dashboard.control().start().await
                } else {
                    dashboard.control().stop().await
                };
            });
        })?;
    }

    let socket_url = config.socket_url().map_err(to_js)?;
    let transport = GlooTransport::open(socket_url.as_str()).map_err(to_js)?;
    let mut client = ChannelClient::new(transport);
    dashboard.attach(&mut client);

    info!(url = %socket_url, "🔌 Push channel connecting");
    spawn_local(async move {
        let delivered = client.run().await;
        info!(delivered, "🔌 Push channel finished");
    });

    Ok(())
}
