//! Dashboard assembly
//!
//! Wires the renderer to a channel client and groups the panels that share
//! one page and one API client.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::api::DashboardApi;
use crate::channel::ChannelClient;
use crate::control::BotControl;
use crate::dom::Dom;
use crate::error::Result;
use crate::export;
use crate::render::Renderer;
use crate::settings::SettingsPanel;
use crate::tabs::TabSwitcher;
use crate::types::EventKind;

pub struct Dashboard<D, A> {
    renderer: Rc<RefCell<Renderer<D>>>,
    settings: Rc<SettingsPanel<D, A>>,
    tabs: TabSwitcher<D, A>,
    control: BotControl<D, A>,
}

impl<D: Dom + Clone + 'static, A: DashboardApi> Dashboard<D, A> {
    pub fn new(dom: D, api: A) -> Self {
        let api = Rc::new(api);
        let settings = Rc::new(SettingsPanel::new(dom.clone(), Rc::clone(&api)));

        Self {
            renderer: Rc::new(RefCell::new(Renderer::new(dom.clone()))),
            tabs: TabSwitcher::new(dom.clone(), Rc::clone(&settings)),
            control: BotControl::new(dom, api),
            settings,
        }
    }

    /// Subscribe the renderer to every push event on `client`
    pub fn attach<T>(&self, client: &mut ChannelClient<T>) {
        for kind in EventKind::ALL {
            let renderer = Rc::clone(&self.renderer);
            client.subscribe(kind, move |event| renderer.borrow_mut().render(event));
        }
    }

    /// Export the chart as `chart_<today>.csv`
    pub fn export_chart(&self) -> Result<String> {
        export::export_chart_today(&self.renderer.borrow())
    }

    pub fn renderer(&self) -> Ref<'_, Renderer<D>> {
        self.renderer.borrow()
    }

    pub fn settings(&self) -> &SettingsPanel<D, A> {
        &self.settings
    }

    pub fn tabs(&self) -> &TabSwitcher<D, A> {
        &self.tabs
    }

    pub fn control(&self) -> &BotControl<D, A> {
        &self.control
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ReplayTransport;
    use crate::dom::{MemoryDom, ids};
    use crate::error::DashboardError;
    use crate::tabs::Tab;
    use crate::test_support::FakeApi;

    const SESSION: [&str; 6] = [
        r#"{"event": "update_balance", "data": {"balance": 100}}"#,
        r#"{"event": "bot_status", "data": {"running": true}}"#,
        r#"{"event": "update_trades", "data": {"trades": [
            {"symbol": "BTC/USDT", "status": "active", "current_profit": 0.03},
            {"symbol": "ETH/USDT", "status": "active", "current_profit": -0.02},
            {"symbol": "XRP/USDT", "status": "active", "current_profit": 0.0}
        ]}}"#,
        r#"{"event": "update_graph", "data": {"winnings": 120, "deposits": 50}}"#,
        r#"{"event": "update_chart", "data": {"labels": ["09:00"], "values": [1]}}"#,
        r#"{"event": "error_messages", "data": ["Bybit API timeout"]}"#,
    ];

    #[tokio::test]
    async fn test_session_renders_every_region() {
        let dom = MemoryDom::with_elements(ids::ALL);
        let dashboard = Dashboard::new(dom.clone(), FakeApi::default());
        let mut client = ChannelClient::new(ReplayTransport::from_texts(SESSION));
        dashboard.attach(&mut client);

        let delivered = client.run().await;

        // The deprecated chart frame is rejected
        assert_eq!(delivered, 5);
        assert_eq!(dom.node(ids::BALANCE).unwrap().text, "Saldo: 100.00 USDT");
        assert_eq!(dom.node(ids::BOT_STATUS).unwrap().text, "✅ Bot is actief");
        assert_eq!(dom.node(ids::TRADES_LIST).unwrap().items.len(), 3);
        assert_eq!(
            dom.node(ids::ERROR_MESSAGES).unwrap().items[0].lines,
            vec!["Bybit API timeout"]
        );
        assert!(dom.node(ids::CHART).unwrap().markup.contains(">Stortingen<"));
        assert_eq!(client.view().graph.map(|g| g.winnings), Some(120.0));
    }

    #[tokio::test]
    async fn test_replayed_trades_render_identically() {
        let trades = SESSION[2];
        let dom = MemoryDom::with_elements(ids::ALL);
        let dashboard = Dashboard::new(dom.clone(), FakeApi::default());

        let mut client = ChannelClient::new(ReplayTransport::from_texts([trades]));
        dashboard.attach(&mut client);
        client.run().await;
        let first = dom.node(ids::TRADES_LIST).unwrap();

        let mut client = ChannelClient::new(ReplayTransport::from_texts([trades]));
        dashboard.attach(&mut client);
        client.run().await;

        assert_eq!(dom.node(ids::TRADES_LIST).unwrap(), first);
    }

    #[tokio::test]
    async fn test_export_follows_chart_lifecycle() {
        let dom = MemoryDom::with_elements(ids::ALL);
        let dashboard = Dashboard::new(dom.clone(), FakeApi::default());

        assert!(matches!(dashboard.export_chart(), Err(DashboardError::NoChartData)));
        assert!(dom.downloads().is_empty());

        let mut client = ChannelClient::new(ReplayTransport::from_texts([SESSION[3]]));
        dashboard.attach(&mut client);
        client.run().await;

        let name = dashboard.export_chart().unwrap();
        assert!(name.starts_with("chart_") && name.ends_with(".csv"));
        assert_eq!(dom.downloads()[0].contents, "Label,Value\nWinsten,120\nStortingen,50\n");
    }

    #[tokio::test]
    async fn test_panels_share_the_page() {
        let dom = MemoryDom::with_elements(ids::ALL);
        let dashboard = Dashboard::new(dom.clone(), FakeApi::default());

        dashboard.tabs().select(Tab::Settings).await;
        assert_eq!(dom.node(ids::TRADE_PERCENTAGE).unwrap().value, "0.02");

        dashboard.settings().submit().await.unwrap();
        dashboard.control().stop().await.unwrap();
        assert_eq!(
            dom.alerts(),
            vec!["Instellingen opgeslagen".to_string(), "Bot gestopt".to_string()]
        );
        assert!(dashboard.renderer().chart_snapshot().is_none());
    }
}
