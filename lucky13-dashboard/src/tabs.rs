//! Home / settings tab switcher

use std::rc::Rc;

use crate::api::DashboardApi;
use crate::dom::{Dom, Element, ids};
use crate::settings::SettingsPanel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Settings,
}

pub struct TabSwitcher<D, A> {
    dom: D,
    settings: Rc<SettingsPanel<D, A>>,
}

impl<D: Dom, A: DashboardApi> TabSwitcher<D, A> {
    pub fn new(dom: D, settings: Rc<SettingsPanel<D, A>>) -> Self {
        Self { dom, settings }
    }

    /// Show one pane, hide the other; the settings pane reloads settings
    pub async fn select(&self, tab: Tab) {
        let home = tab == Tab::Home;
        if let Some(pane) = self.dom.element(ids::HOME_CONTENT) {
            pane.set_visible(home);
        }
        if let Some(pane) = self.dom.element(ids::SETTINGS_CONTENT) {
            pane.set_visible(!home);
        }

        if tab == Tab::Settings {
            // Failure is already alerted by the panel
            let _ = self.settings.load().await;
        }
    }
}
