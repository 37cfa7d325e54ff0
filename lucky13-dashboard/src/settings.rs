//! Settings panel
//!
//! Loads the bot settings into the three numeric form fields and posts the
//! full settings object back on submit. Outcomes are reported with a
//! blocking alert; nothing is retried and nothing is applied optimistically.

use std::rc::Rc;

use tracing::{error, info, warn};

use crate::api::DashboardApi;
use crate::dom::{Dom, Element, ids};
use crate::error::{DashboardError, Result};
use crate::types::{MessageResponse, Settings};

pub const LOAD_FAILED_ALERT: &str = "Er is een fout opgetreden bij het laden van de instellingen.";
pub const SAVE_FAILED_ALERT: &str = "Kon de instellingen niet opslaan.";

/// Form inputs, in settings field order
const FIELDS: [(&str, &str); 3] = [
    (ids::TRADE_PERCENTAGE, "trade_percentage"),
    (ids::STOP_LOSS_PERCENTAGE, "stop_loss_percentage"),
    (ids::TAKE_PROFIT_PERCENTAGE, "take_profit_percentage"),
];

pub struct SettingsPanel<D, A> {
    dom: D,
    api: Rc<A>,
}

impl<D: Dom, A: DashboardApi> SettingsPanel<D, A> {
    pub fn new(dom: D, api: Rc<A>) -> Self {
        Self { dom, api }
    }

    /// Fetch settings and populate the form, defaulting missing values
    pub async fn load(&self) -> Result<Settings> {
        match self.api.fetch_settings().await {
            Ok(response) => {
                let settings = response.or_defaults();
                self.fill_form(&settings);
                Ok(settings)
            }
            Err(e) => {
                error!(error = %e, "❌ Failed to load settings");
                self.dom.alert(LOAD_FAILED_ALERT);
                Err(e)
            }
        }
    }

    /// Write settings into the form inputs that exist
    pub fn fill_form(&self, settings: &Settings) {
        let values = [
            settings.trade_percentage,
            settings.stop_loss_percentage,
            settings.take_profit_percentage,
        ];
        for ((id, _), value) in FIELDS.iter().zip(values) {
            if let Some(input) = self.dom.element(id) {
                input.set_value(&value.to_string());
            }
        }
    }

    /// Parse the three form inputs
    pub fn read_form(&self) -> Result<Settings> {
        let mut values = [0.0_f64; 3];
        for (slot, (id, field)) in values.iter_mut().zip(FIELDS) {
            let raw = self
                .dom
                .element(id)
                .and_then(|input| input.value())
                .unwrap_or_default();
            *slot = raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| DashboardError::InvalidInput { field, value: raw })?;
        }

        Ok(Settings {
            trade_percentage: values[0],
            stop_loss_percentage: values[1],
            take_profit_percentage: values[2],
        })
    }

    /// Post the form; alerts the server's message or the failure
    ///
    /// A refusal that names its reason alerts that reason verbatim.
    pub async fn submit(&self) -> Result<MessageResponse> {
        let settings = match self.read_form() {
            Ok(settings) => settings,
            Err(e) => {
                if let DashboardError::InvalidInput { field, .. } = &e {
                    self.dom.alert(&format!("Ongeldige waarde voor {field}."));
                }
                return Err(e);
            }
        };

        match self.api.save_settings(&settings).await {
            Ok(response) => {
                info!(?settings, "💾 Settings saved");
                self.dom.alert(&response.message);
                Ok(response)
            }
            Err(DashboardError::Rejected(message)) => {
                warn!(%message, "⚠️ Settings rejected");
                self.dom.alert(&message);
                Err(DashboardError::Rejected(message))
            }
            Err(e) => {
                error!(error = %e, "❌ Failed to save settings");
                self.dom.alert(SAVE_FAILED_ALERT);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use crate::test_support::{FakeApi, local_client, serve_once};
    use crate::types::SettingsResponse;

    fn panel(api: FakeApi) -> (SettingsPanel<MemoryDom, FakeApi>, MemoryDom, Rc<FakeApi>) {
        let dom = MemoryDom::with_elements(ids::ALL);
        let api = Rc::new(api);
        (SettingsPanel::new(dom.clone(), Rc::clone(&api)), dom, api)
    }

    fn value(dom: &MemoryDom, id: &str) -> String {
        dom.node(id).unwrap().value
    }

    #[tokio::test]
    async fn test_load_with_no_server_data_uses_defaults() {
        let (panel, dom, _) = panel(FakeApi::default());

        let settings = panel.load().await.unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(value(&dom, ids::TRADE_PERCENTAGE), "0.02");
        assert_eq!(value(&dom, ids::STOP_LOSS_PERCENTAGE), "0.03");
        assert_eq!(value(&dom, ids::TAKE_PROFIT_PERCENTAGE), "0.05");
    }

    #[tokio::test]
    async fn test_load_uses_server_values() {
        let api = FakeApi::default();
        *api.stored.borrow_mut() = SettingsResponse {
            trade_percentage: Some(0.1),
            stop_loss_percentage: None,
            take_profit_percentage: Some(0.25),
        };
        let (panel, dom, _) = panel(api);

        panel.load().await.unwrap();

        assert_eq!(value(&dom, ids::TRADE_PERCENTAGE), "0.1");
        assert_eq!(value(&dom, ids::STOP_LOSS_PERCENTAGE), "0.03");
        assert_eq!(value(&dom, ids::TAKE_PROFIT_PERCENTAGE), "0.25");
    }

    #[tokio::test]
    async fn test_load_failure_alerts() {
        let (panel, dom, _) = panel(FakeApi::failing());

        assert!(panel.load().await.is_err());
        assert_eq!(dom.alerts(), vec![LOAD_FAILED_ALERT.to_string()]);
        assert_eq!(value(&dom, ids::TRADE_PERCENTAGE), "");
    }

    #[tokio::test]
    async fn test_submit_posts_form_and_alerts_message() {
        let (panel, dom, api) = panel(FakeApi::default());
        panel.fill_form(&Settings {
            trade_percentage: 0.04,
            stop_loss_percentage: 0.02,
            take_profit_percentage: 0.08,
        });

        let response = panel.submit().await.unwrap();

        assert_eq!(response.message, "Instellingen opgeslagen");
        assert_eq!(dom.alerts(), vec!["Instellingen opgeslagen".to_string()]);
        assert_eq!(api.saved.borrow()[0].take_profit_percentage, 0.08);
    }

    #[tokio::test]
    async fn test_submit_failure_alerts() {
        let (panel, dom, _) = panel(FakeApi::failing());
        panel.fill_form(&Settings::default());

        assert!(panel.submit().await.is_err());
        assert_eq!(dom.alerts(), vec![SAVE_FAILED_ALERT.to_string()]);
    }

    #[tokio::test]
    async fn test_submit_rejects_unparsable_input_before_request() {
        let (panel, dom, api) = panel(FakeApi::default());
        panel.fill_form(&Settings::default());
        dom.element(ids::STOP_LOSS_PERCENTAGE).unwrap().set_value("drie");

        let err = panel.submit().await.unwrap_err();

        assert!(matches!(
            err,
            DashboardError::InvalidInput { field: "stop_loss_percentage", .. }
        ));
        assert_eq!(api.count("save_settings"), 0);
        assert_eq!(dom.alerts(), vec!["Ongeldige waarde voor stop_loss_percentage.".to_string()]);
    }

    #[tokio::test]
    async fn test_submit_alerts_server_refusal_message() {
        let origin = serve_once(
            "400 Bad Request",
            "application/json",
            r#"{"message": "take_profit_percentage must be a number in (0, 1]"}"#,
        )
        .await;
        let dom = MemoryDom::with_elements(ids::ALL);
        let panel = SettingsPanel::new(dom.clone(), Rc::new(local_client(&origin)));
        panel.fill_form(&Settings::default());

        let err = panel.submit().await.unwrap_err();

        assert!(matches!(err, DashboardError::Rejected(_)));
        assert_eq!(
            dom.alerts(),
            vec!["take_profit_percentage must be a number in (0, 1]".to_string()]
        );
    }

    #[tokio::test]
    async fn test_submit_unreadable_failure_uses_generic_alert() {
        let origin = serve_once("502 Bad Gateway", "text/html", "<h1>Bad Gateway</h1>").await;
        let dom = MemoryDom::with_elements(ids::ALL);
        let panel = SettingsPanel::new(dom.clone(), Rc::new(local_client(&origin)));
        panel.fill_form(&Settings::default());

        assert!(panel.submit().await.is_err());
        assert_eq!(dom.alerts(), vec![SAVE_FAILED_ALERT.to_string()]);
    }
}
