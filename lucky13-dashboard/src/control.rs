//! Start / stop buttons
//!
//! The indicator is not touched here: it changes only when the server
//! pushes a `bot_status` event.

use std::rc::Rc;

use tracing::{error, info};

use crate::api::DashboardApi;
use crate::dom::Dom;
use crate::error::Result;
use crate::types::BotCommandResponse;

pub const CONTROL_FAILED_ALERT: &str = "Kon de bot niet bedienen.";

pub struct BotControl<D, A> {
    dom: D,
    api: Rc<A>,
}

impl<D: Dom, A: DashboardApi> BotControl<D, A> {
    pub fn new(dom: D, api: Rc<A>) -> Self {
        Self { dom, api }
    }

    pub async fn start(&self) -> Result<BotCommandResponse> {
        let result = self.api.start_bot().await;
        self.report("start", result)
    }

    pub async fn stop(&self) -> Result<BotCommandResponse> {
        let result = self.api.stop_bot().await;
        self.report("stop", result)
    }

    fn report(
        &self,
        command: &str,
        result: Result<BotCommandResponse>,
    ) -> Result<BotCommandResponse> {
        match &result {
            Ok(response) => {
                info!(command, status = %response.status, "🤖 Bot command accepted");
                self.dom.alert(&response.status);
            }
            Err(e) => {
                error!(command, error = %e, "❌ Bot command failed");
                self.dom.alert(CONTROL_FAILED_ALERT);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDom, ids};
    use crate::test_support::FakeApi;

    #[tokio::test]
    async fn test_start_and_stop_alert_status() {
        let dom = MemoryDom::with_elements(ids::ALL);
        let api = Rc::new(FakeApi::default());
        let control = BotControl::new(dom.clone(), Rc::clone(&api));

        control.start().await.unwrap();
        control.stop().await.unwrap();

        assert_eq!(dom.alerts(), vec!["Bot gestart".to_string(), "Bot gestopt".to_string()]);
        assert_eq!(api.count("start_bot"), 1);
        assert_eq!(api.count("stop_bot"), 1);
        // No optimistic indicator update
        assert_eq!(dom.node(ids::BOT_STATUS).unwrap().text, "");
    }

    #[tokio::test]
    async fn test_failure_alerts() {
        let dom = MemoryDom::new();
        let control = BotControl::new(dom.clone(), Rc::new(FakeApi::failing()));

        assert!(control.start().await.is_err());
        assert_eq!(dom.alerts(), vec![CONTROL_FAILED_ALERT.to_string()]);
    }
}
