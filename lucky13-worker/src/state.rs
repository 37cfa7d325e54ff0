//! Bot state in KV storage
//!
//! Two documents in the `STATE` namespace: the bot settings and the
//! running flag. Missing documents read as defaults.

use lucky13_dashboard::{BotCommandResponse, Settings};
use worker::Env;

use crate::error::{Result, WorkerError};

const KV_BINDING: &str = "STATE";
const SETTINGS_KEY: &str = "settings";
const RUNNING_KEY: &str = "bot_running";

pub const SETTINGS_SAVED: &str = "Instellingen opgeslagen";
pub const BOT_STARTED: &str = "Bot gestart";
pub const BOT_STOPPED: &str = "Bot gestopt";

fn storage_error(err: impl std::fmt::Display) -> WorkerError {
    WorkerError::Storage(err.to_string())
}

/// Stored settings, defaults when none are stored
pub async fn get_settings(env: &Env) -> Result<Settings> {
    let kv = env.kv(KV_BINDING)?;
    let stored = kv
        .get(SETTINGS_KEY)
        .json::<Settings>()
        .await
        .map_err(storage_error)?;
    Ok(stored.unwrap_or_default())
}

pub async fn save_settings(env: &Env, settings: &Settings) -> Result<()> {
    let kv = env.kv(KV_BINDING)?;
    kv.put(SETTINGS_KEY, settings)
        .map_err(storage_error)?
        .execute()
        .await
        .map_err(storage_error)
}

/// Stored running flag, `false` when never set
pub async fn get_running(env: &Env) -> Result<bool> {
    let kv = env.kv(KV_BINDING)?;
    let stored = kv
        .get(RUNNING_KEY)
        .json::<bool>()
        .await
        .map_err(storage_error)?;
    Ok(stored.unwrap_or(false))
}

pub async fn save_running(env: &Env, running: bool) -> Result<()> {
    let kv = env.kv(KV_BINDING)?;
    kv.put(RUNNING_KEY, running)
        .map_err(storage_error)?
        .execute()
        .await
        .map_err(storage_error)
}

/// Reject settings outside `(0, 1]`
pub fn validate_settings(settings: &Settings) -> Result<()> {
    match settings.invalid_field() {
        Some(field) => Err(WorkerError::Validation(format!(
            "{field} must be a number in (0, 1]"
        ))),
        None => Ok(()),
    }
}

/// Reply to a start / stop command
pub fn command_reply(running: bool) -> BotCommandResponse {
    BotCommandResponse {
        status: if running { BOT_STARTED } else { BOT_STOPPED }.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_settings() {
        assert!(validate_settings(&Settings::default()).is_ok());
        assert!(
            validate_settings(&Settings {
                trade_percentage: 1.0,
                ..Settings::default()
            })
            .is_ok()
        );

        let err = validate_settings(&Settings {
            take_profit_percentage: 0.0,
            ..Settings::default()
        })
        .unwrap_err();
        assert!(matches!(err, WorkerError::Validation(_)));
        assert!(err.to_string().contains("take_profit_percentage"));

        assert!(
            validate_settings(&Settings {
                stop_loss_percentage: f64::NAN,
                ..Settings::default()
            })
            .is_err()
        );
    }

    #[test]
    fn test_command_reply() {
        assert_eq!(command_reply(true).status, "Bot gestart");
        assert_eq!(command_reply(false).status, "Bot gestopt");
    }
}
