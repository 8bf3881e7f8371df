//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the session user record and the optional assistant tuning override.
//! Every read is best-effort: missing storage, missing keys and malformed
//! JSON all read as absent.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use taskbot::TaskBotConfig;

/// Local storage key for a JSON `TaskBotConfig` override.
pub const TASKBOT_CONFIG_KEY: &str = "taskbot_config";

/// Load the raw string stored under `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        _ = key;
        None
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("storage: failed to write {key}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        _ = (key, value);
    }
}

/// Assistant tuning, from the stored override when present and valid.
pub fn load_taskbot_config() -> TaskBotConfig {
    load_raw(TASKBOT_CONFIG_KEY).map_or_else(TaskBotConfig::default, |raw| parse_config_override(&raw))
}

/// Parse a stored override, logging and falling back to defaults on error.
pub fn parse_config_override(raw: &str) -> TaskBotConfig {
    match TaskBotConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("storage: ignoring {TASKBOT_CONFIG_KEY}: {err}");
            TaskBotConfig::default()
        }
    }
}
