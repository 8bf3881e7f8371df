//! Assistant tunables.
//!
//! Defaults match the shipped widget. Browser hosts may override them with a
//! JSON document; native hosts can read `TASKBOT_*` environment variables:
//!
//! - `TASKBOT_REPLY_LATENCY_MS`: default 1500
//! - `TASKBOT_PROACTIVE_DELAY_MS`: default 5000
//! - `TASKBOT_PROACTIVE_THRESHOLD`: default 0.7, in `[0, 1]`
//! - `TASKBOT_SURFACE_PROACTIVE`: `true` / `false`, default false
//! - `TASKBOT_GAZE_RADIUS`: default 200

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gaze::GazeLimits;

pub const DEFAULT_REPLY_LATENCY_MS: u32 = 1500;
pub const DEFAULT_PROACTIVE_DELAY_MS: u32 = 5000;
pub const DEFAULT_PROACTIVE_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskBotConfig {
    /// Simulated time the assistant spends "typing" a reply.
    pub reply_latency_ms: u32,
    /// Delay between arming a proactive nudge and its firing.
    pub proactive_delay_ms: u32,
    /// A nudge arms only when the roll lands strictly above this.
    pub proactive_threshold: f64,
    /// Append the picked nudge to the transcript instead of only changing mood.
    pub surface_proactive: bool,
    pub gaze: GazeLimits,
}

impl Default for TaskBotConfig {
    fn default() -> Self {
        Self {
            reply_latency_ms: DEFAULT_REPLY_LATENCY_MS,
            proactive_delay_ms: DEFAULT_PROACTIVE_DELAY_MS,
            proactive_threshold: DEFAULT_PROACTIVE_THRESHOLD,
            surface_proactive: false,
            gaze: GazeLimits::default(),
        }
    }
}

impl TaskBotConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Build from `TASKBOT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Absent keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            reply_latency_ms: parse_key(&lookup, "TASKBOT_REPLY_LATENCY_MS", defaults.reply_latency_ms)?,
            proactive_delay_ms: parse_key(&lookup, "TASKBOT_PROACTIVE_DELAY_MS", defaults.proactive_delay_ms)?,
            proactive_threshold: parse_key(&lookup, "TASKBOT_PROACTIVE_THRESHOLD", defaults.proactive_threshold)?,
            surface_proactive: parse_key(&lookup, "TASKBOT_SURFACE_PROACTIVE", defaults.surface_proactive)?,
            gaze: GazeLimits {
                radius: parse_key(&lookup, "TASKBOT_GAZE_RADIUS", defaults.gaze.radius)?,
                ..defaults.gaze
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controller cannot use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.proactive_threshold) {
            return Err(ConfigError::OutOfRange { field: "proactive_threshold", value: self.proactive_threshold });
        }
        let gaze = &self.gaze;
        for (field, value) in [
            ("gaze.radius", gaze.radius),
            ("gaze.divisor", gaze.divisor),
            ("gaze.max_x", gaze.max_x),
            ("gaze.max_y", gaze.max_y),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}

fn parse_key<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidEnv { key, raw }),
    }
}
