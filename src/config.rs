//! Run configuration read from the environment.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::core::GameConfig;
use crate::types::{FALL_SPEED, SOFT_DROP_SPEED};

pub const ENV_SEED: &str = "PUYO_SEED";
pub const ENV_FALL_SPEED: &str = "PUYO_FALL_SPEED";
pub const ENV_SOFT_DROP_SPEED: &str = "PUYO_SOFT_DROP_SPEED";
pub const ENV_EVENT_LOG_PATH: &str = "PUYO_EVENT_LOG_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub seed: u32,
    pub fall_speed: f32,
    pub soft_drop_speed: f32,
    /// JSON-lines event log, disabled when `None`
    pub event_log_path: Option<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            fall_speed: FALL_SPEED,
            soft_drop_speed: SOFT_DROP_SPEED,
            event_log_path: None,
        }
    }
}

impl RunConfig {
    /// Read `PUYO_*` variables, falling back to defaults for unset or blank ones.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`RunConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        let seed = parse_var(ENV_SEED, get(ENV_SEED))?.unwrap_or(defaults.seed);
        let fall_speed =
            parse_var(ENV_FALL_SPEED, get(ENV_FALL_SPEED))?.unwrap_or(defaults.fall_speed);
        let soft_drop_speed = parse_var(ENV_SOFT_DROP_SPEED, get(ENV_SOFT_DROP_SPEED))?
            .unwrap_or(defaults.soft_drop_speed);

        anyhow::ensure!(
            fall_speed > 0.0 && soft_drop_speed > 0.0,
            "fall speeds must be positive (got {fall_speed} and {soft_drop_speed})"
        );

        Ok(Self {
            seed,
            fall_speed,
            soft_drop_speed,
            event_log_path: get(ENV_EVENT_LOG_PATH),
        })
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            fall_speed: self.fall_speed,
            soft_drop_speed: self.soft_drop_speed,
            ..GameConfig::default().with_seed(self.seed)
        }
    }
}

fn parse_var<T>(key: &str, value: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .map(|s| s.parse::<T>().with_context(|| format!("invalid {key}={s:?}")))
        .transpose()
}
