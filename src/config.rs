use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::puzzle::DEFAULT_SALT;

/// Engine configuration with defaults matching the public game.
///
/// # Examples
///
/// ```
/// use coordle_engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.max_guesses, 6);
/// assert_eq!(config.suggestion_limit, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// HMAC key for the daily secret. Changing it changes every answer.
    pub daily_salt: String,

    /// Cities seed file
    pub cities_path: PathBuf,

    /// Country adjacency file. `None` means no neighbor feedback at all.
    pub neighbors_path: Option<PathBuf>,

    pub max_guesses: u32,

    /// Default autocomplete size
    pub suggestion_limit: usize,

    /// Puzzle #1
    pub launch_date: NaiveDate,

    /// Expose the secret through the debug endpoint
    pub debug_enabled: bool,
}

/// Upper bound for caller-supplied suggestion limits
pub const MAX_SUGGESTION_LIMIT: usize = 50;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            daily_salt: DEFAULT_SALT.to_string(),
            cities_path: PathBuf::from("data/cities.min.json"),
            neighbors_path: None,
            max_guesses: 6,
            suggestion_limit: 5,
            launch_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            debug_enabled: false,
        }
    }
}

impl EngineConfig {
    /// Defaults overlaid with `DAILY_SALT`, `CITIES_PATH`, `NEIGHBORS_PATH`,
    /// `MAX_GUESSES`, `SUGGESTION_LIMIT`, `LAUNCH_DATE` and `DEBUG_ENABLED`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`EngineConfig::from_env`] with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            daily_salt: get("DAILY_SALT").unwrap_or(defaults.daily_salt),
            cities_path: get("CITIES_PATH").map(PathBuf::from).unwrap_or(defaults.cities_path),
            neighbors_path: get("NEIGHBORS_PATH").map(PathBuf::from).or(defaults.neighbors_path),
            max_guesses: parse_or("MAX_GUESSES", get("MAX_GUESSES"), defaults.max_guesses),
            suggestion_limit: parse_or("SUGGESTION_LIMIT", get("SUGGESTION_LIMIT"), defaults.suggestion_limit)
                .min(MAX_SUGGESTION_LIMIT),
            launch_date: get("LAUNCH_DATE")
                .and_then(|v| match NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d") {
                    Ok(date) => Some(date),
                    Err(e) => {
                        tracing::warn!("⚠️ Ignoring LAUNCH_DATE={}: {}", v, e);
                        None
                    }
                })
                .unwrap_or(defaults.launch_date),
            debug_enabled: get("DEBUG_ENABLED")
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.debug_enabled),
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, value: Option<String>, default: T) -> T {
    match value {
        Some(v) => v.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("⚠️ Ignoring {}={}: not a number", key, v);
            default
        }),
        None => default,
    }
}
