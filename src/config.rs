//! Runtime configuration read from `TILES_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::core::SessionConfig;
use crate::types::TIME_BUDGET_MS;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fixed seed for the run sequence; `None` seeds from the clock.
    pub seed: Option<u32>,
    pub scores_dir: PathBuf,
    pub time_budget_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    /// Skip the advertisement wait after accepting a revive.
    pub no_ads: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            scores_dir: PathBuf::from("."),
            time_budget_ms: TIME_BUDGET_MS,
            log_path: None,
            log_level: LevelFilter::Info,
            no_ads: false,
        }
    }
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup. Unparseable values fall back to the
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("TILES_SEED").and_then(|s| s.parse().ok());

        let scores_dir = var("TILES_SCORES_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.scores_dir);

        let time_budget_ms = var("TILES_TIME_BUDGET_SECS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|&secs| secs > 0)
            .map_or(defaults.time_budget_ms, |secs| secs.saturating_mul(1000));

        let log_path = var("TILES_LOG_PATH").map(PathBuf::from);

        let log_level = var("TILES_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.log_level);

        let no_ads = var("TILES_NO_ADS")
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            seed,
            scores_dir,
            time_budget_ms,
            log_path,
            log_level,
            no_ads,
        }
    }

    /// Seed for the first run: the configured one, else the clock.
    pub fn initial_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            time_budget_ms: self.time_budget_ms,
            ..SessionConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), AppConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("TILES_SEED", "42"),
            ("TILES_SCORES_DIR", "/var/tiles"),
            ("TILES_TIME_BUDGET_SECS", "90"),
            ("TILES_LOG_PATH", "/tmp/tiles.log"),
            ("TILES_LOG_LEVEL", "debug"),
            ("TILES_NO_ADS", "true"),
        ]);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.initial_seed(), 42);
        assert_eq!(cfg.scores_dir, PathBuf::from("/var/tiles"));
        assert_eq!(cfg.time_budget_ms, 90_000);
        assert_eq!(cfg.session_config().time_budget_ms, 90_000);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/tiles.log")));
        assert_eq!(cfg.log_level, LevelFilter::Debug);
        assert!(cfg.no_ads);
    }

    #[test]
    fn invalid_values_fall_back() {
        let cfg = config(&[
            ("TILES_SEED", "abc"),
            ("TILES_TIME_BUDGET_SECS", "0"),
            ("TILES_LOG_LEVEL", "loud"),
            ("TILES_LOG_PATH", "   "),
            ("TILES_NO_ADS", "nope"),
        ]);
        assert_eq!(cfg, AppConfig::default());
    }
}
