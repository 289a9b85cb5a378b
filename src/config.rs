use std::path::PathBuf;
use std::time::Duration;

use crate::error::{PremError, Result};

pub const DEFAULT_API_BASE: &str = "https://fantasy.premierleague.com/api";
const CACHE_DIR: &str = "prem";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for one run, resolved once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub cache_dir: PathBuf,
    pub refresh: bool,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads the environment; `cache_dir` wins over every env lookup when given.
    pub fn resolve(cache_dir: Option<PathBuf>, refresh: bool) -> Result<Self> {
        Self::resolve_with(cache_dir, refresh, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        cache_dir: Option<PathBuf>,
        refresh: bool,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let cache_dir = cache_dir
            .or_else(|| non_empty("PREM_CACHE_DIR").map(PathBuf::from))
            .or_else(|| {
                non_empty("XDG_CACHE_HOME").map(|base| PathBuf::from(base).join(CACHE_DIR))
            })
            .or_else(|| {
                non_empty("HOME").map(|home| PathBuf::from(home).join(".cache").join(CACHE_DIR))
            })
            .ok_or(PremError::NoCacheDir)?;

        let api_base = non_empty("PREM_API_BASE")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_secs = non_empty("PREM_HTTP_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS)
            .max(1);

        Ok(Self {
            api_base,
            cache_dir,
            refresh,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn bootstrap_url(&self) -> String {
        format!("{}/bootstrap-static/", self.api_base)
    }

    pub fn fixtures_url(&self) -> String {
        format!("{}/fixtures/", self.api_base)
    }
}
