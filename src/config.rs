use anyhow::{Context, Result};
use std::time::Duration;

/// Bundled config for builds that ship without a `.env` (mobile, web)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_CHAT_PATH: &str = "/api/chat";
const DEFAULT_HEALTH_PATH: &str = "/api/health";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub chat_path: String,
    pub health_path: String,
    /// Transport timeout. `None` leaves it to the HTTP client.
    pub request_timeout: Option<Duration>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
            request_timeout: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let request_timeout = match non_empty("PLACEMENT_REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("PLACEMENT_REQUEST_TIMEOUT_SECS is not a number: {raw}"))?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_base: non_empty("PLACEMENT_API_BASE").unwrap_or(defaults.api_base),
            chat_path: non_empty("PLACEMENT_CHAT_PATH").unwrap_or(defaults.chat_path),
            health_path: non_empty("PLACEMENT_HEALTH_PATH").unwrap_or(defaults.health_path),
            request_timeout,
            log_filter: non_empty("PLACEMENT_LOG").unwrap_or(defaults.log_filter),
        })
    }

    pub fn chat_url(&self) -> String {
        join_url(&self.api_base, &self.chat_path)
    }

    pub fn health_url(&self) -> String {
        join_url(&self.api_base, &self.health_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Load `.env` when present, then fill remaining gaps from the bundled config.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if std::env::var(&key).is_err() {
            // SAFETY: called once at startup before any threads are spawned
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}
