//! Startup configuration
//!
//! Read once from the environment (after loading `.env`). A missing API key
//! or vector store id stops the server before it binds.

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_AGENT_TIMEOUT: Duration = Duration::from_secs(300);
pub const DEFAULT_FILE_SEARCH_MAX_RESULTS: u32 = 3;
pub const DEFAULT_SESSION_IDLE_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Range the hosted file search accepts for `max_num_results`
const FILE_SEARCH_MAX_RESULTS_RANGE: std::ops::RangeInclusive<u32> = 1..=50;

/// Configuration errors are fatal at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub vector_store_id: String,
    pub port: u16,
    pub model: String,
    pub base_url: String,
    pub agent_timeout: Duration,
    pub file_search_max_results: u32,
    /// Sessions untouched for this long are dropped
    pub session_idle_timeout: Duration,
}

impl Config {
    /// Required values plus defaults for everything else
    pub fn new(api_key: impl Into<String>, vector_store_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            vector_store_id: vector_store_id.into(),
            port: DEFAULT_PORT,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            agent_timeout: DEFAULT_AGENT_TIMEOUT,
            file_search_max_results: DEFAULT_FILE_SEARCH_MAX_RESULTS,
            session_idle_timeout: DEFAULT_SESSION_IDLE_TIMEOUT,
        }
    }

    /// Load `.env` (overriding existing variables) then read the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv_override() {
            Ok(path) => tracing::info!(path = %path.display(), "Loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Failed to load .env"),
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;
        let vector_store_id = get("VECTOR_STORE_ID")
            .or_else(|| get("vector_store_id"))
            .ok_or(ConfigError::Missing("VECTOR_STORE_ID"))?;

        let mut config = Self::new(api_key, vector_store_id);

        if let Some(port) = get("RESEARCH_PORT") {
            config.port = parse("RESEARCH_PORT", &port)?;
        }
        if let Some(model) = get("RESEARCH_MODEL") {
            config.model = model;
        }
        if let Some(base_url) = get("OPENAI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(secs) = get("RESEARCH_AGENT_TIMEOUT_SECS") {
            config.agent_timeout = Duration::from_secs(parse_in_range(
                "RESEARCH_AGENT_TIMEOUT_SECS",
                &secs,
                1..=u64::MAX,
            )?);
        }
        if let Some(max) = get("FILE_SEARCH_MAX_RESULTS") {
            config.file_search_max_results =
                parse_in_range("FILE_SEARCH_MAX_RESULTS", &max, FILE_SEARCH_MAX_RESULTS_RANGE)?;
        }
        if let Some(secs) = get("RESEARCH_SESSION_IDLE_SECS") {
            config.session_idle_timeout = Duration::from_secs(parse_in_range(
                "RESEARCH_SESSION_IDLE_SECS",
                &secs,
                1..=u64::MAX,
            )?);
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}

fn parse_in_range<T>(
    name: &'static str,
    value: &str,
    range: std::ops::RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd,
{
    let parsed = parse(name, value)?;
    if range.contains(&parsed) {
        Ok(parsed)
    } else {
        Err(ConfigError::Invalid {
            name,
            value: value.to_string(),
        })
    }
}
