//! Environment configuration, loaded once at startup

use std::str::FromStr;
use thiserror::Error;

use crate::models::StatsScope;

pub const DEFAULT_BASE_URL: &str = "https://v3.football.api-sports.io";

const ENV_API_KEY: &str = "API_FOOTBALL_KEY";
const ENV_BASE_URL: &str = "API_FOOTBALL_BASE_URL";
const ENV_LEAGUE: &str = "API_FOOTBALL_LEAGUE";
const ENV_SEASON: &str = "API_FOOTBALL_SEASON";
const ENV_TIMEOUT: &str = "API_FOOTBALL_TIMEOUT_SECS";
const ENV_SELECTION: &str = "TEAM_SELECTION";
const ENV_HOST: &str = "HOST";
const ENV_PORT: &str = "PORT";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// How a team is picked among several search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Exact name, then substring, then the first result
    #[default]
    PreferNameMatch,
    /// Always the first result
    FirstCandidate,
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "match" | "prefer-match" => Ok(SelectionPolicy::PreferNameMatch),
            "first" => Ok(SelectionPolicy::FirstCandidate),
            other => Err(format!("unknown selection policy: {}", other)),
        }
    }
}

/// API-Football client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Static key sent as `x-apisports-key`
    pub api_key: String,
    /// Base URL without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!("matchtip/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Full application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub scope: StatsScope,
    pub selection: SelectionPolicy,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load from the process environment, reading `.env` first if present
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is fine; real env vars take precedence
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(ENV_API_KEY).ok_or(ConfigError::Missing(ENV_API_KEY))?;

        let mut api = ApiConfig::new(api_key);
        if let Some(base_url) = get(ENV_BASE_URL) {
            api.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = parse_var(ENV_TIMEOUT, get(ENV_TIMEOUT))? {
            api.timeout_secs = timeout;
        }

        let scope = StatsScope {
            league: parse_var(ENV_LEAGUE, get(ENV_LEAGUE))?,
            season: parse_var(ENV_SEASON, get(ENV_SEASON))?,
        };

        let selection = parse_var(ENV_SELECTION, get(ENV_SELECTION))?.unwrap_or_default();
        let host = get(ENV_HOST).unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_var(ENV_PORT, get(ENV_PORT))?.unwrap_or(8080);

        Ok(Self {
            api,
            scope,
            selection,
            host,
            port,
        })
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(var: &'static str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    raw.map(|value| {
        value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value })
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[("API_FOOTBALL_KEY", "secret")])).unwrap();
        assert_eq!(config.api.api_key, "secret");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.scope, StatsScope::default());
        assert_eq!(config.selection, SelectionPolicy::PreferNameMatch);
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_missing_key() {
        let err = AppConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("API_FOOTBALL_KEY"));

        let err = AppConfig::from_lookup(lookup(&[("API_FOOTBALL_KEY", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("API_FOOTBALL_KEY"));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("API_FOOTBALL_KEY", "secret"),
            ("API_FOOTBALL_BASE_URL", "http://localhost:9000/"),
            ("API_FOOTBALL_LEAGUE", "94"),
            ("API_FOOTBALL_SEASON", "2023"),
            ("API_FOOTBALL_TIMEOUT_SECS", "5"),
            ("TEAM_SELECTION", "first"),
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
        ]))
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.scope, StatsScope::new(Some(94), Some(2023)));
        assert_eq!(config.selection, SelectionPolicy::FirstCandidate);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_invalid_value() {
        let err = AppConfig::from_lookup(lookup(&[
            ("API_FOOTBALL_KEY", "secret"),
            ("API_FOOTBALL_SEASON", "last-year"),
        ]))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "API_FOOTBALL_SEASON",
                value: "last-year".to_string()
            }
        );
    }

    #[test]
    fn test_selection_policy_parse() {
        assert_eq!("match".parse::<SelectionPolicy>(), Ok(SelectionPolicy::PreferNameMatch));
        assert_eq!("FIRST".parse::<SelectionPolicy>(), Ok(SelectionPolicy::FirstCandidate));
        assert!("random".parse::<SelectionPolicy>().is_err());
    }
}
