//! HTTP client for API-Football v3

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use super::types::{extract_record, Envelope, TeamEntry};
use super::FootballApi;
use crate::config::ApiConfig;
use crate::models::{StatsScope, TeamCandidate, TeamRecord};

/// Authentication header expected by api-sports.io
const API_KEY_HEADER: &str = "x-apisports-key";

/// Upstream API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("unexpected status {status} from {endpoint}")]
    Status { status: StatusCode, endpoint: String },

    #[error("API reported an error: {0}")]
    Api(String),

    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

/// API-Football client
pub struct ApiFootballClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ApiFootballClient {
    /// Create a new client with the given configuration
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build URL for an endpoint path
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    /// GET an endpoint and unwrap the response envelope
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, ApiError> {
        let url = self.build_url(path);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("API-Football {} returned {}", path, status);
            return Err(ApiError::Status {
                status,
                endpoint: path.to_string(),
            });
        }

        let body = response.bytes().await?;
        let envelope: Envelope<T> =
            serde_json::from_slice(&body).map_err(|source| ApiError::Decode {
                endpoint: path.to_string(),
                source,
            })?;

        if let Some(message) = envelope.error_message() {
            tracing::warn!("API-Football {} reported: {}", path, message);
            return Err(ApiError::Api(message));
        }

        Ok(envelope.response)
    }
}

/// Query parameters for the statistics endpoint
fn statistics_query(team_id: u32, scope: &StatsScope) -> Vec<(&'static str, String)> {
    let mut query = vec![("team", team_id.to_string())];
    if let Some(league) = scope.league {
        query.push(("league", league.to_string()));
    }
    if let Some(season) = scope.season {
        query.push(("season", season.to_string()));
    }
    query
}

#[async_trait]
impl FootballApi for ApiFootballClient {
    async fn search_teams(&self, name: &str) -> Result<Vec<TeamCandidate>, ApiError> {
        tracing::info!("Searching teams: {:?}", name);

        let entries: Vec<TeamEntry> = self
            .get("teams", &[("name", name.to_string())])
            .await?
            .unwrap_or_default();

        Ok(entries.into_iter().map(TeamCandidate::from).collect())
    }

    async fn team_statistics(
        &self,
        team_id: u32,
        scope: &StatsScope,
    ) -> Result<Option<TeamRecord>, ApiError> {
        tracing::info!("Fetching statistics: team={} scope={:?}", team_id, scope);

        let response: Option<Value> = self
            .get("teams/statistics", &statistics_query(team_id, scope))
            .await?;

        Ok(response.as_ref().and_then(extract_record))
    }
}
