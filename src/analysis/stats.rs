//! Team statistics lookup

use std::sync::Arc;

use crate::api_football::FootballApi;
use crate::error::AnalysisError;
use crate::models::{StatsScope, TeamCandidate, TeamRecord};

/// Fetches win/draw/loss records within a fixed scope
pub struct StatsFetcher {
    api: Arc<dyn FootballApi>,
    scope: StatsScope,
}

impl StatsFetcher {
    pub fn new(api: Arc<dyn FootballApi>, scope: StatsScope) -> Self {
        Self { api, scope }
    }

    pub fn scope(&self) -> StatsScope {
        self.scope
    }

    /// Record for a resolved team
    pub async fn fetch(&self, team: &TeamCandidate) -> Result<TeamRecord, AnalysisError> {
        match self.api.team_statistics(team.id, &self.scope).await? {
            Some(record) => {
                tracing::info!(
                    "{}: {}W / {}D / {}L",
                    team.name,
                    record.wins,
                    record.draws,
                    record.losses
                );
                Ok(record)
            }
            None => {
                tracing::warn!("No statistics for {} (id {}) in {:?}", team.name, team.id, self.scope);
                Err(AnalysisError::DataUnavailable {
                    team: team.name.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_football::fake::FakeFootballApi;

    #[tokio::test]
    async fn test_fetch_record() {
        let api = Arc::new(FakeFootballApi::new().with_stats(211, TeamRecord::new(28, 5, 1)));
        let fetcher = StatsFetcher::new(api, StatsScope::default());

        let record = fetcher
            .fetch(&TeamCandidate::new(211, "Benfica"))
            .await
            .unwrap();
        assert_eq!(record, TeamRecord::new(28, 5, 1));
    }

    #[tokio::test]
    async fn test_fetch_passes_scope() {
        let api = Arc::new(FakeFootballApi::new().with_stats(211, TeamRecord::new(1, 2, 3)));
        let scope = StatsScope::new(Some(94), Some(2023));
        let fetcher = StatsFetcher::new(api.clone(), scope);

        fetcher
            .fetch(&TeamCandidate::new(211, "Benfica"))
            .await
            .unwrap();
        assert_eq!(api.scopes(), vec![scope]);
    }

    #[tokio::test]
    async fn test_fetch_missing_fields() {
        let api = Arc::new(FakeFootballApi::new());
        let fetcher = StatsFetcher::new(api, StatsScope::default());

        let err = fetcher
            .fetch(&TeamCandidate::new(7, "Unknown"))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::DataUnavailable { ref team } if team == "Unknown"));
    }
}
