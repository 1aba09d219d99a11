//! In-memory `FootballApi` for tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{ApiError, FootballApi};
use crate::models::{StatsScope, TeamCandidate, TeamRecord};

#[derive(Default)]
pub struct FakeFootballApi {
    teams: HashMap<String, Vec<TeamCandidate>>,
    stats: HashMap<u32, TeamRecord>,
    failing_search: bool,
    calls: AtomicUsize,
    scopes: Mutex<Vec<StatsScope>>,
}

impl FakeFootballApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register search results for a query (exact string)
    pub fn with_search(mut self, query: &str, candidates: Vec<TeamCandidate>) -> Self {
        self.teams.insert(query.to_string(), candidates);
        self
    }

    /// Register a single team that is both found by name and has a record
    pub fn with_team(self, id: u32, name: &str, record: TeamRecord) -> Self {
        self.with_search(name, vec![TeamCandidate::new(id, name)])
            .with_stats(id, record)
    }

    pub fn with_stats(mut self, id: u32, record: TeamRecord) -> Self {
        self.stats.insert(id, record);
        self
    }

    /// Make every search fail like an unreachable upstream
    pub fn failing(mut self) -> Self {
        self.failing_search = true;
        self
    }

    /// Number of API calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Scopes passed to `team_statistics`, in call order
    pub fn scopes(&self) -> Vec<StatsScope> {
        self.scopes.lock().unwrap().clone()
    }
}

#[async_trait]
impl FootballApi for FakeFootballApi {
    async fn search_teams(&self, name: &str) -> Result<Vec<TeamCandidate>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_search {
            return Err(ApiError::Api("requests: rate limit reached".to_string()));
        }
        Ok(self.teams.get(name).cloned().unwrap_or_default())
    }

    async fn team_statistics(
        &self,
        team_id: u32,
        scope: &StatsScope,
    ) -> Result<Option<TeamRecord>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scopes.lock().unwrap().push(*scope);
        Ok(self.stats.get(&team_id).copied())
    }
}
