use serde::{Deserialize, Serialize};

/// A team returned by a name search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCandidate {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl TeamCandidate {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            country: None,
        }
    }
}

/// Win/draw/loss totals for a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl TeamRecord {
    pub fn new(wins: u32, draws: u32, losses: u32) -> Self {
        Self {
            wins,
            draws,
            losses,
        }
    }
}

/// League/season filter for statistics requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsScope {
    pub league: Option<u32>,
    pub season: Option<u16>,
}

impl StatsScope {
    pub fn new(league: Option<u32>, season: Option<u16>) -> Self {
        Self { league, season }
    }

    /// Neither league nor season is set
    pub fn is_empty(&self) -> bool {
        self.league.is_none() && self.season.is_none()
    }
}

/// Resolved team together with its record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team: TeamCandidate,
    pub record: TeamRecord,
}

/// Analyze request (HTML form field and JSON body share the name)
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub jogo: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub league: Option<u32>,
    pub season: Option<u16>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
