//! API-Football (api-sports.io) access
//!
//! Two endpoints are used: team search by name and team statistics.
//!
//! # Example
//!
//! ```no_run
//! use matchtip::api_football::{ApiFootballClient, FootballApi};
//! use matchtip::config::ApiConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ApiFootballClient::new(ApiConfig::new("my-key"))?;
//!
//!     let teams = client.search_teams("Benfica").await?;
//!     println!("Found {} teams", teams.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{ApiError, ApiFootballClient};
pub use types::extract_record;

use async_trait::async_trait;

use crate::models::{StatsScope, TeamCandidate, TeamRecord};

/// Sports statistics source
#[async_trait]
pub trait FootballApi: Send + Sync {
    /// Teams whose name matches `name`, in upstream order
    async fn search_teams(&self, name: &str) -> Result<Vec<TeamCandidate>, ApiError>;

    /// Win/draw/loss totals, or `None` when the upstream has no fixtures summary
    async fn team_statistics(
        &self,
        team_id: u32,
        scope: &StatsScope,
    ) -> Result<Option<TeamRecord>, ApiError>;
}
