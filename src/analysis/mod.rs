//! Match analysis pipeline
//!
//! parse → resolve both teams → fetch both records → suggest.
//! The first failure ends the pipeline; nothing is retried.

pub mod query;
pub mod resolver;
pub mod stats;

pub use query::MatchQuery;
pub use resolver::{select_candidate, TeamResolver};
pub use stats::StatsFetcher;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api_football::FootballApi;
use crate::config::{AppConfig, SelectionPolicy};
use crate::core::suggestion::{suggest_for, Suggestion};
use crate::error::AnalysisError;
use crate::models::{StatsScope, TeamSummary};

/// Successful analysis of one match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchAnalysis {
    pub home: TeamSummary,
    pub away: TeamSummary,
    pub suggestion: Suggestion,
    /// Rendered suggestion text
    pub message: String,
}

impl MatchAnalysis {
    pub fn new(home: TeamSummary, away: TeamSummary) -> Self {
        let suggestion = suggest_for(&home.record, &away.record);
        let message = suggestion.message(&home.team.name, &away.team.name);
        Self {
            home,
            away,
            suggestion,
            message,
        }
    }

    /// Result text shown to the user
    pub fn render_text(&self) -> String {
        format!(
            "{}\n{}\n\n💡 Sugestão: {}",
            summary_line(&self.home),
            summary_line(&self.away),
            self.message
        )
    }
}

fn summary_line(summary: &TeamSummary) -> String {
    format!(
        "📊 {}: {}V / {}E / {}D",
        summary.team.name, summary.record.wins, summary.record.draws, summary.record.losses
    )
}

/// Runs the full pipeline against a `FootballApi`
pub struct Analyzer {
    resolver: TeamResolver,
    stats: StatsFetcher,
}

impl Analyzer {
    pub fn new(api: Arc<dyn FootballApi>, policy: SelectionPolicy, scope: StatsScope) -> Self {
        Self {
            resolver: TeamResolver::new(api.clone(), policy),
            stats: StatsFetcher::new(api, scope),
        }
    }

    pub fn from_config(api: Arc<dyn FootballApi>, config: &AppConfig) -> Self {
        Self::new(api, config.selection, config.scope)
    }

    pub fn resolver(&self) -> &TeamResolver {
        &self.resolver
    }

    pub fn stats(&self) -> &StatsFetcher {
        &self.stats
    }

    /// Analyze a raw "Home vs Away" description
    pub async fn analyze(&self, input: &str) -> Result<MatchAnalysis, AnalysisError> {
        let query = MatchQuery::parse(input)?;
        self.analyze_query(&query).await
    }

    pub async fn analyze_query(&self, query: &MatchQuery) -> Result<MatchAnalysis, AnalysisError> {
        let home_team = self.resolver.resolve(&query.home).await?;
        let away_team = self.resolver.resolve(&query.away).await?;

        let home_record = self.stats.fetch(&home_team).await?;
        let away_record = self.stats.fetch(&away_team).await?;

        let analysis = MatchAnalysis::new(
            TeamSummary {
                team: home_team,
                record: home_record,
            },
            TeamSummary {
                team: away_team,
                record: away_record,
            },
        );

        tracing::info!(
            "{} vs {}: {:?}",
            analysis.home.team.name,
            analysis.away.team.name,
            analysis.suggestion
        );

        Ok(analysis)
    }

    /// Analyze and always produce the text for the result page
    pub async fn analyze_to_text(&self, input: &str) -> String {
        match self.analyze(input).await {
            Ok(analysis) => analysis.render_text(),
            Err(e) => {
                tracing::warn!("Analysis of {:?} failed: {}", input, e);
                e.user_message()
            }
        }
    }
}
