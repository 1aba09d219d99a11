//! Team name resolution

use std::sync::Arc;

use crate::api_football::FootballApi;
use crate::config::SelectionPolicy;
use crate::error::AnalysisError;
use crate::models::TeamCandidate;

/// Pick one candidate for `query` according to `policy`
///
/// With `PreferNameMatch` an exact (case-insensitive) name wins, then the
/// first name containing the query, then the first candidate. Returns `None`
/// only for an empty slice.
pub fn select_candidate<'a>(
    query: &str,
    candidates: &'a [TeamCandidate],
    policy: SelectionPolicy,
) -> Option<&'a TeamCandidate> {
    if policy == SelectionPolicy::FirstCandidate {
        return candidates.first();
    }

    let needle = query.trim().to_lowercase();
    let lowered: Vec<String> = candidates.iter().map(|c| c.name.to_lowercase()).collect();

    lowered
        .iter()
        .position(|name| *name == needle)
        .or_else(|| lowered.iter().position(|name| name.contains(&needle)))
        .map(|idx| &candidates[idx])
        .or_else(|| candidates.first())
}

/// Resolves free-text team names to API identifiers
pub struct TeamResolver {
    api: Arc<dyn FootballApi>,
    policy: SelectionPolicy,
}

impl TeamResolver {
    pub fn new(api: Arc<dyn FootballApi>, policy: SelectionPolicy) -> Self {
        Self { api, policy }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Search for `name` and select one candidate
    pub async fn resolve(&self, name: &str) -> Result<TeamCandidate, AnalysisError> {
        let candidates = self.api.search_teams(name).await?;

        let selected = select_candidate(name, &candidates, self.policy).ok_or_else(|| {
            AnalysisError::NotFound {
                query: name.to_string(),
            }
        })?;

        tracing::info!(
            "Resolved {:?} to {} (id {}) among {} candidate(s)",
            name,
            selected.name,
            selected.id,
            candidates.len()
        );

        Ok(selected.clone())
    }
}
