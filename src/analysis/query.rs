//! "Home vs Away" input parsing

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Literal separator between the two team names (case-sensitive)
pub const SEPARATOR: &str = "vs";

/// Parsed match description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchQuery {
    pub home: String,
    pub away: String,
}

impl MatchQuery {
    /// Parse `"<home> vs <away>"`
    ///
    /// The input must contain the separator exactly once and both trimmed
    /// sides must be non-empty.
    pub fn parse(input: &str) -> Result<Self, AnalysisError> {
        if input.matches(SEPARATOR).count() != 1 {
            return Err(AnalysisError::MalformedInput(input.to_string()));
        }

        let (home, away) = input
            .split_once(SEPARATOR)
            .ok_or_else(|| AnalysisError::MalformedInput(input.to_string()))?;

        let (home, away) = (home.trim(), away.trim());
        if home.is_empty() || away.is_empty() {
            return Err(AnalysisError::MalformedInput(input.to_string()));
        }

        Ok(Self {
            home: home.to_string(),
            away: away.to_string(),
        })
    }
}
