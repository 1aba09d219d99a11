//! Response envelopes for API-Football v3

use serde::Deserialize;
use serde_json::Value;

use crate::models::{TeamCandidate, TeamRecord};

/// Common envelope: `{"errors": ..., "results": n, "response": ...}`
///
/// `errors` is an empty array on success and an object keyed by field on
/// failure (e.g. `{"token": "Error/Missing application key"}`).
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub errors: Value,
    pub response: Option<T>,
}

impl<T> Envelope<T> {
    /// Errors reported by the API in the body, joined into one message
    pub fn error_message(&self) -> Option<String> {
        let messages: Vec<String> = match &self.errors {
            Value::Object(map) => map
                .iter()
                .map(|(field, msg)| match msg {
                    Value::String(s) => format!("{}: {}", field, s),
                    other => format!("{}: {}", field, other),
                })
                .collect(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
            Value::String(s) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        };

        if messages.is_empty() {
            None
        } else {
            Some(messages.join("; "))
        }
    }
}

/// One entry of the `/teams` search response
#[derive(Debug, Deserialize)]
pub struct TeamEntry {
    pub team: TeamInfo,
}

#[derive(Debug, Deserialize)]
pub struct TeamInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
}

impl From<TeamEntry> for TeamCandidate {
    fn from(entry: TeamEntry) -> Self {
        TeamCandidate {
            id: entry.team.id,
            name: entry.team.name,
            country: entry.team.country,
        }
    }
}

/// Extract `fixtures.{wins,draws,loses}.total` from a `/teams/statistics` body
///
/// The endpoint answers with an empty array when the team has no statistics
/// for the scope, so the payload is walked as untyped JSON.
pub fn extract_record(response: &Value) -> Option<TeamRecord> {
    let total = |key: &str| -> Option<u32> {
        response
            .pointer(&format!("/fixtures/{}/total", key))
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };

    Some(TeamRecord {
        wins: total("wins")?,
        draws: total("draws")?,
        losses: total("loses")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_envelope() {
        let body = json!({
            "get": "teams",
            "parameters": {"name": "Benfica"},
            "errors": [],
            "results": 1,
            "response": [
                {
                    "team": {"id": 211, "name": "Benfica", "code": "BEN", "country": "Portugal", "founded": 1904},
                    "venue": {"id": 1265, "name": "Estádio do Sport Lisboa e Benfica"}
                }
            ]
        });

        let envelope: Envelope<Vec<TeamEntry>> = serde_json::from_value(body).unwrap();
        assert!(envelope.error_message().is_none());

        let candidates: Vec<TeamCandidate> = envelope
            .response
            .unwrap()
            .into_iter()
            .map(TeamCandidate::from)
            .collect();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].id, 211);
        assert_eq!(candidates[0].name, "Benfica");
        assert_eq!(candidates[0].country.as_deref(), Some("Portugal"));
    }

    #[test]
    fn test_error_object() {
        let body = json!({
            "errors": {"token": "Error/Missing application key in the header"},
            "response": []
        });

        let envelope: Envelope<Value> = serde_json::from_value(body).unwrap();
        assert_eq!(
            envelope.error_message().as_deref(),
            Some("token: Error/Missing application key in the header")
        );
    }

    #[test]
    fn test_extract_record() {
        let response = json!({
            "fixtures": {
                "played": {"home": 17, "away": 17, "total": 34},
                "wins": {"home": 14, "away": 14, "total": 28},
                "draws": {"home": 3, "away": 2, "total": 5},
                "loses": {"home": 0, "away": 1, "total": 1}
            }
        });

        assert_eq!(extract_record(&response), Some(TeamRecord::new(28, 5, 1)));
    }

    #[test]
    fn test_extract_record_missing_fields() {
        assert_eq!(extract_record(&json!([])), None);
        assert_eq!(extract_record(&json!({"fixtures": {}})), None);

        let partial = json!({
            "fixtures": {
                "wins": {"total": 3},
                "draws": {"total": 1}
            }
        });
        assert_eq!(extract_record(&partial), None);

        let null_total = json!({
            "fixtures": {
                "wins": {"total": null},
                "draws": {"total": 1},
                "loses": {"total": 2}
            }
        });
        assert_eq!(extract_record(&null_total), None);
    }
}
