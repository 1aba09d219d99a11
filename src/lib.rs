//! matchtip - Football match betting suggestions
//!
//! This library provides:
//! - "Home vs Away" match description parsing
//! - Team lookup and statistics retrieval from API-Football
//! - A win-margin betting suggestion
//! - actix-web handlers for the HTML form and JSON API
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use matchtip::analysis::Analyzer;
//! use matchtip::api_football::ApiFootballClient;
//! use matchtip::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let client = ApiFootballClient::new(config.api.clone())?;
//!     let analyzer = Analyzer::from_config(Arc::new(client), &config);
//!
//!     println!("{}", analyzer.analyze_to_text("Benfica vs Porto").await);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod api_football;
pub mod config;
pub mod core;
pub mod error;
pub mod models;

// HTTP server modules (only available with api feature)
#[cfg(feature = "api")]
pub mod handlers;

// Re-export commonly used types
pub use analysis::{Analyzer, MatchAnalysis, MatchQuery};
pub use api_football::{ApiError, ApiFootballClient, FootballApi};
pub use config::{AppConfig, ConfigError, SelectionPolicy};
pub use crate::core::suggestion::Suggestion;
pub use error::AnalysisError;
pub use models::{StatsScope, TeamCandidate, TeamRecord, TeamSummary};
