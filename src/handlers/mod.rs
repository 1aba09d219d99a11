//! HTTP handlers

pub mod analyze;
pub mod health;
pub mod page;

use actix_web::web;

use crate::analysis::Analyzer;

/// Application state shared across handlers
pub struct AppState {
    pub analyzer: Analyzer,
}

/// Register all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(analyze::index))
        .route("/analyze", web::post().to(analyze::analyze_form))
        .route("/api/analyze", web::post().to(analyze::analyze_json))
        .route("/health", web::get().to(health::health_check));
}
