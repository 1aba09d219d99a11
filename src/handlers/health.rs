use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use super::AppState;
use crate::models::HealthResponse;

/// Health check endpoint
pub async fn health_check(state: web::Data<Arc<AppState>>) -> impl Responder {
    let scope = state.analyzer.stats().scope();
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        league: scope.league,
        season: scope.season,
    };

    HttpResponse::Ok().json(response)
}
