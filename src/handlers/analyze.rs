use actix_web::{http::header::ContentType, web, HttpResponse};
use std::sync::Arc;

use super::page::render_index;
use super::AppState;
use crate::analysis::MatchAnalysis;
use crate::error::AnalysisError;
use crate::models::AnalyzeRequest;

/// Input form
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_index(None, None))
}

/// Form submission: always renders the page, with either the result or the error message
pub async fn analyze_form(
    state: web::Data<Arc<AppState>>,
    form: web::Form<AnalyzeRequest>,
) -> HttpResponse {
    let resultado = state.analyzer.analyze_to_text(&form.jogo).await;

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_index(Some(&form.jogo), Some(&resultado)))
}

/// JSON variant of the analysis
pub async fn analyze_json(
    state: web::Data<Arc<AppState>>,
    req: web::Json<AnalyzeRequest>,
) -> Result<web::Json<MatchAnalysis>, AnalysisError> {
    let analysis = state.analyzer.analyze(&req.jogo).await.map_err(|e| {
        tracing::warn!("Analysis of {:?} failed: {}", req.jogo, e);
        e
    })?;

    Ok(web::Json(analysis))
}
