use thiserror::Error;

use crate::api_football::ApiError;

/// Reasons a match analysis can fail
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input does not split into exactly two "vs"-separated names
    #[error("malformed match description: {0:?}")]
    MalformedInput(String),

    /// Search returned no candidates
    #[error("no team found for {query:?}")]
    NotFound { query: String },

    /// Statistics response lacks the fixtures summary
    #[error("no statistics available for {team}")]
    DataUnavailable { team: String },

    /// Network or API failure
    #[error("upstream API failure: {0}")]
    Upstream(#[from] ApiError),
}

impl AnalysisError {
    /// Short machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            AnalysisError::MalformedInput(_) => "malformed_input",
            AnalysisError::NotFound { .. } => "not_found",
            AnalysisError::DataUnavailable { .. } => "data_unavailable",
            AnalysisError::Upstream(_) => "upstream_error",
        }
    }

    /// Message rendered into the result page
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::MalformedInput(_) => {
                "❌ Formato inválido. Usa: Equipa Casa vs Equipa Fora".to_string()
            }
            AnalysisError::NotFound { .. } => {
                "❌ Equipa(s) não encontrada(s). Verifica os nomes.".to_string()
            }
            AnalysisError::DataUnavailable { .. } => {
                "⚠️ Estatísticas não disponíveis para estas equipas.".to_string()
            }
            AnalysisError::Upstream(e) => format!("❌ Erro ao obter dados da API: {}", e),
        }
    }
}

#[cfg(feature = "api")]
mod response {
    use actix_web::{http::StatusCode, HttpResponse, ResponseError};

    use super::AnalysisError;
    use crate::models::ErrorResponse;

    impl ResponseError for AnalysisError {
        fn status_code(&self) -> StatusCode {
            match self {
                AnalysisError::MalformedInput(_) => StatusCode::BAD_REQUEST,
                AnalysisError::NotFound { .. } => StatusCode::NOT_FOUND,
                AnalysisError::DataUnavailable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                AnalysisError::Upstream(_) => StatusCode::BAD_GATEWAY,
            }
        }

        fn error_response(&self) -> HttpResponse {
            HttpResponse::build(self.status_code()).json(ErrorResponse {
                error: self.code().to_string(),
                message: self.user_message(),
            })
        }
    }
}
