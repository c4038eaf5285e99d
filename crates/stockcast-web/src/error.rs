//! Web-layer error mapping.
//!
//! The core surfaces every failure verbatim; this module decides the
//! user-visible response. No partial series or partial forecast payload is
//! ever written.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stockcast_core::{PipelineError, SourceError, SourceErrorKind, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid symbol: {0}")]
    InvalidSymbol(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] SourceError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidSymbol(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(error) => match error.kind() {
                SourceErrorKind::Unavailable | SourceErrorKind::RateLimited => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                SourceErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
                SourceErrorKind::Internal => StatusCode::BAD_GATEWAY,
            },
            Self::Pipeline(error) => match error {
                PipelineError::MalformedObservation { .. } => StatusCode::BAD_GATEWAY,
                PipelineError::InsufficientData => StatusCode::NOT_FOUND,
                PipelineError::InvalidHorizon | PipelineError::NonFiniteProjection { .. } => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
