use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::warn;

use crate::domain::DomainError;

use super::response::Envelope;

/// Every failure a handler can produce, rendered as an error envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Endpoint not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Domain(DomainError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            Self::Domain(DomainError::NotFound(_)) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Domain(DomainError::AlreadyExists(_)) => StatusCode::CONFLICT,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Domain(e) => e.message().to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Domain(e) = &self {
            warn!("Request rejected: {}", e);
        }

        (self.status_code(), Json(Envelope::error(self.message()))).into_response()
    }
}
