//! Mapping of crate errors onto HTTP responses.

use crate::{api::response::ApiResponse, errors::Error};
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

/// Error returned by handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Failure from the core layer
    Domain(Error),
    /// Malformed request parameter
    BadRequest(String),
    /// Body, path or query string the extractor could not decode
    Rejected {
        /// Status chosen by the extractor
        status: StatusCode,
        /// Extractor's explanation
        message: String,
    },
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => {
                warn!("Bad request: {}", message);
                (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message))).into_response()
            }
            Self::Rejected { status, message } => {
                warn!("Rejected request ({}): {}", status, message);
                (status, Json(ApiResponse::error(message))).into_response()
            }
            Self::Domain(Error::Validation(report)) => {
                let message = Error::Validation(report.clone()).to_string();
                warn!(
                    first_invalid_section = ?report.first_invalid_section,
                    "Validation failed: {}",
                    message
                );
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ApiResponse::error_with_data(report, message)),
                )
                    .into_response()
            }
            Self::Domain(err @ Error::DocumentNotFound { .. }) => {
                warn!("Not found: {}", err);
                (StatusCode::NOT_FOUND, Json(ApiResponse::error(err.to_string()))).into_response()
            }
            Self::Domain(err @ (Error::KindMismatch { .. } | Error::InvalidDate { .. })) => {
                warn!("Rejected request: {}", err);
                (StatusCode::BAD_REQUEST, Json(ApiResponse::error(err.to_string())))
                    .into_response()
            }
            Self::Domain(err) => {
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::error(err.to_string())),
                )
                    .into_response()
            }
        }
    }
}
