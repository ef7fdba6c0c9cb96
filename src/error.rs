use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::debug;

use crate::api::types::ErrorBody;

/// Detail returned to HTTP callers for every lookup failure.
pub const NOT_FOUND_DETAIL: &str = "Company not found";

/// Errors a company lookup can produce at request time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SentimentError {
    /// The company is not in the ratings dataset.
    #[error("company not found: {company}")]
    CompanyNotFound { company: String },

    /// The company is in the dataset but every one of its ratings is missing.
    #[error("no ratings available for company: {company}")]
    NoRatings { company: String },

    /// The requested path segment could not be decoded into a company name.
    #[error("invalid company name: {reason}")]
    InvalidName { reason: String },
}

impl SentimentError {
    pub fn status(&self) -> StatusCode {
        match self {
            SentimentError::CompanyNotFound { .. }
            | SentimentError::NoRatings { .. }
            | SentimentError::InvalidName { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for SentimentError {
    fn into_response(self) -> Response {
        debug!(error = %self, "Company lookup failed");
        (self.status(), Json(ErrorBody::new(NOT_FOUND_DETAIL))).into_response()
    }
}
