//! Error types for the item catalog
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == App Error Enum ==
/// Unified error type for the item catalog.
#[derive(Error, Debug)]
pub enum AppError {
    /// A query parameter could not be turned into a valid filter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The item store could not be reached or the query failed
    #[error("Data store unavailable: {0}")]
    DataStoreUnavailable(String),

    /// The cache backend failed and no fallback applies
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    /// Spreadsheet serialization failed
    #[error("Export failed: {0}")]
    Export(String),
}

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            AppError::DataStoreUnavailable(_) | AppError::CacheUnavailable(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the item catalog.
pub type Result<T> = std::result::Result<T, AppError>;
