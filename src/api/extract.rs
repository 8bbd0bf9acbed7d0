//! Request Extractors
//!
//! Pulls the raw query map out of a request so that a malformed query string
//! is reported with the same `{"error": ...}` body as every other client error.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use crate::error::AppError;
use crate::models::RawParams;

#[async_trait]
impl<S> FromRequestParts<S> for RawParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<RawParams>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::InvalidParameter(rejection.body_text()))?;
        Ok(params)
    }
}
