//! Response DTOs for the item catalog API
//!
//! Defines the structure of outgoing JSON response bodies.

use serde::Serialize;

/// Acknowledgment body for the cache clear endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    /// Fixed success message
    pub status: String,
}

impl ClearCacheResponse {
    /// Creates the acknowledgment returned whether or not the key existed
    pub fn cleared() -> Self {
        Self {
            status: "Cache cleared successfully".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_cache_response_serialize() {
        let resp = ClearCacheResponse::cleared();
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"status":"Cache cleared successfully"}"#);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
