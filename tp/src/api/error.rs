//! Backend API error types

use thiserror::Error;

/// Errors that can occur while talking to the planner backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog error: {0}")]
    Catalog(#[from] tripcatalog::CatalogError),
}

impl ApiError {
    /// Build a status error from a non-2xx response
    ///
    /// The response body text becomes the message; an empty body falls
    /// back to `Request failed with <status>`.
    pub fn from_status(status: u16, body: String) -> Self {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            format!("Request failed with {status}")
        } else {
            trimmed.to_string()
        };
        ApiError::Status { status, message }
    }

    /// HTTP status code, when this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_uses_body_text() {
        let err = ApiError::from_status(500, "Itinerary generation failed".to_string());
        assert_eq!(err.to_string(), "Itinerary generation failed");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_from_status_empty_body_fallback() {
        let err = ApiError::from_status(503, String::new());
        assert_eq!(err.to_string(), "Request failed with 503");

        let err = ApiError::from_status(404, "   ".to_string());
        assert_eq!(err.to_string(), "Request failed with 404");
    }

    #[test]
    fn test_from_status_trims_body() {
        let err = ApiError::from_status(400, "Question must not be empty\n".to_string());
        assert_eq!(err.to_string(), "Question must not be empty");
    }

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Json(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert_eq!(err.status(), None);
    }
}
