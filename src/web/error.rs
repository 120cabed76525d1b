// src/web/error.rs
// Centralized error handling for HTTP API responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use std::fmt;
use tracing::error;

use crate::error::AuraError;

/// One entry of a structured validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Location of the failing value, starting with "body"
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Standard API error response format
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
    pub error_code: Option<String>,
    pub detail: Vec<FieldError>,
}

impl ApiError {
    fn with_code(status_code: StatusCode, code: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
            error_code: Some(code.to_string()),
            detail: Vec::new(),
        }
    }

    /// Create a new internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_code(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }

    /// Create a new bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_code(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    /// Request body is not JSON at all
    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::with_code(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "UNSUPPORTED_MEDIA_TYPE",
            message,
        )
    }

    /// Request body parsed but did not match the expected schema
    pub fn validation(detail: Vec<FieldError>) -> Self {
        let message = match detail.first() {
            Some(first) => format!("Validation failed for {}: {}", first.path(), first.msg),
            None => "Validation failed".to_string(),
        };
        Self {
            message,
            status_code: StatusCode::UNPROCESSABLE_ENTITY,
            error_code: Some("VALIDATION_ERROR".to_string()),
            detail,
        }
    }

    /// Create a new custom error with specific status code
    pub fn custom(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
            error_code: None,
            detail: Vec::new(),
        }
    }
}

impl FieldError {
    /// Dotted path without the leading "body" segment
    pub fn path(&self) -> String {
        let parts: Vec<String> = self
            .loc
            .iter()
            .skip(1)
            .map(|seg| match seg {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();
        if parts.is_empty() {
            "body".to_string()
        } else {
            parts.join(".")
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<AuraError> for ApiError {
    fn from(err: AuraError) -> Self {
        match err {
            AuraError::InvalidInput(msg) => ApiError::bad_request(msg),
            other => {
                error!(error = %other, "Request failed");
                ApiError::internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response_json = json!({
            "error": true,
            "message": self.message,
            "status": self.status_code.as_u16()
        });

        if let Some(error_code) = self.error_code {
            response_json["error_code"] = json!(error_code);
        }
        if !self.detail.is_empty() {
            response_json["detail"] = json!(self.detail);
        }

        (self.status_code, Json(response_json)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_logic() -> FieldError {
        FieldError {
            loc: vec![json!("body"), json!("traits"), json!("logic")],
            msg: "missing field `logic`".to_string(),
            kind: "missing".to_string(),
        }
    }

    #[test]
    fn test_api_error_creation() {
        let error = ApiError::internal("Test error");
        assert_eq!(error.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "Test error");
    }

    #[test]
    fn test_validation_message_names_field() {
        let error = ApiError::validation(vec![missing_logic()]);
        assert_eq!(error.status_code, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(error.message.contains("traits.logic"));
    }

    #[test]
    fn test_field_error_serializes_type_key() {
        let value = serde_json::to_value(missing_logic()).unwrap();
        assert_eq!(value["type"], "missing");
        assert_eq!(value["loc"], json!(["body", "traits", "logic"]));
    }

    #[test]
    fn test_from_aura_error() {
        let error: ApiError = AuraError::InvalidInput("bad".to_string()).into();
        assert_eq!(error.status_code, StatusCode::BAD_REQUEST);

        let error: ApiError = AuraError::Generation("down".to_string()).into();
        assert_eq!(error.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
