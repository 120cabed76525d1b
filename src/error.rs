// src/error.rs
// Standardized error types for Aura

use thiserror::Error;

/// Main error type for the Aura library
#[derive(Error, Debug)]
pub enum AuraError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("generation error: {0}")]
    Generation(String),
}

/// Convenience type alias for Result using AuraError
pub type Result<T> = std::result::Result<T, AuraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_error() {
        let err = AuraError::InvalidInput("empty style".to_string());
        assert!(err.to_string().contains("invalid input"));
        assert!(err.to_string().contains("empty style"));
    }

    #[test]
    fn test_config_error() {
        let err = AuraError::Config("invalid CORS origin".to_string());
        assert!(err.to_string().starts_with("configuration error"));
    }

    #[test]
    fn test_generation_error() {
        let err = AuraError::Generation("backend offline".to_string());
        assert_eq!(err.to_string(), "generation error: backend offline");
    }
}
