//! Error types for analysis operations

use thiserror::Error;

/// Analysis specific errors
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The model call failed
    #[error("Model error: {0}")]
    Model(#[from] lens_llm::ModelError),

    /// Prompt template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::Config("model must not be empty".to_string());
        assert_eq!(err.to_string(), "Configuration error: model must not be empty");
    }

    #[test]
    fn test_model_error_conversion() {
        let err: AnalysisError = lens_llm::ModelError::AuthenticationFailed.into();
        assert!(err.to_string().contains("authentication failed"));
    }
}
