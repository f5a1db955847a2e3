//! Configuration for analysis operations

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Default model for analysis requests
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default output-length budget per analysis
pub const DEFAULT_MAX_TOKENS: usize = 4000;

/// Configuration for analysis operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Model identifier sent to the provider
    pub model: String,

    /// Maximum tokens the model may generate per analysis
    pub max_tokens: usize,

    /// Sampling temperature (provider default when unset)
    pub temperature: Option<f32>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration builder
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Override the model from the `LENS_MODEL` environment variable
    pub fn with_env_model(mut self) -> Self {
        if let Ok(model) = std::env::var("LENS_MODEL") {
            self.model = model;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(AnalysisError::Config("model must not be empty".to_string()));
        }

        if self.max_tokens == 0 {
            return Err(AnalysisError::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for AnalysisConfig
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    model: Option<String>,
    max_tokens: Option<usize>,
    temperature: Option<f32>,
}

impl AnalysisConfigBuilder {
    /// Set the model identifier
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the output-length budget
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalysisConfig> {
        let defaults = AnalysisConfig::default();

        let config = AnalysisConfig {
            model: self.model.unwrap_or(defaults.model),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.temperature,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, 4000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = AnalysisConfig::builder()
            .model("claude-opus-4-5-20251101")
            .max_tokens(2000)
            .temperature(0.3)
            .build()
            .unwrap();

        assert_eq!(config.model, "claude-opus-4-5-20251101");
        assert_eq!(config.max_tokens, 2000);
        assert_eq!(config.temperature, Some(0.3));
    }

    #[test]
    fn test_validation_rejects_empty_model() {
        let config = AnalysisConfig {
            model: "  ".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_budget() {
        let result = AnalysisConfig::builder().max_tokens(0).build();
        assert!(result.is_err());
    }
}
