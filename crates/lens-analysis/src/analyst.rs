//! The analysis request handler

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::prompts;
use chrono::{DateTime, Utc};
use lens_llm::{Message, ModelProvider, ModelRequest, TokenUsage};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// One completed analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Ticker the analysis was requested for
    pub ticker: String,

    /// Full analysis text, all model segments joined by line breaks
    pub text: String,

    /// When the analysis was generated
    pub generated_at: DateTime<Utc>,

    /// Token usage reported by the provider
    pub usage: TokenUsage,
}

/// The request handler: turns a ticker into one model call
///
/// Holds no state between calls and performs no validation of the ticker
/// beyond passing it through; callers decide what counts as valid input and
/// how to surface failures.
pub struct Analyst {
    provider: Arc<dyn ModelProvider>,
    config: AnalysisConfig,
}

impl Analyst {
    /// Create an analyst over a model provider
    pub fn new(provider: Arc<dyn ModelProvider>, config: AnalysisConfig) -> Self {
        Self { provider, config }
    }

    /// The configuration in use
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run one analysis for a ticker
    ///
    /// Issues exactly one call to the provider; any failure propagates
    /// without retry.
    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn analyze(&self, ticker: &str) -> Result<Analysis> {
        let mut request = ModelRequest::builder(&self.config.model)
            .system(prompts::analyst_system())
            .add_message(Message::user(prompts::user_prompt(ticker)?))
            .max_tokens(self.config.max_tokens);
        if let Some(temperature) = self.config.temperature {
            request = request.temperature(temperature);
        }

        let response = self.provider.complete(request.build()).await?;
        debug!(
            segments = response.segments.len(),
            output_tokens = response.usage.output_tokens,
            "analysis generated"
        );

        Ok(Analysis {
            ticker: ticker.to_string(),
            text: response.joined_text(),
            generated_at: Utc::now(),
            usage: response.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lens_llm::{ModelResponse, Segment, StopReason};
    use mockall::mock;
    use mockall::predicate::function;

    mock! {
        Provider {}

        #[async_trait]
        impl ModelProvider for Provider {
            async fn complete(&self, request: ModelRequest) -> lens_llm::Result<ModelResponse>;
            fn name(&self) -> &str;
        }
    }

    fn response_with(segments: Vec<Segment>) -> ModelResponse {
        ModelResponse {
            segments,
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage {
                input_tokens: 100,
                output_tokens: 200,
            },
        }
    }

    #[tokio::test]
    async fn analyze_issues_exactly_one_model_call() {
        let mut provider = MockProvider::new();
        provider.expect_name().return_const("mock".to_string());
        provider
            .expect_complete()
            .with(function(|request: &ModelRequest| {
                request.max_tokens == 4000
                    && request.system.as_deref().is_some_and(|s| s.contains("EXECUTIVE SUMMARY"))
                    && request.messages.len() == 1
                    && request.messages[0].text().is_some_and(|t| t.contains("AAPL"))
            }))
            .times(1)
            .returning(|_| Ok(response_with(vec![Segment::text("# AAPL")])));

        let analyst = Analyst::new(Arc::new(provider), AnalysisConfig::default());
        let analysis = analyst.analyze("AAPL").await.unwrap();

        assert_eq!(analysis.ticker, "AAPL");
        assert_eq!(analysis.text, "# AAPL");
    }

    #[tokio::test]
    async fn analyze_joins_segments_in_order() {
        let mut provider = MockProvider::new();
        provider.expect_name().return_const("mock".to_string());
        provider.expect_complete().times(1).returning(|_| {
            Ok(response_with(vec![
                Segment::text("# TSLA Analysis"),
                Segment::Unsupported,
                Segment::text("## 1. Executive Summary"),
            ]))
        });

        let analyst = Analyst::new(Arc::new(provider), AnalysisConfig::default());
        let analysis = analyst.analyze("TSLA").await.unwrap();

        assert_eq!(analysis.text, "# TSLA Analysis\n## 1. Executive Summary");
        assert_eq!(analysis.usage.output_tokens, 200);
    }

    #[tokio::test]
    async fn analyze_propagates_model_failure() {
        let mut provider = MockProvider::new();
        provider.expect_name().return_const("mock".to_string());
        provider
            .expect_complete()
            .times(1)
            .returning(|_| Err(lens_llm::ModelError::RequestFailed("HTTP 500".to_string())));

        let analyst = Analyst::new(Arc::new(provider), AnalysisConfig::default());
        let result = analyst.analyze("AAPL").await;

        assert!(matches!(
            result,
            Err(crate::AnalysisError::Model(
                lens_llm::ModelError::RequestFailed(_)
            ))
        ));
    }
}
