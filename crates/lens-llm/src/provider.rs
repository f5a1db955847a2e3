//! Model provider trait definition

use crate::{ModelRequest, ModelResponse, Result};
use async_trait::async_trait;

/// Trait for generative text API providers
///
/// Implementations of this trait provide access to a concrete model
/// service. Callers hold a `dyn ModelProvider`.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Request a completion from the model
    ///
    /// # Arguments
    ///
    /// * `request` - The completion request with messages and parameters
    ///
    /// # Returns
    ///
    /// The model response with its output segments and metadata
    async fn complete(&self, request: ModelRequest) -> Result<ModelResponse>;

    /// Get the provider name (e.g., "anthropic")
    fn name(&self) -> &str;
}
