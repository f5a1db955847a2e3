//! Generative text API client layer for ticker-lens
//!
//! This crate provides provider-agnostic abstractions for requesting text
//! completions from a generative model API. It includes:
//!
//! - Message and segment types for model communication
//! - Request/response types with a builder
//! - Provider trait for concrete API implementations
//! - The Anthropic Messages API client (behind the `anthropic` feature)

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;

// Re-export main types
pub use completion::{ModelRequest, ModelResponse, StopReason, TokenUsage};
pub use error::{ModelError, Result};
pub use messages::{Message, MessageContent, Role, Segment};
pub use provider::ModelProvider;

// Provider implementations (feature-gated)
#[cfg(feature = "anthropic")]
pub mod providers;
