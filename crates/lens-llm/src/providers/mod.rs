//! Concrete provider implementations

mod anthropic;

pub use anthropic::AnthropicClient;
