//! Equity analysis engine for ticker-lens
//!
//! This crate owns the domain logic between the HTTP surface and the model
//! client:
//!
//! - A fixed six-section analyst prompt (executive summary, macro context,
//!   fundamentals, valuation, risks & catalysts, action plan)
//! - The [`Analyst`] request handler: one model call per ticker, output
//!   segments concatenated into a single analysis text
//! - The presentation renderer: a stateless line classifier that turns the
//!   analysis text into themed display blocks
//!
//! # Example
//!
//! ```rust,ignore
//! use lens_analysis::{Analyst, AnalysisConfig, render};
//! use lens_llm::providers::AnthropicClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = Arc::new(AnthropicClient::from_env()?);
//!     let analyst = Analyst::new(provider, AnalysisConfig::default());
//!
//!     let analysis = analyst.analyze("AAPL").await?;
//!     for block in render::render_blocks(&analysis.text) {
//!         println!("{block:?}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analyst;
pub mod config;
pub mod error;
pub mod prompts;
pub mod render;

// Re-export main types for convenience
pub use analyst::{Analysis, Analyst};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use render::{Block, SectionTheme, Span, render_blocks};
