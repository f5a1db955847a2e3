//! Ticker Lens server
//!
//! # Usage
//!
//! ```bash
//! # Set up environment variables
//! export ANTHROPIC_API_KEY="sk-ant-..."
//!
//! # Optional overrides
//! export LENS_MODEL="claude-sonnet-4-20250514"
//! export LENS_ADDR="127.0.0.1:3000"
//!
//! # Run the server
//! cargo run --bin lens-server -p lens-web
//! ```

use lens_analysis::{AnalysisConfig, Analyst};
use lens_llm::providers::AnthropicClient;
use lens_web::AppState;
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "warn,lens_web=info".to_string()))
        .init();

    // Model provider from the environment
    let provider = Arc::new(AnthropicClient::from_env()?);

    let config = AnalysisConfig::default().with_env_model();
    config.validate()?;
    tracing::info!(model = %config.model, "configured analyst");

    let analyst = Analyst::new(provider, config);
    let state = Arc::new(AppState::new(analyst)?);

    let addr = env::var("LENS_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    lens_web::serve(state, &addr).await
}
