//! Shared application state

use crate::pages;
use lens_analysis::Analyst;
use minijinja::Environment;

/// State shared by every handler
///
/// Immutable after startup; no state crosses request boundaries.
pub struct AppState {
    /// The analysis request handler
    pub analyst: Analyst,
    /// Compiled page and fragment templates
    pub templates: Environment<'static>,
}

impl AppState {
    /// Build the state over an analyst
    pub fn new(analyst: Analyst) -> Result<Self, minijinja::Error> {
        Ok(Self {
            analyst,
            templates: pages::environment()?,
        })
    }
}
