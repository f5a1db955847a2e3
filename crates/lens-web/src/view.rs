//! View state machine for the analysis page
//!
//! The page's local state is an explicit finite-state record. Transitions
//! are triggered only by submission and by the upstream response or
//! failure.

use crate::error::INPUT_FAILURE_MESSAGE;

/// State of the analysis panel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Nothing submitted yet
    #[default]
    Idle,

    /// One request in flight
    Loading {
        /// Normalized ticker being analyzed
        ticker: String,
    },

    /// Last submission succeeded
    Success {
        /// Normalized ticker that was analyzed
        ticker: String,
        /// Full analysis text
        text: String,
    },

    /// Last submission failed
    Failed {
        /// Message shown in the error banner
        message: String,
    },
}

impl ViewState {
    /// Begin a submission
    ///
    /// Returns the normalized (trimmed, upper-cased) ticker to send
    /// upstream, or `None` when no upstream call may be made: a request is
    /// already in flight, or the input is blank (which moves straight to
    /// `Failed` with the input-failure message). Any prior result or error
    /// is cleared before dispatch.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        if self.is_loading() {
            return None;
        }

        let ticker = raw.trim().to_uppercase();
        if ticker.is_empty() {
            *self = Self::Failed {
                message: INPUT_FAILURE_MESSAGE.to_string(),
            };
            return None;
        }

        *self = Self::Loading {
            ticker: ticker.clone(),
        };
        Some(ticker)
    }

    /// Record the upstream response; only meaningful while `Loading`
    pub fn resolve(&mut self, text: impl Into<String>) {
        if let Self::Loading { ticker } = self {
            *self = Self::Success {
                ticker: std::mem::take(ticker),
                text: text.into(),
            };
        }
    }

    /// Record an upstream failure; only meaningful while `Loading`
    pub fn reject(&mut self, message: impl Into<String>) {
        if self.is_loading() {
            *self = Self::Failed {
                message: message.into(),
            };
        }
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}
