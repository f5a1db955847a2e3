//! Display block types emitted by the classifier

use super::theme::SectionTheme;
use serde::Serialize;

/// One plain or bold run within a rich line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum Span {
    /// Unemphasized text
    Plain {
        /// Run text
        text: String,
    },
    /// Emphasized text
    Bold {
        /// Run text
        text: String,
    },
}

impl Span {
    /// Create a plain run
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain { text: text.into() }
    }

    /// Create a bold run
    pub fn bold(text: impl Into<String>) -> Self {
        Self::Bold { text: text.into() }
    }
}

/// One classified line of analysis text
///
/// Blocks serialize with a `kind` tag so the display templates can branch
/// on them directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Top-level heading (`# ...`)
    Title {
        /// Heading text, marker stripped
        text: String,
    },

    /// Numbered section heading (`## ...`), themed by its leading number
    Section {
        /// Heading text, markers stripped
        title: String,
        /// Fixed (accent, icon) pair for the section
        theme: SectionTheme,
    },

    /// Line with bold-span markers, split into runs
    Rich {
        /// Alternating plain/bold runs
        spans: Vec<Span>,
    },

    /// Bullet item (`- ...`), marker stripped
    Bullet {
        /// Item text
        text: String,
    },

    /// Any other non-blank line
    Paragraph {
        /// Line text
        text: String,
    },

    /// Blank line, rendered as a fixed-height spacer
    Spacer,
}
