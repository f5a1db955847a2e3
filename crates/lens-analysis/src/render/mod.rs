//! Presentation renderer for analysis text
//!
//! A pure, stateless, one-pass transform from the model's free-text output
//! to structured display blocks. Each line is classified independently;
//! identical input always yields identical blocks.

mod block;
mod classify;
mod theme;

pub use block::{Block, Span};
pub use classify::{classify_line, render_blocks};
pub use theme::{SECTION_THEMES, SectionTheme, theme_for};
