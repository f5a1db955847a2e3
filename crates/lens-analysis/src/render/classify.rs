//! Line classifier
//!
//! Classification is an ordered set of guard conditions; a line that
//! textually satisfies several rules takes the first match. The order is
//! title, section, bold spans, bullet, paragraph, blank.

use super::block::{Block, Span};
use super::theme::theme_for;

/// Render analysis text into display blocks, one block per line
pub fn render_blocks(text: &str) -> Vec<Block> {
    text.lines().map(classify_line).collect()
}

/// Classify a single line
pub fn classify_line(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix('#') {
        if let Some(section) = rest.strip_prefix('#') {
            let title = section.trim_start_matches('#').trim();
            return Block::Section {
                title: title.to_string(),
                theme: *theme_for(leading_number(title)),
            };
        }
        return Block::Title {
            text: rest.trim().to_string(),
        };
    }

    if line.matches("**").count() >= 2 {
        return Block::Rich {
            spans: split_spans(line),
        };
    }

    if let Some(item) = line.strip_prefix("- ") {
        return Block::Bullet {
            text: item.to_string(),
        };
    }

    if !line.trim().is_empty() {
        return Block::Paragraph {
            text: line.to_string(),
        };
    }

    Block::Spacer
}

/// Leading integer of a section title, if any
fn leading_number(title: &str) -> Option<u32> {
    let trimmed = title.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if end == 0 {
        return None;
    }
    trimmed[..end].parse().ok()
}

/// Split a line on `**` markers into alternating plain/bold runs
///
/// Odd-indexed pieces sit between a marker pair and render bold; empty runs
/// are dropped.
fn split_spans(line: &str) -> Vec<Span> {
    line.split("**")
        .enumerate()
        .filter(|(_, run)| !run.is_empty())
        .map(|(i, run)| {
            if i % 2 == 1 {
                Span::bold(run)
            } else {
                Span::plain(run)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_line() {
        let block = classify_line("# AAPL - Apple Inc.");
        assert_eq!(
            block,
            Block::Title {
                text: "AAPL - Apple Inc.".to_string()
            }
        );
    }

    #[test]
    fn section_heading_selects_theme_by_number() {
        let Block::Section { title, theme } = classify_line("## 2. Macro Context") else {
            panic!("expected a section block");
        };
        assert_eq!(title, "2. Macro Context");
        assert_eq!(theme.number, 2);
        assert_eq!(theme.slug, "macro");
    }

    #[test]
    fn section_heading_unknown_number_falls_back() {
        let Block::Section { theme, .. } = classify_line("## 9. Unknown") else {
            panic!("expected a section block");
        };
        assert_eq!(theme.number, 1);
    }

    #[test]
    fn section_heading_missing_number_falls_back() {
        let Block::Section { title, theme } = classify_line("## Overview") else {
            panic!("expected a section block");
        };
        assert_eq!(title, "Overview");
        assert_eq!(theme.number, 1);
    }

    #[test]
    fn bold_spans_split_into_runs() {
        let block = classify_line("**Bold** and plain");
        assert_eq!(
            block,
            Block::Rich {
                spans: vec![Span::bold("Bold"), Span::plain(" and plain")]
            }
        );
    }

    #[test]
    fn single_marker_is_not_a_rich_line() {
        let block = classify_line("a ** alone");
        assert_eq!(
            block,
            Block::Paragraph {
                text: "a ** alone".to_string()
            }
        );
    }

    #[test]
    fn bullet_line_strips_marker() {
        let block = classify_line("- Risk factor");
        assert_eq!(
            block,
            Block::Bullet {
                text: "Risk factor".to_string()
            }
        );
    }

    #[test]
    fn blank_line_is_a_spacer() {
        assert_eq!(classify_line(""), Block::Spacer);
        assert_eq!(classify_line("   "), Block::Spacer);
    }

    #[test]
    fn plain_line_is_a_paragraph() {
        let block = classify_line("Revenue grew 12% year over year.");
        assert_eq!(
            block,
            Block::Paragraph {
                text: "Revenue grew 12% year over year.".to_string()
            }
        );
    }

    // A line can satisfy several rules; only the first matching rule applies.

    #[test]
    fn section_heading_beats_bold_spans() {
        let Block::Section { title, theme } = classify_line("## 4. **VALUATION**") else {
            panic!("expected a section block");
        };
        assert_eq!(title, "4. **VALUATION**");
        assert_eq!(theme.number, 4);
    }

    #[test]
    fn bold_spans_beat_bullets() {
        let block = classify_line("- **Margin risk**: compression ahead");
        assert_eq!(
            block,
            Block::Rich {
                spans: vec![
                    Span::plain("- "),
                    Span::bold("Margin risk"),
                    Span::plain(": compression ahead"),
                ]
            }
        );
    }

    #[test]
    fn render_is_deterministic() {
        let text = "# NVDA\n\n## 5. Risks\n- **Supply**: constrained\nPlain closing line.";
        assert_eq!(render_blocks(text), render_blocks(text));
    }

    #[test]
    fn render_emits_one_block_per_line() {
        let blocks = render_blocks("# Title\n\n## 1. Summary\n- item");
        assert_eq!(blocks.len(), 4);
        assert!(matches!(blocks[0], Block::Title { .. }));
        assert_eq!(blocks[1], Block::Spacer);
        assert!(matches!(blocks[2], Block::Section { .. }));
        assert!(matches!(blocks[3], Block::Bullet { .. }));
    }

    #[test]
    fn paragraph_text_reclassifies_as_paragraph() {
        let original = "Confidence score: 72/100.";
        let Block::Paragraph { text } = classify_line(original) else {
            panic!("expected a paragraph block");
        };
        assert_eq!(classify_line(&text), classify_line(original));
    }
}
