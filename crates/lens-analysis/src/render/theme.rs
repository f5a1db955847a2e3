//! Section themes
//!
//! Each of the six analysis sections carries a fixed (accent, icon) pair.
//! Unknown or missing section numbers fall back to theme 1.

use serde::Serialize;

/// Visual theme for one numbered analysis section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionTheme {
    /// Section number (1-6)
    pub number: u8,
    /// Stable identifier used as a CSS class suffix
    pub slug: &'static str,
    /// Accent color
    pub accent: &'static str,
    /// Icon shown next to the section heading
    pub icon: &'static str,
}

/// The six section themes, in section order
pub const SECTION_THEMES: [SectionTheme; 6] = [
    SectionTheme {
        number: 1,
        slug: "summary",
        accent: "#a78bfa",
        icon: "📋",
    },
    SectionTheme {
        number: 2,
        slug: "macro",
        accent: "#5cb0ff",
        icon: "🌍",
    },
    SectionTheme {
        number: 3,
        slug: "fundamentals",
        accent: "#3fb68b",
        icon: "💼",
    },
    SectionTheme {
        number: 4,
        slug: "valuation",
        accent: "#f7c843",
        icon: "💰",
    },
    SectionTheme {
        number: 5,
        slug: "risks",
        accent: "#f0635c",
        icon: "⚠️",
    },
    SectionTheme {
        number: 6,
        slug: "action",
        accent: "#7ac6ff",
        icon: "🎯",
    },
];

/// Theme for a section number
///
/// Numbers 1-6 map to their fixed theme; anything else (including a missing
/// number) falls back to theme 1.
pub fn theme_for(number: Option<u32>) -> &'static SectionTheme {
    match number {
        Some(n @ 1..=6) => &SECTION_THEMES[(n - 1) as usize],
        _ => &SECTION_THEMES[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_numbers_map_to_their_theme() {
        for n in 1..=6u32 {
            let theme = theme_for(Some(n));
            assert_eq!(u32::from(theme.number), n);
        }
    }

    #[test]
    fn test_unknown_number_falls_back_to_theme_one() {
        assert_eq!(theme_for(Some(9)).number, 1);
        assert_eq!(theme_for(Some(0)).number, 1);
        assert_eq!(theme_for(None).number, 1);
    }

    #[test]
    fn test_table_is_in_section_order() {
        for (i, theme) in SECTION_THEMES.iter().enumerate() {
            assert_eq!(usize::from(theme.number), i + 1);
        }
    }
}
