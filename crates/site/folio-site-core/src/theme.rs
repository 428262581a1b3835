//! Light/dark theme selection and the cipher heading's glyph colours.

use serde::{Deserialize, Serialize};

/// Stored preference. `System` follows the OS setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl Theme {
    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            Theme::Light => ResolvedTheme::Light,
            Theme::Dark => ResolvedTheme::Dark,
            Theme::System if system_prefers_dark => ResolvedTheme::Dark,
            Theme::System => ResolvedTheme::Light,
        }
    }

    /// The header toggle: dark goes light, anything else goes dark.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::System => Theme::Dark,
        }
    }
}

/// Colours for revealed and still-scrambled cipher glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GlyphPalette {
    pub revealed: &'static str,
    pub scrambled: &'static str,
}

impl ResolvedTheme {
    pub fn glyphs(self) -> GlyphPalette {
        match self {
            ResolvedTheme::Light => GlyphPalette {
                revealed: "#000000",
                scrambled: "#999999",
            },
            ResolvedTheme::Dark => GlyphPalette {
                revealed: "#ffffff",
                scrambled: "#666666",
            },
        }
    }

    pub fn glyph_color(self, revealed: bool) -> &'static str {
        let palette = self.glyphs();
        if revealed {
            palette.revealed
        } else {
            palette.scrambled
        }
    }
}
