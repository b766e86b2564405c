//! Theme configuration: mode strategy, fonts and style-selection axes.

use serde::{Deserialize, Serialize};

use crate::palette::{Palette, PaletteOverride};

/// Strategy for activating the dark-mode token overrides.
///
/// Both variants scope the same override block; they differ only in the
/// wrapper selector the stylesheet generator emits around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Overrides activate under a `.dark` ancestor class toggled by the host
    /// page.
    #[default]
    Class,
    /// Overrides activate via the OS-level `prefers-color-scheme: dark`
    /// media query.
    Media,
}

/// Appearance of the result scroller's scrollbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollbarStyle {
    /// Fixed narrow width with a flat thumb.
    Square,
    /// Wider track with an inset, bordered, round-cornered thumb.
    #[default]
    Rounded,
}

/// Font-family values for the widget's two font roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontConfig {
    /// Stack used for all widget text.
    pub sans: String,
    /// Stack used for hotkey badges.
    pub mono: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            sans: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, \
                   'Helvetica Neue', Arial, sans-serif"
                .into(),
            mono: "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace".into(),
        }
    }
}

/// The widget's visual theme.
///
/// This is the input the stylesheet generators read: two enumerated
/// style-selection axes ([`DarkMode`], [`ScrollbarStyle`]), the font roles,
/// and the light/dark palettes. Every field defaults, so a partial document
/// deserializes into a complete working theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    /// How dark-mode overrides are activated.
    pub dark_mode: DarkMode,
    /// Font-family values.
    pub font: FontConfig,
    /// Complete light palette.
    pub light: Palette,
    /// Partial dark override; absent roles inherit the light value.
    pub dark: PaletteOverride,
    /// Scrollbar appearance.
    pub scrollbar_style: ScrollbarStyle,
}
