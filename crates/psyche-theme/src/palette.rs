//! Color palettes for the widget's design tokens.
//!
//! The token set is a fixed, closed contract with the widget markup: nine
//! color roles, each surfaced as a `--theme-*` custom property by the
//! stylesheet generator. The light palette declares every role; the dark
//! palette overrides a subset and relies on custom-property inheritance for
//! the rest, so a role absent from [`PaletteOverride`] keeps its light value
//! inside the dark scope.

use serde::{Deserialize, Serialize};

/// A complete light-mode palette: one color value per token role.
///
/// Values are raw CSS color values (`#0f172a`, `rgba(15, 23, 42, 0.6)`, …)
/// and are emitted into the stylesheet as-is; validation happens upstream in
/// the host's configuration layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    /// Primary text color.
    pub text: String,
    /// Secondary/muted text color.
    pub secondary: String,
    /// Bubble background color.
    pub background: String,
    /// Backdrop shadow layer color.
    pub shadow: String,
    /// Border/outline color.
    pub border: String,
    /// Accent color for focus, section headers and highlights.
    pub accent: String,
    /// Background of interactive parts (input field, result rows).
    pub interactive: String,
    /// Scrollbar thumb color.
    pub scrollbar: String,
    /// Scrollbar thumb hover color.
    pub scrollbar_hover: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: "#0f172a".into(),
            secondary: "#64748b".into(),
            background: "#f1f5f9".into(),
            shadow: "rgba(15, 23, 42, 0.6)".into(),
            border: "#e2e8f0".into(),
            accent: "#8b5cf6".into(),
            interactive: "#ffffff".into(),
            scrollbar: "#cbd5e1".into(),
            scrollbar_hover: "#94a3b8".into(),
        }
    }
}

/// A partial dark-mode palette.
///
/// Every field is optional. Only present roles are re-declared inside the
/// dark scope; absent roles inherit the light value through custom-property
/// inheritance. A role added to the light set alone must stay inherited in
/// dark mode, so the dark block never re-declares the full set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteOverride {
    /// Primary text color.
    pub text: Option<String>,
    /// Secondary/muted text color.
    pub secondary: Option<String>,
    /// Bubble background color.
    pub background: Option<String>,
    /// Backdrop shadow layer color.
    pub shadow: Option<String>,
    /// Border/outline color.
    pub border: Option<String>,
    /// Accent color for focus, section headers and highlights.
    pub accent: Option<String>,
    /// Background of interactive parts.
    pub interactive: Option<String>,
    /// Scrollbar thumb color.
    pub scrollbar: Option<String>,
    /// Scrollbar thumb hover color.
    pub scrollbar_hover: Option<String>,
}

impl PaletteOverride {
    /// An override with no roles set; the dark scope inherits everything.
    pub fn empty() -> Self {
        Self {
            text: None,
            secondary: None,
            background: None,
            shadow: None,
            border: None,
            accent: None,
            interactive: None,
            scrollbar: None,
            scrollbar_hover: None,
        }
    }

    /// Returns true if no role is overridden.
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.secondary.is_none()
            && self.background.is_none()
            && self.shadow.is_none()
            && self.border.is_none()
            && self.accent.is_none()
            && self.interactive.is_none()
            && self.scrollbar.is_none()
            && self.scrollbar_hover.is_none()
    }
}

impl Default for PaletteOverride {
    /// The default dark override re-colors every role, so the default
    /// configuration adapts fully to dark mode out of the box.
    fn default() -> Self {
        Self {
            text: Some("#e2e8f0".into()),
            secondary: Some("#94a3b8".into()),
            background: Some("#0f172a".into()),
            shadow: Some("rgba(2, 6, 23, 0.6)".into()),
            border: Some("#1e293b".into()),
            accent: Some("#8b5cf6".into()),
            interactive: Some("#1e293b".into()),
            scrollbar: Some("#475569".into()),
            scrollbar_hover: Some("#64748b".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_is_complete() {
        let palette = Palette::default();
        assert!(!palette.text.is_empty());
        assert!(!palette.scrollbar_hover.is_empty());
    }

    #[test]
    fn test_default_override_covers_every_role() {
        let dark = PaletteOverride::default();
        assert!(!dark.is_empty());
        assert!(dark.text.is_some());
        assert!(dark.scrollbar_hover.is_some());
    }

    #[test]
    fn test_empty_override() {
        let dark = PaletteOverride::empty();
        assert!(dark.is_empty());
    }

    #[test]
    fn test_partial_override_from_yaml() {
        let dark: PaletteOverride = serde_yaml::from_str("text: '#fff'").unwrap();
        assert_eq!(dark.text.as_deref(), Some("#fff"));
        assert!(dark.accent.is_none());
        assert!(!dark.is_empty());
    }

    #[test]
    fn test_wire_name_is_camel_case() {
        let dark: PaletteOverride = serde_yaml::from_str("scrollbarHover: '#000'").unwrap();
        assert_eq!(dark.scrollbar_hover.as_deref(), Some("#000"));
    }
}
