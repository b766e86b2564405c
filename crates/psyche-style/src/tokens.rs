//! Token block generation.
//!
//! Emits the global rule block declaring the widget's design tokens as CSS
//! custom properties: the complete light palette, the two font roles and the
//! quoted empty-state message, followed by a dark-mode block re-declaring
//! only the overridden palette subset. The dark wrapper is selected by the
//! configured [`DarkMode`] strategy.
//!
//! Tokens not re-declared in the dark block keep their light value through
//! custom-property inheritance; the generator relies on this rather than
//! re-declaring every token per mode.

use serde::Serialize;

use psyche_theme::{DarkMode, FontConfig, Palette, PaletteOverride, SearchConfig};

use crate::engine;
use crate::error::StyleError;

/// Root selector of the widget's custom element. Part of the fixed contract
/// with the markup-rendering collaborator.
pub const ROOT_SELECTOR: &str = "psyche-search";

/// Custom properties declared by the token block, in declaration order.
/// Part of the fixed contract with the markup-rendering collaborator.
pub const TOKEN_PROPERTIES: [&str; 12] = [
    "--font-sans",
    "--font-mono",
    "--theme-text",
    "--theme-secondary",
    "--theme-background",
    "--theme-shadow",
    "--theme-border",
    "--theme-accent",
    "--theme-interactive",
    "--theme-scrollbar",
    "--theme-scrollbar-hover",
    "--message-empty",
];

const CLASS_DARK_PREFIX: &str = ".dark psyche-search";
const MEDIA_DARK_PREFIX: &str = "@media (prefers-color-scheme: dark) { psyche-search";

const TOKEN_TEMPLATE: &str = r#"psyche-search {
  --font-sans: {{ font.sans }};
  --font-mono: {{ font.mono }};
  --theme-text: {{ light.text }};
  --theme-secondary: {{ light.secondary }};
  --theme-background: {{ light.background }};
  --theme-shadow: {{ light.shadow }};
  --theme-border: {{ light.border }};
  --theme-accent: {{ light.accent }};
  --theme-interactive: {{ light.interactive }};
  --theme-scrollbar: {{ light.scrollbar }};
  --theme-scrollbar-hover: {{ light.scrollbarHover }};
  --message-empty: {{ empty | css_string }};
}

{{ dark_prefix }} {
{%- for token in dark_tokens %}
  {{ token.name }}: {{ token.value }};
{%- endfor %}
{{ dark_suffix }} }
"#;

#[derive(Serialize)]
struct TokenContext<'a> {
    font: &'a FontConfig,
    light: &'a Palette,
    empty: &'a str,
    dark_prefix: &'static str,
    dark_suffix: &'static str,
    dark_tokens: Vec<TokenDeclaration<'a>>,
}

#[derive(Serialize)]
struct TokenDeclaration<'a> {
    name: &'static str,
    value: &'a str,
}

/// Generates the global token block for `config`.
///
/// The output declares every light token under [`ROOT_SELECTOR`], then the
/// dark override subset under the wrapper selected by
/// `config.theme.dark_mode`: an ancestor-class selector for
/// [`DarkMode::Class`], a `prefers-color-scheme: dark` media query (with its
/// extra closing brace) for [`DarkMode::Media`].
///
/// The empty-state message is emitted double-quoted with its content
/// escaped, so any user-authored text yields a syntactically valid
/// declaration.
pub fn properties(config: &SearchConfig) -> Result<String, StyleError> {
    let theme = &config.theme;
    let (dark_prefix, dark_suffix) = match theme.dark_mode {
        DarkMode::Class => (CLASS_DARK_PREFIX, ""),
        DarkMode::Media => (MEDIA_DARK_PREFIX, "}"),
    };

    engine::interpolate(
        TOKEN_TEMPLATE,
        TokenContext {
            font: &theme.font,
            light: &theme.light,
            empty: &config.messages.empty,
            dark_prefix,
            dark_suffix,
            dark_tokens: dark_declarations(&theme.dark),
        },
    )
}

/// The overridden dark subset as property declarations, in the light
/// block's declaration order.
fn dark_declarations(dark: &PaletteOverride) -> Vec<TokenDeclaration<'_>> {
    let roles: [(&'static str, Option<&String>); 9] = [
        ("--theme-text", dark.text.as_ref()),
        ("--theme-secondary", dark.secondary.as_ref()),
        ("--theme-background", dark.background.as_ref()),
        ("--theme-shadow", dark.shadow.as_ref()),
        ("--theme-border", dark.border.as_ref()),
        ("--theme-accent", dark.accent.as_ref()),
        ("--theme-interactive", dark.interactive.as_ref()),
        ("--theme-scrollbar", dark.scrollbar.as_ref()),
        ("--theme-scrollbar-hover", dark.scrollbar_hover.as_ref()),
    ];

    roles
        .into_iter()
        .filter_map(|(name, value)| {
            value.map(|value| TokenDeclaration {
                name,
                value: value.as_str(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use psyche_theme::{Messages, PaletteOverride};

    fn brace_balance(css: &str) -> i32 {
        css.chars().fold(0, |balance, c| match c {
            '{' => balance + 1,
            '}' => balance - 1,
            _ => balance,
        })
    }

    #[test]
    fn test_every_token_is_declared_in_the_light_block() {
        let out = properties(&SearchConfig::default()).unwrap();
        let light_block = &out[..out.find('}').unwrap()];
        for name in TOKEN_PROPERTIES {
            assert!(
                light_block.contains(&format!("{}: ", name)),
                "missing {} in light block",
                name
            );
        }
    }

    #[test]
    fn test_output_opens_with_the_root_selector() {
        let out = properties(&SearchConfig::default()).unwrap();
        assert!(out.starts_with(&format!("{} {{", ROOT_SELECTOR)));
    }

    #[test]
    fn test_class_strategy_wrapper() {
        let mut config = SearchConfig::default();
        config.theme.dark_mode = DarkMode::Class;

        let out = properties(&config).unwrap();
        assert!(out.contains(".dark psyche-search {"));
        assert!(!out.contains("@media"));
        assert_eq!(brace_balance(&out), 0);
    }

    #[test]
    fn test_media_strategy_wrapper() {
        let mut config = SearchConfig::default();
        config.theme.dark_mode = DarkMode::Media;

        let out = properties(&config).unwrap();
        assert!(out.contains("@media (prefers-color-scheme: dark) { psyche-search {"));
        assert_eq!(brace_balance(&out), 0);

        // The media wrapper nests exactly one rule block.
        let media_section = &out[out.find("@media").unwrap()..];
        assert_eq!(media_section.matches('{').count(), 2);
        assert_eq!(media_section.matches('}').count(), 2);
    }

    #[test]
    fn test_dark_block_emits_only_the_overridden_subset() {
        let mut config = SearchConfig::default();
        config.theme.dark = PaletteOverride {
            text: Some("#fff".into()),
            accent: Some("#c4b5fd".into()),
            ..PaletteOverride::empty()
        };

        let out = properties(&config).unwrap();
        let dark_block = &out[out.find(".dark psyche-search").unwrap()..];
        assert!(dark_block.contains("--theme-text: #fff;"));
        assert!(dark_block.contains("--theme-accent: #c4b5fd;"));
        assert!(!dark_block.contains("--theme-background"));
        assert!(!dark_block.contains("--theme-scrollbar"));
    }

    #[test]
    fn test_empty_override_emits_an_empty_dark_block() {
        let mut config = SearchConfig::default();
        config.theme.dark = PaletteOverride::empty();

        let out = properties(&config).unwrap();
        let dark_block = &out[out.find(".dark psyche-search").unwrap()..];
        assert!(!dark_block.contains("--theme-"));
        assert_eq!(brace_balance(&out), 0);
    }

    #[test]
    fn test_message_quotes_are_escaped() {
        let mut config = SearchConfig::default();
        config.messages = Messages {
            empty: "No \"results\" found".into(),
        };

        let out = properties(&config).unwrap();
        assert!(out.contains("--message-empty: \"No \\\"results\\\" found\";"));
        assert_eq!(brace_balance(&out), 0);
    }

    #[test]
    fn test_message_is_always_quoted() {
        let out = properties(&SearchConfig::default()).unwrap();
        assert!(out.contains("--message-empty: \"no results found\";"));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let config = SearchConfig::default();
        assert_eq!(
            properties(&config).unwrap(),
            properties(&config).unwrap()
        );
    }
}
