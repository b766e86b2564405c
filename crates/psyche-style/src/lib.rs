//! # Psyche Style - Search Widget Stylesheet Generation
//!
//! `psyche-style` turns a declarative [`SearchConfig`] into the CSS for the
//! psyche search overlay widget: a global block of custom-property design
//! tokens (light palette plus a conditional dark-mode override) and a scoped
//! block of structural rules that consume those tokens.
//!
//! The interesting part is template composition: conditional fragments
//! (dark-mode strategy, scrollbar variant, responsive breakpoint) are
//! assembled deterministically from one configuration object, with
//! user-authored strings escaped before they reach CSS text. Generation is
//! pure and stateless; the host widget inserts the output into the document
//! and re-generates when its configuration changes.
//!
//! ## Core Concepts
//!
//! - [`properties`]: the token block generator (light tokens, fonts,
//!   escaped empty-state message, dark override subset)
//! - [`scoped`]: the structural rule generator (fixed rule set, one of two
//!   scrollbar fragments)
//! - [`generate`] / [`Stylesheet`]: both blocks from one call
//! - [`interpolate`] / [`css_string`]: the substitution primitive and the
//!   quoted-string escape it applies per slot
//!
//! ## Quick Start
//!
//! ```rust
//! use psyche_style::{generate, SearchConfig};
//!
//! let config = SearchConfig::from_yaml(
//!     r#"
//! theme:
//!   darkMode: media
//!   scrollbarStyle: square
//! "#,
//! )
//! .unwrap();
//!
//! let sheet = generate(&config).unwrap();
//! assert!(sheet.properties.contains("@media (prefers-color-scheme: dark)"));
//! assert!(sheet.scoped.contains(".psyche-result"));
//! ```
//!
//! ## Output Contract
//!
//! The root selector ([`ROOT_SELECTOR`]), the custom-property names
//! ([`TOKEN_PROPERTIES`]) and the `.psyche-*` class names in the scoped
//! block are a fixed contract with the widget's markup renderer; changing
//! any of them is a breaking change regardless of semver.

// Internal modules
mod engine;
mod error;
mod escape;
pub mod prelude;
mod scoped;
mod stylesheet;
mod tokens;

// Error type
pub use error::StyleError;

// Generators and combined output
pub use scoped::scoped;
pub use stylesheet::{generate, Stylesheet};
pub use tokens::{properties, ROOT_SELECTOR, TOKEN_PROPERTIES};

// Interpolation primitive and escaping
pub use engine::interpolate;
pub use escape::css_string;

// Re-export the configuration model so depending on `psyche-style` alone is
// enough for the common case.
pub use psyche_theme::{
    ConfigError, DarkMode, DocumentFormat, FontConfig, Messages, Palette, PaletteOverride,
    ScrollbarStyle, SearchConfig, ThemeConfig, CONFIG_EXTENSIONS,
};
