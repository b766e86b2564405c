//! # Psyche Theme - Search Widget Configuration Model
//!
//! `psyche-theme` models the declarative configuration of the psyche search
//! overlay widget: dark-mode strategy, font roles, light/dark color
//! palettes, scrollbar appearance and user-facing messages. It is the input
//! side of the widget's presentation layer; the `psyche-style` crate turns a
//! [`SearchConfig`] into CSS text.
//!
//! ## Core Concepts
//!
//! - [`SearchConfig`]: the full configuration document (theme + messages)
//! - [`ThemeConfig`]: fonts, palettes and the two style-selection axes
//! - [`DarkMode`]: `class` (ancestor-class toggle) or `media`
//!   (`prefers-color-scheme`)
//! - [`ScrollbarStyle`]: `square` or `rounded`
//! - [`Palette`] / [`PaletteOverride`]: complete light palette, partial dark
//!   override
//!
//! ## Quick Start
//!
//! ```rust
//! use psyche_theme::{ScrollbarStyle, SearchConfig};
//!
//! let config = SearchConfig::from_yaml(
//!     r#"
//! theme:
//!   scrollbarStyle: square
//!   light:
//!     accent: '#7c3aed'
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.theme.scrollbar_style, ScrollbarStyle::Square);
//! assert_eq!(config.theme.light.accent, "#7c3aed");
//! ```
//!
//! ## Defaulting
//!
//! Every field carries a default, so partial documents (or `{}`) produce a
//! complete working configuration. Layering multiple documents on top of
//! each other is the host's concern, not this crate's.

mod config;
mod error;
mod palette;
mod theme;

pub use config::{Messages, SearchConfig, CONFIG_EXTENSIONS};
pub use error::{ConfigError, DocumentFormat};
pub use palette::{Palette, PaletteOverride};
pub use theme::{DarkMode, FontConfig, ScrollbarStyle, ThemeConfig};
