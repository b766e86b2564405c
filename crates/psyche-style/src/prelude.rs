//! Convenient re-exports for the common case: load a configuration,
//! generate a stylesheet.
//!
//! ```rust
//! use psyche_style::prelude::*;
//!
//! let config = SearchConfig::default();
//! let sheet = generate(&config).unwrap();
//! assert!(sheet.properties.starts_with("psyche-search {"));
//! ```

pub use crate::{generate, interpolate, properties, scoped, StyleError, Stylesheet};
pub use psyche_theme::{DarkMode, ScrollbarStyle, SearchConfig, ThemeConfig};
