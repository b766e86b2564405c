//! The top-level search configuration document.
//!
//! Documents are YAML or JSON, camelCase on the wire, and may carry
//! host-widget settings (hotkeys, result sources, …) beyond the theme; only
//! the fields modeled here are read, everything else is ignored. Every field
//! defaults, so an empty document is a complete working configuration.
//!
//! # Example
//!
//! ```rust
//! use psyche_theme::{DarkMode, SearchConfig};
//!
//! let config = SearchConfig::from_yaml(
//!     r#"
//! theme:
//!   darkMode: media
//!   dark:
//!     accent: '#c4b5fd'
//! messages:
//!   empty: nothing here
//! "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.theme.dark_mode, DarkMode::Media);
//! assert_eq!(config.messages.empty, "nothing here");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, DocumentFormat};
use crate::theme::ThemeConfig;

/// File extensions accepted by [`SearchConfig::from_file`], in priority
/// order.
pub const CONFIG_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// User-facing message strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Messages {
    /// Free-form text shown when a query matches nothing. Quoted and escaped
    /// by the stylesheet generator before it reaches CSS `content`.
    pub empty: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            empty: "no results found".into(),
        }
    }
}

/// The search widget's configuration document.
///
/// Treated as read-only for the lifetime of one stylesheet generation pass.
/// Validation and layering of user overrides happen in the host's
/// configuration collaborator before a value of this type is built; this
/// crate only models, defaults and loads the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Visual theme.
    pub theme: ThemeConfig,
    /// User-facing messages.
    pub messages: Messages,
}

impl SearchConfig {
    /// Parses a configuration from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid YAML for
    /// this schema.
    pub fn from_yaml(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(document)?)
    }

    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON for
    /// this schema.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Loads a configuration from a file, dispatching on its extension.
    ///
    /// Extensions in [`CONFIG_EXTENSIONS`] are accepted, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedExtension`] for any other path,
    /// [`ConfigError::Io`] if the file cannot be read, and
    /// [`ConfigError::Parse`] if its contents do not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let format = match extension.as_deref() {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            Some("json") => DocumentFormat::Json,
            _ => {
                return Err(ConfigError::UnsupportedExtension {
                    path: path.to_path_buf(),
                })
            }
        };

        let document = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match format {
            DocumentFormat::Yaml => Self::from_yaml(&document),
            DocumentFormat::Json => Self::from_json(&document),
        }
    }
}
