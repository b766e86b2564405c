//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Source document format for a search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML (`.yaml` / `.yml`).
    Yaml,
    /// JSON (`.json`).
    Json,
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Yaml => write!(f, "YAML"),
            DocumentFormat::Json => write!(f, "JSON"),
        }
    }
}

/// Error raised while loading a search configuration document.
///
/// Nothing is caught or recovered here: a malformed document propagates to
/// the caller, which owns the decision of how to surface it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid search configuration.
    #[error("failed to parse {format} configuration: {message}")]
    Parse {
        /// Format the document was parsed as.
        format: DocumentFormat,
        /// Message from the underlying parser.
        message: String,
    },

    /// The file extension does not map to a supported document format.
    #[error("unsupported configuration extension: {}", .path.display())]
    UnsupportedExtension {
        /// Path whose extension was not recognized.
        path: PathBuf,
    },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            format: DocumentFormat::Yaml,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            format: DocumentFormat::Json,
            message: err.to_string(),
        }
    }
}
