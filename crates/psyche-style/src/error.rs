//! Error types for stylesheet interpolation.
//!
//! This module provides [`StyleError`], the error type for all interpolation
//! operations. It abstracts over the underlying template engine's errors,
//! keeping the engine an implementation detail of the public API.

use std::fmt;

/// Error type for template interpolation.
///
/// The built-in generators use fixed templates whose slots are always
/// populated, so for them a `StyleError` is unreachable in practice; the
/// type exists because [`interpolate`](crate::interpolate) is public and
/// caller-supplied templates can be malformed.
#[derive(Debug)]
pub enum StyleError {
    /// Template syntax error or rendering failure.
    Template(String),

    /// Value serialization error while building the template context.
    Serialization(String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleError::Template(msg) => write!(f, "template error: {}", msg),
            StyleError::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StyleError {}

impl From<minijinja::Error> for StyleError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::BadSerialization => StyleError::Serialization(err.to_string()),
            _ => StyleError::Template(err.to_string()),
        }
    }
}
