//! Template interpolation.
//!
//! This module provides [`interpolate`], the substitution primitive both
//! stylesheet generators are built on: a fixed template with `{{ slot }}`
//! placeholders, rendered against a serializable set of values.
//!
//! Escaping is part of the primitive, selected per slot by its syntactic
//! role: a plain slot (`{{ value }}`) inserts a raw CSS value, a
//! quoted-string slot is written `{{ value | css_string }}` and passes
//! through CSS string serialization. A slot that carries untrusted content
//! into a quoted position must name that role in the template itself.
//!
//! The environment is shared, immutable after initialization, and carries no
//! per-render state; concurrent interpolation is safe.

use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::StyleError;
use crate::escape;

static ENVIRONMENT: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    register_filters(&mut env);
    env
});

/// Registers the CSS filters with a template environment.
fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("css_string", |value: String| -> String {
        escape::css_string(&value)
    });
}

/// Renders `template`, substituting `{{ slot }}` placeholders from `values`.
///
/// # Example
///
/// ```rust
/// use psyche_style::interpolate;
/// use serde_json::json;
///
/// let rule = interpolate(
///     ".badge { color: {{ color }}; content: {{ label | css_string }}; }",
///     json!({ "color": "#7c3aed", "label": "no \"results\"" }),
/// )
/// .unwrap();
///
/// assert_eq!(
///     rule,
///     ".badge { color: #7c3aed; content: \"no \\\"results\\\"\"; }"
/// );
/// ```
///
/// # Errors
///
/// Returns [`StyleError::Template`] for malformed templates and
/// [`StyleError::Serialization`] if `values` cannot be serialized.
pub fn interpolate<S: Serialize>(template: &str, values: S) -> Result<String, StyleError> {
    let context = Value::from_serialize(&values);
    Ok(ENVIRONMENT.render_str(template, context)?)
}
