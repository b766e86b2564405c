//! The generated stylesheet pair.

use std::fmt;

use psyche_theme::SearchConfig;

use crate::error::StyleError;
use crate::scoped::scoped;
use crate::tokens::properties;

/// The two generated rule blocks.
///
/// The blocks are independent; by convention the token block precedes the
/// scoped block when combined, so later rules can reference the tokens the
/// former defines. [`fmt::Display`] renders them in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// Global token declarations (light palette, fonts, message, dark
    /// overrides).
    pub properties: String,
    /// Scoped structural rules for the widget's markup.
    pub scoped: String,
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.properties, self.scoped)
    }
}

/// Generates the complete stylesheet for `config`.
///
/// Invokes both generators once with the same configuration. The host
/// widget is responsible for inserting the result into the document's
/// styling context, and for re-generating if the configuration changes;
/// nothing is cached here.
pub fn generate(config: &SearchConfig) -> Result<Stylesheet, StyleError> {
    Ok(Stylesheet {
        properties: properties(config)?,
        scoped: scoped(config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_both_blocks() {
        let sheet = generate(&SearchConfig::default()).unwrap();
        assert!(sheet.properties.contains("--theme-text"));
        assert!(sheet.scoped.contains(".psyche-wrapper"));
    }

    #[test]
    fn test_display_puts_tokens_first() {
        let sheet = generate(&SearchConfig::default()).unwrap();
        let combined = sheet.to_string();
        assert!(combined.find("--theme-text").unwrap() < combined.find(".psyche-wrapper").unwrap());
    }
}
