//! Error types for style registration and template validation.
//!
//! Rendering itself never fails: unknown specifiers, malformed color specs,
//! and unbalanced tags all degrade styling rather than abort output. The
//! types here cover the two operations that do report problems — registering
//! a custom style under a name the tag syntax cannot express, and the opt-in
//! template validator.

use thiserror::Error;

/// Error returned when a custom style is registered under an invalid name.
///
/// Custom style names are embedded in `{...}` tags, where whitespace
/// separates specifiers and curly braces delimit the tag itself, so names
/// containing any of those characters are rejected up front.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid custom style name {name:?}: names must not contain spaces or curly braces")]
pub struct InvalidNameError {
    name: String,
}

impl InvalidNameError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The rejected name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Error returned by [`StyleSet::validate_template`](crate::StyleSet::validate_template)
/// listing the style specifiers that resolve to nothing.
///
/// Rendering drops these specifiers silently; validation exists for callers
/// that would rather surface a typo than ship unstyled output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown style specifiers: {}", .specifiers.join(", "))]
pub struct UnknownStyles {
    specifiers: Vec<String>,
}

impl UnknownStyles {
    pub(crate) fn new(specifiers: Vec<String>) -> Self {
        Self { specifiers }
    }

    /// The specifiers that did not resolve, in order of first appearance.
    pub fn specifiers(&self) -> &[String] {
        &self.specifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_display() {
        let err = InvalidNameError::new("no spaces");
        assert!(err.to_string().contains("no spaces"));
        assert!(err.to_string().contains("curly braces"));
        assert_eq!(err.name(), "no spaces");
    }

    #[test]
    fn test_unknown_styles_display() {
        let err = UnknownStyles::new(vec!["yolla".to_string(), "ANSI:999".to_string()]);
        assert_eq!(
            err.to_string(),
            "unknown style specifiers: yolla, ANSI:999"
        );
        assert_eq!(err.specifiers(), ["yolla", "ANSI:999"]);
    }
}
