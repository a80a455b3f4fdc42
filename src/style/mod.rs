//! Style entries and the style registry.
//!
//! A [`StyleEntry`] is one toggleable visual attribute: the escape sequence
//! that enables it and the one that disables it. The built-in table in
//! [`builtin`] covers the named colors and attributes; [`StyleSet`] layers
//! user-registered custom styles on top and resolves parametric color specs
//! as a fallback.

use std::borrow::Cow;

mod builtin;
mod set;

pub use builtin::{builtin_style, builtin_style_names};
pub use set::StyleSet;

/// Disables any foreground color, regardless of how it was set.
pub(crate) const FG_CLOSE: &str = "\x1b[39m";
/// Disables any background color, regardless of how it was set.
pub(crate) const BG_CLOSE: &str = "\x1b[49m";
/// Full attribute reset, appended after every templated output.
pub(crate) const FULL_RESET: &str = "\x1b[0m";

/// One visual attribute as a pair of ANSI escape sequences.
///
/// The open sequence enables the attribute (a foreground or background
/// color, or an attribute like underline); the close sequence disables that
/// attribute's whole category. Closes are category-wide on purpose: the
/// template engine re-emits the remaining stack after each close, so
/// `\x1b[39m` works as the close for every foreground color.
///
/// # Example
///
/// ```rust
/// use tempera::builtin_style;
///
/// let red = builtin_style("red").unwrap();
/// assert_eq!(red.open(), "\x1b[31m");
/// assert_eq!(red.close(), "\x1b[39m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    open: Cow<'static, str>,
    close: Cow<'static, str>,
}

impl StyleEntry {
    /// Entry backed by static sequences, used by the built-in table.
    pub(crate) const fn from_static(open: &'static str, close: &'static str) -> Self {
        Self {
            open: Cow::Borrowed(open),
            close: Cow::Borrowed(close),
        }
    }

    /// Entry with a computed open sequence, used by the color spec resolver.
    /// The close is still static: color closes are category-wide.
    pub(crate) fn from_open(open: String, close: &'static str) -> Self {
        Self {
            open: Cow::Owned(open),
            close: Cow::Borrowed(close),
        }
    }

    /// The escape sequence that enables this attribute.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The escape sequence that disables this attribute's category.
    pub fn close(&self) -> &str {
        &self.close
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accessors() {
        let entry = StyleEntry::from_static("\x1b[4m", "\x1b[24m");
        assert_eq!(entry.open(), "\x1b[4m");
        assert_eq!(entry.close(), "\x1b[24m");
    }

    #[test]
    fn test_owned_open_static_close() {
        let entry = StyleEntry::from_open(format!("\x1b[38;5;{}m", 208), FG_CLOSE);
        assert_eq!(entry.open(), "\x1b[38;5;208m");
        assert_eq!(entry.close(), "\x1b[39m");
    }
}
