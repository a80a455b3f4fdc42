//! The style registry: built-in styles plus user-registered custom styles.

use std::collections::HashMap;

use crate::color;
use crate::error::{InvalidNameError, UnknownStyles};
use crate::template;

use super::{builtin_style, StyleEntry};

/// A registry of styles, and the entry point for colorizing text.
///
/// A `StyleSet` owns the custom-style table; the built-in table is shared
/// and immutable. Construct one per logical style vocabulary and pass it by
/// reference wherever text is rendered — there is no ambient global
/// registry. `StyleSet` is plain data (`Send + Sync`), so callers that want
/// process-wide sharing can put one long-lived instance behind whatever
/// synchronization boundary suits them.
///
/// # Resolution order
///
/// A specifier resolves against the custom table first, then the built-in
/// table, then the parametric color grammar (`ANSI:`, `RGB:`, `HEX:`).
/// Specifiers that resolve to nothing are silently dropped.
///
/// # Example
///
/// ```rust
/// use tempera::StyleSet;
///
/// let mut styles = StyleSet::new();
/// styles.add_custom_style("alert", &["red", "underline"]).unwrap();
///
/// assert_eq!(
///     styles.colorize("A", &["alert"]),
///     "\x1b[31m\x1b[4mA\x1b[24m\x1b[39m"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleSet {
    custom: HashMap<String, Vec<String>>,
}

impl StyleSet {
    /// Creates a registry with no custom styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a custom style as an ordered list of built-in style names.
    ///
    /// Overwrites any existing custom style of the same name. Base names are
    /// not validated here: a base unknown to the built-in table simply
    /// contributes nothing when the custom style is used. Base names resolve
    /// through the built-in table only, never through other custom styles.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNameError`] if `name` contains a space or a curly
    /// brace — such names could never be written inside a `{...}` tag.
    pub fn add_custom_style(
        &mut self,
        name: &str,
        base_styles: &[&str],
    ) -> Result<(), InvalidNameError> {
        if name.contains(' ') || name.contains('{') || name.contains('}') {
            return Err(InvalidNameError::new(name));
        }
        self.custom.insert(
            name.to_string(),
            base_styles.iter().map(|base| base.to_string()).collect(),
        );
        Ok(())
    }

    /// Removes custom styles by name. Absent names are ignored.
    pub fn delete_custom_styles(&mut self, names: &[&str]) {
        for name in names {
            self.custom.remove(*name);
        }
    }

    /// Resolves one style specifier to its entries.
    ///
    /// Returns `None` when the specifier matches nothing. A registered
    /// custom style always resolves (`Some`), even if every one of its base
    /// names turns out to be inert — the vector is then empty.
    pub fn resolve(&self, spec: &str) -> Option<Vec<StyleEntry>> {
        if let Some(bases) = self.custom.get(spec) {
            return Some(bases.iter().filter_map(|base| builtin_style(base)).collect());
        }
        if let Some(entry) = builtin_style(spec) {
            return Some(vec![entry]);
        }
        color::parse(spec).map(|entry| vec![entry])
    }

    /// Applies a fixed list of style specifiers to `text`.
    ///
    /// Open sequences are emitted in argument order, then the text, then the
    /// close sequences in reverse order. Specifiers that resolve to nothing
    /// are dropped without disturbing the others, and no trailing reset is
    /// appended — the closes themselves restore the terminal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tempera::StyleSet;
    ///
    /// let styles = StyleSet::new();
    /// assert_eq!(
    ///     styles.colorize("ABC", &["bgBlack", "red"]),
    ///     "\x1b[40m\x1b[31mABC\x1b[39m\x1b[49m"
    /// );
    /// ```
    pub fn colorize(&self, text: &str, styles: &[&str]) -> String {
        let mut entries = Vec::new();
        for spec in styles {
            if let Some(resolved) = self.resolve(spec) {
                entries.extend(resolved);
            }
        }
        if entries.is_empty() {
            return text.to_string();
        }
        let mut out = String::with_capacity(text.len() + entries.len() * 16);
        for entry in &entries {
            out.push_str(entry.open());
        }
        out.push_str(text);
        for entry in entries.iter().rev() {
            out.push_str(entry.close());
        }
        out
    }

    /// Renders a template, interpreting `{...}` style tags.
    ///
    /// See the crate docs for the tag language. The output of any non-empty
    /// template ends with a full reset so unbalanced tags cannot leak styles
    /// past the rendered text.
    pub fn colorize_template(&self, template: &str) -> String {
        template::colorize_template(self, template)
    }

    /// Checks a template for style specifiers that resolve to nothing.
    ///
    /// Rendering drops such specifiers silently; this reports them instead.
    /// Closing and reset tags are skipped, as are the ignored tokens that
    /// follow `-` or `reset` inside a tag.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStyles`] listing each unresolvable specifier once,
    /// in order of first appearance.
    pub fn validate_template(&self, template: &str) -> Result<(), UnknownStyles> {
        template::validate_template(self, template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order_custom_shadows_builtin() {
        let mut styles = StyleSet::new();
        styles.add_custom_style("red", &["green"]).unwrap();
        assert_eq!(styles.colorize("A", &["red"]), "\x1b[32mA\x1b[39m");

        styles.delete_custom_styles(&["red"]);
        assert_eq!(styles.colorize("A", &["red"]), "\x1b[31mA\x1b[39m");
    }

    #[test]
    fn test_custom_bases_resolve_through_builtin_only() {
        let mut styles = StyleSet::new();
        styles.add_custom_style("base", &["red"]).unwrap();
        styles.add_custom_style("derived", &["base"]).unwrap();

        // "base" is not a built-in name, so it is inert inside "derived".
        assert_eq!(styles.colorize("A", &["derived"]), "A");
        assert_eq!(styles.resolve("derived"), Some(vec![]));
    }

    #[test]
    fn test_custom_bases_do_not_reach_color_specs() {
        let mut styles = StyleSet::new();
        styles.add_custom_style("hot", &["ANSI:196"]).unwrap();
        assert_eq!(styles.colorize("A", &["hot"]), "A");
    }

    #[test]
    fn test_unknown_bases_are_inert_not_fatal() {
        let mut styles = StyleSet::new();
        styles
            .add_custom_style("mixed", &["nope", "red", "alsoNope"])
            .unwrap();
        assert_eq!(styles.colorize("A", &["mixed"]), "\x1b[31mA\x1b[39m");
    }

    #[test]
    fn test_add_rejects_spaces_and_braces() {
        let mut styles = StyleSet::new();
        for name in ["{invalid", "invalid}", "no spaces"] {
            let err = styles.add_custom_style(name, &["red"]).unwrap_err();
            assert_eq!(err.name(), name);
        }
        // Nothing was stored.
        assert!(styles.resolve("{invalid").is_none());
    }

    #[test]
    fn test_add_overwrites() {
        let mut styles = StyleSet::new();
        styles.add_custom_style("x", &["red"]).unwrap();
        styles.add_custom_style("x", &["green"]).unwrap();
        assert_eq!(styles.colorize("A", &["x"]), "\x1b[32mA\x1b[39m");
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut styles = StyleSet::new();
        styles.delete_custom_styles(&["never-registered"]);
        styles.add_custom_style("x", &["red"]).unwrap();
        styles.delete_custom_styles(&["x", "x", "also-absent"]);
        assert!(styles.resolve("x").is_none());
    }

    #[test]
    fn test_colorize_empty_style_list() {
        let styles = StyleSet::new();
        assert_eq!(styles.colorize("ABC", &[]), "ABC");
    }

    #[test]
    fn test_colorize_falls_back_to_color_specs() {
        let styles = StyleSet::new();
        assert_eq!(
            styles.colorize("A", &["ANSI:208"]),
            "\x1b[38;5;208mA\x1b[39m"
        );
    }

    #[test]
    fn test_colorize_mixed_known_unknown_preserves_order() {
        let styles = StyleSet::new();
        assert_eq!(
            styles.colorize("A", &["whatever", "red", "nope", "bold"]),
            "\x1b[31m\x1b[1mA\x1b[22m\x1b[39m"
        );
    }
}
