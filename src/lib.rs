//! # tempera — template-tag ANSI styling for terminal text
//!
//! `tempera` converts human-written style tags into ANSI escape sequences.
//! Text is styled either directly, with an explicit list of style
//! specifiers, or through a mini-template language that embeds `{...}`
//! tags inline with nested open/close semantics.
//!
//! ## Template tags
//!
//! A tag is split on whitespace; the first token decides what it does:
//!
//! - `{red bold}` — opening tag: every token is a style specifier, applied
//!   together and closed together
//! - `{-}` — closing tag: closes the most recently opened tag
//! - `{reset}` — discards all open tags without emitting close codes
//! - `{{` — a literal `{`
//!
//! Specifiers name a built-in style (`red`, `underline`, `bgBlack`, ...),
//! a registered custom style, or a parametric color (`ANSI:208`,
//! `ANSI:5,0,0`, `RGB:255,160,0`, `HEX:#ff6b35` — each with an optional
//! case-insensitive `bg` prefix for background). Unknown specifiers are
//! silently dropped: malformed input degrades styling, never output.
//! Every non-empty template ends with a full reset, so unbalanced tags
//! cannot leak styles past the rendered text.
//!
//! ## Quick Start
//!
//! ```rust
//! use tempera::colorize_template;
//!
//! let out = colorize_template("{red}error:{-} disk full");
//! assert_eq!(out, "\x1b[31merror:\x1b[39m disk full\x1b[0m");
//! ```
//!
//! Nested tags close in LIFO order, and closing an inner color re-applies
//! the outer one:
//!
//! ```rust
//! use tempera::colorize_template;
//!
//! let out = colorize_template("{red}ABC{green}CDE{-}EFG{-}HIJ");
//! assert_eq!(out, "\x1b[31mABC\x1b[32mCDE\x1b[39m\x1b[31mEFG\x1b[39mHIJ\x1b[0m");
//! ```
//!
//! ## Custom styles
//!
//! Custom styles live in a [`StyleSet`], an explicit registry value you
//! own and pass around — there is no process-global state:
//!
//! ```rust
//! use tempera::StyleSet;
//!
//! let mut styles = StyleSet::new();
//! styles.add_custom_style("alert", &["red", "underline"]).unwrap();
//!
//! assert_eq!(
//!     styles.colorize("A", &["alert"]),
//!     "\x1b[31m\x1b[4mA\x1b[24m\x1b[39m"
//! );
//! ```
//!
//! ## Plain-text reporting
//!
//! [`clean_template`] strips tags without emitting any escape codes, for
//! logs and non-terminal sinks:
//!
//! ```rust
//! use tempera::clean_template;
//!
//! assert_eq!(clean_template("{red}ABC{-}DEF"), "ABCDEF");
//! ```

mod color;
mod error;
mod style;
mod template;

pub use error::{InvalidNameError, UnknownStyles};
pub use style::{builtin_style, builtin_style_names, StyleEntry, StyleSet};
pub use template::clean_template;

use once_cell::sync::Lazy;

/// Shared registry for the free functions: built-in styles only.
static BUILTIN_ONLY: Lazy<StyleSet> = Lazy::new(StyleSet::new);

/// Applies style specifiers to `text` using built-in styles and color
/// specs only.
///
/// Convenience wrapper over [`StyleSet::colorize`] for callers with no
/// custom styles.
///
/// # Example
///
/// ```rust
/// use tempera::colorize;
///
/// assert_eq!(colorize("ok", &["green", "bold"]), "\x1b[32m\x1b[1mok\x1b[22m\x1b[39m");
/// assert_eq!(colorize("ok", &["totallyUnknown"]), "ok");
/// ```
pub fn colorize(text: &str, styles: &[&str]) -> String {
    BUILTIN_ONLY.colorize(text, styles)
}

/// Renders a template using built-in styles and color specs only.
///
/// Convenience wrapper over [`StyleSet::colorize_template`] for callers
/// with no custom styles.
pub fn colorize_template(template: &str) -> String {
    BUILTIN_ONLY.colorize_template(template)
}
