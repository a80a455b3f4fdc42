//! The tag stack machine.
//!
//! Drives the tokenizer over a template and maintains a stack of tag
//! groups: each opening tag pushes the entries it resolved to (possibly
//! none), `{-}` pops the most recent group, and `{reset}` abandons the
//! stack outright. Closing a group replays every entry still on the stack,
//! because ANSI close codes clear their whole category — popping an inner
//! foreground color would otherwise erase an outer one too.

use crate::error::UnknownStyles;
use crate::style::{StyleEntry, StyleSet, FULL_RESET};

use super::tokenizer::{TagKind, Token, Tokenizer};

pub(crate) fn colorize_template(styles: &StyleSet, template: &str) -> String {
    if template.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(template.len() + FULL_RESET.len());
    let mut stack: Vec<Vec<StyleEntry>> = Vec::new();

    for token in Tokenizer::new(template) {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::EscapedBrace => out.push('{'),
            Token::Tag(body) => match TagKind::classify(body) {
                TagKind::Open(specs) => {
                    let mut group = Vec::new();
                    for spec in specs.split_whitespace() {
                        if let Some(entries) = styles.resolve(spec) {
                            group.extend(entries);
                        }
                    }
                    for entry in &group {
                        out.push_str(entry.open());
                    }
                    // Pushed even when empty, so a later close pops the
                    // tag that was actually opened.
                    stack.push(group);
                }
                TagKind::Reset => stack.clear(),
                TagKind::Close => {
                    if let Some(group) = stack.pop() {
                        for entry in group.iter().rev() {
                            out.push_str(entry.close());
                        }
                        // Replay: closes are category-wide, so everything
                        // still open must be re-applied, outermost first.
                        for remaining in &stack {
                            for entry in remaining {
                                out.push_str(entry.open());
                            }
                        }
                    }
                }
            },
        }
    }

    out.push_str(FULL_RESET);
    out
}

/// Strips style tags from a template, keeping only literal text.
///
/// Tags are recognized with the same tokenizer as
/// [`colorize_template`](crate::StyleSet::colorize_template) and discarded
/// wholesale — no resolution, no escape codes, no trailing reset. `{{`
/// unescapes to `{`.
///
/// # Example
///
/// ```rust
/// use tempera::clean_template;
///
/// assert_eq!(clean_template("{red}ABC{green}CDE{-}EFG{-}HIJ"), "ABCCDEEFGHIJ");
/// assert_eq!(clean_template("{{red}"), "{red}");
/// ```
pub fn clean_template(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    for token in Tokenizer::new(template) {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::EscapedBrace => out.push('{'),
            Token::Tag(_) => {}
        }
    }
    out
}

pub(crate) fn validate_template(
    styles: &StyleSet,
    template: &str,
) -> Result<(), UnknownStyles> {
    let mut unknown: Vec<String> = Vec::new();
    for token in Tokenizer::new(template) {
        if let Token::Tag(body) = token {
            if let TagKind::Open(specs) = TagKind::classify(body) {
                for spec in specs.split_whitespace() {
                    if styles.resolve(spec).is_none() && !unknown.iter().any(|u| u == spec) {
                        unknown.push(spec.to_string());
                    }
                }
            }
        }
    }
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(UnknownStyles::new(unknown))
    }
}
