//! Parametric color specifier parsing.
//!
//! Resolves tokens that name a color directly instead of a table entry:
//!
//! - `ANSI:<n>` — 256-color palette index (0–255)
//! - `ANSI:<r>,<g>,<b>` — 6×6×6 cube coordinates (each 0–5)
//! - `RGB:<r>,<g>,<b>` — truecolor components (each 0–255)
//! - `HEX:<rrggbb>` — truecolor, optional leading `#`
//!
//! The family keyword and the optional `bg` prefix are case-insensitive;
//! `bg` routes the result to the background escape family (48/49) instead
//! of the foreground one (38/39). Anything malformed resolves to `None` —
//! a dropped token leaves the text unstyled rather than emitting a partial
//! escape sequence.

use crate::style::{StyleEntry, BG_CLOSE, FG_CLOSE};

/// Parses a single color specifier, returning `None` on any malformation.
pub(crate) fn parse(spec: &str) -> Option<StyleEntry> {
    let (body, background) = match spec.get(..2) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bg") => (&spec[2..], true),
        _ => (spec, false),
    };
    let (family, args) = body.split_once(':')?;
    if family.eq_ignore_ascii_case("ansi") {
        parse_ansi(args, background)
    } else if family.eq_ignore_ascii_case("rgb") {
        parse_rgb(args, background)
    } else if family.eq_ignore_ascii_case("hex") {
        parse_hex(args, background)
    } else {
        None
    }
}

fn parse_ansi(args: &str, background: bool) -> Option<StyleEntry> {
    let parts: Vec<&str> = args.split(',').collect();
    match parts.as_slice() {
        [index] => {
            let index: u8 = index.parse().ok()?;
            Some(indexed(index, background))
        }
        [r, g, b] => {
            let r = cube_component(r)?;
            let g = cube_component(g)?;
            let b = cube_component(b)?;
            Some(indexed(16 + 36 * r + 6 * g + b, background))
        }
        _ => None,
    }
}

fn cube_component(part: &str) -> Option<u8> {
    let value: u8 = part.parse().ok()?;
    (value <= 5).then_some(value)
}

fn parse_rgb(args: &str, background: bool) -> Option<StyleEntry> {
    let parts: Vec<&str> = args.split(',').collect();
    let [r, g, b] = parts.as_slice() else {
        return None;
    };
    Some(truecolor(
        r.parse().ok()?,
        g.parse().ok()?,
        b.parse().ok()?,
        background,
    ))
}

fn parse_hex(args: &str, background: bool) -> Option<StyleEntry> {
    let digits = args.strip_prefix('#').unwrap_or(args);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(truecolor(r, g, b, background))
}

fn indexed(index: u8, background: bool) -> StyleEntry {
    let (open_code, close) = family_codes(background);
    StyleEntry::from_open(format!("\x1b[{};5;{}m", open_code, index), close)
}

fn truecolor(r: u8, g: u8, b: u8, background: bool) -> StyleEntry {
    let (open_code, close) = family_codes(background);
    StyleEntry::from_open(format!("\x1b[{};2;{};{};{}m", open_code, r, g, b), close)
}

fn family_codes(background: bool) -> (u8, &'static str) {
    if background {
        (48, BG_CLOSE)
    } else {
        (38, FG_CLOSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_of(spec: &str) -> String {
        parse(spec).unwrap().open().to_string()
    }

    #[test]
    fn test_ansi_index() {
        assert_eq!(open_of("ANSI:232"), "\x1b[38;5;232m");
        assert_eq!(parse("ANSI:232").unwrap().close(), "\x1b[39m");
        assert_eq!(open_of("bgANSI:17"), "\x1b[48;5;17m");
        assert_eq!(parse("bgANSI:17").unwrap().close(), "\x1b[49m");
    }

    #[test]
    fn test_ansi_index_bounds() {
        assert!(parse("ANSI:0").is_some());
        assert!(parse("ANSI:255").is_some());
        assert!(parse("ANSI:256").is_none());
        assert!(parse("ANSI:333").is_none());
        assert!(parse("ANSI:-1").is_none());
    }

    #[test]
    fn test_ansi_cube() {
        // 16 + 36*2 + 6*4 + 0 = 112
        assert_eq!(open_of("ANSI:2,4,0"), "\x1b[38;5;112m");
        // 16 + 36*5 = 196
        assert_eq!(open_of("ANSI:5,0,0"), "\x1b[38;5;196m");
        assert_eq!(open_of("ANSI:5,5,5"), "\x1b[38;5;231m");
        assert_eq!(open_of("ANSI:0,0,0"), "\x1b[38;5;16m");
    }

    #[test]
    fn test_ansi_cube_bounds() {
        assert!(parse("ANSI:2,4,6").is_none());
        assert!(parse("ANSI:6,0,0").is_none());
        assert!(parse("ANSI:0,6,0").is_none());
    }

    #[test]
    fn test_rgb() {
        assert_eq!(open_of("RGB:255,232,0"), "\x1b[38;2;255;232;0m");
        assert_eq!(open_of("bgRGB:33,66,99"), "\x1b[48;2;33;66;99m");
        assert_eq!(parse("RGB:0,0,0").unwrap().close(), "\x1b[39m");
    }

    #[test]
    fn test_rgb_bounds() {
        assert!(parse("RGB:255,255,255").is_some());
        assert!(parse("RGB:256,0,0").is_none());
        assert!(parse("RGB:999,999,999").is_none());
        assert!(parse("RGB:1,999,999").is_none());
        assert!(parse("RGB:1,2,999").is_none());
    }

    #[test]
    fn test_hex() {
        assert_eq!(open_of("HEX:F0d030"), "\x1b[38;2;240;208;48m");
        assert_eq!(open_of("bgHEX:0099FF"), "\x1b[48;2;0;153;255m");
        assert_eq!(open_of("HEX:#0000FF"), "\x1b[38;2;0;0;255m");
        assert_eq!(open_of("HEX:AABBCC"), "\x1b[38;2;170;187;204m");
    }

    #[test]
    fn test_hex_rejects_bad_digits() {
        assert!(parse("HEX:AABBGG").is_none());
        assert!(parse("HEX:0099GG").is_none());
        assert!(parse("HEX:+1+2+3").is_none());
        assert!(parse("HEX:ABC").is_none());
        assert!(parse("HEX:AABBCCDD").is_none());
    }

    #[test]
    fn test_family_and_prefix_case_insensitive() {
        assert_eq!(open_of("bgansi:2,4,0"), "\x1b[48;5;112m");
        assert_eq!(open_of("rgb:1,2,3"), "\x1b[38;2;1;2;3m");
        assert_eq!(open_of("hex:aabbcc"), "\x1b[38;2;170;187;204m");
        assert_eq!(open_of("BGRGB:1,2,3"), "\x1b[48;2;1;2;3m");
    }

    #[test]
    fn test_malformed_specs_drop() {
        assert!(parse("ANSI:").is_none());
        assert!(parse("ANSI:1,2").is_none());
        assert!(parse("ANSI:1,2,3,4").is_none());
        assert!(parse("RGB:1,2").is_none());
        assert!(parse("ANSI:x").is_none());
        assert!(parse("CMYK:1,2,3").is_none());
        assert!(parse("red").is_none());
        assert!(parse("bg").is_none());
        assert!(parse("").is_none());
    }
}
