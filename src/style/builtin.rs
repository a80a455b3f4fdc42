//! The built-in style table.
//!
//! Fixed at process start: named colors, their bright variants, the
//! `bg`-prefixed background forms, and text attributes. Names follow the
//! chalk convention (`red`, `redBright`, `bgRed`, ...) and lookup is by
//! exact name — `RED` and `BgRed` do not resolve.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{StyleEntry, BG_CLOSE, FG_CLOSE};

const BOLD_DIM_CLOSE: &str = "\x1b[22m";

/// `(name, open, close)` triples for every built-in style.
///
/// Attribute closes are per-attribute (`22` covers both bold and dim, per
/// the ANSI standard); color closes are the category-wide `39`/`49`.
const TABLE: &[(&str, &str, &str)] = &[
    // Attributes
    ("bold", "\x1b[1m", BOLD_DIM_CLOSE),
    ("dim", "\x1b[2m", BOLD_DIM_CLOSE),
    ("italic", "\x1b[3m", "\x1b[23m"),
    ("underline", "\x1b[4m", "\x1b[24m"),
    ("inverse", "\x1b[7m", "\x1b[27m"),
    ("hidden", "\x1b[8m", "\x1b[28m"),
    ("strikethrough", "\x1b[9m", "\x1b[29m"),
    // Foreground colors
    ("black", "\x1b[30m", FG_CLOSE),
    ("red", "\x1b[31m", FG_CLOSE),
    ("green", "\x1b[32m", FG_CLOSE),
    ("yellow", "\x1b[33m", FG_CLOSE),
    ("blue", "\x1b[34m", FG_CLOSE),
    ("magenta", "\x1b[35m", FG_CLOSE),
    ("cyan", "\x1b[36m", FG_CLOSE),
    ("white", "\x1b[37m", FG_CLOSE),
    ("gray", "\x1b[90m", FG_CLOSE),
    ("grey", "\x1b[90m", FG_CLOSE),
    ("blackBright", "\x1b[90m", FG_CLOSE),
    ("redBright", "\x1b[91m", FG_CLOSE),
    ("greenBright", "\x1b[92m", FG_CLOSE),
    ("yellowBright", "\x1b[93m", FG_CLOSE),
    ("blueBright", "\x1b[94m", FG_CLOSE),
    ("magentaBright", "\x1b[95m", FG_CLOSE),
    ("cyanBright", "\x1b[96m", FG_CLOSE),
    ("whiteBright", "\x1b[97m", FG_CLOSE),
    // Background colors
    ("bgBlack", "\x1b[40m", BG_CLOSE),
    ("bgRed", "\x1b[41m", BG_CLOSE),
    ("bgGreen", "\x1b[42m", BG_CLOSE),
    ("bgYellow", "\x1b[43m", BG_CLOSE),
    ("bgBlue", "\x1b[44m", BG_CLOSE),
    ("bgMagenta", "\x1b[45m", BG_CLOSE),
    ("bgCyan", "\x1b[46m", BG_CLOSE),
    ("bgWhite", "\x1b[47m", BG_CLOSE),
    ("bgGray", "\x1b[100m", BG_CLOSE),
    ("bgGrey", "\x1b[100m", BG_CLOSE),
    ("bgBlackBright", "\x1b[100m", BG_CLOSE),
    ("bgRedBright", "\x1b[101m", BG_CLOSE),
    ("bgGreenBright", "\x1b[102m", BG_CLOSE),
    ("bgYellowBright", "\x1b[103m", BG_CLOSE),
    ("bgBlueBright", "\x1b[104m", BG_CLOSE),
    ("bgMagentaBright", "\x1b[105m", BG_CLOSE),
    ("bgCyanBright", "\x1b[106m", BG_CLOSE),
    ("bgWhiteBright", "\x1b[107m", BG_CLOSE),
];

static BUILTIN: Lazy<HashMap<&'static str, StyleEntry>> = Lazy::new(|| {
    TABLE
        .iter()
        .map(|&(name, open, close)| (name, StyleEntry::from_static(open, close)))
        .collect()
});

/// Looks up a built-in style by exact name.
///
/// `reset` is not in the table: it is a template operator, not a style.
pub fn builtin_style(name: &str) -> Option<StyleEntry> {
    BUILTIN.get(name).cloned()
}

/// Iterates over every built-in style name, in no particular order.
pub fn builtin_style_names() -> impl Iterator<Item = &'static str> {
    BUILTIN.keys().copied()
}
