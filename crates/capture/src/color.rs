// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color-control environment variables and a writer-side helper honoring them.

use crate::env::{CLICOLOR, CLICOLOR_FORCE, FORCE_COLOR, NO_COLOR};

/// Overrides applied while a capture runs with `no_color` on.
///
/// Both force switches are removed so neither can win over `NO_COLOR`.
pub fn overrides() -> [(&'static str, Option<&'static str>); 4] {
    [
        (NO_COLOR, Some("1")),
        (FORCE_COLOR, None),
        (CLICOLOR_FORCE, None),
        (CLICOLOR, Some("0")),
    ]
}

/// Whether ANSI colors should be emitted, given the current environment.
///
/// Evaluated on every call so an active capture's overrides apply at once.
pub fn colors_enabled() -> bool {
    if std::env::var_os(NO_COLOR).is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if let Some(force) = std::env::var_os(FORCE_COLOR) {
        return force != "0";
    }
    if std::env::var_os(CLICOLOR_FORCE).is_some_and(|v| !v.is_empty() && v != "0") {
        return true;
    }
    !std::env::var_os(CLICOLOR).is_some_and(|v| v == "0")
}

/// Basic foreground colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Bold,
}

impl Style {
    fn codes(self) -> (u8, u8) {
        match self {
            Style::Red => (31, 39),
            Style::Green => (32, 39),
            Style::Yellow => (33, 39),
            Style::Blue => (34, 39),
            Style::Magenta => (35, 39),
            Style::Cyan => (36, 39),
            Style::Bold => (1, 22),
        }
    }
}

/// Wrap `text` in SGR escapes for `style`, or return it unchanged when
/// colors are disabled.
pub fn paint(text: &str, style: Style) -> String {
    if !colors_enabled() {
        return text.to_string();
    }
    let (on, off) = style.codes();
    format!("\x1b[{}m{}\x1b[{}m", on, text, off)
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
