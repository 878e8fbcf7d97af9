// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable names and accessors.
//!
//! All environment variables read or overridden by this crate are named here.

use crate::error::ConfigError;

/// Disables color when present and non-empty (<https://no-color.org>).
pub const NO_COLOR: &str = "NO_COLOR";

/// Forces color on when set to anything other than `0`.
pub const FORCE_COLOR: &str = "FORCE_COLOR";

/// Generic color switch; `0` disables color.
pub const CLICOLOR: &str = "CLICOLOR";

/// Forces color on when non-empty and not `0` (read by `anstream` and
/// `colored`).
pub const CLICOLOR_FORCE: &str = "CLICOLOR_FORCE";

/// Default for [`CaptureOptions::echo`](crate::CaptureOptions).
pub const STDIO_CAPTURE_ECHO: &str = "STDIO_CAPTURE_ECHO";

/// Default for [`CaptureOptions::no_color`](crate::CaptureOptions).
pub const STDIO_CAPTURE_NO_COLOR: &str = "STDIO_CAPTURE_NO_COLOR";

/// `STDIO_CAPTURE_ECHO` as a boolean, if set.
pub fn echo() -> Result<Option<bool>, ConfigError> {
    var_bool(STDIO_CAPTURE_ECHO)
}

/// `STDIO_CAPTURE_NO_COLOR` as a boolean, if set.
pub fn no_color() -> Result<Option<bool>, ConfigError> {
    var_bool(STDIO_CAPTURE_NO_COLOR)
}

fn var_bool(name: &'static str) -> Result<Option<bool>, ConfigError> {
    let Some(raw) = std::env::var_os(name) else {
        return Ok(None);
    };
    let value = raw.to_string_lossy();
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.into_owned(),
        }),
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
