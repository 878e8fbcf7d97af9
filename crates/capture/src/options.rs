// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture configuration.

use crate::env;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Options for one capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaptureOptions {
    /// Forward every captured chunk to the channel's previous sink.
    pub echo: bool,

    /// Override the color-control environment variables while capturing.
    pub no_color: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            echo: true,
            no_color: true,
        }
    }
}

impl CaptureOptions {
    /// Same as [`Default::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether captured chunks are echoed.
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Set whether color variables are overridden.
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Capture without echoing.
    pub fn quiet(self) -> Self {
        self.echo(false)
    }

    /// Defaults, overridden by `STDIO_CAPTURE_ECHO` and
    /// `STDIO_CAPTURE_NO_COLOR` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut options = Self::default();
        if let Some(echo) = env::echo()? {
            options.echo = echo;
        }
        if let Some(no_color) = env::no_color()? {
            options.no_color = no_color;
        }
        Ok(options)
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
