// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised by the crate itself.
//!
//! Errors from the unit of work under capture are never wrapped; they reach
//! the caller as-is.

/// Invalid capture configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {name}: expected one of 1/0, true/false, yes/no, on/off")]
    InvalidBool { name: &'static str, value: String },
}
