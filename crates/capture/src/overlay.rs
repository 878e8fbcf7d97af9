// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transactional overrides of process environment variables.

use std::ffi::{OsStr, OsString};

/// A set of environment overrides that can be rolled back.
///
/// Each entry either sets a variable (`Some(value)`) or removes it (`None`).
/// [`restore`](Self::restore) puts every variable back to the value it had
/// before, removing those that did not exist.
#[derive(Debug)]
#[must_use = "dropping the overlay restores the environment immediately"]
pub struct EnvOverlay {
    // (key, previous value) in application order
    previous: Vec<(OsString, Option<OsString>)>,
    restored: bool,
}

impl EnvOverlay {
    /// Apply `entries` to the process environment.
    pub fn hydrate<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        let mut previous = Vec::new();
        for (key, value) in entries {
            let key = key.as_ref();
            previous.push((key.to_os_string(), std::env::var_os(key)));
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
        tracing::trace!(keys = previous.len(), "environment overlay applied");
        Self {
            previous,
            restored: false,
        }
    }

    /// An overlay that overrides nothing.
    pub fn empty() -> Self {
        Self {
            previous: Vec::new(),
            restored: false,
        }
    }

    /// Keys overridden by this overlay.
    pub fn keys(&self) -> impl Iterator<Item = &OsStr> {
        self.previous.iter().map(|(key, _)| key.as_os_str())
    }

    /// Roll back every override. Calling it again does nothing.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        // Reverse order so a key listed twice ends at its original value.
        for (key, old) in self.previous.iter().rev() {
            match old {
                Some(old) => std::env::set_var(key, old),
                None => std::env::remove_var(key),
            }
        }
        tracing::trace!(keys = self.previous.len(), "environment overlay restored");
    }
}

impl Drop for EnvOverlay {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
