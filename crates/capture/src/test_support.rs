// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::channel::{Channel, MemorySink, SharedSink};
use std::sync::Arc;

/// Stands in for the real streams so echoed output can be inspected.
/// Puts the previous sinks back on drop.
pub(crate) struct FakeStdio {
    pub stdout: Arc<MemorySink>,
    pub stderr: Arc<MemorySink>,
    pub stdout_sink: SharedSink,
    pub stderr_sink: SharedSink,
    previous: Option<(SharedSink, SharedSink)>,
}

impl FakeStdio {
    pub fn install() -> Self {
        let stdout = Arc::new(MemorySink::new());
        let stderr = Arc::new(MemorySink::new());
        let stdout_sink: SharedSink = stdout.clone();
        let stderr_sink: SharedSink = stderr.clone();
        let previous = (
            Channel::Stdout.replace(Arc::clone(&stdout_sink)),
            Channel::Stderr.replace(Arc::clone(&stderr_sink)),
        );
        Self {
            stdout,
            stderr,
            stdout_sink,
            stderr_sink,
            previous: Some(previous),
        }
    }

    /// Both fake sinks are still the installed ones.
    pub fn is_current(&self) -> bool {
        Channel::Stdout.is_current(&self.stdout_sink) && Channel::Stderr.is_current(&self.stderr_sink)
    }
}

impl Drop for FakeStdio {
    fn drop(&mut self) {
        if let Some((stdout, stderr)) = self.previous.take() {
            Channel::Stdout.replace(stdout);
            Channel::Stderr.replace(stderr);
        }
    }
}
