// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for integration tests.

#![allow(dead_code)]

use stdio_capture::{Channel, SharedSink};

/// Installs `stdout`/`stderr` as the channels' sinks until dropped.
pub struct SinkGuard {
    pub stdout: SharedSink,
    pub stderr: SharedSink,
    previous: Option<(SharedSink, SharedSink)>,
}

impl SinkGuard {
    pub fn install(stdout: SharedSink, stderr: SharedSink) -> Self {
        let previous = (
            Channel::Stdout.replace(stdout.clone()),
            Channel::Stderr.replace(stderr.clone()),
        );
        Self {
            stdout,
            stderr,
            previous: Some(previous),
        }
    }

    pub fn is_current(&self) -> bool {
        Channel::Stdout.is_current(&self.stdout) && Channel::Stderr.is_current(&self.stderr)
    }
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        if let Some((stdout, stderr)) = self.previous.take() {
            Channel::Stdout.replace(stdout);
            Channel::Stderr.replace(stderr);
        }
    }
}
