// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text captured from one run.

use crate::channel::Channel;
use serde::{Deserialize, Serialize};

/// Output captured during one capture call.
///
/// `combined` holds the writes of both channels in the order they happened;
/// each channel's own text appears in it as a subsequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResult {
    stdout: String,
    stderr: String,
    combined: String,
}

impl CaptureResult {
    pub(crate) fn new(stdout: String, stderr: String, combined: String) -> Self {
        Self {
            stdout,
            stderr,
            combined,
        }
    }

    /// Everything written to the primary channel.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Everything written to the error channel.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Both channels interleaved in write order.
    pub fn combined(&self) -> &str {
        &self.combined
    }

    /// Text written to `channel`.
    pub fn get(&self, channel: Channel) -> &str {
        match channel {
            Channel::Stdout => &self.stdout,
            Channel::Stderr => &self.stderr,
        }
    }

    /// Whether nothing was written at all.
    pub fn is_empty(&self) -> bool {
        self.combined.is_empty()
    }

    /// `(stdout, stderr, combined)`
    pub fn into_parts(self) -> (String, String, String) {
        (self.stdout, self.stderr, self.combined)
    }
}
