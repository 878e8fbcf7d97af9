// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recording shims installed on both channels for the span of one capture.

use crate::channel::{Channel, SharedSink, Sink};
use crate::color;
use crate::options::CaptureOptions;
use crate::overlay::EnvOverlay;
use crate::result::CaptureResult;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

#[derive(Default)]
struct Buffers {
    stdout: String,
    stderr: String,
    combined: String,
}

impl Buffers {
    fn append(&mut self, channel: Channel, chunk: &str) {
        match channel {
            Channel::Stdout => self.stdout.push_str(chunk),
            Channel::Stderr => self.stderr.push_str(chunk),
        }
        self.combined.push_str(chunk);
    }

    fn to_result(&self) -> CaptureResult {
        CaptureResult::new(
            self.stdout.clone(),
            self.stderr.clone(),
            self.combined.clone(),
        )
    }

    fn into_result(self) -> CaptureResult {
        CaptureResult::new(self.stdout, self.stderr, self.combined)
    }
}

/// Shim standing in for a channel's sink.
struct Recorder {
    channel: Channel,
    buffers: Arc<Mutex<Buffers>>,
    original: SharedSink,
    echo: bool,
}

impl Sink for Recorder {
    fn write_str(&self, chunk: &str) -> io::Result<()> {
        self.buffers.lock().append(self.channel, chunk);
        if self.echo {
            self.original.write_str(chunk)?;
        }
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        if self.echo {
            self.original.flush()?;
        }
        Ok(())
    }
}

struct Installed {
    channel: Channel,
    original: SharedSink,
    shim: SharedSink,
}

/// Installs recording shims on both channels.
///
/// Installation is process-wide: every writer going through [`Channel`] is
/// recorded, not only the code that started the capture. Two installations
/// must not overlap; the second one would record the first one's shim as
/// its "original".
pub struct Interceptor;

impl Interceptor {
    /// Replace both channels' sinks with recording shims and, when
    /// `options.no_color` is set, override the color-control variables.
    pub fn install(options: &CaptureOptions) -> InterceptionHandle {
        let buffers = Arc::new(Mutex::new(Buffers::default()));

        let installed = Channel::ALL
            .into_iter()
            .map(|channel| {
                let original = channel.current();
                let shim: SharedSink = Arc::new(Recorder {
                    channel,
                    buffers: Arc::clone(&buffers),
                    original: Arc::clone(&original),
                    echo: options.echo,
                });
                channel.replace(Arc::clone(&shim));
                Installed {
                    channel,
                    original,
                    shim,
                }
            })
            .collect();

        let env = if options.no_color {
            EnvOverlay::hydrate(color::overrides())
        } else {
            EnvOverlay::empty()
        };

        tracing::debug!(
            echo = options.echo,
            no_color = options.no_color,
            "stdio interceptor installed"
        );

        InterceptionHandle {
            installed,
            env,
            buffers,
            restored: false,
        }
    }
}

/// Owns everything needed to undo one [`Interceptor::install`].
///
/// Dropping the handle restores, so the channels and environment come back
/// on every exit path, including panics and dropped futures.
#[must_use = "dropping the handle ends the capture immediately"]
pub struct InterceptionHandle {
    installed: Vec<Installed>,
    env: EnvOverlay,
    buffers: Arc<Mutex<Buffers>>,
    restored: bool,
}

impl InterceptionHandle {
    /// Reinstate the original sinks, then the environment.
    ///
    /// Only the first call has an effect.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        for entry in &self.installed {
            if !entry.channel.is_current(&entry.shim) {
                tracing::warn!(
                    channel = entry.channel.name(),
                    "channel sink changed during capture; overlapping captures are not supported"
                );
            }
            entry.channel.replace(Arc::clone(&entry.original));
        }
        self.env.restore();

        let buffers = self.buffers.lock();
        tracing::debug!(
            stdout_bytes = buffers.stdout.len(),
            stderr_bytes = buffers.stderr.len(),
            "stdio interceptor restored"
        );
    }

    /// Text captured so far.
    pub fn snapshot(&self) -> CaptureResult {
        self.buffers.lock().to_result()
    }

    /// Restore, then hand over the captured text.
    pub fn finish(mut self) -> CaptureResult {
        self.restore();
        let buffers = std::mem::take(&mut *self.buffers.lock());
        buffers.into_result()
    }
}

impl Drop for InterceptionHandle {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
#[path = "interceptor_tests.rs"]
mod tests;
