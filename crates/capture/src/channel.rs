// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The two standard output channels as swappable, process-wide sinks.
//!
//! `std::io::Stdout` cannot be redirected from inside the process, so output
//! that should be observable goes through [`Channel::write`] (or the
//! [`out!`](crate::out) family of macros) instead. Each channel holds one
//! [`SharedSink`]; by default that sink forwards to the real stream.

use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, LazyLock};

/// One of the two standard output destinations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Primary output.
    Stdout,
    /// Error output.
    Stderr,
}

/// Destination for text written to a channel.
pub trait Sink: Send + Sync {
    /// Write one chunk of text.
    fn write_str(&self, chunk: &str) -> io::Result<()>;

    /// Flush anything buffered by the sink.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Reference-counted sink. Identity (`Arc::ptr_eq`) is what restoration
/// preserves.
pub type SharedSink = Arc<dyn Sink>;

struct Table {
    stdout: RwLock<SharedSink>,
    stderr: RwLock<SharedSink>,
}

static TABLE: LazyLock<Table> = LazyLock::new(|| Table {
    stdout: RwLock::new(Arc::new(StdStream::Stdout)),
    stderr: RwLock::new(Arc::new(StdStream::Stderr)),
});

impl Channel {
    /// Both channels, primary first.
    pub const ALL: [Channel; 2] = [Channel::Stdout, Channel::Stderr];

    /// Conventional stream name.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Stdout => "stdout",
            Channel::Stderr => "stderr",
        }
    }

    fn slot(self) -> &'static RwLock<SharedSink> {
        match self {
            Channel::Stdout => &TABLE.stdout,
            Channel::Stderr => &TABLE.stderr,
        }
    }

    /// The sink currently installed on this channel.
    pub fn current(self) -> SharedSink {
        Arc::clone(&self.slot().read())
    }

    /// Install `sink` and return the sink it replaced.
    pub fn replace(self, sink: SharedSink) -> SharedSink {
        std::mem::replace(&mut *self.slot().write(), sink)
    }

    /// Whether `sink` is the very sink installed on this channel.
    pub fn is_current(self, sink: &SharedSink) -> bool {
        Arc::ptr_eq(&self.slot().read(), sink)
    }

    /// Write `chunk` through the installed sink.
    ///
    /// The table lock is released before the sink runs, so a sink may itself
    /// write to another channel or to a sink it wraps.
    pub fn write(self, chunk: &str) -> io::Result<()> {
        self.current().write_str(chunk)
    }

    /// Flush the installed sink.
    pub fn flush(self) -> io::Result<()> {
        self.current().flush()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Write `chunk` to the primary channel.
pub fn write_stdout(chunk: &str) -> io::Result<()> {
    Channel::Stdout.write(chunk)
}

/// Write `chunk` to the error channel.
pub fn write_stderr(chunk: &str) -> io::Result<()> {
    Channel::Stderr.write(chunk)
}

/// Format and write to `channel`; backs the printing macros.
///
/// Failures are logged rather than raised.
#[doc(hidden)]
pub fn print_to(channel: Channel, args: fmt::Arguments<'_>) {
    let result = match args.as_str() {
        Some(s) => channel.write(s),
        None => channel.write(&args.to_string()),
    };
    if let Err(e) = result {
        tracing::warn!(channel = channel.name(), error = %e, "failed printing");
    }
}

/// The real process stream behind a channel.
#[derive(Clone, Copy, Debug)]
pub enum StdStream {
    /// `std::io::stdout()`
    Stdout,
    /// `std::io::stderr()`
    Stderr,
}

impl Sink for StdStream {
    fn write_str(&self, chunk: &str) -> io::Result<()> {
        match self {
            StdStream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(chunk.as_bytes())?;
                out.flush()
            }
            StdStream::Stderr => io::stderr().lock().write_all(chunk.as_bytes()),
        }
    }

    fn flush(&self) -> io::Result<()> {
        match self {
            StdStream::Stdout => io::stdout().flush(),
            StdStream::Stderr => io::stderr().flush(),
        }
    }
}

/// Adapts any [`io::Write`] into a [`Sink`].
pub struct WriterSink<W> {
    inner: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            inner: Mutex::new(writer),
        }
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write_str(&self, chunk: &str) -> io::Result<()> {
        self.inner.lock().write_all(chunk.as_bytes())
    }

    fn flush(&self) -> io::Result<()> {
        self.inner.lock().flush()
    }
}

/// Sink that keeps everything written to it in memory.
#[derive(Default)]
pub struct MemorySink {
    buf: Mutex<String>,
}

impl MemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buf.lock().clone()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_str(&self, chunk: &str) -> io::Result<()> {
        self.buf.lock().push_str(chunk);
        Ok(())
    }
}

/// Handle for writing to a channel with `write!`/`writeln!`.
///
/// Implements both [`io::Write`] and [`fmt::Write`]. Bytes written through
/// `io::Write` are decoded as UTF-8; a character split across calls is held
/// back until its last byte arrives. Invalid bytes become U+FFFD.
#[derive(Debug)]
pub struct ChannelWriter {
    channel: Channel,
    // tail of an incomplete UTF-8 sequence, at most 3 bytes
    pending: Vec<u8>,
}

/// Writer for the primary channel.
pub fn stdout() -> ChannelWriter {
    ChannelWriter::new(Channel::Stdout)
}

/// Writer for the error channel.
pub fn stderr() -> ChannelWriter {
    ChannelWriter::new(Channel::Stderr)
}

impl ChannelWriter {
    fn new(channel: Channel) -> Self {
        Self {
            channel,
            pending: Vec::new(),
        }
    }

    /// The channel this writer targets.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    fn flush_pending(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let rest = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        self.channel.write(&rest)
    }
}

/// Remove and return the decodable prefix of `bytes`.
///
/// Invalid sequences are replaced with U+FFFD; an incomplete sequence at the
/// end stays in `bytes`.
fn drain_utf8(bytes: &mut Vec<u8>) -> String {
    let mut text = String::new();
    let mut start = 0;
    while start < bytes.len() {
        match std::str::from_utf8(&bytes[start..]) {
            Ok(valid) => {
                text.push_str(valid);
                start = bytes.len();
            }
            Err(e) => {
                let valid_end = start + e.valid_up_to();
                text.push_str(std::str::from_utf8(&bytes[start..valid_end]).unwrap_or_default());
                match e.error_len() {
                    Some(len) => {
                        text.push(char::REPLACEMENT_CHARACTER);
                        start = valid_end + len;
                    }
                    None => {
                        start = valid_end;
                        break;
                    }
                }
            }
        }
    }
    bytes.drain(..start);
    text
}

impl Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        let text = drain_utf8(&mut self.pending);
        if !text.is_empty() {
            self.channel.write(&text)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_pending()?;
        self.channel.flush()
    }
}

impl Drop for ChannelWriter {
    fn drop(&mut self) {
        if let Err(e) = self.flush_pending() {
            tracing::warn!(channel = self.channel.name(), error = %e, "failed flushing partial character");
        }
    }
}

impl fmt::Write for ChannelWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.flush_pending()
            .and_then(|()| self.channel.write(s))
            .map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
