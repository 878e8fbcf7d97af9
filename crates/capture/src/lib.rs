// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped capture of stdout and stderr for test assertions.
//!
//! Output written through this crate's channels (see [`Channel`] and the
//! [`out!`]/[`outln!`]/[`err!`]/[`errln!`] macros) can be captured for the
//! duration of a unit of work, while still being echoed to the real streams:
//!
//! ```
//! use stdio_capture::{capture_sync, errln, outln, CaptureOptions};
//!
//! let result = capture_sync(CaptureOptions::default().quiet(), || {
//!     outln!("hello");
//!     errln!("oops");
//! });
//! assert_eq!(result.stdout(), "hello\n");
//! assert_eq!(result.stderr(), "oops\n");
//! assert_eq!(result.combined(), "hello\noops\n");
//! ```
//!
//! Interception is process-wide and captures must not overlap: start the
//! next capture only after the previous one has returned.

pub mod channel;
pub mod color;
mod deferred;
pub mod env;
mod error;
mod interceptor;
mod options;
mod orchestrator;
mod overlay;
mod result;

#[cfg(test)]
mod test_support;

pub use channel::{
    stderr, stdout, write_stderr, write_stdout, Channel, ChannelWriter, MemorySink, SharedSink,
    Sink, StdStream, WriterSink,
};
pub use deferred::{to_deferred, Deferred, IntoDeferred, LocalDeferred};
pub use error::ConfigError;
pub use interceptor::{InterceptionHandle, Interceptor};
pub use options::CaptureOptions;
pub use orchestrator::{capture_async, capture_sync, try_capture_async, try_capture_sync};
pub use overlay::EnvOverlay;
pub use result::CaptureResult;

/// Print to the primary channel, like `print!`.
#[macro_export]
macro_rules! out {
    ($($arg:tt)*) => {
        $crate::channel::print_to($crate::Channel::Stdout, ::std::format_args!($($arg)*))
    };
}

/// Print a line to the primary channel, like `println!`.
#[macro_export]
macro_rules! outln {
    () => {
        $crate::out!("\n")
    };
    ($($arg:tt)*) => {
        $crate::channel::print_to(
            $crate::Channel::Stdout,
            ::std::format_args!("{}\n", ::std::format_args!($($arg)*)),
        )
    };
}

/// Print to the error channel, like `eprint!`.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::channel::print_to($crate::Channel::Stderr, ::std::format_args!($($arg)*))
    };
}

/// Print a line to the error channel, like `eprintln!`.
#[macro_export]
macro_rules! errln {
    () => {
        $crate::err!("\n")
    };
    ($($arg:tt)*) => {
        $crate::channel::print_to(
            $crate::Channel::Stderr,
            ::std::format_args!("{}\n", ::std::format_args!($($arg)*)),
        )
    };
}
