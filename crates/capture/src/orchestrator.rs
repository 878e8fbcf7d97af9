// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Running one unit of work under capture.
//!
//! Every entry point installs the [`Interceptor`], runs the work and restores
//! the channels and environment before the caller sees either the result or
//! the error. Output from a failed run is discarded.
//!
//! Restoration is tied to [`InterceptionHandle`]'s `Drop`, so a panic in the
//! work restores during unwinding and the original payload keeps unwinding,
//! and dropping an async capture before it completes restores as well.

use crate::deferred::{to_deferred, IntoDeferred};
use crate::interceptor::{InterceptionHandle, Interceptor};
use crate::options::CaptureOptions;
use crate::result::CaptureResult;
use std::future::Future;

/// Capture everything written while `f` runs.
///
/// The capture window closes when `f` returns: output from work `f` merely
/// scheduled is not included.
pub fn capture_sync<F>(options: CaptureOptions, f: F) -> CaptureResult
where
    F: FnOnce(),
{
    let handle = Interceptor::install(&options);
    f();
    handle.finish()
}

/// Capture everything written while `f` runs, propagating its error.
///
/// On `Err` the channels are restored first, then the error is returned
/// unchanged; captured text is dropped.
pub fn try_capture_sync<F, E>(options: CaptureOptions, f: F) -> Result<CaptureResult, E>
where
    F: FnOnce() -> Result<(), E>,
{
    let handle = Interceptor::install(&options);
    settle(handle, f())
}

/// Capture everything written until the future returned by `f` completes.
///
/// Anything else that runs on the executor before then is captured too.
pub async fn capture_async<F, Fut>(options: CaptureOptions, f: F) -> CaptureResult
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let handle = Interceptor::install(&options);
    f().await;
    handle.finish()
}

/// Capture everything written until the work returned by `f` settles.
///
/// `f` may hand back a plain `Result` (settled immediately), a
/// [`Deferred`](crate::Deferred) future, or a
/// [`LocalDeferred`](crate::LocalDeferred) for work that is not `Send`. An
/// immediate `Err` is handled exactly like a future that resolves to `Err`.
pub fn try_capture_async<'a, F, D, E>(
    options: CaptureOptions,
    f: F,
) -> impl Future<Output = Result<CaptureResult, E>> + use<'a, F, D, E>
where
    F: FnOnce() -> D,
    D: IntoDeferred<'a, E>,
{
    run(options, f)
}

async fn run<'a, F, D, E, Fut>(options: CaptureOptions, f: F) -> Result<CaptureResult, E>
where
    F: FnOnce() -> D,
    D: IntoDeferred<'a, E, Future = Fut>,
    Fut: Future<Output = Result<(), E>>,
{
    let handle = Interceptor::install(&options);
    let outcome = to_deferred(f()).await;
    settle(handle, outcome)
}

fn settle<E>(mut handle: InterceptionHandle, outcome: Result<(), E>) -> Result<CaptureResult, E> {
    match outcome {
        Ok(()) => Ok(handle.finish()),
        Err(e) => {
            handle.restore();
            Err(e)
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
