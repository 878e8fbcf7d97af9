// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalizing "maybe already settled" work into a single future type.

use futures::future::{BoxFuture, LocalBoxFuture};
use std::future::{ready, Future, Ready};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Work that has either already settled or is still pending.
pub enum Deferred<'a, E> {
    /// Settled before anything had to be awaited.
    Settled(Ready<Result<(), E>>),
    /// Settles when the future completes.
    Pending(BoxFuture<'a, Result<(), E>>),
}

impl<'a, E> Deferred<'a, E> {
    /// Already succeeded.
    pub fn ok() -> Self {
        Deferred::Settled(ready(Ok(())))
    }

    /// Already failed with `error`.
    pub fn err(error: E) -> Self {
        Deferred::Settled(ready(Err(error)))
    }

    /// Settles with `future`'s output.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Result<(), E>> + Send + 'a,
    {
        Deferred::Pending(Box::pin(future))
    }

    /// Whether the outcome is already known.
    pub fn is_settled(&self) -> bool {
        matches!(self, Deferred::Settled(_))
    }
}

impl<E> Future for Deferred<'_, E> {
    type Output = Result<(), E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        // Both variants are Unpin.
        match self.get_mut() {
            Deferred::Settled(ready) => Pin::new(ready).poll(cx),
            Deferred::Pending(future) => future.as_mut().poll(cx),
        }
    }
}

impl<E> From<Result<(), E>> for Deferred<'_, E> {
    fn from(result: Result<(), E>) -> Self {
        Deferred::Settled(ready(result))
    }
}

/// [`Deferred`] for work that must stay on the current thread.
///
/// The pending future need not be `Send`, so it may hold an `Rc` or a
/// `RefCell` borrow across an await.
pub enum LocalDeferred<'a, E> {
    /// Settled before anything had to be awaited.
    Settled(Ready<Result<(), E>>),
    /// Settles when the future completes.
    Pending(LocalBoxFuture<'a, Result<(), E>>),
}

impl<'a, E> LocalDeferred<'a, E> {
    /// Settles with `future`'s output.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Result<(), E>> + 'a,
    {
        LocalDeferred::Pending(Box::pin(future))
    }

    /// Whether the outcome is already known.
    pub fn is_settled(&self) -> bool {
        matches!(self, LocalDeferred::Settled(_))
    }
}

impl<E> Future for LocalDeferred<'_, E> {
    type Output = Result<(), E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.get_mut() {
            LocalDeferred::Settled(ready) => Pin::new(ready).poll(cx),
            LocalDeferred::Pending(future) => future.as_mut().poll(cx),
        }
    }
}

impl<'a, E> From<Deferred<'a, E>> for LocalDeferred<'a, E> {
    fn from(deferred: Deferred<'a, E>) -> Self {
        match deferred {
            Deferred::Settled(ready) => LocalDeferred::Settled(ready),
            Deferred::Pending(future) => LocalDeferred::Pending(future),
        }
    }
}

/// Values a unit of work may hand back to an asynchronous capture.
///
/// Whether the resulting future is `Send` follows from the value: a
/// [`Deferred`] stays `Send`, a [`LocalDeferred`] does not.
pub trait IntoDeferred<'a, E> {
    /// The future that settles with the work's outcome.
    type Future: Future<Output = Result<(), E>> + 'a;

    /// Convert into [`Self::Future`].
    fn into_deferred(self) -> Self::Future;
}

impl<'a, E: 'a> IntoDeferred<'a, E> for Deferred<'a, E> {
    type Future = Self;

    fn into_deferred(self) -> Self::Future {
        self
    }
}

impl<'a, E: 'a> IntoDeferred<'a, E> for LocalDeferred<'a, E> {
    type Future = Self;

    fn into_deferred(self) -> Self::Future {
        self
    }
}

impl<'a, E: 'a> IntoDeferred<'a, E> for Result<(), E> {
    type Future = Deferred<'a, E>;

    fn into_deferred(self) -> Self::Future {
        self.into()
    }
}

impl<'a, E: 'a> IntoDeferred<'a, E> for () {
    type Future = Deferred<'a, E>;

    fn into_deferred(self) -> Self::Future {
        Deferred::ok()
    }
}

/// Turn a plain result or a pending future into a future of its outcome.
pub fn to_deferred<'a, E, T>(value: T) -> T::Future
where
    T: IntoDeferred<'a, E>,
{
    value.into_deferred()
}

#[cfg(test)]
#[path = "deferred_tests.rs"]
mod tests;
