// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use futures::executor::block_on;

#[test]
fn settled_ok() {
    let deferred: Deferred<'_, String> = Deferred::ok();
    assert!(deferred.is_settled());
    assert_eq!(block_on(deferred), Ok(()));
}

#[test]
fn settled_err() {
    let deferred = Deferred::err("boom".to_string());
    assert!(deferred.is_settled());
    assert_eq!(block_on(deferred), Err("boom".to_string()));
}

#[test]
fn pending_resolves_with_future_output() {
    let deferred: Deferred<'_, &str> = Deferred::pending(async {
        futures::future::ready(()).await;
        Err("late")
    });
    assert!(!deferred.is_settled());
    assert_eq!(block_on(deferred), Err("late"));
}

#[test]
fn pending_may_borrow() {
    let mut hits = 0;
    let deferred: Deferred<'_, ()> = Deferred::pending(async {
        hits += 1;
        Ok(())
    });
    assert_eq!(block_on(deferred), Ok(()));
    assert_eq!(hits, 1);
}

#[test]
fn to_deferred_from_plain_values() {
    let from_ok: Deferred<'_, i32> = to_deferred(Ok(()));
    let from_err: Deferred<'_, i32> = to_deferred(Err(7));
    let from_unit: Deferred<'_, i32> = to_deferred(());

    assert!(from_ok.is_settled() && from_err.is_settled() && from_unit.is_settled());
    assert_eq!(block_on(from_ok), Ok(()));
    assert_eq!(block_on(from_err), Err(7));
    assert_eq!(block_on(from_unit), Ok(()));
}

#[test]
fn to_deferred_passes_deferred_through() {
    let deferred: Deferred<'_, i32> = to_deferred(Deferred::pending(async { Err(1) }));
    assert!(!deferred.is_settled());
    assert_eq!(block_on(deferred), Err(1));
}

#[test]
fn local_future_may_hold_rc_across_await() {
    let shared = std::rc::Rc::new(std::cell::Cell::new(0));
    let inner = std::rc::Rc::clone(&shared);
    let deferred: LocalDeferred<'_, ()> = LocalDeferred::pending(async move {
        futures::future::ready(()).await;
        inner.set(inner.get() + 1);
        Ok(())
    });

    assert!(!deferred.is_settled());
    assert_eq!(block_on(deferred), Ok(()));
    assert_eq!(shared.get(), 1);
}

#[test]
fn local_from_deferred_keeps_outcome() {
    let settled: LocalDeferred<'_, i32> = Deferred::err(3).into();
    let pending: LocalDeferred<'_, i32> = Deferred::pending(async { Ok(()) }).into();

    assert!(settled.is_settled());
    assert!(!pending.is_settled());
    assert_eq!(block_on(settled), Err(3));
    assert_eq!(block_on(pending), Ok(()));
}
