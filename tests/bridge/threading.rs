//! Threading Tests
//!
//! A bridge adds no synchronization and no shared state. It is `Send` and
//! `Sync` exactly when the wrapped callable is, and a `Sync` bridge can be
//! called from many threads at once.

use crate::common::*;
use escalate::*;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

type SyncFn = fn(u32) -> Result<u32, Sentinel>;
type BoxedSync = Box<dyn Fn(u32) -> Result<u32, Sentinel> + Send + Sync>;
type BoxedLocal = Box<dyn Fn(u32) -> Result<u32, Sentinel>>;

// =============================================================================
// Auto traits follow the callable
// =============================================================================

static_assertions::assert_impl_all!(UncheckedFunction<SyncFn, u32, u32, Sentinel>: Send, Sync, Copy);
static_assertions::assert_impl_all!(UncheckedFunction<BoxedSync, u32, u32, Sentinel>: Send, Sync);
static_assertions::assert_not_impl_any!(UncheckedFunction<BoxedLocal, u32, u32, Sentinel>: Send, Sync);
static_assertions::assert_not_impl_any!(UncheckedRunnable<Rc<()>, Sentinel>: Send, Sync);
static_assertions::assert_impl_all!(UncheckedRunnable<Cell<u8>, Sentinel>: Send);
static_assertions::assert_not_impl_any!(UncheckedRunnable<Cell<u8>, Sentinel>: Sync);

/// Argument, result and failure types never affect the bridge's auto traits.
static_assertions::assert_impl_all!(UncheckedFunction<SyncFn, Rc<u8>, Rc<u8>, Rc<Sentinel>>: Send, Sync);

// =============================================================================
// Concurrent use
// =============================================================================

#[test]
fn test_shared_bridge_across_scoped_threads() {
    let calls = AtomicUsize::new(0);
    let bridge = function(|x: usize| -> Result<usize, Sentinel> {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(x * 2)
    });

    let results: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let bridge = &bridge;
                s.spawn(move || bridge.apply(i))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, (0..8).map(|i| i * 2).collect::<Vec<_>>());
    assert_eq!(calls.load(Ordering::SeqCst), 8);
}

#[test]
fn test_failure_on_one_thread_leaves_others_alone() {
    let bridge = function(|x: u64| -> Result<u64, Sentinel> {
        if x == 3 {
            Err(Sentinel(x))
        } else {
            Ok(x)
        }
    });

    let outcomes: Vec<Result<u64, Sentinel>> = thread::scope(|s| {
        let handles: Vec<_> = (0..6)
            .map(|i| {
                let bridge = &bridge;
                s.spawn(move || reclaim::<Sentinel, _>(|| bridge.apply(i)))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(
        outcomes,
        vec![Ok(0), Ok(1), Ok(2), Err(Sentinel(3)), Ok(4), Ok(5)]
    );
}

#[test]
fn test_arc_shared_bridge_on_spawned_threads() {
    let log = CallLog::new();
    let recorder = log.clone();
    let bridge = Arc::new(consumer(move |x: u32| -> Result<(), Sentinel> {
        recorder.record(x);
        Ok(())
    }));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let bridge = Arc::clone(&bridge);
            thread::spawn(move || bridge.accept(i))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut seen = log.calls();
    seen.sort_unstable();
    assert_eq!(seen, vec![0, 1, 2, 3]);
}
