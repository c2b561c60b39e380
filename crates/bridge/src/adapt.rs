//! Named adapters and direct invocation
//!
//! Rust has no overloading, so there is one adapter per shape. Naming the
//! shape also settles the cases a closure alone leaves open: `|| Ok(())` is
//! both a runnable and a `()` supplier, and `|| Ok(true)` is both a
//! condition and a `bool` supplier.
//!
//! ```
//! use escalate_bridge::{function, invoke_condition};
//!
//! #[derive(Debug)]
//! struct Boom;
//!
//! let len = function(|s: &str| -> Result<usize, Boom> { Ok(s.len()) });
//! let lengths: Vec<usize> = ["a", "bb"].into_iter().map(len.into_fn()).collect();
//! assert_eq!(lengths, vec![1, 2]);
//!
//! assert!(invoke_condition(|| -> Result<bool, Boom> { Ok(true) }));
//! ```
//!
//! Every adapter here is a lift: O(1), no invocation, no allocation. Passing
//! a bridge back in re-binds it, since a bridge is itself a checked callable.

use escalate_core::{
    CheckedBiConsumer, CheckedBiFunction, CheckedBiPredicate, CheckedCondition, CheckedConsumer,
    CheckedFunction, CheckedPredicate, CheckedRunnable, CheckedSupplier,
};

use crate::signature::{Admits, Reshape, Signature};
use crate::unchecked::{
    Unchecked, UncheckedBiConsumer, UncheckedBiFunction, UncheckedBiPredicate, UncheckedCondition,
    UncheckedConsumer, UncheckedFunction, UncheckedPredicate, UncheckedRunnable, UncheckedSupplier,
};

// ============================================================================
// Lift
// ============================================================================

/// Bridge a checked action, e.g. for `thread::spawn(runnable(..).into_fn())`
pub fn runnable<F, E>(checked: F) -> UncheckedRunnable<F, E>
where
    F: CheckedRunnable<E>,
{
    Unchecked::new(checked)
}

/// Bridge a checked consumer, e.g. for `Iterator::for_each`
pub fn consumer<F, X, E>(checked: F) -> UncheckedConsumer<F, X, E>
where
    F: CheckedConsumer<X, E>,
{
    Unchecked::new(checked)
}

/// Bridge a checked two-argument consumer
pub fn bi_consumer<F, X, Y, E>(checked: F) -> UncheckedBiConsumer<F, X, Y, E>
where
    F: CheckedBiConsumer<X, Y, E>,
{
    Unchecked::new(checked)
}

/// Bridge a checked supplier, e.g. for `iter::repeat_with`
pub fn supplier<F, R, E>(checked: F) -> UncheckedSupplier<F, R, E>
where
    F: CheckedSupplier<R, E>,
{
    Unchecked::new(checked)
}

/// Bridge a checked function, e.g. for `Iterator::map`
pub fn function<F, X, R, E>(checked: F) -> UncheckedFunction<F, X, R, E>
where
    F: CheckedFunction<X, R, E>,
{
    Unchecked::new(checked)
}

/// Bridge a checked two-argument function, e.g. for `Iterator::fold`
pub fn bi_function<F, X, Y, R, E>(checked: F) -> UncheckedBiFunction<F, X, Y, R, E>
where
    F: CheckedBiFunction<X, Y, R, E>,
{
    Unchecked::new(checked)
}

/// Bridge a checked boolean condition
pub fn condition<F, E>(checked: F) -> UncheckedCondition<F, E>
where
    F: CheckedCondition<E>,
{
    Unchecked::new(checked)
}

/// Bridge a checked predicate
pub fn predicate<F, X, E>(checked: F) -> UncheckedPredicate<F, X, E>
where
    F: CheckedPredicate<X, E>,
{
    Unchecked::new(checked)
}

/// Bridge a checked two-argument predicate
pub fn bi_predicate<F, X, Y, E>(checked: F) -> UncheckedBiPredicate<F, X, Y, E>
where
    F: CheckedBiPredicate<X, Y, E>,
{
    Unchecked::new(checked)
}

/// Bridge a checked function whose result has its argument's type
pub fn unary_op<F, X, E>(checked: F) -> UncheckedFunction<F, X, X, E>
where
    F: CheckedFunction<X, X, E>,
{
    Unchecked::new(checked)
}

/// Bridge a checked two-argument function over a single type
pub fn binary_op<F, X, E>(checked: F) -> UncheckedBiFunction<F, X, X, X, E>
where
    F: CheckedBiFunction<X, X, X, E>,
{
    Unchecked::new(checked)
}

/// Bridge a checked two-argument predicate over a single type
pub fn relation<F, X, E>(checked: F) -> UncheckedBiPredicate<F, X, X, E>
where
    F: CheckedBiPredicate<X, X, E>,
{
    Unchecked::new(checked)
}

// ============================================================================
// Cast down
// ============================================================================

/// Free-function form of [`Unchecked::cast_down`]
pub fn cast_down<F, S, T>(bridge: Unchecked<F, S>) -> Unchecked<F, T>
where
    S: Signature + Reshape<T>,
    T: Admits<F>,
{
    bridge.cast_down()
}

// ============================================================================
// Direct invoke
// ============================================================================

/// Run a checked action now, re-raising any failure unchecked
#[track_caller]
pub fn invoke_runnable<F, E>(checked: F)
where
    F: CheckedRunnable<E>,
    E: Send + 'static,
{
    runnable(checked).run()
}

/// Feed `x` to a checked consumer now
#[track_caller]
pub fn invoke_consumer<F, X, E>(checked: F, x: X)
where
    F: CheckedConsumer<X, E>,
    E: Send + 'static,
{
    consumer(checked).accept(x)
}

/// Feed `x` and `y` to a checked two-argument consumer now
#[track_caller]
pub fn invoke_bi_consumer<F, X, Y, E>(checked: F, x: X, y: Y)
where
    F: CheckedBiConsumer<X, Y, E>,
    E: Send + 'static,
{
    bi_consumer(checked).accept(x, y)
}

/// Take one value from a checked supplier now
#[track_caller]
pub fn invoke_supplier<F, R, E>(checked: F) -> R
where
    F: CheckedSupplier<R, E>,
    E: Send + 'static,
{
    supplier(checked).get()
}

/// Apply a checked function to `x` now
#[track_caller]
pub fn invoke_function<F, X, R, E>(checked: F, x: X) -> R
where
    F: CheckedFunction<X, R, E>,
    E: Send + 'static,
{
    function(checked).apply(x)
}

/// Apply a checked two-argument function now
#[track_caller]
pub fn invoke_bi_function<F, X, Y, R, E>(checked: F, x: X, y: Y) -> R
where
    F: CheckedBiFunction<X, Y, R, E>,
    E: Send + 'static,
{
    bi_function(checked).apply(x, y)
}

/// Evaluate a checked condition now
#[track_caller]
pub fn invoke_condition<F, E>(checked: F) -> bool
where
    F: CheckedCondition<E>,
    E: Send + 'static,
{
    condition(checked).test()
}

/// Test `x` against a checked predicate now
#[track_caller]
pub fn invoke_predicate<F, X, E>(checked: F, x: X) -> bool
where
    F: CheckedPredicate<X, E>,
    E: Send + 'static,
{
    predicate(checked).test(x)
}

/// Test `x` and `y` against a checked two-argument predicate now
#[track_caller]
pub fn invoke_bi_predicate<F, X, Y, E>(checked: F, x: X, y: Y) -> bool
where
    F: CheckedBiPredicate<X, Y, E>,
    E: Send + 'static,
{
    bi_predicate(checked).test(x, y)
}
