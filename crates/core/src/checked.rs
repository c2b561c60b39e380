//! Checked callable traits
//!
//! One trait per [`Shape`](crate::Shape). Each has a single fallible entry
//! point returning `Result<_, E>`, where `E` is the failure bound: the only
//! failure type an invocation may produce.
//!
//! Every trait is implemented for closures and function items of the
//! matching `Fn(..) -> Result<.., E>` signature, so a fallible closure is a
//! checked callable without any wrapping:
//!
//! ```
//! use escalate_core::CheckedFunction;
//!
//! let len = |s: &str| -> Result<usize, std::fmt::Error> { Ok(s.len()) };
//! assert_eq!(len.checked_apply("hello"), Ok(5));
//! ```
//!
//! A closure can match more than one shape. `|| Ok(())` is both a runnable
//! and a `()` supplier, and `|| Ok(true)` is both a condition and a `bool`
//! supplier. Callers pick the shape by naming it.

/// Zero arguments, no result
pub trait CheckedRunnable<E> {
    /// Run once
    ///
    /// # Errors
    ///
    /// Returns the failure produced by the callable.
    fn checked_run(&self) -> Result<(), E>;
}

impl<F, E> CheckedRunnable<E> for F
where
    F: Fn() -> Result<(), E>,
{
    fn checked_run(&self) -> Result<(), E> {
        self()
    }
}

/// One argument, no result
pub trait CheckedConsumer<X, E> {
    /// Accept one argument
    ///
    /// # Errors
    ///
    /// Returns the failure produced by the callable.
    fn checked_accept(&self, x: X) -> Result<(), E>;
}

impl<F, X, E> CheckedConsumer<X, E> for F
where
    F: Fn(X) -> Result<(), E>,
{
    fn checked_accept(&self, x: X) -> Result<(), E> {
        self(x)
    }
}

/// Two arguments, no result
pub trait CheckedBiConsumer<X, Y, E> {
    /// Accept two arguments
    ///
    /// # Errors
    ///
    /// Returns the failure produced by the callable.
    fn checked_accept(&self, x: X, y: Y) -> Result<(), E>;
}

impl<F, X, Y, E> CheckedBiConsumer<X, Y, E> for F
where
    F: Fn(X, Y) -> Result<(), E>,
{
    fn checked_accept(&self, x: X, y: Y) -> Result<(), E> {
        self(x, y)
    }
}

/// Zero arguments, produces a value
///
/// There is no requirement that a new or distinct value is produced on each
/// call.
pub trait CheckedSupplier<R, E> {
    /// Produce a value
    ///
    /// # Errors
    ///
    /// Returns the failure produced by the callable.
    fn checked_get(&self) -> Result<R, E>;
}

impl<F, R, E> CheckedSupplier<R, E> for F
where
    F: Fn() -> Result<R, E>,
{
    fn checked_get(&self) -> Result<R, E> {
        self()
    }
}

/// One argument, produces a value
pub trait CheckedFunction<X, R, E> {
    /// Map the argument to a result
    ///
    /// # Errors
    ///
    /// Returns the failure produced by the callable.
    fn checked_apply(&self, x: X) -> Result<R, E>;
}

impl<F, X, R, E> CheckedFunction<X, R, E> for F
where
    F: Fn(X) -> Result<R, E>,
{
    fn checked_apply(&self, x: X) -> Result<R, E> {
        self(x)
    }
}

/// Two arguments, produces a value
pub trait CheckedBiFunction<X, Y, R, E> {
    /// Map both arguments to a result
    ///
    /// # Errors
    ///
    /// Returns the failure produced by the callable.
    fn checked_apply(&self, x: X, y: Y) -> Result<R, E>;
}

impl<F, X, Y, R, E> CheckedBiFunction<X, Y, R, E> for F
where
    F: Fn(X, Y) -> Result<R, E>,
{
    fn checked_apply(&self, x: X, y: Y) -> Result<R, E> {
        self(x, y)
    }
}

/// Zero arguments, produces a boolean
pub trait CheckedCondition<E> {
    /// Evaluate the condition
    ///
    /// # Errors
    ///
    /// Returns the failure produced by the callable.
    fn checked_test(&self) -> Result<bool, E>;
}

impl<F, E> CheckedCondition<E> for F
where
    F: Fn() -> Result<bool, E>,
{
    fn checked_test(&self) -> Result<bool, E> {
        self()
    }
}

/// One argument, produces a boolean
pub trait CheckedPredicate<X, E> {
    /// Test the argument
    ///
    /// # Errors
    ///
    /// Returns the failure produced by the callable.
    fn checked_test(&self, x: X) -> Result<bool, E>;
}

impl<F, X, E> CheckedPredicate<X, E> for F
where
    F: Fn(X) -> Result<bool, E>,
{
    fn checked_test(&self, x: X) -> Result<bool, E> {
        self(x)
    }
}

/// Two arguments, produces a boolean
pub trait CheckedBiPredicate<X, Y, E> {
    /// Test both arguments
    ///
    /// # Errors
    ///
    /// Returns the failure produced by the callable.
    fn checked_test(&self, x: X, y: Y) -> Result<bool, E>;
}

impl<F, X, Y, E> CheckedBiPredicate<X, Y, E> for F
where
    F: Fn(X, Y) -> Result<bool, E>,
{
    fn checked_test(&self, x: X, y: Y) -> Result<bool, E> {
        self(x, y)
    }
}
