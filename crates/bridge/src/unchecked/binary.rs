//! Two-argument shapes: bi-consumer, bi-function, bi-predicate

use escalate_core::{CheckedBiConsumer, CheckedBiFunction, CheckedBiPredicate, Shape};

use super::{Unchecked, UncheckedBiConsumer, UncheckedBiFunction, UncheckedBiPredicate};
use crate::escalation::escalate_from;
use crate::signature::{BiConsumerSig, BiFunctionSig, BiPredicateSig};

// ============================================================================
// BiConsumer
// ============================================================================

impl<F, X, Y, E> UncheckedBiConsumer<F, X, Y, E>
where
    F: CheckedBiConsumer<X, Y, E>,
    E: Send + 'static,
{
    /// Accept `x` and `y`, re-raising any failure unchecked
    #[track_caller]
    pub fn accept(&self, x: X, y: Y) {
        escalate_from(
            Shape::BiConsumer,
            CheckedBiConsumer::checked_accept(&self.checked, x, y),
        )
    }

    /// Borrow as a plain `Fn(X, Y)`
    pub fn as_fn(&self) -> impl Fn(X, Y) + '_ {
        move |x, y| self.accept(x, y)
    }

    /// Convert into a plain `Fn(X, Y)`
    pub fn into_fn(self) -> impl Fn(X, Y) {
        move |x, y| self.accept(x, y)
    }
}

impl<F, X, Y, E> CheckedBiConsumer<X, Y, E> for Unchecked<F, BiConsumerSig<X, Y, E>>
where
    F: CheckedBiConsumer<X, Y, E>,
{
    fn checked_accept(&self, x: X, y: Y) -> Result<(), E> {
        CheckedBiConsumer::checked_accept(&self.checked, x, y)
    }
}

// ============================================================================
// BiFunction
// ============================================================================

impl<F, X, Y, R, E> UncheckedBiFunction<F, X, Y, R, E>
where
    F: CheckedBiFunction<X, Y, R, E>,
    E: Send + 'static,
{
    /// Map `x` and `y`, re-raising any failure unchecked
    #[track_caller]
    pub fn apply(&self, x: X, y: Y) -> R {
        escalate_from(
            Shape::BiFunction,
            CheckedBiFunction::checked_apply(&self.checked, x, y),
        )
    }

    /// Borrow as a plain `Fn(X, Y) -> R`
    pub fn as_fn(&self) -> impl Fn(X, Y) -> R + '_ {
        move |x, y| self.apply(x, y)
    }

    /// Convert into a plain `Fn(X, Y) -> R`
    pub fn into_fn(self) -> impl Fn(X, Y) -> R {
        move |x, y| self.apply(x, y)
    }
}

impl<F, X, Y, R, E> CheckedBiFunction<X, Y, R, E> for Unchecked<F, BiFunctionSig<X, Y, R, E>>
where
    F: CheckedBiFunction<X, Y, R, E>,
{
    fn checked_apply(&self, x: X, y: Y) -> Result<R, E> {
        CheckedBiFunction::checked_apply(&self.checked, x, y)
    }
}

// ============================================================================
// BiPredicate
// ============================================================================

impl<F, X, Y, E> UncheckedBiPredicate<F, X, Y, E>
where
    F: CheckedBiPredicate<X, Y, E>,
    E: Send + 'static,
{
    /// Test `x` and `y`, re-raising any failure unchecked
    #[track_caller]
    pub fn test(&self, x: X, y: Y) -> bool {
        escalate_from(
            Shape::BiPredicate,
            CheckedBiPredicate::checked_test(&self.checked, x, y),
        )
    }

    /// Borrow as a plain `Fn(X, Y) -> bool`
    pub fn as_fn(&self) -> impl Fn(X, Y) -> bool + '_ {
        move |x, y| self.test(x, y)
    }

    /// Convert into a plain `Fn(X, Y) -> bool`
    pub fn into_fn(self) -> impl Fn(X, Y) -> bool {
        move |x, y| self.test(x, y)
    }
}

impl<F, X, Y, E> CheckedBiPredicate<X, Y, E> for Unchecked<F, BiPredicateSig<X, Y, E>>
where
    F: CheckedBiPredicate<X, Y, E>,
{
    fn checked_test(&self, x: X, y: Y) -> Result<bool, E> {
        CheckedBiPredicate::checked_test(&self.checked, x, y)
    }
}
