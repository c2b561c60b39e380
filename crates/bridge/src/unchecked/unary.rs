//! One-argument shapes: consumer, function, predicate

use escalate_core::{CheckedConsumer, CheckedFunction, CheckedPredicate, Shape};

use super::{Unchecked, UncheckedConsumer, UncheckedFunction, UncheckedPredicate};
use crate::escalation::escalate_from;
use crate::signature::{ConsumerSig, FunctionSig, PredicateSig};

// ============================================================================
// Consumer
// ============================================================================

impl<F, X, E> UncheckedConsumer<F, X, E>
where
    F: CheckedConsumer<X, E>,
    E: Send + 'static,
{
    /// Accept `x`, re-raising any failure unchecked
    #[track_caller]
    pub fn accept(&self, x: X) {
        escalate_from(Shape::Consumer, CheckedConsumer::checked_accept(&self.checked, x))
    }

    /// Borrow as a plain `Fn(X)`
    pub fn as_fn(&self) -> impl Fn(X) + '_ {
        move |x| self.accept(x)
    }

    /// Convert into a plain `Fn(X)`
    pub fn into_fn(self) -> impl Fn(X) {
        move |x| self.accept(x)
    }
}

impl<F, X, E> CheckedConsumer<X, E> for Unchecked<F, ConsumerSig<X, E>>
where
    F: CheckedConsumer<X, E>,
{
    fn checked_accept(&self, x: X) -> Result<(), E> {
        CheckedConsumer::checked_accept(&self.checked, x)
    }
}

// ============================================================================
// Function
// ============================================================================

impl<F, X, R, E> UncheckedFunction<F, X, R, E>
where
    F: CheckedFunction<X, R, E>,
    E: Send + 'static,
{
    /// Map `x`, re-raising any failure unchecked
    #[track_caller]
    pub fn apply(&self, x: X) -> R {
        escalate_from(Shape::Function, CheckedFunction::checked_apply(&self.checked, x))
    }

    /// Borrow as a plain `Fn(X) -> R`
    pub fn as_fn(&self) -> impl Fn(X) -> R + '_ {
        move |x| self.apply(x)
    }

    /// Convert into a plain `Fn(X) -> R`
    pub fn into_fn(self) -> impl Fn(X) -> R {
        move |x| self.apply(x)
    }
}

impl<F, X, R, E> CheckedFunction<X, R, E> for Unchecked<F, FunctionSig<X, R, E>>
where
    F: CheckedFunction<X, R, E>,
{
    fn checked_apply(&self, x: X) -> Result<R, E> {
        CheckedFunction::checked_apply(&self.checked, x)
    }
}

// ============================================================================
// Predicate
// ============================================================================

impl<F, X, E> UncheckedPredicate<F, X, E>
where
    F: CheckedPredicate<X, E>,
    E: Send + 'static,
{
    /// Test `x`, re-raising any failure unchecked
    #[track_caller]
    pub fn test(&self, x: X) -> bool {
        escalate_from(Shape::Predicate, CheckedPredicate::checked_test(&self.checked, x))
    }

    /// Borrow as a plain `Fn(X) -> bool`
    ///
    /// `X` is fixed, so this is not higher-ranked. Adapters such as `filter`
    /// that hand out short-lived `&Item` need `|item| bridge.test(..)`.
    pub fn as_fn(&self) -> impl Fn(X) -> bool + '_ {
        move |x| self.test(x)
    }

    /// Convert into a plain `Fn(X) -> bool`
    pub fn into_fn(self) -> impl Fn(X) -> bool {
        move |x| self.test(x)
    }
}

impl<F, X, E> CheckedPredicate<X, E> for Unchecked<F, PredicateSig<X, E>>
where
    F: CheckedPredicate<X, E>,
{
    fn checked_test(&self, x: X) -> Result<bool, E> {
        CheckedPredicate::checked_test(&self.checked, x)
    }
}
