//! Zero-argument shapes: runnable, supplier, condition

use escalate_core::{CheckedCondition, CheckedRunnable, CheckedSupplier, Shape};

use super::{Unchecked, UncheckedCondition, UncheckedRunnable, UncheckedSupplier};
use crate::escalation::escalate_from;
use crate::signature::{ConditionSig, RunnableSig, SupplierSig};

// ============================================================================
// Runnable
// ============================================================================

impl<F, E> UncheckedRunnable<F, E>
where
    F: CheckedRunnable<E>,
    E: Send + 'static,
{
    /// Run once, re-raising any failure unchecked
    #[track_caller]
    pub fn run(&self) {
        escalate_from(Shape::Runnable, CheckedRunnable::checked_run(&self.checked))
    }

    /// Borrow as a plain `Fn()`
    pub fn as_fn(&self) -> impl Fn() + '_ {
        move || self.run()
    }

    /// Convert into a plain `Fn()`
    pub fn into_fn(self) -> impl Fn() {
        move || self.run()
    }
}

impl<F, E> CheckedRunnable<E> for Unchecked<F, RunnableSig<E>>
where
    F: CheckedRunnable<E>,
{
    fn checked_run(&self) -> Result<(), E> {
        self.checked.checked_run()
    }
}

// ============================================================================
// Supplier
// ============================================================================

impl<F, R, E> UncheckedSupplier<F, R, E>
where
    F: CheckedSupplier<R, E>,
    E: Send + 'static,
{
    /// Produce a value, re-raising any failure unchecked
    #[track_caller]
    pub fn get(&self) -> R {
        escalate_from(Shape::Supplier, CheckedSupplier::checked_get(&self.checked))
    }

    /// Borrow as a plain `Fn() -> R`
    pub fn as_fn(&self) -> impl Fn() -> R + '_ {
        move || self.get()
    }

    /// Convert into a plain `Fn() -> R`
    pub fn into_fn(self) -> impl Fn() -> R {
        move || self.get()
    }
}

impl<F, R, E> CheckedSupplier<R, E> for Unchecked<F, SupplierSig<R, E>>
where
    F: CheckedSupplier<R, E>,
{
    fn checked_get(&self) -> Result<R, E> {
        self.checked.checked_get()
    }
}

// ============================================================================
// Condition
// ============================================================================

impl<F, E> UncheckedCondition<F, E>
where
    F: CheckedCondition<E>,
    E: Send + 'static,
{
    /// Evaluate, re-raising any failure unchecked
    #[track_caller]
    pub fn test(&self) -> bool {
        escalate_from(Shape::Condition, CheckedCondition::checked_test(&self.checked))
    }

    /// Borrow as a plain `Fn() -> bool`
    pub fn as_fn(&self) -> impl Fn() -> bool + '_ {
        move || self.test()
    }

    /// Convert into a plain `Fn() -> bool`
    pub fn into_fn(self) -> impl Fn() -> bool {
        move || self.test()
    }
}

impl<F, E> CheckedCondition<E> for Unchecked<F, ConditionSig<E>>
where
    F: CheckedCondition<E>,
{
    fn checked_test(&self) -> Result<bool, E> {
        CheckedCondition::checked_test(&self.checked)
    }
}
