//! The unchecked bridge
//!
//! [`Unchecked<F, S>`] owns a checked callable `F` and exposes it through two
//! contracts at once:
//! - the checked one: `Unchecked` implements the checked trait of its shape
//!   and forwards to `F` verbatim, so the declared failure stays observable
//! - the ambient one: an inherent entry point (`run`, `accept`, `get`,
//!   `apply`, `test`) with no failure in its signature, plus `as_fn` /
//!   `into_fn` for code that takes plain `Fn` closures
//!
//! The ambient entry point calls the checked one exactly once and re-raises
//! any failure through [`escalate`](crate::escalate), payload untouched.
//!
//! Entry points are `#[track_caller]`, so the escalation event names the line
//! that called `apply` (or `run`, `test`, ...). The closures returned by
//! `as_fn` / `into_fn` cannot carry that attribute: a failure raised through
//! them is located inside this crate, at the closure body.
//!
//! A bridge holds nothing but `F`: it is the same size, it is `Send`/`Sync`
//! exactly when `F` is, and it never invokes `F` on its own.

mod binary;
mod nullary;
mod unary;

use std::fmt;
use std::marker::PhantomData;

use escalate_core::Shape;

use crate::signature::{
    Admits, BiConsumerSig, BiFunctionSig, BiPredicateSig, ConditionSig, ConsumerSig,
    FunctionSig, PredicateSig, Reshape, RunnableSig, Signature, SupplierSig,
};

/// Bridge from a checked callable `F` to the ambient unchecked contract of
/// shape signature `S`
pub struct Unchecked<F, S> {
    checked: F,
    signature: PhantomData<S>,
}

/// Unchecked zero-argument action
pub type UncheckedRunnable<F, E> = Unchecked<F, RunnableSig<E>>;
/// Unchecked one-argument consumer
pub type UncheckedConsumer<F, X, E> = Unchecked<F, ConsumerSig<X, E>>;
/// Unchecked two-argument consumer
pub type UncheckedBiConsumer<F, X, Y, E> = Unchecked<F, BiConsumerSig<X, Y, E>>;
/// Unchecked supplier
pub type UncheckedSupplier<F, R, E> = Unchecked<F, SupplierSig<R, E>>;
/// Unchecked one-argument function
pub type UncheckedFunction<F, X, R, E> = Unchecked<F, FunctionSig<X, R, E>>;
/// Unchecked two-argument function
pub type UncheckedBiFunction<F, X, Y, R, E> = Unchecked<F, BiFunctionSig<X, Y, R, E>>;
/// Unchecked zero-argument boolean condition
pub type UncheckedCondition<F, E> = Unchecked<F, ConditionSig<E>>;
/// Unchecked one-argument predicate
pub type UncheckedPredicate<F, X, E> = Unchecked<F, PredicateSig<X, E>>;
/// Unchecked two-argument predicate
pub type UncheckedBiPredicate<F, X, Y, E> = Unchecked<F, BiPredicateSig<X, Y, E>>;

impl<F, S: Signature> Unchecked<F, S> {
    /// Lift a checked callable into a bridge
    ///
    /// O(1) and never invokes `checked`.
    pub fn new(checked: F) -> Self
    where
        S: Admits<F>,
    {
        Self {
            checked,
            signature: PhantomData,
        }
    }

    /// Reinterpret this bridge under a signature that differs only in lifetimes
    ///
    /// The type parameters must match exactly ([`Reshape`]). Lifetimes follow
    /// the variance of the signature: an argument lifetime may only grow and
    /// a result lifetime may only shrink, so the cast compiles exactly when
    /// the recast bridge can be used wherever `self` was allowed. Moves `F`
    /// into the new handle; nothing is invoked, converted or allocated, and
    /// the same checked impl of `F` is called afterwards.
    ///
    /// ```
    /// use escalate_bridge::{consumer, ConsumerSig, UncheckedConsumer};
    ///
    /// #[derive(Debug)]
    /// struct Empty;
    ///
    /// fn for_static<'a, F>(
    ///     bridge: UncheckedConsumer<F, &'a str, Empty>,
    /// ) -> UncheckedConsumer<F, &'static str, Empty>
    /// where
    ///     F: escalate_core::CheckedConsumer<&'static str, Empty>,
    /// {
    ///     bridge.cast_down::<ConsumerSig<&'static str, Empty>>()
    /// }
    ///
    /// let check = consumer(|s: &str| if s.is_empty() { Err(Empty) } else { Ok(()) });
    /// for_static(check).accept("static");
    /// ```
    pub fn cast_down<T>(self) -> Unchecked<F, T>
    where
        S: Reshape<T>,
        T: Admits<F>,
    {
        Unchecked {
            checked: self.checked,
            signature: PhantomData,
        }
    }

    /// The shape of this bridge
    pub fn shape(&self) -> Shape {
        S::SHAPE
    }

    /// Borrow the wrapped checked callable
    pub fn checked(&self) -> &F {
        &self.checked
    }

    /// Unwrap the checked callable
    pub fn into_checked(self) -> F {
        self.checked
    }
}

impl<F: Clone, S> Clone for Unchecked<F, S> {
    fn clone(&self) -> Self {
        Self {
            checked: self.checked.clone(),
            signature: PhantomData,
        }
    }
}

impl<F: Copy, S> Copy for Unchecked<F, S> {}

impl<F, S: Signature> fmt::Debug for Unchecked<F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unchecked")
            .field("shape", &S::SHAPE)
            .finish_non_exhaustive()
    }
}
