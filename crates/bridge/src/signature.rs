//! Shape signatures
//!
//! A signature is a zero-sized marker naming one shape together with its
//! parametrization: argument types, result type and failure bound. A bridge
//! `Unchecked<F, S>` carries its signature `S` as `PhantomData`.
//!
//! Each marker wraps `PhantomData<fn(Args..) -> Result<R, E>>`, so it is
//! contravariant in the argument types and covariant in the result and the
//! failure bound. For lifetimes, the only subtyping Rust has, a bridge is
//! therefore substitutable exactly where the variance rule allows, with no
//! conversion at all.
//!
//! Type parameters have no subtyping, so the only legal reinterpretation
//! keeps them exactly as they are. Two traits state this:
//! - [`Admits<F>`]: `F` implements the shape's checked trait at this exact
//!   parametrization
//! - [`Reshape<T>`]: `T` is this signature, up to lifetimes
//!
//! `Unchecked::cast_down` requires both. Lifetimes are related by the
//! receiver's subtyping before the bound is checked, so a cast only compiles
//! in the direction the variance of the `fn` phantom allows.

use std::marker::PhantomData;

use escalate_core::{
    CheckedBiConsumer, CheckedBiFunction, CheckedBiPredicate, CheckedCondition, CheckedConsumer,
    CheckedFunction, CheckedPredicate, CheckedRunnable, CheckedSupplier, Shape,
};

/// A shape parametrization
pub trait Signature {
    /// The shape this signature belongs to
    const SHAPE: Shape;
}

/// The callable `F` may stand behind this parametrization
pub trait Admits<F>: Signature {}

/// `T` names the same shape with the same type parameters
pub trait Reshape<T: Signature>: Signature {}

macro_rules! signature {
    (
        $(#[$doc:meta])*
        $name:ident<$($param:ident),+> = fn($($arg:ident),*) -> $ret:ty,
        $shape:expr,
        $checked:ident<$($bound:ident),+>
    ) => {
        $(#[$doc])*
        pub struct $name<$($param),+>(PhantomData<fn($($arg),*) -> $ret>);

        impl<$($param),+> Signature for $name<$($param),+> {
            const SHAPE: Shape = $shape;
        }

        impl<Func, $($param),+> Admits<Func> for $name<$($param),+>
        where
            Func: $checked<$($bound),+>,
        {
        }
    };
}

signature! {
    /// Zero arguments, no result, fails with `E`
    RunnableSig<E> = fn() -> Result<(), E>,
    Shape::Runnable,
    CheckedRunnable<E>
}

signature! {
    /// One argument `X`, no result, fails with `E`
    ConsumerSig<X, E> = fn(X) -> Result<(), E>,
    Shape::Consumer,
    CheckedConsumer<X, E>
}

signature! {
    /// Two arguments `X`, `Y`, no result, fails with `E`
    BiConsumerSig<X, Y, E> = fn(X, Y) -> Result<(), E>,
    Shape::BiConsumer,
    CheckedBiConsumer<X, Y, E>
}

signature! {
    /// Zero arguments, produces `R`, fails with `E`
    SupplierSig<R, E> = fn() -> Result<R, E>,
    Shape::Supplier,
    CheckedSupplier<R, E>
}

signature! {
    /// One argument `X`, produces `R`, fails with `E`
    FunctionSig<X, R, E> = fn(X) -> Result<R, E>,
    Shape::Function,
    CheckedFunction<X, R, E>
}

signature! {
    /// Two arguments `X`, `Y`, produces `R`, fails with `E`
    BiFunctionSig<X, Y, R, E> = fn(X, Y) -> Result<R, E>,
    Shape::BiFunction,
    CheckedBiFunction<X, Y, R, E>
}

signature! {
    /// Zero arguments, produces a boolean, fails with `E`
    ConditionSig<E> = fn() -> Result<bool, E>,
    Shape::Condition,
    CheckedCondition<E>
}

signature! {
    /// One argument `X`, produces a boolean, fails with `E`
    PredicateSig<X, E> = fn(X) -> Result<bool, E>,
    Shape::Predicate,
    CheckedPredicate<X, E>
}

signature! {
    /// Two arguments `X`, `Y`, produces a boolean, fails with `E`
    BiPredicateSig<X, Y, E> = fn(X, Y) -> Result<bool, E>,
    Shape::BiPredicate,
    CheckedBiPredicate<X, Y, E>
}

// Identity on type parameters. A cast that changed `X`, `R` or `E` would
// pick a different checked impl of the wrapped callable.

impl<E> Reshape<RunnableSig<E>> for RunnableSig<E> {}
impl<X, E> Reshape<ConsumerSig<X, E>> for ConsumerSig<X, E> {}
impl<X, Y, E> Reshape<BiConsumerSig<X, Y, E>> for BiConsumerSig<X, Y, E> {}
impl<R, E> Reshape<SupplierSig<R, E>> for SupplierSig<R, E> {}
impl<X, R, E> Reshape<FunctionSig<X, R, E>> for FunctionSig<X, R, E> {}
impl<X, Y, R, E> Reshape<BiFunctionSig<X, Y, R, E>> for BiFunctionSig<X, Y, R, E> {}
impl<E> Reshape<ConditionSig<E>> for ConditionSig<E> {}
impl<X, E> Reshape<PredicateSig<X, E>> for PredicateSig<X, E> {}
impl<X, Y, E> Reshape<BiPredicateSig<X, Y, E>> for BiPredicateSig<X, Y, E> {}
