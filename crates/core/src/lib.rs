//! Core types and traits for escalate
//!
//! This crate defines the checked side of the bridge:
//! - Shape: the closed set of callable shapes (action, consumer, supplier, ...)
//! - Checked traits: one trait per shape with a single fallible entry point
//!   whose error type is the failure bound
//!
//! The unchecked side lives in `escalate-bridge`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checked;
pub mod shape;

pub use checked::{
    CheckedBiConsumer, CheckedBiFunction, CheckedBiPredicate, CheckedCondition, CheckedConsumer,
    CheckedFunction, CheckedPredicate, CheckedRunnable, CheckedSupplier,
};
pub use shape::{ResultKind, Shape};
