//! Unchecked bridges over checked callables
//!
//! A checked callable declares its failure in its return type. Plenty of
//! code only accepts callables that declare nothing: iterator adapters,
//! `thread::spawn`, sort comparators. This crate wraps a checked callable in
//! an [`Unchecked`] bridge that satisfies both:
//!
//! - the checked contract of its shape, by forwarding to the wrapped callable
//! - the ambient contract, by returning the plain value and re-raising any
//!   failure as an unwind whose payload is the original failure value
//!
//! ```
//! use escalate_bridge::function;
//!
//! #[derive(Debug)]
//! struct Boom;
//!
//! let parse = function(|s: &str| s.parse::<u32>().map_err(|_| Boom));
//! let parsed: Vec<u32> = ["1", "2"].into_iter().map(parse.into_fn()).collect();
//! assert_eq!(parsed, vec![1, 2]);
//! ```
//!
//! # Modules
//!
//! - [`escalation`]: the failure channel ([`escalate`], [`raise`])
//! - [`signature`]: zero-sized markers naming a shape parametrization
//! - [`unchecked`]: the bridge type and its per-shape entry points
//! - [`adapt`]: named lift adapters, cast-down and direct invocation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapt;
pub mod escalation;
pub mod signature;
pub mod unchecked;


pub use adapt::{
    bi_consumer, bi_function, bi_predicate, binary_op, cast_down, condition, consumer, function,
    invoke_bi_consumer, invoke_bi_function, invoke_bi_predicate, invoke_condition,
    invoke_consumer, invoke_function, invoke_predicate, invoke_runnable, invoke_supplier,
    predicate, relation, runnable, supplier, unary_op,
};
pub use escalation::{escalate, raise};
pub use signature::{
    Admits, BiConsumerSig, BiFunctionSig, BiPredicateSig, ConditionSig, ConsumerSig, FunctionSig,
    PredicateSig, Reshape, RunnableSig, Signature, SupplierSig,
};
pub use unchecked::{
    Unchecked, UncheckedBiConsumer, UncheckedBiFunction, UncheckedBiPredicate,
    UncheckedCondition, UncheckedConsumer, UncheckedFunction, UncheckedPredicate,
    UncheckedRunnable, UncheckedSupplier,
};
