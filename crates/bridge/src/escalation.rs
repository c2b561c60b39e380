//! The unchecked failure channel
//!
//! A checked failure becomes an unchecked one by unwinding with the failure
//! value itself as the panic payload. Nothing is formatted, cloned or
//! wrapped: code that catches the unwind gets the original value back with
//! `payload.downcast::<E>()`.
//!
//! ```
//! use std::panic;
//! use escalate_bridge::escalate;
//!
//! #[derive(Debug, PartialEq)]
//! struct Boom;
//!
//! let payload = panic::catch_unwind(|| escalate::<(), _>(Err(Boom))).unwrap_err();
//! assert_eq!(*payload.downcast::<Boom>().unwrap(), Boom);
//! ```
//!
//! The unwind starts with `std::panic::resume_unwind`, so the panic hook
//! does not run: nothing is printed for a failure that a caller catches.
//! An escalation is visible only as a `TRACE` event carrying the caller's
//! location.
//!
//! Under `panic = "abort"` an escalated failure terminates the process.

use std::panic::{self, Location};

use escalate_core::Shape;
use tracing::trace;

/// Re-raise `failure` as an unchecked failure
///
/// Starts unwinding with `failure` as the panic payload. The panic hook is
/// not invoked; the escalation event records the caller's location.
#[track_caller]
pub fn raise<E: Send + 'static>(failure: E) -> ! {
    unwind(None, failure)
}

/// Return the `Ok` value, or re-raise the `Err` value unchecked
///
/// This is where a declared failure stops being declared.
#[track_caller]
pub fn escalate<T, E: Send + 'static>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(failure) => unwind(None, failure),
    }
}

/// [`escalate`] for bridge entry points, which know their shape
#[track_caller]
#[inline]
pub(crate) fn escalate_from<T, E: Send + 'static>(shape: Shape, result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(failure) => unwind(Some(shape), failure),
    }
}

#[cold]
#[track_caller]
fn unwind<E: Send + 'static>(shape: Option<Shape>, failure: E) -> ! {
    let failure_type = std::any::type_name::<E>();
    let location = Location::caller();
    match shape {
        Some(shape) => trace!(%shape, failure_type, %location, "escalating checked failure"),
        None => trace!(failure_type, %location, "escalating checked failure"),
    }
    panic::resume_unwind(Box::new(failure))
}
