//! Cast Down Tests
//!
//! Reinterpreting a bridge keeps its behaviour, its failures and the
//! callable it wraps. Type parameters never change; lifetimes move only in
//! the direction the signature's variance allows.

use crate::common::*;
use escalate::*;
use std::convert::Infallible;

// =============================================================================
// Test doubles
// =============================================================================

/// Checked at two argument types with different outcomes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TwoFaced;

impl CheckedFunction<u8, u32, Sentinel> for TwoFaced {
    fn checked_apply(&self, x: u8) -> Result<u32, Sentinel> {
        Ok(u32::from(x))
    }
}

impl CheckedFunction<u32, u32, Sentinel> for TwoFaced {
    fn checked_apply(&self, x: u32) -> Result<u32, Sentinel> {
        Err(Sentinel(x.into()))
    }
}

fn accept_static<'a, F>(
    bridge: UncheckedConsumer<F, &'a str, Sentinel>,
) -> UncheckedConsumer<F, &'static str, Sentinel>
where
    F: CheckedConsumer<&'static str, Sentinel>,
{
    bridge.cast_down::<ConsumerSig<&'static str, Sentinel>>()
}

fn borrow_result<'a, F>(
    bridge: UncheckedFunction<F, u8, &'static str, Sentinel>,
) -> UncheckedFunction<F, u8, &'a str, Sentinel>
where
    F: CheckedFunction<u8, &'a str, Sentinel>,
{
    cast_down(bridge)
}

// =============================================================================
// Behaviour is unchanged
// =============================================================================

#[test]
fn test_cast_down_keeps_the_selected_impl() {
    let bridge = function::<_, u8, u32, Sentinel>(TwoFaced);
    let recast = bridge.cast_down::<FunctionSig<u8, u32, Sentinel>>();

    assert_eq!(bridge.apply(5), 5);
    assert_eq!(reclaim::<Sentinel, _>(|| recast.apply(5)), Ok(5));
}

#[test]
fn test_cast_down_keeps_failure_behaviour() {
    let bridge = function(|x: i32| -> Result<i32, Sentinel> {
        if x < 0 {
            Err(Sentinel(x.unsigned_abs().into()))
        } else {
            Ok(x)
        }
    });
    let recast = bridge.cast_down::<FunctionSig<i32, i32, Sentinel>>();

    assert_eq!(recast.apply(4), 4);
    assert_eq!(expect_failure::<Sentinel, _>(|| recast.apply(-4)), Sentinel(4));
}

#[test]
fn test_cast_down_keeps_wrapped_callable() {
    let bridge = function::<_, u8, u32, Sentinel>(TwoFaced);
    let recast = cast_down::<_, _, FunctionSig<u8, u32, Sentinel>>(bridge);
    assert_eq!(recast.into_checked(), TwoFaced);
}

#[test]
fn test_cast_down_keeps_shape() {
    let bridge = predicate(|x: u8| -> Result<bool, Infallible> { Ok(x > 0) });
    let recast = bridge.cast_down::<PredicateSig<u8, Infallible>>();
    assert_eq!(recast.shape(), Shape::Predicate);
}

// =============================================================================
// Lifetimes follow variance
// =============================================================================

#[test]
fn test_argument_lifetime_grows() {
    let log = CallLog::new();
    let recorder = log.clone();
    let bridge = consumer(move |s: &str| -> Result<(), Sentinel> {
        recorder.record(s.len());
        Ok(())
    });

    let recast = accept_static(bridge);
    recast.accept("static");
    assert_eq!(log.calls(), vec![6]);
}

#[test]
fn test_result_lifetime_shrinks() {
    let names = ["zero", "one", "two"];
    let bridge = function(move |i: u8| -> Result<&'static str, Sentinel> {
        names.get(usize::from(i)).copied().ok_or(Sentinel(i.into()))
    });

    let recast = borrow_result(bridge);
    assert_eq!(recast.apply(1), "one");
    assert_eq!(expect_failure::<Sentinel, _>(|| recast.apply(9)), Sentinel(9));
}

// =============================================================================
// Compile-time rules
// =============================================================================

static_assertions::assert_impl_all!(FunctionSig<u8, u32, Sentinel>: Reshape<FunctionSig<u8, u32, Sentinel>>);
static_assertions::assert_not_impl_any!(FunctionSig<i64, String, Sentinel>: Reshape<FunctionSig<char, String, Sentinel>>);
static_assertions::assert_not_impl_any!(FunctionSig<u8, u32, Sentinel>: Reshape<FunctionSig<u32, u32, Sentinel>>);
static_assertions::assert_not_impl_any!(PredicateSig<u8, Infallible>: Reshape<PredicateSig<u8, Sentinel>>);
static_assertions::assert_not_impl_any!(FunctionSig<u8, bool, Sentinel>: Reshape<PredicateSig<u8, Sentinel>>);
static_assertions::assert_not_impl_any!(RunnableSig<Sentinel>: Reshape<SupplierSig<(), Sentinel>>);
static_assertions::assert_not_impl_any!(ConditionSig<Sentinel>: Reshape<SupplierSig<bool, Sentinel>>);
