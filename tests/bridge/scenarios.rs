//! Scenario Tests
//!
//! Small end-to-end examples of the library as a caller would use it.

use crate::common::*;
use escalate::*;

/// String length that refuses one particular input.
fn length_unless_bad(s: &str) -> Result<usize, Boom> {
    if s == "bad" {
        Err(Boom::BadInput(s.to_string()))
    } else {
        Ok(s.len())
    }
}

#[test]
fn test_string_length_function() {
    init_tracing();
    let length = function(length_unless_bad);

    assert_eq!(length.apply("hello"), 5);
    assert_eq!(
        expect_failure::<Boom, _>(|| length.apply("bad")),
        Boom::BadInput("bad".into())
    );
}

#[test]
fn test_condition_invoked_exactly_once() {
    let log = CallLog::<()>::new();
    let recorder = log.clone();
    let ready = move || -> Result<bool, Boom> {
        recorder.record(());
        Ok(true)
    };

    assert!(invoke_condition(ready));
    assert_eq!(log.count(), 1);
}

#[test]
fn test_string_concatenation_bi_function() {
    let concat = bi_function(|x: &str, y: &str| -> Result<String, Boom> { Ok(format!("{x}{y}")) });
    assert_eq!(concat.apply("a", "b"), "ab");
    assert_eq!(invoke_bi_function(concat.into_checked(), "c", "d"), "cd");
}

/// A validation pass over user input that gives up on the first bad line,
/// written with plain iterator code.
#[test]
fn test_validate_lines_then_recover_failure() {
    let validate = consumer(|line: &str| -> Result<(), Boom> {
        if line.trim().is_empty() {
            Err(Boom::Rejected)
        } else {
            Ok(())
        }
    });

    let good = "alpha\nbeta\ngamma";
    let bad = "alpha\n   \ngamma";

    assert_eq!(reclaim::<Boom, _>(|| good.lines().for_each(validate.as_fn())), Ok(()));
    assert_eq!(
        reclaim::<Boom, _>(|| bad.lines().for_each(validate.as_fn())),
        Err(Boom::Rejected)
    );
}
