//! Escalate - use fallible callables where plain closures are expected
//!
//! Wrap a callable that returns `Result<_, E>` in a bridge, hand the bridge
//! to any code that wants a plain `Fn`, and get the original `E` back out
//! of the unwind if it fails.
//!
//! # Quick Start
//!
//! ```
//! use std::panic;
//! use escalate::function;
//!
//! #[derive(Debug, PartialEq)]
//! enum ParseError {
//!     Empty,
//! }
//!
//! let parse = function(|s: &str| {
//!     if s.is_empty() {
//!         Err(ParseError::Empty)
//!     } else {
//!         Ok(s.len())
//!     }
//! });
//!
//! assert_eq!(parse.apply("hello"), 5);
//!
//! let payload = panic::catch_unwind(|| parse.apply("")).unwrap_err();
//! assert_eq!(*payload.downcast::<ParseError>().unwrap(), ParseError::Empty);
//! ```
//!
//! # Architecture
//!
//! - `escalate-core`: the checked callable traits and the [`Shape`] enum
//! - `escalate-bridge`: the [`Unchecked`] bridge and everything built on it
//!
//! This crate re-exports both.

pub use escalate_bridge::*;
pub use escalate_core::*;
