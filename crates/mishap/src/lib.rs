//! Mishap Core Library
//!
//! This crate provides a small error-handling utility layer:
//! - [`Outcome`], a two-variant result type with a discriminated-record
//!   wire shape (`{"ok": true, "data": ...}` / `{"ok": false, "error": ...}`)
//! - Panic-trapping wrappers ([`run_sync`], [`run_async`]) that convert
//!   panics into `Outcome::Err` values instead of unwinding into the caller
//! - A default error normalizer ([`unwrap_error`]) producing [`CaughtError`]
//!   values from trapped panic payloads
//!
//! # Example
//!
//! ```rust
//! use mishap::{run_sync, Outcome};
//!
//! let parsed = run_sync(|| "42".parse::<u32>().unwrap());
//! match parsed {
//!     Outcome::Ok(n) => assert_eq!(n, 42),
//!     Outcome::Err(e) => panic!("unexpected: {e}"),
//! }
//! ```
//!
//! Wrappers never panic themselves: every failure path is trapped at the
//! boundary and surfaced as a value, so downstream code branches on the
//! discriminant rather than installing panic hooks or `catch_unwind` guards
//! of its own.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod option;
pub mod outcome;
pub mod run;

pub use error::{Caught, CaughtError};
pub use option::is_none;
pub use outcome::{Outcome, err, ok};
pub use run::{run_async, run_async_with, run_sync, run_sync_with, unwrap_error};
