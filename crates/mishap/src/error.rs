//! Error types for mishap
//!
//! A trapped panic arrives as an opaque payload ([`Caught`]). The default
//! normalizer in [`crate::run`] converts it into a [`CaughtError`], the
//! concrete error type used when the caller does not supply a mapper.

use std::any::Any;
use thiserror::Error;

/// Default error produced when a trapped panic is not mapped by the caller.
///
/// Carries a single human-readable message: the panic's own string payload
/// when one exists, or the wrapper's fallback message otherwise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CaughtError {
    message: String,
}

impl CaughtError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A trapped panic payload.
///
/// Wraps the `Box<dyn Any + Send>` handed back by `catch_unwind` and offers
/// best-effort extraction of the panic message. Payloads raised via
/// `panic!("...")` or `panic!("{}", ...)` carry a `&str` or `String`; anything
/// else (e.g. `panic_any`) has no message.
#[derive(Debug)]
pub struct Caught(Box<dyn Any + Send>);

impl Caught {
    /// Wrap a raw payload returned by `catch_unwind`.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        Self(payload)
    }

    /// The panic's string message, if it carried one.
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.0.downcast_ref::<&'static str>() {
            Some(s)
        } else {
            self.0.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// Recover the raw payload for custom downcasting.
    pub fn into_inner(self) -> Box<dyn Any + Send> {
        self.0
    }
}
