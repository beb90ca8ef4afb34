//! Panic-trapping wrappers
//!
//! [`run_sync`] and [`run_async`] execute a computation and convert any panic
//! into an [`Outcome::Err`] instead of unwinding into the caller. The default
//! variants produce [`CaughtError`] values via [`unwrap_error`]; the `_with`
//! variants hand the trapped payload to a caller-supplied normalizer, which
//! is how a custom error type enters the picture without any casting.
//!
//! # Example
//!
//! ```rust
//! use mishap::{run_sync, run_sync_with, Outcome};
//!
//! let fine = run_sync(|| 2 + 2);
//! assert_eq!(fine.into_data(), Some(4));
//!
//! let mapped: Outcome<u32, &str> =
//!     run_sync_with(|| panic!("boom"), |caught| {
//!         if caught.message() == Some("boom") { "exploded" } else { "unknown" }
//!     });
//! assert_eq!(mapped.into_error(), Some("exploded"));
//! ```

use std::future::Future;
use std::panic::{self, AssertUnwindSafe, UnwindSafe};

use futures::FutureExt;

use crate::error::{Caught, CaughtError};
use crate::outcome::{Outcome, err, ok};

/// Fallback message when a synchronous computation panics without a string
/// payload.
pub const SYNC_FAILURE_MESSAGE: &str =
    "Synchronous operation failed, an unexpected error occurred";

/// Fallback message when an asynchronous computation panics without a string
/// payload.
pub const ASYNC_FAILURE_MESSAGE: &str =
    "Asynchronous operation failed, an unexpected error occurred";

/// Build the default normalizer for trapped panics.
///
/// The returned function reuses the panic's own string message when one
/// exists, and falls back to `default_message` otherwise. Callers who need an
/// error type other than [`CaughtError`] pass their own normalizer to
/// [`run_sync_with`] / [`run_async_with`] instead.
pub fn unwrap_error(default_message: impl Into<String>) -> impl Fn(Caught) -> CaughtError {
    let default_message = default_message.into();
    move |caught: Caught| {
        let message = caught.message().unwrap_or(&default_message);
        CaughtError::new(message)
    }
}

/// Run a synchronous computation, trapping panics into an [`Outcome`].
///
/// Returns `Ok` with the closure's value, or `Err` with a [`CaughtError`]
/// normalized by [`unwrap_error`]. Never panics itself.
pub fn run_sync<T, F>(f: F) -> Outcome<T, CaughtError>
where
    F: FnOnce() -> T + UnwindSafe,
{
    run_sync_with(f, unwrap_error(SYNC_FAILURE_MESSAGE))
}

/// Run a synchronous computation, mapping any trapped panic through
/// `get_error`.
pub fn run_sync_with<T, E, F, M>(f: F, get_error: M) -> Outcome<T, E>
where
    F: FnOnce() -> T + UnwindSafe,
    M: FnOnce(Caught) -> E,
{
    match panic::catch_unwind(f) {
        Ok(data) => ok(data),
        Err(payload) => {
            let caught = Caught::from_payload(payload);
            tracing::debug!(
                panic = caught.message().unwrap_or("<non-string payload>"),
                "trapped panic in synchronous wrapper"
            );
            err(get_error(caught))
        }
    }
}

/// Run an asynchronous computation, trapping panics into an [`Outcome`].
///
/// Awaits the future produced by `f` and returns `Ok` with its value, or
/// `Err` with a [`CaughtError`] normalized by [`unwrap_error`]. Awaiting the
/// wrapper never panics; a panic at any poll of the wrapped future surfaces
/// as an `Err` outcome.
pub async fn run_async<T, F, Fut>(f: F) -> Outcome<T, CaughtError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    run_async_with(f, unwrap_error(ASYNC_FAILURE_MESSAGE)).await
}

/// Run an asynchronous computation, mapping any trapped panic through
/// `get_error`.
pub async fn run_async_with<T, E, F, Fut, M>(f: F, get_error: M) -> Outcome<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
    M: FnOnce(Caught) -> E,
{
    // The closure is invoked inside the guarded block so a panic before the
    // first suspension point is trapped as well.
    match AssertUnwindSafe(async move { f().await }).catch_unwind().await {
        Ok(data) => ok(data),
        Err(payload) => {
            let caught = Caught::from_payload(payload);
            tracing::debug!(
                panic = caught.message().unwrap_or("<non-string payload>"),
                "trapped panic in asynchronous wrapper"
            );
            err(get_error(caught))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_sync_returns_ok_value() {
        let outcome = run_sync(|| 42);
        assert_eq!(outcome, Outcome::Ok(42));
    }

    #[test]
    fn test_run_sync_traps_panic_message() {
        let outcome: Outcome<u32, CaughtError> = run_sync(|| panic!("boom"));
        match outcome {
            Outcome::Err(e) => assert_eq!(e.message(), "boom"),
            Outcome::Ok(_) => panic!("Expected Err outcome"),
        }
    }

    #[test]
    fn test_run_sync_uses_fallback_for_non_string_payload() {
        let outcome: Outcome<u32, CaughtError> =
            run_sync(|| std::panic::panic_any(17_u32));
        match outcome {
            Outcome::Err(e) => assert_eq!(e.message(), SYNC_FAILURE_MESSAGE),
            Outcome::Ok(_) => panic!("Expected Err outcome"),
        }
    }

    #[test]
    fn test_run_sync_with_applies_custom_normalizer() {
        let outcome: Outcome<u32, &str> = run_sync_with(|| panic!("x"), |_| "custom");
        assert_eq!(outcome, Outcome::Err("custom"));
    }

    #[test]
    fn test_unwrap_error_prefers_panic_message() {
        let normalize = unwrap_error("fallback");
        let caught = Caught::from_payload(Box::new("actual"));
        assert_eq!(normalize(caught).message(), "actual");
    }

    #[test]
    fn test_unwrap_error_falls_back_without_message() {
        let normalize = unwrap_error("fallback");
        let caught = Caught::from_payload(Box::new(()));
        assert_eq!(normalize(caught).message(), "fallback");
    }

    #[tokio::test]
    async fn test_run_async_returns_ok_value() {
        let outcome = run_async(|| async { 7 }).await;
        assert_eq!(outcome, Outcome::Ok(7));
    }

    #[tokio::test]
    async fn test_run_async_traps_panic_message() {
        let outcome: Outcome<u32, CaughtError> =
            run_async(|| async { panic!("fail") }).await;
        match outcome {
            Outcome::Err(e) => assert_eq!(e.message(), "fail"),
            Outcome::Ok(_) => panic!("Expected Err outcome"),
        }
    }

    #[tokio::test]
    async fn test_run_async_traps_panic_before_first_await() {
        // The closure itself panics while constructing the future.
        let outcome: Outcome<u32, CaughtError> = run_async(|| -> std::future::Ready<u32> {
            panic!("early");
        })
        .await;
        match outcome {
            Outcome::Err(e) => assert_eq!(e.message(), "early"),
            Outcome::Ok(_) => panic!("Expected Err outcome"),
        }
    }

    #[tokio::test]
    async fn test_run_async_with_applies_custom_normalizer() {
        let outcome: Outcome<u32, String> = run_async_with(
            || async { panic!("nope") },
            |caught| format!("mapped: {}", caught.message().unwrap_or("?")),
        )
        .await;
        assert_eq!(outcome, Outcome::Err("mapped: nope".to_string()));
    }
}
