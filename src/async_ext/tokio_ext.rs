//! Tokio-specific async extensions.
//!
//! Validation has no built-in deadline. [`with_timeout`] lets a caller impose
//! one from outside.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! valid-rail = { version = "0.7", features = ["async-tokio"] }
//! ```

use core::future::Future;
use core::time::Duration;

use crate::codes;
use crate::types::ValidationError;
use crate::validation::core::ValidationResult;

/// Resolves to `Invalid` with code [`timeout`](codes::TIMEOUT) when `future`
/// does not complete within `duration`.
///
/// The validation future is dropped on timeout.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use valid_rail::async_ext::with_timeout;
/// use valid_rail::{codes, ValidationResult};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let slow = async {
///     tokio::time::sleep(Duration::from_secs(60)).await;
///     ValidationResult::valid(())
/// };
///
/// let result = with_timeout(slow, Duration::from_millis(5)).await;
/// assert_eq!(result.into_errors().unwrap()[0].code(), Some(codes::TIMEOUT));
/// # });
/// ```
pub async fn with_timeout<F, T>(future: F, duration: Duration) -> ValidationResult<T>
where
    F: Future<Output = ValidationResult<T>>,
{
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_elapsed) => {
            crate::log_event!(warn, timeout_ms = duration.as_millis() as u64, "validation timed out");
            ValidationResult::invalid(
                ValidationError::new(format!("validation did not complete within {duration:?}"))
                    .with_code(codes::TIMEOUT)
                    .with_expected(format!("completion within {duration:?}")),
            )
        }
    }
}
