//! Running several async validations as one.
//!
//! [`validate_all_async`] mirrors the accumulating behavior of
//! [`ValidationResult::zip`]; [`validate_seq_async`] mirrors fail-fast
//! [`ValidationResult::and_then`].

use core::future::Future;

use futures_util::future::join_all;

use crate::validation::core::ValidationResult;

/// Runs async validations concurrently and collects all errors.
///
/// Every future is polled to completion. Values are returned in input order;
/// errors are accumulated in input order regardless of completion order.
///
/// # Example
///
/// ```
/// use valid_rail::async_ext::validate_all_async;
/// use valid_rail::{ValidationError, ValidationResult};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let checks = vec![
///     std::future::ready(ValidationResult::valid(1)),
///     std::future::ready(ValidationResult::invalid(ValidationError::new("no email"))),
///     std::future::ready(ValidationResult::invalid(ValidationError::new("no phone"))),
/// ];
///
/// let result = validate_all_async(checks).await;
/// assert_eq!(result.into_errors().unwrap().len(), 2);
/// # });
/// ```
pub async fn validate_all_async<T, Fut, I>(validations: I) -> ValidationResult<Vec<T>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = ValidationResult<T>>,
{
    join_all(validations).await.into_iter().collect()
}

/// Runs async validations one after another, each receiving the previous value.
///
/// Stops at the first invalid result and returns its errors.
///
/// # Example
///
/// ```
/// use std::future::{ready, Ready};
/// use valid_rail::async_ext::validate_seq_async;
/// use valid_rail::{ValidationError, ValidationResult};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// type Step = fn(String) -> Ready<ValidationResult<String>>;
///
/// let trim: Step = |s| ready(ValidationResult::valid(s.trim().to_string()));
/// let non_blank: Step = |s| {
///     ready(if s.is_empty() {
///         ValidationResult::invalid(ValidationError::new("blank"))
///     } else {
///         ValidationResult::valid(s)
///     })
/// };
///
/// let steps = [trim, non_blank];
///
/// let result = validate_seq_async("  ada ".to_string(), steps).await;
/// assert_eq!(result.into_value().as_deref(), Some("ada"));
/// # });
/// ```
pub async fn validate_seq_async<T, F, Fut>(
    initial: T,
    validators: impl IntoIterator<Item = F>,
) -> ValidationResult<T>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = ValidationResult<T>>,
{
    let mut current = initial;

    for validator in validators {
        match validator(current).await {
            ValidationResult::Valid(v) => current = v,
            invalid => return invalid,
        }
    }

    ValidationResult::Valid(current)
}
