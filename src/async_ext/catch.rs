use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use futures_util::future::{BoxFuture, FutureExt};

use crate::types::ValidationError;
use crate::validation::core::ValidationResult;

/// Creates a validation future through `make`, catching panics raised while
/// creating it and while polling it.
///
/// The returned future always resolves to a [`ValidationResult`].
///
/// # Examples
///
/// ```
/// use valid_rail::async_ext::{guarded, BoxFuture};
/// use valid_rail::{codes, ValidationResult};
///
/// # tokio_test_block(async {
/// let result = guarded(|| -> BoxFuture<'static, ValidationResult<u8>> {
///     panic!("lookup table missing")
/// })
/// .await;
///
/// let errors = result.into_errors().unwrap();
/// assert_eq!(errors[0].code(), Some(codes::ASYNC_FAILURE));
/// assert!(errors[0].message().contains("lookup table missing"));
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
/// # }
/// ```
pub fn guarded<T, F>(make: F) -> BoxFuture<'static, ValidationResult<T>>
where
    T: Send + 'static,
    F: FnOnce() -> BoxFuture<'static, ValidationResult<T>>,
{
    match catch_unwind(AssertUnwindSafe(make)) {
        Ok(future) => AssertUnwindSafe(future)
            .catch_unwind()
            .map(|outcome| outcome.unwrap_or_else(unexpected))
            .boxed(),
        Err(payload) => futures_util::future::ready(unexpected(payload)).boxed(),
    }
}

fn unexpected<T>(payload: Box<dyn Any + Send>) -> ValidationResult<T> {
    let detail = panic_detail(payload.as_ref());
    crate::log_event!(error, detail = %detail, "asynchronous validator panicked");
    ValidationResult::invalid(ValidationError::unexpected_async_failure(detail))
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}
