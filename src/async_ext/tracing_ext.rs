//! Tracing integration for async validation.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! valid-rail = { version = "0.7", features = ["tracing"] }
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::validation::core::ValidationResult;

/// Extension trait running a validation future inside a span and recording
/// its outcome on completion.
///
/// # Example
///
/// ```rust,ignore
/// use valid_rail::async_ext::{AsyncValidate, ValidationSpanExt};
///
/// let result = signup
///     .validate_async(&config)
///     .in_validation_span(tracing::info_span!("validate_signup"))
///     .await;
/// ```
pub trait ValidationSpanExt<T>: Future<Output = ValidationResult<T>> + Sized {
    fn in_validation_span(self, span: Span) -> SpannedValidation<Self> {
        SpannedValidation { inner: self, span }
    }

    fn in_current_span(self) -> SpannedValidation<Self> {
        self.in_validation_span(Span::current())
    }
}

impl<F, T> ValidationSpanExt<T> for F where F: Future<Output = ValidationResult<T>> {}

pin_project! {
    /// Future entering its span on every poll.
    ///
    /// Created by [`ValidationSpanExt::in_validation_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct SpannedValidation<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, T> Future for SpannedValidation<F>
where
    F: Future<Output = ValidationResult<T>>,
{
    type Output = ValidationResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let _entered = this.span.enter();

        match this.inner.poll(cx) {
            Poll::Ready(result) => {
                match &result {
                    ValidationResult::Valid(_) => tracing::debug!("validation succeeded"),
                    ValidationResult::Invalid(errors) => {
                        tracing::debug!(error_count = errors.len(), "validation failed")
                    },
                }
                Poll::Ready(result)
            },
            Poll::Pending => Poll::Pending,
        }
    }
}
