use crate::validation::core::ValidationResult;

/// Side-effect hook invoked after a validation completes.
///
/// Observers are opt-in: nothing in the engine calls them on its own. Call
/// [`ValidationResult::observe`] at the point where an outcome should be
/// reported. Implementations must not alter the result, which the signature
/// enforces by handing out a shared reference only.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use valid_rail::{ValidationError, ValidationObserver, ValidationResult};
///
/// #[derive(Default)]
/// struct FailureCounter(AtomicUsize);
///
/// impl ValidationObserver for FailureCounter {
///     fn on_result<A>(&self, result: &ValidationResult<A>) {
///         if result.is_invalid() {
///             self.0.fetch_add(1, Ordering::Relaxed);
///         }
///     }
/// }
///
/// let counter = FailureCounter::default();
/// let v: ValidationResult<i32> = ValidationResult::invalid(ValidationError::new("bad"));
/// let v = v.observe(&counter);
///
/// assert!(v.is_invalid());
/// assert_eq!(counter.0.load(Ordering::Relaxed), 1);
/// ```
pub trait ValidationObserver {
    fn on_result<A>(&self, result: &ValidationResult<A>) {
        let _ = result;
    }
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl ValidationObserver for NoopObserver {}

impl<O: ValidationObserver + ?Sized> ValidationObserver for &O {
    #[inline]
    fn on_result<A>(&self, result: &ValidationResult<A>) {
        (**self).on_result(result)
    }
}

#[cfg(feature = "tracing")]
pub use tracing_observer::TracingObserver;

#[cfg(feature = "tracing")]
mod tracing_observer {
    use super::ValidationObserver;
    use crate::validation::core::ValidationResult;

    /// Emits one `tracing` event per observed outcome.
    ///
    /// Valid outcomes are logged at `DEBUG`, invalid ones at `WARN` with the
    /// error count and the first error.
    #[derive(Debug, Clone, Copy)]
    pub struct TracingObserver {
        name: &'static str,
    }

    impl TracingObserver {
        pub const fn new(name: &'static str) -> Self {
            Self { name }
        }

        pub const fn name(&self) -> &'static str {
            self.name
        }
    }

    impl Default for TracingObserver {
        fn default() -> Self {
            Self::new("validation")
        }
    }

    impl ValidationObserver for TracingObserver {
        fn on_result<A>(&self, result: &ValidationResult<A>) {
            match result {
                ValidationResult::Valid(_) => {
                    tracing::debug!(validation = self.name, "validation succeeded");
                }
                ValidationResult::Invalid(errors) => {
                    tracing::warn!(
                        validation = self.name,
                        error_count = errors.len(),
                        first_error = %errors.first(),
                        "validation failed"
                    );
                }
            }
        }
    }
}
