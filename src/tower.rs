//! Tower integration for valid-rail.
//!
//! This module provides a Tower `Layer` and `Service` that validate every
//! request before it reaches the wrapped service. Requests that fail
//! validation never reach the inner service; the call resolves to
//! [`ValidationRejected::Invalid`] carrying every error found.
//!
//! # Feature Flag
//!
//! Requires the `tower` feature:
//!
//! ```toml
//! [dependencies]
//! valid-rail = { version = "0.7", features = ["tower"] }
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use valid_rail::tower::ValidateRequestLayer;
//! use valid_rail::ValidationConfig;
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(ValidateRequestLayer::new(ValidationConfig::strict()))
//!     .service(my_service);
//! ```

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::config::ValidationConfig;
use crate::types::Errors;
use crate::validation::core::ValidationResult;
use crate::validator::Validate;

/// Error returned by [`ValidateRequestService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRejected<E> {
    /// The request failed validation; the inner service was not called.
    Invalid(Errors),
    /// The inner service failed.
    Service(E),
}

impl<E> ValidationRejected<E> {
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Validation errors, if the request was rejected.
    #[inline]
    pub fn validation_errors(&self) -> Option<&Errors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Service(_) => None,
        }
    }

    #[inline]
    pub fn into_service_error(self) -> Option<E> {
        match self {
            Self::Invalid(_) => None,
            Self::Service(error) => Some(error),
        }
    }
}

impl<E: fmt::Display> fmt::Display for ValidationRejected<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(errors) => write!(f, "request rejected: {errors}"),
            Self::Service(error) => write!(f, "{error}"),
        }
    }
}

impl<E> std::error::Error for ValidationRejected<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::Service(error) => Some(error),
        }
    }
}

/// A Tower [`Layer`] that validates requests with their [`Validate`] impl.
///
/// # Example
///
/// ```rust,ignore
/// use valid_rail::tower::ValidateRequestLayer;
///
/// // unlimited collections
/// let layer = ValidateRequestLayer::default();
///
/// // bounded collections for untrusted payloads
/// let layer = ValidateRequestLayer::new(ValidationConfig::strict());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidateRequestLayer {
    config: ValidationConfig,
}

impl ValidateRequestLayer {
    #[inline]
    pub const fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl<S> Layer<S> for ValidateRequestLayer {
    type Service = ValidateRequestService<S>;

    #[inline]
    fn layer(&self, inner: S) -> Self::Service {
        ValidateRequestService { inner, config: self.config }
    }
}

/// A Tower [`Service`] that validates each request before forwarding it.
///
/// Created by [`ValidateRequestLayer`]. The inner service receives the
/// validated request value.
#[derive(Clone, Debug)]
pub struct ValidateRequestService<S> {
    inner: S,
    config: ValidationConfig,
}

impl<S> ValidateRequestService<S> {
    #[inline]
    pub const fn new(inner: S, config: ValidationConfig) -> Self {
        Self { inner, config }
    }

    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, Request> Service<Request> for ValidateRequestService<S>
where
    S: Service<Request>,
    Request: Validate,
{
    type Response = S::Response;
    type Error = ValidationRejected<S::Error>;
    type Future = ValidateRequestFuture<S::Future>;

    #[inline]
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(ValidationRejected::Service)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        match request.validate_with(&self.config) {
            ValidationResult::Valid(request) => ValidateRequestFuture::Forwarded {
                inner: self.inner.call(request),
            },
            ValidationResult::Invalid(errors) => {
                crate::log_event!(
                    debug,
                    errors = errors.len(),
                    "request rejected by validation"
                );
                ValidateRequestFuture::Rejected { errors: Some(errors) }
            }
        }
    }
}

pin_project! {
    /// Future returned by [`ValidateRequestService`].
    #[project = ValidateRequestProj]
    #[must_use = "futures do nothing unless polled"]
    pub enum ValidateRequestFuture<F> {
        Forwarded {
            #[pin]
            inner: F,
        },
        Rejected {
            errors: Option<Errors>,
        },
    }
}

impl<F, T, E> Future for ValidateRequestFuture<F>
where
    F: Future<Output = Result<T, E>>,
{
    type Output = Result<T, ValidationRejected<E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            ValidateRequestProj::Forwarded { inner } => {
                inner.poll(cx).map_err(ValidationRejected::Service)
            }
            ValidateRequestProj::Rejected { errors } => match errors.take() {
                Some(errors) => Poll::Ready(Err(ValidationRejected::Invalid(errors))),
                None => panic!("`ValidateRequestFuture` polled after completion"),
            },
        }
    }
}

impl<F, T, E> FusedFuture for ValidateRequestFuture<F>
where
    F: FusedFuture<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        match self {
            Self::Forwarded { inner } => inner.is_terminated(),
            Self::Rejected { errors } => errors.is_none(),
        }
    }
}

/// Extension trait for wrapping a service with request validation.
pub trait ServiceValidateExt<Request>: Service<Request> + Sized {
    /// Validates every request with `config` before calling this service.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use valid_rail::tower::ServiceValidateExt;
    ///
    /// let wrapped = my_service.validate_requests(ValidationConfig::strict());
    /// ```
    fn validate_requests(self, config: ValidationConfig) -> ValidateRequestService<Self> {
        ValidateRequestService::new(self, config)
    }
}

impl<S, Request> ServiceValidateExt<Request> for S where S: Service<Request> {}
