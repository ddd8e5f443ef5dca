//! Validators as first-class values, and the [`Validate`] trait that selects one per type.
//!
//! A [`Validator<A>`] is a cloneable, thread-safe function
//! `(A, &ValidationConfig) -> ValidationResult<A>`. The [`Validate`] trait is the
//! type-indexed registry: the built-ins in this module cover scalars, `Option`,
//! `Box`, the standard collections and maps, and derived records implement it
//! through `#[derive(Validate)]`.
//!
//! # Examples
//!
//! ```
//! use valid_rail::validator::constraints;
//! use valid_rail::{Validate, ValidationConfig, Validator};
//!
//! let age = constraints::non_negative::<i32>();
//! assert!(age.validate(30).is_valid());
//! assert!(age.validate(-1).is_invalid());
//!
//! // built-ins go through the trait
//! assert!(vec![1, 2, 3].validate_with(&ValidationConfig::strict()).is_valid());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::config::ValidationConfig;
use crate::types::short_type_name;
use crate::validation::core::ValidationResult;

mod builtin;
pub mod collections;
pub mod combinators;
pub mod constraints;

pub use combinators::Union;

type ValidateFn<A> = dyn Fn(A, &ValidationConfig) -> ValidationResult<A> + Send + Sync;

/// Per-type validation strategy.
///
/// Implemented for the standard scalar, collection and map types, and by
/// `#[derive(Validate)]` for records. Record derivation requires every field
/// type to implement this trait (or to be given an explicit validator), and
/// reports each field that lacks one.
#[diagnostic::on_unimplemented(
    message = "no validator available for `{Self}`",
    label = "`{Self}` does not implement `Validate`",
    note = "derive it with `#[derive(Validate)]`, implement `Validate` for `{Self}`, attach a validator with `#[validate(with = ...)]`, or exclude the field with `#[validate(skip)]`"
)]
pub trait Validate: Sized {
    /// Validates `self` under `config`.
    fn validate_with(self, config: &ValidationConfig) -> ValidationResult<Self>;

    /// Validates `self` with the default (unlimited) configuration.
    #[inline]
    fn validate(self) -> ValidationResult<Self> {
        self.validate_with(&ValidationConfig::default())
    }

    /// This type's strategy as a [`Validator`] value.
    fn validator() -> Validator<Self>
    where
        Self: 'static,
    {
        Validator::from_fn_with_config(Self::validate_with)
    }
}

/// A cloneable validation function for values of type `A`.
///
/// Validators are pure by contract. Cloning shares the underlying function.
///
/// # Examples
///
/// ```
/// use valid_rail::{ValidationError, ValidationResult, Validator};
///
/// let even = Validator::from_fn(|n: u32| {
///     if n % 2 == 0 {
///         ValidationResult::valid(n)
///     } else {
///         ValidationResult::invalid(ValidationError::new("must be even"))
///     }
/// });
///
/// assert!(even.validate(4).is_valid());
/// assert_eq!(even.validate(3).into_errors().unwrap()[0].message(), "must be even");
/// ```
pub struct Validator<A> {
    run: Arc<ValidateFn<A>>,
}

impl<A> Clone for Validator<A> {
    fn clone(&self) -> Self {
        Self { run: Arc::clone(&self.run) }
    }
}

impl<A> fmt::Debug for Validator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validator<{}>", short_type_name::<A>())
    }
}

impl<A> Validator<A> {
    /// Wraps a function that ignores the configuration.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(A) -> ValidationResult<A> + Send + Sync + 'static,
    {
        Self { run: Arc::new(move |value, _config: &ValidationConfig| f(value)) }
    }

    /// Wraps a function that reads the configuration.
    pub fn from_fn_with_config<F>(f: F) -> Self
    where
        F: Fn(A, &ValidationConfig) -> ValidationResult<A> + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Accepts every value unchanged.
    pub fn pass_through() -> Self
    where
        A: 'static,
    {
        Self::from_fn(ValidationResult::Valid)
    }

    /// The validator registered for `A` through [`Validate`].
    pub fn of() -> Self
    where
        A: Validate + 'static,
    {
        A::validator()
    }

    /// Validates with the default (unlimited) configuration.
    #[inline]
    pub fn validate(&self, value: A) -> ValidationResult<A> {
        (self.run)(value, &ValidationConfig::default())
    }

    #[inline]
    pub fn validate_with(&self, value: A, config: &ValidationConfig) -> ValidationResult<A> {
        (self.run)(value, config)
    }

    /// Transforms the errors of every invalid outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::validator::constraints;
    ///
    /// let v = constraints::positive::<i64>().map_errors(|e| e.with_severity("user"));
    /// let errors = v.validate(0).into_errors().unwrap();
    /// assert_eq!(errors[0].severity(), Some("user"));
    /// ```
    pub fn map_errors<F>(self, f: F) -> Self
    where
        A: 'static,
        F: Fn(crate::ValidationError) -> crate::ValidationError + Send + Sync + 'static,
    {
        Self::from_fn_with_config(move |value, config| {
            self.validate_with(value, config).map_errors(&f)
        })
    }
}

impl<A: Validate + 'static> Default for Validator<A> {
    fn default() -> Self {
        Self::of()
    }
}
