//! Conversion helpers between `Result`, `Option` and `ValidationResult`.
//!
//! These adapters make it straightforward to feed results produced by
//! `Result`-based code into validation, and to hand validation outcomes back
//! to it.
//!
//! # Examples
//!
//! ```
//! use valid_rail::convert::*;
//! use valid_rail::ValidationError;
//!
//! let parsed: Result<u16, ValidationError> = "8080".parse().map_err(|e| ValidationError::new(format!("{e}")));
//! let validation = result_to_validation(parsed);
//! assert!(validation.is_valid());
//!
//! let port = require(None::<u16>);
//! assert!(port.is_invalid());
//! ```

use core::iter::FusedIterator;

use crate::types::{short_type_name, Errors, ValidationError};
use crate::validation::core::ValidationResult;

/// Converts a `ValidationResult` to a `Result`, keeping only the first error.
///
/// # Examples
///
/// ```
/// use valid_rail::convert::validation_to_result;
/// use valid_rail::{ValidationError, ValidationResult};
///
/// let v: ValidationResult<i32> =
///     ValidationResult::invalid_many([ValidationError::new("a"), ValidationError::new("b")]);
/// assert_eq!(validation_to_result(v).unwrap_err().message(), "a");
/// ```
#[inline]
pub fn validation_to_result<T>(validation: ValidationResult<T>) -> Result<T, ValidationError> {
    validation.into_first_error()
}

/// Converts a single-error `Result` into a `ValidationResult`.
#[inline]
pub fn result_to_validation<T, E>(result: Result<T, E>) -> ValidationResult<T>
where
    E: Into<ValidationError>,
{
    match result {
        Ok(value) => ValidationResult::Valid(value),
        Err(error) => ValidationResult::invalid(error),
    }
}

/// Lifts an `Option` into a `ValidationResult`, treating `None` as a missing value.
///
/// # Examples
///
/// ```
/// use valid_rail::convert::require;
/// use valid_rail::codes;
///
/// let errors = require(None::<String>).into_errors().unwrap();
/// assert_eq!(errors[0].code(), Some(codes::REQUIRED));
/// assert_eq!(errors[0].expected(), Some("String"));
/// ```
#[inline]
pub fn require<T>(value: Option<T>) -> ValidationResult<T> {
    match value {
        Some(value) => ValidationResult::Valid(value),
        None => ValidationResult::invalid(ValidationError::missing(short_type_name::<T>())),
    }
}

/// Collects an iterator of errors into a validation result.
///
/// No errors means `Valid(())`.
///
/// # Examples
///
/// ```
/// use valid_rail::convert::collect_errors;
/// use valid_rail::ValidationError;
///
/// let validation = collect_errors(vec![ValidationError::new("e1"), ValidationError::new("e2")]);
/// assert!(validation.is_invalid());
///
/// let validation = collect_errors(Vec::new());
/// assert!(validation.is_valid());
/// ```
#[inline]
pub fn collect_errors<I>(errors: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = ValidationError>,
{
    match Errors::try_from_iter(errors) {
        Some(errors) => ValidationResult::Invalid(errors),
        None => ValidationResult::Valid(()),
    }
}

/// Iterator returned by [`split_validation_errors`].
pub enum SplitValidationIter<T> {
    Valid(Option<T>),
    Invalid(<Errors as IntoIterator>::IntoIter),
}

impl<T> Iterator for SplitValidationIter<T> {
    type Item = Result<T, ValidationError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Valid(opt) => opt.take().map(Ok),
            Self::Invalid(iter) => iter.next().map(Err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Valid(opt) => {
                let len = usize::from(opt.is_some());
                (len, Some(len))
            }
            Self::Invalid(iter) => iter.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for SplitValidationIter<T> {}
impl<T> FusedIterator for SplitValidationIter<T> {}

/// Splits a `ValidationResult` into individual `Result` values.
///
/// # Examples
///
/// ```
/// use valid_rail::convert::split_validation_errors;
/// use valid_rail::{ValidationError, ValidationResult};
///
/// let invalid: ValidationResult<i32> =
///     ValidationResult::invalid_many([ValidationError::new("err1"), ValidationError::new("err2")]);
/// let results: Vec<_> = split_validation_errors(invalid).collect();
/// assert_eq!(results.len(), 2);
/// assert!(results.iter().all(Result::is_err));
/// ```
pub fn split_validation_errors<T>(validation: ValidationResult<T>) -> SplitValidationIter<T> {
    match validation {
        ValidationResult::Valid(value) => SplitValidationIter::Valid(Some(value)),
        ValidationResult::Invalid(errors) => SplitValidationIter::Invalid(errors.into_iter()),
    }
}
