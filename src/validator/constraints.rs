//! Opt-in constrained validators.
//!
//! Built-in scalar validators accept every value. The functions here build
//! validators that do not, and are typically attached to fields with
//! `#[validate(with = ...)]` or combined with [`Validator::and`].
//!
//! Every failure is a [`ValidationError::mismatch`] carrying `expected` and
//! `actual`, with a code from [`codes`](crate::codes).
//!
//! # Examples
//!
//! ```
//! use valid_rail::{codes, validator::constraints};
//!
//! let age = constraints::in_range(0u8, 150);
//! let errors = age.validate(200).into_errors().unwrap();
//!
//! assert_eq!(errors[0].code(), Some(codes::OUT_OF_RANGE));
//! assert_eq!(errors[0].expected(), Some("between 0 and 150"));
//! assert_eq!(errors[0].actual(), Some("200"));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;

use crate::codes;
use crate::types::ValidationError;
use crate::validation::core::ValidationResult;
use crate::validator::Validator;

fn check<T, F>(accept: F, reject: impl Fn(&T) -> ValidationError + Send + Sync + 'static) -> Validator<T>
where
    T: 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Validator::from_fn(move |value: T| {
        if accept(&value) {
            ValidationResult::Valid(value)
        } else {
            ValidationResult::invalid(reject(&value))
        }
    })
}

/// Rejects values below zero (`T::default()`).
pub fn non_negative<T>() -> Validator<T>
where
    T: PartialOrd + Default + Display + 'static,
{
    check(
        |value: &T| *value >= T::default(),
        |value: &T| {
            ValidationError::mismatch("must be non-negative", ">= 0", value.to_string())
                .with_code(codes::NON_NEGATIVE)
        },
    )
}

/// Rejects zero and values below it.
pub fn positive<T>() -> Validator<T>
where
    T: PartialOrd + Default + Display + 'static,
{
    check(
        |value: &T| *value > T::default(),
        |value: &T| {
            ValidationError::mismatch("must be positive", "> 0", value.to_string())
                .with_code(codes::POSITIVE)
        },
    )
}

/// Accepts `min..=max`.
pub fn in_range<T>(min: T, max: T) -> Validator<T>
where
    T: PartialOrd + Display + Send + Sync + 'static,
{
    let expected = format!("between {min} and {max}");
    let message = format!("must be {expected}");
    check(
        move |value: &T| *value >= min && *value <= max,
        move |value: &T| {
            ValidationError::mismatch(message.clone(), expected.clone(), value.to_string())
                .with_code(codes::OUT_OF_RANGE)
        },
    )
}

/// Floating-point types that can report finiteness.
pub trait Finite: Display {
    fn is_finite_value(&self) -> bool;
}

impl Finite for f32 {
    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

impl Finite for f64 {
    fn is_finite_value(&self) -> bool {
        self.is_finite()
    }
}

/// Rejects NaN and infinities.
pub fn finite<T: Finite + 'static>() -> Validator<T> {
    check(
        |value: &T| value.is_finite_value(),
        |value: &T| {
            ValidationError::mismatch("must be a finite number", "finite", value.to_string())
                .with_code(codes::FINITE)
        },
    )
}

/// Anything with a length: strings (in characters) and the standard collections.
pub trait HasLength {
    fn length(&self) -> usize;
}

impl HasLength for String {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl HasLength for &str {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

macro_rules! impl_has_length {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> HasLength for $ty<$($param),+> {
                fn length(&self) -> usize {
                    self.len()
                }
            }
        )*
    };
}

impl_has_length!(Vec<T>, VecDeque<T>, BTreeSet<T>, HashSet<T, S>, BTreeMap<K, V>, HashMap<K, V, S>);

/// Rejects empty strings and collections.
pub fn non_empty<T: HasLength + 'static>() -> Validator<T> {
    check(
        |value: &T| value.length() > 0,
        |_: &T| ValidationError::mismatch("must not be empty", "non-empty", "empty").with_code(codes::NON_EMPTY),
    )
}

pub fn min_length<T: HasLength + 'static>(min: usize) -> Validator<T> {
    check(
        move |value: &T| value.length() >= min,
        move |value: &T| {
            ValidationError::mismatch(
                format!("length must be at least {min}"),
                format!("length >= {min}"),
                format!("length {}", value.length()),
            )
            .with_code(codes::MIN_LENGTH)
        },
    )
}

pub fn max_length<T: HasLength + 'static>(max: usize) -> Validator<T> {
    check(
        move |value: &T| value.length() <= max,
        move |value: &T| {
            ValidationError::mismatch(
                format!("length must be at most {max}"),
                format!("length <= {max}"),
                format!("length {}", value.length()),
            )
            .with_code(codes::MAX_LENGTH)
        },
    )
}

/// Accepts values for which `accept` holds; rejects with `message` otherwise.
///
/// # Examples
///
/// ```
/// use valid_rail::validator::constraints;
///
/// let even = constraints::predicate("must be even", |n: &u32| n % 2 == 0);
/// assert!(even.validate(2).is_valid());
/// assert_eq!(even.validate(3).into_errors().unwrap()[0].message(), "must be even");
/// ```
pub fn predicate<T, F>(message: impl Into<String>, accept: F) -> Validator<T>
where
    T: 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    let message = message.into();
    check(accept, move |_: &T| ValidationError::new(message.clone()).with_code(codes::PREDICATE))
}

/// Accepts strings fully matched by `pattern`.
///
/// A pattern that fails to compile yields a validator rejecting every value
/// with an [`invalid_pattern`](codes::INVALID_PATTERN) error.
///
/// # Examples
///
/// ```
/// use valid_rail::{codes, validator::constraints};
///
/// let digits = constraints::matches_pattern("[0-9]+");
/// assert!(digits.validate("123".to_string()).is_valid());
/// assert!(digits.validate("12a".to_string()).is_invalid());
///
/// let broken = constraints::matches_pattern("(");
/// let errors = broken.validate("x".to_string()).into_errors().unwrap();
/// assert_eq!(errors[0].code(), Some(codes::INVALID_PATTERN));
/// ```
#[cfg(feature = "pattern")]
pub fn matches_pattern(pattern: &str) -> Validator<String> {
    let anchored = format!("^(?:{pattern})$");
    match regex::Regex::new(&anchored) {
        Ok(regex) => {
            let pattern = pattern.to_string();
            check(
                move |value: &String| regex.is_match(value),
                move |value: &String| {
                    ValidationError::mismatch(
                        format!("must match pattern `{pattern}`"),
                        pattern.clone(),
                        value.clone(),
                    )
                    .with_code(codes::PATTERN_MISMATCH)
                },
            )
        }
        Err(err) => {
            let error = ValidationError::invalid_pattern(pattern, err);
            Validator::from_fn(move |_: String| ValidationResult::invalid(error.clone()))
        }
    }
}
