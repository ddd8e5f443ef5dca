//! Intersection and union of validators.
//!
//! [`Validator::and`] requires both validators to accept the same value.
//! [`Validator::or`] accepts a value when either does, preferring the first.
//! [`Union`] is a tagged two-branch value; [`Validator::union`] validates
//! whichever branch the tag selects.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::ValidationConfig;
use crate::types::{short_type_name, ValidationError};
use crate::validation::core::ValidationResult;
use crate::validator::{Validate, Validator};

/// A value of one of two types, tagged at runtime.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Union<A, B> {
    Left(A),
    Right(B),
}

impl<A, B> Union<A, B> {
    pub fn is_left(&self) -> bool {
        matches!(self, Union::Left(_))
    }

    pub fn is_right(&self) -> bool {
        matches!(self, Union::Right(_))
    }

    pub fn left(self) -> Option<A> {
        match self {
            Union::Left(a) => Some(a),
            Union::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<B> {
        match self {
            Union::Left(_) => None,
            Union::Right(b) => Some(b),
        }
    }
}

pub(crate) fn union_label<A, B>() -> String {
    format!("{} | {}", short_type_name::<A>(), short_type_name::<B>())
}

pub(crate) fn exhausted<T>(expected: String, first: Vec<ValidationError>, second: Vec<ValidationError>) -> ValidationResult<T> {
    crate::log_event!(
        trace,
        expected = %expected,
        errors = first.len() + second.len(),
        "union exhausted"
    );
    ValidationResult::invalid(ValidationError::union_exhausted(
        expected,
        first.into_iter().chain(second),
    ))
}

/// Validates the branch a [`Union`] holds; the other branch reports a type mismatch.
pub(crate) fn validate_union<A, B>(
    value: Union<A, B>,
    left: impl FnOnce(A) -> ValidationResult<A>,
    right: impl FnOnce(B) -> ValidationResult<B>,
) -> ValidationResult<Union<A, B>> {
    let a_name = short_type_name::<A>();
    let b_name = short_type_name::<B>();
    match value {
        Union::Left(a) => match left(a) {
            ValidationResult::Valid(a) => ValidationResult::Valid(Union::Left(a)),
            ValidationResult::Invalid(errors) => exhausted(
                union_label::<A, B>(),
                errors.into_vec(),
                vec![ValidationError::type_mismatch(b_name, a_name)],
            ),
        },
        Union::Right(b) => match right(b) {
            ValidationResult::Valid(b) => ValidationResult::Valid(Union::Right(b)),
            ValidationResult::Invalid(errors) => exhausted(
                union_label::<A, B>(),
                vec![ValidationError::type_mismatch(a_name, b_name)],
                errors.into_vec(),
            ),
        },
    }
}

impl<A: Clone + 'static> Validator<A> {
    /// Intersection: the value must satisfy both validators.
    ///
    /// Errors from both sides are accumulated, `self` first. On success the
    /// value produced by `self` is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::validator::constraints;
    ///
    /// let short_name = constraints::non_empty::<String>().and(constraints::max_length(3));
    /// assert!(short_name.validate("ada".to_string()).is_valid());
    /// assert_eq!(short_name.validate("".to_string()).into_errors().unwrap().len(), 1);
    /// ```
    pub fn and(self, other: Validator<A>) -> Validator<A> {
        Validator::from_fn_with_config(move |value: A, config: &ValidationConfig| {
            let first = self.validate_with(value.clone(), config);
            let second = other.validate_with(value, config);
            first.zip(second).map(|(kept, _)| kept)
        })
    }

    /// Union over the same type: the first validator that accepts wins.
    ///
    /// When both reject, one `union_exhausted` error carries every error of
    /// both branches as children.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{codes, validator::constraints};
    ///
    /// let v = constraints::in_range(0, 10).or(constraints::in_range(100, 110));
    /// assert!(v.validate(105).is_valid());
    ///
    /// let errors = v.validate(50).into_errors().unwrap();
    /// assert_eq!(errors[0].code(), Some(codes::UNION_EXHAUSTED));
    /// assert_eq!(errors[0].children().len(), 2);
    /// ```
    pub fn or(self, other: Validator<A>) -> Validator<A> {
        Validator::from_fn_with_config(move |value: A, config: &ValidationConfig| {
            let first = match self.validate_with(value.clone(), config) {
                ValidationResult::Valid(value) => return ValidationResult::Valid(value),
                ValidationResult::Invalid(errors) => errors,
            };
            match other.validate_with(value, config) {
                ValidationResult::Valid(value) => ValidationResult::Valid(value),
                ValidationResult::Invalid(second) => {
                    exhausted(union_label::<A, A>(), first.into_vec(), second.into_vec())
                }
            }
        })
    }
}

impl<A: 'static, B: 'static> Validator<Union<A, B>> {
    /// Validator for a tagged union from one validator per branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::validator::{constraints, Union};
    /// use valid_rail::Validator;
    ///
    /// let v = Validator::union(constraints::positive::<i32>(), constraints::non_empty::<String>());
    /// assert!(v.validate(Union::Left(3)).is_valid());
    ///
    /// let errors = v.validate(Union::Right(String::new())).into_errors().unwrap();
    /// assert_eq!(errors[0].expected(), Some("i32 | String"));
    /// assert_eq!(errors[0].children().len(), 2);
    /// ```
    pub fn union(left: Validator<A>, right: Validator<B>) -> Self {
        Validator::from_fn_with_config(move |value, config| {
            validate_union(
                value,
                |a| left.validate_with(a, config),
                |b| right.validate_with(b, config),
            )
        })
    }
}

impl<A: Validate, B: Validate> Validate for Union<A, B> {
    fn validate_with(self, config: &ValidationConfig) -> ValidationResult<Self> {
        validate_union(self, |a| a.validate_with(config), |b| b.validate_with(config))
    }
}
