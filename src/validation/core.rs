use crate::traits::{ErrorTranslator, ValidationObserver};
use crate::types::{ErrorAccumulator, Errors, ValidationError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Applicative-style validation outcome that accumulates errors instead of failing fast.
///
/// `ValidationResult<A, E>` is either `Valid(A)` or `Invalid(E)`. The error side
/// defaults to [`Errors`], a list that can never be empty, so an `Invalid` always
/// explains itself. Other containers (`Vec`, `BTreeSet`, ...) can be used through
/// the `E` parameter; combinators that merge errors require
/// [`ErrorAccumulator`].
///
/// Accumulation is the default: [`zip`](Self::zip), [`zip_with`](Self::zip_with)
/// and [`or`](Self::or) keep every error from both sides. Fail-fast sequencing is
/// opt-in through [`and_then`](Self::and_then) and the `*_fail_fast` variants.
///
/// # Serde Support
///
/// With the `serde` feature, `ValidationResult` implements `Serialize` and
/// `Deserialize` when `A` and `E` do. Deserializing an empty error list into the
/// default `Errors` container fails.
///
/// # Examples
///
/// ```
/// use valid_rail::{ValidationError, ValidationResult};
///
/// let valid: ValidationResult<i32> = ValidationResult::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid: ValidationResult<i32> = ValidationResult::invalid(ValidationError::new("bad"));
/// assert!(invalid.is_invalid());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum ValidationResult<A, E = Errors> {
    Valid(A),
    Invalid(E),
}

impl<A, E> ValidationResult<A, E> {
    /// Creates a valid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::ValidationResult;
    ///
    /// let v: ValidationResult<i32> = ValidationResult::valid(42);
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Returns `true` if the result contains a value.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if the result contains errors.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Borrows the valid value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Borrows the error container, if any.
    #[must_use]
    #[inline]
    pub fn errors(&self) -> Option<&E> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the result is invalid, the errors are preserved unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::ValidationResult;
    ///
    /// let v: ValidationResult<i32> = ValidationResult::valid(21);
    /// assert_eq!(v.map(|x| x * 2).into_value(), Some(42));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> ValidationResult<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => ValidationResult::Valid(f(value)),
            Self::Invalid(errors) => ValidationResult::Invalid(errors),
        }
    }

    /// Fail-fast sequencing: `f` runs only on a valid value.
    ///
    /// An invalid result short-circuits and `f` is never invoked, so errors that
    /// `f` would have produced are not reported. Use this for dependent or
    /// expensive checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{ValidationError, ValidationResult};
    ///
    /// fn parse_even(input: i32) -> ValidationResult<i32> {
    ///     if input % 2 == 0 {
    ///         ValidationResult::valid(input)
    ///     } else {
    ///         ValidationResult::invalid(ValidationError::new("not even"))
    ///     }
    /// }
    ///
    /// let four: ValidationResult<i32> = ValidationResult::valid(4);
    /// assert_eq!(four.and_then(parse_even).into_value(), Some(4));
    ///
    /// let three: ValidationResult<i32> = ValidationResult::valid(3);
    /// assert!(three.and_then(parse_even).is_invalid());
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, f: F) -> ValidationResult<B, E>
    where
        F: FnOnce(A) -> ValidationResult<B, E>,
    {
        match self {
            Self::Valid(value) => f(value),
            Self::Invalid(errors) => ValidationResult::Invalid(errors),
        }
    }

    /// Alias of [`and_then`](Self::and_then).
    #[inline]
    pub fn flat_map<B, F>(self, f: F) -> ValidationResult<B, E>
    where
        F: FnOnce(A) -> ValidationResult<B, E>,
    {
        self.and_then(f)
    }

    /// Combines two results, returning the first `Invalid` without merging.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{ValidationError, ValidationResult};
    ///
    /// let a: ValidationResult<i32> = ValidationResult::invalid(ValidationError::new("a"));
    /// let b: ValidationResult<i32> = ValidationResult::invalid(ValidationError::new("b"));
    /// let errors = a.zip_fail_fast(b).into_errors().unwrap();
    /// assert_eq!(errors.len(), 1);
    /// assert_eq!(errors[0].message(), "a");
    /// ```
    #[inline]
    pub fn zip_fail_fast<B>(self, other: ValidationResult<B, E>) -> ValidationResult<(A, B), E> {
        match (self, other) {
            (Self::Valid(a), ValidationResult::Valid(b)) => ValidationResult::Valid((a, b)),
            (Self::Invalid(e), _) | (Self::Valid(_), ValidationResult::Invalid(e)) => {
                ValidationResult::Invalid(e)
            }
        }
    }

    /// Fail-fast counterpart of [`zip_with`](Self::zip_with).
    #[inline]
    pub fn zip_with_fail_fast<B, C, F>(self, other: ValidationResult<B, E>, f: F) -> ValidationResult<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip_fail_fast(other).map(|(a, b)| f(a, b))
    }

    /// Lazy [`or`](Self::or): `op` is evaluated only when this result is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{ValidationError, ValidationResult};
    ///
    /// let v: ValidationResult<i32> = ValidationResult::invalid(ValidationError::new("error"));
    /// let res = v.or_else(|_errors| ValidationResult::valid(42));
    /// assert_eq!(res.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn or_else<F>(self, op: F) -> ValidationResult<A, E>
    where
        F: FnOnce(E) -> ValidationResult<A, E>,
    {
        match self {
            Self::Valid(value) => ValidationResult::Valid(value),
            Self::Invalid(errors) => op(errors),
        }
    }

    /// Replaces any `Invalid` with `Valid(default)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{ValidationError, ValidationResult};
    ///
    /// let v: ValidationResult<i32> = ValidationResult::invalid(ValidationError::new("bad"));
    /// assert_eq!(v.recover(0), ValidationResult::valid(0));
    /// ```
    #[inline]
    pub fn recover(self, default: A) -> ValidationResult<A, E> {
        ValidationResult::Valid(self.unwrap_or(default))
    }

    /// Returns the valid value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(_) => default,
        }
    }

    /// Collapses both branches into one value.
    #[inline]
    pub fn fold<B, V, I>(self, if_valid: V, if_invalid: I) -> B
    where
        V: FnOnce(A) -> B,
        I: FnOnce(E) -> B,
    {
        match self {
            Self::Valid(value) => if_valid(value),
            Self::Invalid(errors) => if_invalid(errors),
        }
    }

    /// Converts into a `Result` carrying the whole error container.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::ValidationResult;
    ///
    /// let v: ValidationResult<i32> = ValidationResult::valid(42);
    /// assert_eq!(v.into_result().ok(), Some(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<A, E> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }

    /// Extracts the value, discarding any errors.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Alias of [`into_value`](Self::into_value), mirroring [`Result::ok`].
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<A> {
        self.into_value()
    }

    /// Extracts the error container, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<E> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Zero- or one-element vector holding the valid value.
    #[must_use]
    #[inline]
    pub fn into_vec(self) -> Vec<A> {
        self.into_value().into_iter().collect()
    }

    /// Maps the error container as a whole.
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> ValidationResult<A, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Valid(value) => ValidationResult::Valid(value),
            Self::Invalid(errors) => ValidationResult::Invalid(f(errors)),
        }
    }
}

impl<A, E: ErrorAccumulator> ValidationResult<A, E> {
    /// Combines two results into a tuple, accumulating all errors.
    ///
    /// If both are valid, returns both values. Otherwise every error from both
    /// sides is kept, left operand's errors first.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{ValidationError, ValidationResult};
    ///
    /// let v1: ValidationResult<i32> = ValidationResult::valid(42);
    /// let v2: ValidationResult<i32> = ValidationResult::valid(21);
    /// assert_eq!(v1.zip(v2).into_value(), Some((42, 21)));
    ///
    /// let v3: ValidationResult<i32> = ValidationResult::invalid(ValidationError::new("error1"));
    /// let v4: ValidationResult<i32> = ValidationResult::invalid(ValidationError::new("error2"));
    /// assert_eq!(v3.zip(v4).into_errors().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn zip<B>(self, other: ValidationResult<B, E>) -> ValidationResult<(A, B), E> {
        match (self, other) {
            (Self::Valid(a), ValidationResult::Valid(b)) => ValidationResult::Valid((a, b)),
            (Self::Invalid(e), ValidationResult::Valid(_)) => ValidationResult::Invalid(e),
            (Self::Valid(_), ValidationResult::Invalid(e)) => ValidationResult::Invalid(e),
            (Self::Invalid(e1), ValidationResult::Invalid(e2)) => {
                ValidationResult::Invalid(e1.combine(e2))
            }
        }
    }

    /// Accumulating map over two results (`mapN` for two operands).
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::ValidationResult;
    ///
    /// let a: ValidationResult<i32> = ValidationResult::valid(1);
    /// let sum = a.zip_with(ValidationResult::valid(2), |a, b| a + b);
    /// assert_eq!(sum.into_value(), Some(3));
    /// ```
    #[inline]
    pub fn zip_with<B, C, F>(self, other: ValidationResult<B, E>, f: F) -> ValidationResult<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        self.zip(other).map(|(a, b)| f(a, b))
    }

    /// Returns the first valid result; if both are invalid, combines their errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{ValidationError, ValidationResult};
    ///
    /// let a: ValidationResult<i32> = ValidationResult::invalid(ValidationError::new("a"));
    /// assert_eq!(a.or(ValidationResult::valid(1)).into_value(), Some(1));
    /// ```
    #[inline]
    pub fn or(self, other: ValidationResult<A, E>) -> ValidationResult<A, E> {
        match (self, other) {
            (Self::Valid(a), _) => ValidationResult::Valid(a),
            (Self::Invalid(_), ValidationResult::Valid(b)) => ValidationResult::Valid(b),
            (Self::Invalid(e1), ValidationResult::Invalid(e2)) => {
                ValidationResult::Invalid(e1.combine(e2))
            }
        }
    }
}

impl<A> ValidationResult<A> {
    /// Creates an invalid result from a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{ValidationError, ValidationResult};
    ///
    /// let v: ValidationResult<()> = ValidationResult::invalid(ValidationError::new("missing field"));
    /// assert!(v.is_invalid());
    /// ```
    #[inline]
    pub fn invalid(error: impl Into<ValidationError>) -> Self {
        Self::Invalid(Errors::new(error.into()))
    }

    /// Creates an invalid result from many errors.
    ///
    /// An empty iterator is a programmer error and yields an `Invalid` carrying
    /// an [`empty_errors`](crate::codes::EMPTY_ERRORS) error, never a `Valid`.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{codes, ValidationError, ValidationResult};
    ///
    /// let v: ValidationResult<()> =
    ///     ValidationResult::invalid_many([ValidationError::new("a"), ValidationError::new("b")]);
    /// assert_eq!(v.into_errors().unwrap().len(), 2);
    ///
    /// let empty: ValidationResult<()> = ValidationResult::invalid_many([]);
    /// assert_eq!(empty.into_errors().unwrap()[0].code(), Some(codes::EMPTY_ERRORS));
    /// ```
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = ValidationError>,
    {
        match Errors::try_from_iter(errors) {
            Some(errors) => Self::Invalid(errors),
            None => Self::invalid(ValidationError::programmer_error(
                "Invalid constructed from an empty error list",
            )),
        }
    }

    /// Builds a result from an either-style `Result` whose error side is a plain list.
    ///
    /// `Err(vec![])` becomes a programmer-error `Invalid`.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{ValidationError, ValidationResult};
    ///
    /// let ok: ValidationResult<i32> = ValidationResult::from_result(Ok(42));
    /// assert!(ok.is_valid());
    ///
    /// let err: ValidationResult<i32> =
    ///     ValidationResult::from_result(Err(vec![ValidationError::new("boom")]));
    /// assert!(err.is_invalid());
    /// ```
    pub fn from_result(result: Result<A, Vec<ValidationError>>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(errors) => Self::invalid_many(errors),
        }
    }

    /// Throw-style conversion keeping only the first error.
    ///
    /// This is the one conversion that surfaces an error for `?`-based code.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{ValidationError, ValidationResult};
    ///
    /// fn check() -> Result<i32, ValidationError> {
    ///     let v: ValidationResult<i32> =
    ///         ValidationResult::invalid_many([ValidationError::new("first"), ValidationError::new("second")]);
    ///     v.into_first_error()
    /// }
    ///
    /// assert_eq!(check().unwrap_err().message(), "first");
    /// ```
    pub fn into_first_error(self) -> Result<A, ValidationError> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors.into_first()),
        }
    }

    /// Transforms each error individually.
    pub fn map_errors<F>(self, f: F) -> Self
    where
        F: FnMut(ValidationError) -> ValidationError,
    {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(errors) => Self::Invalid(errors.map(f)),
        }
    }

    /// Annotates every error with a field name and the type name of the value.
    pub fn annotate_field(self, field: &str, type_name: &str) -> Self {
        match self {
            Self::Valid(value) => Self::Valid(value),
            Self::Invalid(errors) => Self::Invalid(errors.annotate_field(field, type_name)),
        }
    }

    /// Hands the result to an observer and returns it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{NoopObserver, ValidationResult};
    ///
    /// let v: ValidationResult<i32> = ValidationResult::valid(1).observe(&NoopObserver);
    /// assert!(v.is_valid());
    /// ```
    #[inline]
    pub fn observe<O>(self, observer: &O) -> Self
    where
        O: ValidationObserver + ?Sized,
    {
        observer.on_result(&self);
        self
    }

    /// Consumes the result, translating each error into a display string.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{ValidationError, ValidationResult};
    ///
    /// let v: ValidationResult<i32> = ValidationResult::invalid(ValidationError::new("bad").with_code("E1"));
    /// let translated = v.translate(&|e: &ValidationError| format!("[{}]", e.code().unwrap_or("?")));
    /// assert_eq!(translated, Err(vec!["[E1]".to_string()]));
    /// ```
    pub fn translate<T>(self, translator: &T) -> Result<A, Vec<String>>
    where
        T: ErrorTranslator + ?Sized,
    {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors.iter().map(|e| translator.translate(e)).collect()),
        }
    }
}

impl<A> From<Result<A, Errors>> for ValidationResult<A> {
    #[inline]
    fn from(result: Result<A, Errors>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(errors) => Self::Invalid(errors),
        }
    }
}

impl<A> From<ValidationResult<A>> for Result<A, Errors> {
    #[inline]
    fn from(result: ValidationResult<A>) -> Self {
        result.into_result()
    }
}
