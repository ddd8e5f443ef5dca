//! Non-empty, ordered collection of [`ValidationError`]s.

use core::ops::Deref;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

use crate::types::{ErrorVec, ValidationError};

/// The error list carried by [`ValidationResult::Invalid`](crate::ValidationResult).
///
/// `Errors` always holds at least one error; every constructor enforces this.
/// It dereferences to `[ValidationError]` for read access.
///
/// # Examples
///
/// ```
/// use valid_rail::{Errors, ValidationError};
///
/// let mut errors = Errors::new(ValidationError::new("first"));
/// errors.push(ValidationError::new("second"));
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.first().message(), "first");
///
/// assert!(Errors::try_from_vec(Vec::new()).is_none());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<ValidationError>", into = "Vec<ValidationError>")
)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Errors {
    items: ErrorVec<ValidationError>,
}

impl Errors {
    /// Creates a collection holding a single error.
    #[inline]
    pub fn new(error: ValidationError) -> Self {
        Self { items: smallvec![error] }
    }

    /// Returns `None` when `errors` is empty.
    pub fn try_from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        Self::try_from_iter(errors)
    }

    /// Returns `None` when the iterator yields nothing.
    pub fn try_from_iter<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = ValidationError>,
    {
        let items: ErrorVec<ValidationError> = errors.into_iter().collect();
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// The first error in accumulation order.
    #[inline]
    pub fn first(&self) -> &ValidationError {
        &self.items[0]
    }

    /// Consumes the collection, returning its first error.
    pub fn into_first(self) -> ValidationError {
        let mut items = self.items.into_iter();
        match items.next() {
            Some(first) => first,
            None => ValidationError::programmer_error("error list was empty"),
        }
    }

    #[inline]
    pub fn push(&mut self, error: ValidationError) {
        self.items.push(error);
    }

    #[inline]
    pub fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, errors: I) {
        self.items.extend(errors);
    }

    /// Mutable access to each error; the length cannot change.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, ValidationError> {
        self.items.iter_mut()
    }

    /// Transforms every error, keeping order.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(ValidationError) -> ValidationError,
    {
        Self { items: self.items.into_iter().map(f).collect() }
    }

    /// Prepends `segment` to the path of every error.
    pub fn prepend_field(self, segment: &str) -> Self {
        self.map(|error| error.prepend_field(segment))
    }

    /// Annotates every error with the field name and its value's type name.
    pub fn annotate_field(self, field: &str, type_name: &str) -> Self {
        self.map(|error| error.annotate_field(field, type_name))
    }

    #[inline]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.items.into_vec()
    }

    #[inline]
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.items
    }
}

impl Deref for Errors {
    type Target = [ValidationError];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl From<ValidationError> for Errors {
    #[inline]
    fn from(error: ValidationError) -> Self {
        Self::new(error)
    }
}

impl TryFrom<Vec<ValidationError>> for Errors {
    type Error = EmptyErrors;

    fn try_from(errors: Vec<ValidationError>) -> Result<Self, Self::Error> {
        Self::try_from_vec(errors).ok_or(EmptyErrors)
    }
}

impl From<Errors> for Vec<ValidationError> {
    #[inline]
    fn from(errors: Errors) -> Self {
        errors.into_vec()
    }
}

impl IntoIterator for Errors {
    type Item = ValidationError;
    type IntoIter = smallvec::IntoIter<[ValidationError; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a ValidationError;
    type IntoIter = core::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Display for Errors {
    /// Compact form joins errors with `; `; the alternate form puts each
    /// error's multi-line rendering on its own lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.items.iter().enumerate() {
            if f.alternate() {
                if i > 0 {
                    f.write_str("\n")?;
                }
                write!(f, "{error:#}")?;
            } else {
                if i > 0 {
                    f.write_str("; ")?;
                }
                write!(f, "{error}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

/// Returned when an empty error list is converted into [`Errors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyErrors;

impl Display for EmptyErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an error list must contain at least one error")
    }
}

impl std::error::Error for EmptyErrors {}
