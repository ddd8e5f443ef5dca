use crate::types::ValidationError;
use crate::validation::core::ValidationResult;

/// Iterator over the valid value of a borrowed result (zero or one item).
pub struct Iter<'a, A> {
    inner: Option<&'a A>,
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IterMut<'a, A> {
    inner: Option<&'a mut A>,
}

impl<'a, A> Iterator for IterMut<'a, A> {
    type Item = &'a mut A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

/// Iterator over the errors of a borrowed result; empty when valid.
pub enum ErrorsIter<'a> {
    Empty,
    Multi(core::slice::Iter<'a, ValidationError>),
}

impl<'a> Iterator for ErrorsIter<'a> {
    type Item = &'a ValidationError;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ErrorsIter::Empty => None,
            ErrorsIter::Multi(it) => it.next(),
        }
    }
}

impl<A, E> IntoIterator for ValidationResult<A, E> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_value() }
    }
}

pub struct IntoIter<A> {
    inner: Option<A>,
}

impl<A> Iterator for IntoIter<A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<'a, A, E> IntoIterator for &'a ValidationResult<A, E> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, A, E> IntoIterator for &'a mut ValidationResult<A, E> {
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<A, E> ValidationResult<A, E> {
    /// Single-element sequence view of the valid value.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter { inner: self.value() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        match self {
            ValidationResult::Valid(a) => IterMut { inner: Some(a) },
            ValidationResult::Invalid(_) => IterMut { inner: None },
        }
    }
}

impl<A> ValidationResult<A> {
    pub fn iter_errors(&self) -> ErrorsIter<'_> {
        match self {
            ValidationResult::Valid(_) => ErrorsIter::Empty,
            ValidationResult::Invalid(errors) => ErrorsIter::Multi(errors.iter()),
        }
    }

    /// Number of errors; zero when valid.
    pub fn error_count(&self) -> usize {
        self.errors().map_or(0, |errors| errors.len())
    }
}
