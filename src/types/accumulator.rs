use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use smallvec::{Array, SmallVec};

use crate::types::Errors;

/// Associative combination of two error containers.
///
/// [`ValidationResult::zip`](crate::ValidationResult::zip) and friends use this
/// to merge the errors of both operands, left operand first. Implementations
/// must satisfy `a.combine(b).combine(c) == a.combine(b.combine(c))`.
///
/// Sequence-shaped containers concatenate and keep duplicates. Set-shaped
/// containers take the union and do **not** preserve accumulation order.
///
/// # Examples
///
/// ```
/// use valid_rail::ErrorAccumulator;
///
/// let combined = vec!["a", "b"].combine(vec!["b", "c"]);
/// assert_eq!(combined, vec!["a", "b", "b", "c"]);
/// ```
pub trait ErrorAccumulator {
    fn combine(self, other: Self) -> Self;
}

impl ErrorAccumulator for Errors {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> ErrorAccumulator for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<A: Array> ErrorAccumulator for SmallVec<A> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> ErrorAccumulator for VecDeque<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Ord> ErrorAccumulator for BTreeSet<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Eq + Hash, S: BuildHasher> ErrorAccumulator for HashSet<T, S> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
