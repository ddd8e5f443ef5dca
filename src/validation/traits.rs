use crate::types::{ErrorAccumulator, Errors};
use crate::validation::core::ValidationResult;

/// Collects many results into one, accumulating every error in iteration order.
///
/// Values are only gathered into `C` when no error occurred.
///
/// # Examples
///
/// ```
/// use valid_rail::{ValidationError, ValidationResult};
///
/// let items: Vec<ValidationResult<i32>> = vec![
///     ValidationResult::valid(10),
///     ValidationResult::invalid(ValidationError::new("bad")),
///     ValidationResult::invalid(ValidationError::new("worse")),
/// ];
///
/// let collected: ValidationResult<Vec<i32>> = items.into_iter().collect();
/// assert_eq!(collected.into_errors().unwrap().len(), 2);
/// ```
impl<A, C> FromIterator<ValidationResult<A>> for ValidationResult<C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = ValidationResult<A>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors: Option<Errors> = None;

        for item in iter {
            match item {
                ValidationResult::Valid(value) => {
                    if errors.is_none() {
                        values.push(value);
                    }
                }
                ValidationResult::Invalid(errs) => {
                    errors = Some(match errors {
                        Some(acc) => acc.combine(errs),
                        None => errs,
                    });
                }
            }
        }

        match errors {
            Some(errors) => ValidationResult::Invalid(errors),
            None => ValidationResult::Valid(values.into_iter().collect()),
        }
    }
}

/// Accumulating combination of a tuple of results (`mapN`).
///
/// Implemented for tuples of two to eight results sharing one error container.
///
/// # Examples
///
/// ```
/// use valid_rail::{ValidationError, ValidationResult, ZipAll};
///
/// let name: ValidationResult<&str> = ValidationResult::valid("ada");
/// let age: ValidationResult<u32> = ValidationResult::invalid(ValidationError::new("too young"));
/// let email: ValidationResult<&str> = ValidationResult::invalid(ValidationError::new("no @"));
///
/// let combined = (name, age, email).map_n(|(n, a, e)| format!("{n} {a} {e}"));
/// assert_eq!(combined.into_errors().unwrap().len(), 2);
/// ```
pub trait ZipAll<E>: Sized {
    type Output;

    fn zip_all(self) -> ValidationResult<Self::Output, E>;

    /// Applies `f` to the tuple of values once every result is valid.
    fn map_n<R, F>(self, f: F) -> ValidationResult<R, E>
    where
        F: FnOnce(Self::Output) -> R,
    {
        self.zip_all().map(f)
    }
}

macro_rules! impl_zip_all {
    ($first:ident $(, $rest:ident)+) => {
        impl<E: ErrorAccumulator, $first $(, $rest)+> ZipAll<E>
            for (ValidationResult<$first, E> $(, ValidationResult<$rest, E>)+)
        {
            type Output = ($first $(, $rest)+);

            #[allow(non_snake_case)]
            fn zip_all(self) -> ValidationResult<Self::Output, E> {
                let ($first $(, $rest)+) = self;
                let mut errors: Option<E> = None;

                let $first = accumulate(&mut errors, $first);
                $(let $rest = accumulate(&mut errors, $rest);)+

                match errors {
                    Some(errors) => ValidationResult::Invalid(errors),
                    None => match ($first $(, $rest)+) {
                        (Some($first) $(, Some($rest))+) => {
                            ValidationResult::Valid(($first $(, $rest)+))
                        }
                        _ => unreachable!("every result was valid"),
                    },
                }
            }
        }
    };
}

fn accumulate<T, E: ErrorAccumulator>(acc: &mut Option<E>, result: ValidationResult<T, E>) -> Option<T> {
    match result {
        ValidationResult::Valid(value) => Some(value),
        ValidationResult::Invalid(errors) => {
            *acc = Some(match acc.take() {
                Some(existing) => existing.combine(errors),
                None => errors,
            });
            None
        }
    }
}

impl_zip_all!(A, B);
impl_zip_all!(A, B, C);
impl_zip_all!(A, B, C, D);
impl_zip_all!(A, B, C, D, F);
impl_zip_all!(A, B, C, D, F, G);
impl_zip_all!(A, B, C, D, F, G, H);
impl_zip_all!(A, B, C, D, F, G, H, I);
