use core::fmt::{self, Display};
use core::future::Future;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use futures_util::future::{self, BoxFuture, FutureExt};

use crate::async_ext::catch::guarded;
use crate::config::ValidationConfig;
use crate::effect::Deferred;
use crate::types::{short_type_name, ValidationError};
use crate::validation::core::ValidationResult;
use crate::validator::collections::{into_array, validate_entries, validate_seq};
use crate::validator::combinators::{exhausted, union_label, Union};
use crate::validator::Validator;

/// Per-type asynchronous validation strategy.
///
/// The asynchronous counterpart of [`Validate`](crate::Validate). Scalars and
/// the standard containers implement it; records implement it through
/// `#[derive(AsyncValidate)]`; other synchronous types can lift their
/// `Validate` impl with [`impl_async_via_sync!`](crate::impl_async_via_sync).
#[diagnostic::on_unimplemented(
    message = "no asynchronous validator available for `{Self}`",
    label = "`{Self}` does not implement `AsyncValidate`",
    note = "derive it with `#[derive(AsyncValidate)]`, lift a `Validate` impl with `impl_async_via_sync!({Self})`, attach a validator with `#[validate(with_async = ...)]`, or exclude the field with `#[validate(skip)]`"
)]
pub trait AsyncValidate: Sized + Send + 'static {
    fn validate_async(self, config: &ValidationConfig) -> BoxFuture<'static, ValidationResult<Self>>;
}

/// An already-completed validation future.
#[inline]
pub fn ready<A: Send + 'static>(result: ValidationResult<A>) -> BoxFuture<'static, ValidationResult<A>> {
    future::ready(result).boxed()
}

crate::impl_async_via_sync!(
    bool, char, (), String, &'static str,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<A: AsyncValidate> AsyncValidate for Option<A> {
    fn validate_async(self, config: &ValidationConfig) -> BoxFuture<'static, ValidationResult<Self>> {
        match self {
            None => ready(ValidationResult::Valid(None)),
            Some(value) => value.validate_async(config).map(|r| r.map(Some)).boxed(),
        }
    }
}

impl<A: AsyncValidate> AsyncValidate for Box<A> {
    fn validate_async(self, config: &ValidationConfig) -> BoxFuture<'static, ValidationResult<Self>> {
        (*self).validate_async(config).map(|r| r.map(Box::new)).boxed()
    }
}

macro_rules! impl_async_seq {
    ($([$($bounds:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($bounds)*> AsyncValidate for $ty {
                fn validate_async(
                    self,
                    config: &ValidationConfig,
                ) -> BoxFuture<'static, ValidationResult<Self>> {
                    validate_seq::<Deferred, Self, A, _>(self, config, |item: A| item.validate_async(config))
                }
            }
        )*
    };
}

impl_async_seq!(
    [A: AsyncValidate] Vec<A>,
    [A: AsyncValidate] VecDeque<A>,
    [A: AsyncValidate + Ord] BTreeSet<A>,
    [A: AsyncValidate + Eq + Hash, S: BuildHasher + Default + Send + 'static] HashSet<A, S>,
);

impl<A: AsyncValidate, const N: usize> AsyncValidate for [A; N] {
    fn validate_async(self, config: &ValidationConfig) -> BoxFuture<'static, ValidationResult<Self>> {
        validate_seq::<Deferred, Vec<A>, A, _>(Vec::from(self), config, |item: A| {
            item.validate_async(config)
        })
        .map(into_array::<A, N>)
        .boxed()
    }
}

impl<K, V> AsyncValidate for BTreeMap<K, V>
where
    K: AsyncValidate + Ord,
    V: AsyncValidate,
{
    fn validate_async(self, config: &ValidationConfig) -> BoxFuture<'static, ValidationResult<Self>> {
        validate_entries::<Deferred, Self, K, V, _, _>(
            self,
            config,
            |key| key.validate_async(config),
            |value| value.validate_async(config),
        )
    }
}

impl<K, V, S> AsyncValidate for HashMap<K, V, S>
where
    K: AsyncValidate + Eq + Hash,
    V: AsyncValidate,
    S: BuildHasher + Default + Send + 'static,
{
    fn validate_async(self, config: &ValidationConfig) -> BoxFuture<'static, ValidationResult<Self>> {
        validate_entries::<Deferred, Self, K, V, _, _>(
            self,
            config,
            |key| key.validate_async(config),
            |value| value.validate_async(config),
        )
    }
}

impl<A: AsyncValidate, B: AsyncValidate> AsyncValidate for Union<A, B> {
    fn validate_async(self, config: &ValidationConfig) -> BoxFuture<'static, ValidationResult<Self>> {
        match self {
            Union::Left(a) => a.validate_async(config).map(left_outcome::<A, B>).boxed(),
            Union::Right(b) => b.validate_async(config).map(right_outcome::<A, B>).boxed(),
        }
    }
}

fn left_outcome<A, B>(result: ValidationResult<A>) -> ValidationResult<Union<A, B>> {
    match result {
        ValidationResult::Valid(a) => ValidationResult::Valid(Union::Left(a)),
        ValidationResult::Invalid(errors) => exhausted(
            union_label::<A, B>(),
            errors.into_vec(),
            vec![ValidationError::type_mismatch(short_type_name::<B>(), short_type_name::<A>())],
        ),
    }
}

fn right_outcome<A, B>(result: ValidationResult<B>) -> ValidationResult<Union<A, B>> {
    match result {
        ValidationResult::Valid(b) => ValidationResult::Valid(Union::Right(b)),
        ValidationResult::Invalid(errors) => exhausted(
            union_label::<A, B>(),
            vec![ValidationError::type_mismatch(short_type_name::<A>(), short_type_name::<B>())],
            errors.into_vec(),
        ),
    }
}

/// Validates a required `Option<T>` field when present.
///
/// Resolves to `None` without running `validate` when the value is absent;
/// [`RecordValidation::required_field`](crate::record::RecordValidation::required_field)
/// turns that into a `missing` error.
pub fn when_present<T, F>(value: Option<T>, validate: F) -> BoxFuture<'static, Option<ValidationResult<T>>>
where
    T: Send + 'static,
    F: FnOnce(T) -> BoxFuture<'static, ValidationResult<T>>,
{
    match value {
        None => future::ready(None).boxed(),
        Some(value) => validate(value).map(Some).boxed(),
    }
}

type AsyncValidateFn<A> =
    dyn Fn(A, &ValidationConfig) -> BoxFuture<'static, ValidationResult<A>> + Send + Sync;

/// A cloneable asynchronous validation function for values of type `A`.
///
/// Every call is guarded: a panic while creating or polling the validation
/// future resolves to an `Invalid` with code
/// [`async_failure`](crate::codes::ASYNC_FAILURE).
///
/// # Examples
///
/// ```
/// use valid_rail::async_ext::AsyncValidator;
/// use valid_rail::{ValidationError, ValidationResult};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let username_free = AsyncValidator::from_fn(|name: String| async move {
///     if name == "admin" {
///         ValidationResult::invalid(ValidationError::new("username is taken"))
///     } else {
///         ValidationResult::valid(name)
///     }
/// });
///
/// assert!(username_free.validate("ada".to_string()).await.is_valid());
/// assert!(username_free.validate("admin".to_string()).await.is_invalid());
/// # });
/// ```
pub struct AsyncValidator<A> {
    run: Arc<AsyncValidateFn<A>>,
}

impl<A> Clone for AsyncValidator<A> {
    fn clone(&self) -> Self {
        Self { run: Arc::clone(&self.run) }
    }
}

impl<A> fmt::Debug for AsyncValidator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AsyncValidator<{}>", short_type_name::<A>())
    }
}

impl<A: Send + 'static> AsyncValidator<A> {
    pub fn from_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ValidationResult<A>> + Send + 'static,
    {
        Self { run: Arc::new(move |value, _config: &ValidationConfig| f(value).boxed()) }
    }

    /// Wraps a function that reads the configuration.
    ///
    /// The configuration is `Copy`; copy it into the future when it is needed
    /// after the first suspension point.
    pub fn from_fn_with_config<F, Fut>(f: F) -> Self
    where
        F: Fn(A, &ValidationConfig) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ValidationResult<A>> + Send + 'static,
    {
        Self { run: Arc::new(move |value, config: &ValidationConfig| f(value, config).boxed()) }
    }

    /// Wraps a fallible check; an `Err` becomes an unexpected-failure `Invalid`.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::async_ext::AsyncValidator;
    /// use valid_rail::{codes, ValidationResult};
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let lookup = AsyncValidator::try_from_fn(|id: u64| async move {
    ///     if id == 0 {
    ///         Err("directory unreachable")
    ///     } else {
    ///         Ok(ValidationResult::valid(id))
    ///     }
    /// });
    ///
    /// let errors = lookup.validate(0).await.into_errors().unwrap();
    /// assert_eq!(errors[0].code(), Some(codes::ASYNC_FAILURE));
    /// # });
    /// ```
    pub fn try_from_fn<F, Fut, E>(f: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ValidationResult<A>, E>> + Send + 'static,
        E: Display,
    {
        Self::from_fn(move |value| {
            f(value).map(|outcome| match outcome {
                Ok(result) => result,
                Err(err) => {
                    let error = ValidationError::unexpected_async_failure(err);
                    crate::log_event!(error, error = %error, "asynchronous validator failed");
                    ValidationResult::invalid(error)
                }
            })
        })
    }

    /// Lifts a synchronous validator into an already-completed future.
    pub fn from_sync(validator: Validator<A>) -> Self {
        Self { run: Arc::new(move |value, config: &ValidationConfig| ready(validator.validate_with(value, config))) }
    }

    /// The strategy registered for `A` through [`AsyncValidate`].
    pub fn of() -> Self
    where
        A: AsyncValidate,
    {
        Self { run: Arc::new(|value: A, config: &ValidationConfig| value.validate_async(config)) }
    }

    pub fn pass_through() -> Self {
        Self::from_fn(|value| future::ready(ValidationResult::Valid(value)))
    }

    #[inline]
    pub fn validate(&self, value: A) -> BoxFuture<'static, ValidationResult<A>> {
        self.validate_with(value, &ValidationConfig::default())
    }

    pub fn validate_with(&self, value: A, config: &ValidationConfig) -> BoxFuture<'static, ValidationResult<A>> {
        guarded(|| (self.run)(value, config))
    }

    /// Lifts this element validator to `Vec<A>`; elements run concurrently.
    pub fn each(self) -> AsyncValidator<Vec<A>> {
        AsyncValidator {
            run: Arc::new(move |items: Vec<A>, config: &ValidationConfig| {
                validate_seq::<Deferred, Vec<A>, A, _>(items, config, |item| self.validate_with(item, config))
            }),
        }
    }

    /// Lifts this validator to `Option<A>`.
    pub fn optional(self) -> AsyncValidator<Option<A>> {
        AsyncValidator {
            run: Arc::new(move |value: Option<A>, config: &ValidationConfig| match value {
                None => ready(ValidationResult::Valid(None)),
                Some(value) => self.validate_with(value, config).map(|r| r.map(Some)).boxed(),
            }),
        }
    }
}

impl<A: Clone + Send + 'static> AsyncValidator<A> {
    /// Intersection; both validators run concurrently on clones of the value.
    pub fn and(self, other: AsyncValidator<A>) -> AsyncValidator<A> {
        AsyncValidator {
            run: Arc::new(move |value: A, config: &ValidationConfig| {
                let first = self.validate_with(value.clone(), config);
                let second = other.validate_with(value, config);
                future::join(first, second)
                    .map(|(first, second)| first.zip(second).map(|(kept, _)| kept))
                    .boxed()
            }),
        }
    }

    /// Union over the same type; `other` only runs when `self` rejects.
    pub fn or(self, other: AsyncValidator<A>) -> AsyncValidator<A> {
        AsyncValidator {
            run: Arc::new(move |value: A, config: &ValidationConfig| {
                let first = self.validate_with(value.clone(), config);
                let other = other.clone();
                let config = *config;
                async move {
                    let first = match first.await {
                        ValidationResult::Valid(value) => return ValidationResult::Valid(value),
                        ValidationResult::Invalid(errors) => errors,
                    };
                    match other.validate_with(value, &config).await {
                        ValidationResult::Valid(value) => ValidationResult::Valid(value),
                        ValidationResult::Invalid(second) => {
                            exhausted(union_label::<A, A>(), first.into_vec(), second.into_vec())
                        }
                    }
                }
                .boxed()
            }),
        }
    }
}

impl<A: Send + 'static, B: Send + 'static> AsyncValidator<Union<A, B>> {
    pub fn union(left: AsyncValidator<A>, right: AsyncValidator<B>) -> Self {
        AsyncValidator {
            run: Arc::new(move |value: Union<A, B>, config: &ValidationConfig| match value {
                Union::Left(a) => left.validate_with(a, config).map(left_outcome::<A, B>).boxed(),
                Union::Right(b) => right.validate_with(b, config).map(right_outcome::<A, B>).boxed(),
            }),
        }
    }
}

impl<A: Send + 'static> From<Validator<A>> for AsyncValidator<A> {
    fn from(validator: Validator<A>) -> Self {
        Self::from_sync(validator)
    }
}

/// `BTreeMap<K, V>` validator; every key and value runs concurrently.
pub fn btree_map_of<K, V>(key: AsyncValidator<K>, value: AsyncValidator<V>) -> AsyncValidator<BTreeMap<K, V>>
where
    K: Ord + Send + 'static,
    V: Send + 'static,
{
    entries_of(key, value)
}

pub fn hash_map_of<K, V, S>(key: AsyncValidator<K>, value: AsyncValidator<V>) -> AsyncValidator<HashMap<K, V, S>>
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
    S: BuildHasher + Default + Send + 'static,
{
    entries_of(key, value)
}

fn entries_of<M, K, V>(key: AsyncValidator<K>, value: AsyncValidator<V>) -> AsyncValidator<M>
where
    M: IntoIterator<Item = (K, V)> + FromIterator<(K, V)> + Send + 'static,
    M::IntoIter: ExactSizeIterator,
    K: Send + 'static,
    V: Send + 'static,
{
    AsyncValidator {
        run: Arc::new(move |entries: M, config: &ValidationConfig| {
            validate_entries::<Deferred, M, K, V, _, _>(
                entries,
                config,
                |k| key.validate_with(k, config),
                |v| value.validate_with(v, config),
            )
        }),
    }
}
