//! Collection and map validation, shared by the synchronous and asynchronous engines.
//!
//! Every collection validator checks the element count against
//! [`ValidationConfig::check_collection_size`] before touching any element,
//! then validates all elements, annotating each error with the element index
//! (`[i]`) or with `key` / `value` for map entries. Errors from every element are
//! accumulated in iteration order; the collection is rebuilt only when no
//! element failed.
//!
//! # Examples
//!
//! ```
//! use valid_rail::validator::{collections, constraints};
//!
//! let scores = collections::vec_of(constraints::non_negative::<i32>());
//! let errors = scores.validate(vec![1, -2, 3, -4]).into_errors().unwrap();
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].path_string(), "[1]");
//! assert_eq!(errors[1].path_string(), "[3]");
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::config::ValidationConfig;
use crate::effect::{Effect, Immediate};
use crate::types::{short_type_name, ValidationError};
use crate::validation::core::ValidationResult;
use crate::validator::Validator;

/// Validates every element of `items`, written once for any [`Effect`].
pub(crate) fn validate_seq<E, C, A, F>(
    items: C,
    config: &ValidationConfig,
    mut element: F,
) -> E::Output<ValidationResult<C>>
where
    E: Effect,
    C: IntoIterator<Item = A> + FromIterator<A> + Send + 'static,
    C::IntoIter: ExactSizeIterator,
    A: Send + 'static,
    F: FnMut(A) -> E::Output<ValidationResult<A>>,
{
    let iter = items.into_iter();
    if let Err(error) = config.check_collection_size(iter.len(), &short_type_name::<C>()) {
        return E::pure::<ValidationResult<C>>(ValidationResult::invalid(error));
    }

    let element_type = short_type_name::<A>();
    let validated = E::traverse::<_, ValidationResult<A>, _, _>(iter.enumerate(), |(index, item)| {
        let element_type = element_type.clone();
        E::map::<ValidationResult<A>, ValidationResult<A>, _>(element(item), move |result| {
            result.annotate_field(&format!("[{index}]"), &element_type)
        })
    });

    E::map::<Vec<ValidationResult<A>>, ValidationResult<C>, _>(validated, |results| {
        results.into_iter().collect::<ValidationResult<C>>()
    })
}

/// Validates every key and value of `entries`, written once for any [`Effect`].
///
/// Key errors of an entry precede its value errors.
pub(crate) fn validate_entries<E, M, K, V, FK, FV>(
    entries: M,
    config: &ValidationConfig,
    mut key: FK,
    mut value: FV,
) -> E::Output<ValidationResult<M>>
where
    E: Effect,
    M: IntoIterator<Item = (K, V)> + FromIterator<(K, V)> + Send + 'static,
    M::IntoIter: ExactSizeIterator,
    K: Send + 'static,
    V: Send + 'static,
    FK: FnMut(K) -> E::Output<ValidationResult<K>>,
    FV: FnMut(V) -> E::Output<ValidationResult<V>>,
{
    let iter = entries.into_iter();
    if let Err(error) = config.check_collection_size(iter.len(), &short_type_name::<M>()) {
        return E::pure::<ValidationResult<M>>(ValidationResult::invalid(error));
    }

    let key_type = short_type_name::<K>();
    let value_type = short_type_name::<V>();
    let validated = E::traverse::<_, ValidationResult<(K, V)>, _, _>(iter, |(k, v)| {
        let key_type = key_type.clone();
        let value_type = value_type.clone();
        let k = E::map::<ValidationResult<K>, ValidationResult<K>, _>(key(k), move |result| {
            result.annotate_field("key", &key_type)
        });
        let v = E::map::<ValidationResult<V>, ValidationResult<V>, _>(value(v), move |result| {
            result.annotate_field("value", &value_type)
        });
        let pair = E::product::<ValidationResult<K>, ValidationResult<V>>(k, v);
        E::map::<(ValidationResult<K>, ValidationResult<V>), ValidationResult<(K, V)>, _>(
            pair,
            |(k, v)| k.zip(v),
        )
    });

    E::map::<Vec<ValidationResult<(K, V)>>, ValidationResult<M>, _>(validated, |results| {
        results.into_iter().collect::<ValidationResult<M>>()
    })
}

pub(crate) fn validate_seq_now<C, A, F>(items: C, config: &ValidationConfig, element: F) -> ValidationResult<C>
where
    C: IntoIterator<Item = A> + FromIterator<A> + Send + 'static,
    C::IntoIter: ExactSizeIterator,
    A: Send + 'static,
    F: FnMut(A) -> ValidationResult<A>,
{
    validate_seq::<Immediate, C, A, F>(items, config, element)
}

pub(crate) fn validate_entries_now<M, K, V, FK, FV>(
    entries: M,
    config: &ValidationConfig,
    key: FK,
    value: FV,
) -> ValidationResult<M>
where
    M: IntoIterator<Item = (K, V)> + FromIterator<(K, V)> + Send + 'static,
    M::IntoIter: ExactSizeIterator,
    K: Send + 'static,
    V: Send + 'static,
    FK: FnMut(K) -> ValidationResult<K>,
    FV: FnMut(V) -> ValidationResult<V>,
{
    validate_entries::<Immediate, M, K, V, FK, FV>(entries, config, key, value)
}

/// Rebuilds a fixed-size array from elements validated as a `Vec`.
pub(crate) fn into_array<A, const N: usize>(result: ValidationResult<Vec<A>>) -> ValidationResult<[A; N]> {
    result.and_then(|items| match <[A; N]>::try_from(items) {
        Ok(array) => ValidationResult::Valid(array),
        Err(items) => ValidationResult::invalid(ValidationError::programmer_error(format!(
            "array of {N} elements rebuilt from {} elements",
            items.len()
        ))),
    })
}

fn seq_of<C, A>(element: Validator<A>) -> Validator<C>
where
    C: IntoIterator<Item = A> + FromIterator<A> + Send + 'static,
    C::IntoIter: ExactSizeIterator,
    A: Send + 'static,
{
    Validator::from_fn_with_config(move |items: C, config| {
        validate_seq_now(items, config, |item| element.validate_with(item, config))
    })
}

/// `Vec<A>` validator from an element validator.
pub fn vec_of<A: Send + 'static>(element: Validator<A>) -> Validator<Vec<A>> {
    seq_of(element)
}

pub fn vec_deque_of<A: Send + 'static>(element: Validator<A>) -> Validator<VecDeque<A>> {
    seq_of(element)
}

pub fn btree_set_of<A: Ord + Send + 'static>(element: Validator<A>) -> Validator<BTreeSet<A>> {
    seq_of(element)
}

pub fn hash_set_of<A, S>(element: Validator<A>) -> Validator<HashSet<A, S>>
where
    A: Eq + Hash + Send + 'static,
    S: BuildHasher + Default + Send + 'static,
{
    seq_of(element)
}

/// `[A; N]` validator from an element validator.
pub fn array_of<A: Send + 'static, const N: usize>(element: Validator<A>) -> Validator<[A; N]> {
    Validator::from_fn_with_config(move |items: [A; N], config| {
        into_array(validate_seq_now(Vec::from(items), config, |item| {
            element.validate_with(item, config)
        }))
    })
}

fn entries_of<M, K, V>(key: Validator<K>, value: Validator<V>) -> Validator<M>
where
    M: IntoIterator<Item = (K, V)> + FromIterator<(K, V)> + Send + 'static,
    M::IntoIter: ExactSizeIterator,
    K: Send + 'static,
    V: Send + 'static,
{
    Validator::from_fn_with_config(move |entries: M, config| {
        validate_entries_now(
            entries,
            config,
            |k| key.validate_with(k, config),
            |v| value.validate_with(v, config),
        )
    })
}

/// `BTreeMap<K, V>` validator from key and value validators.
pub fn btree_map_of<K, V>(key: Validator<K>, value: Validator<V>) -> Validator<BTreeMap<K, V>>
where
    K: Ord + Send + 'static,
    V: Send + 'static,
{
    entries_of(key, value)
}

pub fn hash_map_of<K, V, S>(key: Validator<K>, value: Validator<V>) -> Validator<HashMap<K, V, S>>
where
    K: Eq + Hash + Send + 'static,
    V: Send + 'static,
    S: BuildHasher + Default + Send + 'static,
{
    entries_of(key, value)
}

/// `Option<A>` validator: `None` is valid, `Some` is validated and rewrapped.
pub fn option_of<A: 'static>(inner: Validator<A>) -> Validator<Option<A>> {
    Validator::from_fn_with_config(move |value: Option<A>, config| match value {
        None => ValidationResult::Valid(None),
        Some(value) => inner.validate_with(value, config).map(Some),
    })
}

impl<A: Send + 'static> Validator<A> {
    /// Lifts this element validator to `Vec<A>`.
    pub fn each(self) -> Validator<Vec<A>> {
        vec_of(self)
    }

    /// Lifts this validator to `Option<A>`.
    pub fn optional(self) -> Validator<Option<A>> {
        option_of(self)
    }
}
