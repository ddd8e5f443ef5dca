//! `Validate` for the standard library types.
//!
//! Scalars are pass-through: any value of the type is accepted. Range, sign,
//! length and pattern checks are opt-in through
//! [`constraints`](crate::validator::constraints).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::config::ValidationConfig;
use crate::validation::core::ValidationResult;
use crate::validator::collections::{into_array, validate_entries_now, validate_seq_now};
use crate::validator::Validate;

macro_rules! impl_pass_through {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Validate for $ty {
                #[inline]
                fn validate_with(self, _config: &ValidationConfig) -> ValidationResult<Self> {
                    ValidationResult::Valid(self)
                }
            }
        )*
    };
}

impl_pass_through!(
    bool, char, (), String, &'static str,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<A: Validate> Validate for Option<A> {
    fn validate_with(self, config: &ValidationConfig) -> ValidationResult<Self> {
        match self {
            None => ValidationResult::Valid(None),
            Some(value) => value.validate_with(config).map(Some),
        }
    }
}

impl<A: Validate> Validate for Box<A> {
    fn validate_with(self, config: &ValidationConfig) -> ValidationResult<Self> {
        (*self).validate_with(config).map(Box::new)
    }
}

impl<A: Validate + Send + 'static> Validate for Vec<A> {
    fn validate_with(self, config: &ValidationConfig) -> ValidationResult<Self> {
        validate_seq_now(self, config, |item: A| item.validate_with(config))
    }
}

impl<A: Validate + Send + 'static> Validate for VecDeque<A> {
    fn validate_with(self, config: &ValidationConfig) -> ValidationResult<Self> {
        validate_seq_now(self, config, |item: A| item.validate_with(config))
    }
}

impl<A: Validate + Ord + Send + 'static> Validate for BTreeSet<A> {
    fn validate_with(self, config: &ValidationConfig) -> ValidationResult<Self> {
        validate_seq_now(self, config, |item: A| item.validate_with(config))
    }
}

impl<A, S> Validate for HashSet<A, S>
where
    A: Validate + Eq + Hash + Send + 'static,
    S: BuildHasher + Default + Send + 'static,
{
    fn validate_with(self, config: &ValidationConfig) -> ValidationResult<Self> {
        validate_seq_now(self, config, |item: A| item.validate_with(config))
    }
}

impl<A: Validate + Send + 'static, const N: usize> Validate for [A; N] {
    fn validate_with(self, config: &ValidationConfig) -> ValidationResult<Self> {
        into_array(validate_seq_now(Vec::from(self), config, |item: A| {
            item.validate_with(config)
        }))
    }
}

impl<K, V> Validate for BTreeMap<K, V>
where
    K: Validate + Ord + Send + 'static,
    V: Validate + Send + 'static,
{
    fn validate_with(self, config: &ValidationConfig) -> ValidationResult<Self> {
        validate_entries_now(
            self,
            config,
            |key: K| key.validate_with(config),
            |value: V| value.validate_with(config),
        )
    }
}

impl<K, V, S> Validate for HashMap<K, V, S>
where
    K: Validate + Eq + Hash + Send + 'static,
    V: Validate + Send + 'static,
    S: BuildHasher + Default + Send + 'static,
{
    fn validate_with(self, config: &ValidationConfig) -> ValidationResult<Self> {
        validate_entries_now(
            self,
            config,
            |key: K| key.validate_with(config),
            |value: V| value.validate_with(config),
        )
    }
}
