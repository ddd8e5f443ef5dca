//! Security policy consumed by collection and map validators.
//!
//! A [`ValidationConfig`] is passed by reference to every validation call; there
//! is no global or mutable configuration.
//!
//! # Examples
//!
//! ```
//! use valid_rail::{Validate, ValidationConfig};
//!
//! let config = ValidationConfig::with_max_collection_size(2);
//! let result = vec![1, 2, 3].validate_with(&config);
//! assert!(result.is_invalid());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::ValidationError;

/// Bound applied by [`ValidationConfig::strict`].
pub const STRICT_MAX_COLLECTION_SIZE: usize = 1_000;
/// Bound applied by [`ValidationConfig::permissive`].
pub const PERMISSIVE_MAX_COLLECTION_SIZE: usize = 100_000;

/// Collection-size policy for a validation call.
///
/// The default is [`unlimited`](Self::unlimited), which is only appropriate for
/// trusted data: a hostile payload with millions of elements will have every
/// element validated. Use [`strict`](Self::strict) for untrusted input.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValidationConfig {
    max_collection_size: Option<usize>,
}

impl ValidationConfig {
    /// No limit. Trusted data only.
    #[inline]
    pub const fn unlimited() -> Self {
        Self { max_collection_size: None }
    }

    /// Small bound for untrusted input.
    #[inline]
    pub const fn strict() -> Self {
        Self::with_max_collection_size(STRICT_MAX_COLLECTION_SIZE)
    }

    /// Large bound for internal data that is trusted but may be big.
    #[inline]
    pub const fn permissive() -> Self {
        Self::with_max_collection_size(PERMISSIVE_MAX_COLLECTION_SIZE)
    }

    /// Custom bound.
    #[inline]
    pub const fn with_max_collection_size(max: usize) -> Self {
        Self { max_collection_size: Some(max) }
    }

    #[inline]
    pub const fn max_collection_size(&self) -> Option<usize> {
        self.max_collection_size
    }

    /// Rejects `size` when it exceeds the configured bound.
    ///
    /// Collection validators call this before touching any element.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::{codes, ValidationConfig};
    ///
    /// let config = ValidationConfig::with_max_collection_size(10);
    /// assert!(config.check_collection_size(10, "Vec<i32>").is_ok());
    ///
    /// let err = config.check_collection_size(11, "Vec<i32>").unwrap_err();
    /// assert_eq!(err.code(), Some(codes::COLLECTION_SIZE_EXCEEDED));
    /// ```
    pub fn check_collection_size(&self, size: usize, label: &str) -> Result<(), ValidationError> {
        match self.max_collection_size {
            Some(max) if size > max => {
                crate::log_event!(
                    warn,
                    collection = label,
                    size,
                    max,
                    "collection size limit exceeded"
                );
                Err(ValidationError::collection_too_large(label, size, max))
            }
            _ => Ok(()),
        }
    }
}
