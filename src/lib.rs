//! ValidRail validates strongly-typed values and reports every violation it
//! finds instead of stopping at the first one.
//!
//! The crate is organised around a small number of pieces:
//!
//! - [`ValidationResult`] - `Valid(value)` or `Invalid(errors)`, with an
//!   accumulating combinator algebra;
//! - [`ValidationError`] and [`Errors`] - structured errors and their
//!   non-empty collection;
//! - [`Validate`] and [`Validator`] - the per-type validation registry and
//!   first-class validator values;
//! - `#[derive(Validate)]` / `#[derive(AsyncValidate)]` - record validators
//!   assembled from per-field validators;
//! - [`ValidationConfig`] - the collection size policy every validator receives.
//!
//! # Examples
//!
//! ## Accumulating field errors
//!
//! ```
//! use valid_rail::validator::constraints;
//! use valid_rail::Validate;
//!
//! #[derive(Validate)]
//! struct Person {
//!     #[validate(with = constraints::non_empty())]
//!     name: String,
//!     #[validate(with = constraints::non_negative())]
//!     age: i32,
//! }
//!
//! let errors = Person { name: String::new(), age: -1 }
//!     .validate()
//!     .into_errors()
//!     .unwrap();
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].path_string(), "name");
//! assert_eq!(errors[1].path_string(), "age");
//! ```
//!
//! ## Combining results
//!
//! ```
//! use valid_rail::{ValidationError, ValidationResult};
//!
//! let v1: ValidationResult<i32> = ValidationResult::valid(10);
//! let v2: ValidationResult<i32> = ValidationResult::invalid(ValidationError::new("error"));
//! let combined: ValidationResult<Vec<i32>> = vec![v1, v2].into_iter().collect();
//!
//! assert!(combined.is_invalid());
//! ```
//!
//! ## Limiting untrusted collections
//!
//! ```
//! use valid_rail::{codes, Validate, ValidationConfig};
//!
//! let config = ValidationConfig::with_max_collection_size(3);
//! let errors = vec![1, 2, 3, 4].validate_with(&config).into_errors().unwrap();
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].code(), Some(codes::COLLECTION_SIZE_EXCEEDED));
//! ```

extern crate self as valid_rail;

/// Stable error codes
pub mod codes;
/// Collection size policy passed to every validator
pub mod config;
/// Conversions between Result, Option and ValidationResult
pub mod convert;
/// Immediate and deferred execution of the shared collection algorithm
pub mod effect;
/// Macros for assembling record validators by hand
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Record metadata and the field-by-field validation accumulator
pub mod record;
/// Observer and translator hooks
pub mod traits;
/// ValidationError, Errors and their accumulation
pub mod types;
/// ValidationResult and its combinator algebra
pub mod validation;
/// Validator values, built-in strategies and constraints
pub mod validator;

/// Asynchronous validation (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Tower integration - request validation layer (requires `tower` feature)
#[cfg(feature = "tower")]
pub mod tower;

pub(crate) use macros::log_event;

pub use config::ValidationConfig;
#[cfg(feature = "tracing")]
pub use traits::TracingObserver;
pub use traits::{CodeTranslator, ErrorTranslator, NoopObserver, ValidationObserver};
pub use types::{
    error_formatter::ErrorFormatConfig, short_type_name, EmptyErrors, ErrorAccumulator, ErrorVec,
    Errors, ValidationError,
};
pub use validation::{ValidationResult, ZipAll};
pub use validator::{Union, Validate, Validator};

#[cfg(feature = "async")]
pub use async_ext::{AsyncValidate, AsyncValidator};

#[cfg(feature = "derive")]
pub use valid_rail_derive::Validate;

#[doc(hidden)]
#[cfg(feature = "async")]
pub mod __private {
    pub use futures_util::join;
}
