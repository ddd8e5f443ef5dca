//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use valid_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`record_validator!`](crate::record_validator)
//! - **Types**: [`ValidationResult`], [`ValidationError`], [`Errors`],
//!   [`ValidationConfig`], [`Validator`], [`Union`]
//! - **Traits**: [`Validate`], [`ZipAll`], [`ErrorAccumulator`]
//! - **Modules**: [`constraints`], [`codes`]
//!
//! # Examples
//!
//! ```
//! use valid_rail::prelude::*;
//!
//! fn parse_port(raw: &str) -> ValidationResult<u16> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => constraints::positive().validate(port),
//!         Err(e) => ValidationResult::invalid(ValidationError::new(e.to_string())),
//!     }
//! }
//!
//! let both = parse_port("8080").zip(parse_port("0"));
//! assert_eq!(both.error_count(), 1);
//! ```

pub use crate::record_validator;

pub use crate::codes;
pub use crate::config::ValidationConfig;
pub use crate::types::{ErrorAccumulator, Errors, ValidationError};
pub use crate::validation::{ValidationResult, ZipAll};
pub use crate::validator::{constraints, Union, Validate, Validator};

#[cfg(feature = "derive")]
pub use valid_rail_derive::Validate;

/// Result alias for code that only needs the first error.
///
/// # Examples
///
/// ```
/// use valid_rail::prelude::*;
///
/// fn checked_age(age: i32) -> FirstErrorResult<i32> {
///     constraints::non_negative().validate(age).into_first_error()
/// }
///
/// assert!(checked_age(-1).is_err());
/// ```
pub type FirstErrorResult<T> = Result<T, ValidationError>;
