//! The [`ValidationResult`] type and its combinator algebra.
//!
//! A `ValidationResult` is either `Valid(value)` or `Invalid(errors)`. Unlike
//! `Result`, the combinators here accumulate errors by default: zipping two
//! invalid results keeps the errors of both, and collecting an iterator of
//! results reports every failure rather than the first one.
//!
//! # Key Components
//!
//! - [`ValidationResult`] - the success/failure sum type
//! - [`ZipAll`] - accumulating `zip` over tuples of 2 to 8 results
//! - Iterator adapters over the valid value and the error list
//!
//! # Examples
//!
//! ```
//! use valid_rail::{ValidationError, ValidationResult};
//!
//! let valid: ValidationResult<i32> = ValidationResult::valid(42);
//! assert!(valid.is_valid());
//!
//! let invalid: ValidationResult<i32> =
//!     ValidationResult::invalid_many([ValidationError::new("err1"), ValidationError::new("err2")]);
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
pub mod core;
pub mod iter;
pub mod traits;

pub use self::core::ValidationResult;
pub use self::iter::{ErrorsIter, IntoIter, Iter, IterMut};
pub use self::traits::ZipAll;
