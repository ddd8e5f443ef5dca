//! Error types and utilities.
//!
//! This module provides the structured [`ValidationError`], the non-empty
//! [`Errors`] list carried by invalid results, the [`ErrorAccumulator`]
//! semigroup used to merge error containers, and rendering helpers.
//!
//! # Examples
//!
//! ```
//! use valid_rail::types::{Errors, ValidationError};
//!
//! let err = ValidationError::new("must not be empty")
//!     .with_code("non_empty")
//!     .prepend_field("name");
//!
//! let errors = Errors::new(err);
//! println!("{}", errors);
//! // Output: name: must not be empty (code: non_empty)
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod error_formatter;
pub mod errors;
pub mod type_name;
pub mod validation_error;

pub use accumulator::ErrorAccumulator;
pub use errors::{EmptyErrors, Errors};
pub use type_name::short_type_name;
pub use validation_error::ValidationError;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for one element, the common case of a single failure.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
