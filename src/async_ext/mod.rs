//! Asynchronous validation.
//!
//! The asynchronous engine runs the same algorithms as the synchronous one,
//! with the validation of each record field and collection element running
//! as a future. Fields of one record, and elements of one collection, are
//! created together and joined, so they run concurrently within one task.
//! Results are aggregated only once all have completed, in declaration and
//! iteration order.
//!
//! Any panic raised while creating or polling a validation future, and any
//! error returned by a fallible validator, resolves to an `Invalid` with code
//! [`async_failure`](crate::codes::ASYNC_FAILURE). A validation future always
//! completes with a [`ValidationResult`](crate::ValidationResult).
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! valid-rail = { version = "0.7", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use valid_rail::async_ext::AsyncValidate;
//! use valid_rail::ValidationConfig;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let result = vec![1u8, 2, 3].validate_async(&ValidationConfig::strict()).await;
//! assert!(result.is_valid());
//! # });
//! ```

mod catch;
mod validation;
mod validator;

pub use catch::guarded;
pub use futures_util::future::BoxFuture;
pub use validation::{validate_all_async, validate_seq_async};
pub use validator::{btree_map_of, hash_map_of, ready, when_present, AsyncValidate, AsyncValidator};

/// Derives [`AsyncValidate`](trait@AsyncValidate) for a struct.
#[cfg(feature = "derive")]
pub use valid_rail_derive::AsyncValidate;

#[cfg(feature = "async-tokio")]
mod tokio_ext;
#[cfg(feature = "async-tokio")]
pub use tokio_ext::with_timeout;

#[cfg(feature = "tracing")]
mod tracing_ext;
#[cfg(feature = "tracing")]
pub use tracing_ext::{SpannedValidation, ValidationSpanExt};
