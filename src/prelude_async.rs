//! Async prelude - all async utilities in one import.
//!
//! Re-exports everything from the sync [`prelude`](crate::prelude) plus the
//! asynchronous validation surface.
//!
//! # Usage
//!
//! ```
//! use valid_rail::prelude_async::*;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let lookup = AsyncValidator::<String>::from_fn(|name: String| async move {
//!     if name == "admin" {
//!         ValidationResult::invalid(ValidationError::new("reserved name"))
//!     } else {
//!         ValidationResult::valid(name)
//!     }
//! });
//!
//! let results = validate_all_async(vec![
//!     lookup.validate("alice".to_string()),
//!     lookup.validate("admin".to_string()),
//! ])
//! .await;
//! assert_eq!(results.error_count(), 1);
//! # });
//! ```
//!
//! # What's Included
//!
//! - **Traits**: [`AsyncValidate`]
//! - **Types**: [`AsyncValidator`], [`BoxFuture`]
//! - **Functions**: [`validate_all_async`], [`validate_seq_async`], [`guarded`]

pub use crate::prelude::*;

pub use crate::async_ext::{
    guarded, validate_all_async, validate_seq_async, AsyncValidate, AsyncValidator, BoxFuture,
};

#[cfg(feature = "async-tokio")]
pub use crate::async_ext::with_timeout;
