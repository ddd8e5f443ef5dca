//! Opt-in hooks consuming validation outcomes.
//!
//! - [`ValidationObserver`]: side-effect callback over a finished result
//! - [`ErrorTranslator`]: maps each error to a display string
//!
//! Neither hook can change what a validator decided.
//!
//! # Examples
//!
//! ```
//! use valid_rail::traits::ErrorTranslator;
//! use valid_rail::{ValidationError, ValidationResult};
//!
//! let result: ValidationResult<u8> = ValidationResult::invalid(ValidationError::new("bad"));
//! let messages = result.translate(&|e: &ValidationError| format!("!{}", e.message()));
//! assert_eq!(messages, Err(vec!["!bad".to_string()]));
//! ```

pub mod observer;
pub mod translator;

#[cfg(feature = "tracing")]
pub use observer::TracingObserver;
pub use observer::{NoopObserver, ValidationObserver};
pub use translator::{CodeTranslator, ErrorTranslator};
