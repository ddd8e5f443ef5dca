//! Macros for assembling record validators by hand.
//!
//! - [`macro@crate::record_validator`] - builds a [`Validator`](crate::Validator)
//!   for a struct from one validator per field, running the same field-by-field
//!   algorithm as `#[derive(Validate)]`.
//! - [`macro@crate::impl_async_via_sync`] - implements `AsyncValidate` for types
//!   whose validation never suspends, by lifting their `Validate` impl.
//!
//! # Examples
//!
//! ```
//! use valid_rail::record_validator;
//! use valid_rail::validator::constraints;
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let first_quadrant = record_validator!(Point {
//!     x: constraints::non_negative(),
//!     y: constraints::non_negative(),
//! });
//!
//! let errors = first_quadrant.validate(Point { x: -1, y: -2 }).into_errors().unwrap();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[1].path_string(), "y");
//! ```

/// Builds a record validator from per-field validators.
///
/// Two shapes are accepted:
///
/// - `record_validator!(Type { field: validator, ... })` for named fields;
/// - `record_validator!(Type(label: validator, ...))` for tuple structs, where
///   each label names the positional field in error paths.
///
/// Every field must be listed, in declaration order. Validator expressions
/// are evaluated once, when the macro runs, and shared by every call of the
/// resulting validator.
///
/// # Examples
///
/// ```
/// use valid_rail::record_validator;
/// use valid_rail::validator::constraints;
///
/// struct Range(u32, u32);
///
/// let range = record_validator!(Range(start: constraints::positive(), end: constraints::positive()));
///
/// let errors = range.validate(Range(0, 5)).into_errors().unwrap();
/// assert_eq!(errors[0].path_string(), "start");
/// ```
#[macro_export]
macro_rules! record_validator {
    ($record:ident { $($field:ident : $validator:expr),* $(,)? }) => {{
        #[allow(non_camel_case_types)]
        struct __FieldValidators<$($field),*> {
            $($field: $field,)*
        }

        let validators = __FieldValidators { $($field: $validator,)* };

        $crate::Validator::<$record>::from_fn_with_config(
            move |value: $record, config: &$crate::ValidationConfig| {
                let $record { $($field),* } = value;
                let mut fields = $crate::record::RecordValidation::new(stringify!($record));
                $(
                    let $field = fields.check(stringify!($field), $field, &validators.$field, config);
                )*
                fields.finish(move || ::core::option::Option::Some($record { $($field: $field?,)* }))
            },
        )
    }};
    ($record:ident ( $($label:ident : $validator:expr),* $(,)? )) => {{
        #[allow(non_camel_case_types)]
        struct __FieldValidators<$($label),*> {
            $($label: $label,)*
        }

        let validators = __FieldValidators { $($label: $validator,)* };

        $crate::Validator::<$record>::from_fn_with_config(
            move |value: $record, config: &$crate::ValidationConfig| {
                let $record ( $($label),* ) = value;
                let mut fields = $crate::record::RecordValidation::new(stringify!($record));
                $(
                    let $label = fields.check(stringify!($label), $label, &validators.$label, config);
                )*
                fields.finish(move || ::core::option::Option::Some($record ( $($label?),* )))
            },
        )
    }};
}

/// Implements `AsyncValidate` for types by lifting their `Validate` impl.
///
/// The resulting future is already complete.
///
/// # Examples
///
/// ```
/// use valid_rail::{impl_async_via_sync, Validate, ValidationConfig, ValidationResult};
///
/// struct Celsius(f64);
///
/// impl Validate for Celsius {
///     fn validate_with(self, _config: &ValidationConfig) -> ValidationResult<Self> {
///         ValidationResult::valid(self)
///     }
/// }
///
/// impl_async_via_sync!(Celsius);
/// ```
#[cfg(feature = "async")]
#[macro_export]
macro_rules! impl_async_via_sync {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::async_ext::AsyncValidate for $ty {
                fn validate_async(
                    self,
                    config: &$crate::ValidationConfig,
                ) -> $crate::async_ext::BoxFuture<'static, $crate::ValidationResult<Self>> {
                    $crate::async_ext::ready($crate::Validate::validate_with(self, config))
                }
            }
        )+
    };
}

/// Emits a `tracing` event when the `tracing` feature is enabled.
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::$level!($($arg)+);
        }
    };
}

pub(crate) use log_event;
