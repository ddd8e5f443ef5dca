//! # valid-rail-derive
//!
//! Derive macros for `valid-rail` record validators:
//!
//! - `#[derive(Validate)]`: implements `Validate` and `Record` for a struct
//! - `#[derive(AsyncValidate)]`: implements `AsyncValidate`, validating fields concurrently
//!
//! Both accept `#[validate(...)]` on fields:
//!
//! | option | effect |
//! |---|---|
//! | `skip` | the field is carried over unvalidated |
//! | `with = expr` | validate with `expr: Validator<T>` instead of `T: Validate` |
//! | `with_async = expr` | async derive only: validate with `expr: AsyncValidator<T>` |
//! | `required` | `Option<T>` field; `None` is reported as missing |
//! | `rename = "label"` | label used in error paths |
//!
//! Every field validated through its type's `Validate` impl must have one;
//! a missing impl is reported at that field's type, for all such fields at once.
//!
//! `with` and `with_async` expressions run once per field for records without
//! generic parameters; the built validator is kept in a `static` and reused.
//! Generic records, and fields whose type names `Self`, evaluate the
//! expression on every call.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod expand;

/// Derives `Validate` and `Record` for a struct.
#[proc_macro_derive(Validate, attributes(validate))]
pub fn derive_validate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::derive_validate(&input).unwrap_or_else(|err| err.to_compile_error()).into()
}

/// Derives `AsyncValidate` for a struct.
#[proc_macro_derive(AsyncValidate, attributes(validate))]
pub fn derive_async_validate(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::derive_async_validate(&input).unwrap_or_else(|err| err.to_compile_error()).into()
}
