//! Whole-record validation built from per-field validators.
//!
//! [`RecordValidation`] is the accumulator every record validator runs on,
//! whether it was generated by `#[derive(Validate)]`, `#[derive(AsyncValidate)]`
//! or assembled by hand with [`record_validator!`](crate::record_validator):
//!
//! 1. fields are visited in declaration order;
//! 2. each field's errors are annotated with the field name and type name;
//! 3. every field is visited even after a failure;
//! 4. the record is rebuilt from the validated values only when no field failed.
//!
//! # Examples
//!
//! ```
//! use valid_rail::record::RecordValidation;
//! use valid_rail::validator::constraints;
//! use valid_rail::{ValidationConfig, ValidationResult};
//!
//! struct Person {
//!     name: String,
//!     age: i32,
//! }
//!
//! fn validate_person(person: Person, config: &ValidationConfig) -> ValidationResult<Person> {
//!     let mut fields = RecordValidation::new("Person");
//!     let name = fields.check("name", person.name, &constraints::non_empty(), config);
//!     let age = fields.check("age", person.age, &constraints::non_negative(), config);
//!     fields.finish(move || Some(Person { name: name?, age: age? }))
//! }
//!
//! let result = validate_person(Person { name: String::new(), age: -1 }, &ValidationConfig::default());
//! let errors = result.into_errors().unwrap();
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[0].field_path().collect::<Vec<_>>(), vec!["name"]);
//! assert_eq!(errors[1].field_path().collect::<Vec<_>>(), vec!["age"]);
//! ```

use crate::config::ValidationConfig;
use crate::types::{short_type_name, Errors, ValidationError};
use crate::validation::core::ValidationResult;
use crate::validator::{Validate, Validator};

/// How a record's fields are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordShape {
    /// Named fields.
    Nominal,
    /// Positional fields carrying labels as metadata.
    Positional,
    /// No fields.
    Unit,
}

/// Static description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    type_name: &'static str,
    required: bool,
    skipped: bool,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, type_name: &'static str) -> Self {
        Self { name, type_name, required: false, skipped: false }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn skipped(mut self) -> Self {
        self.skipped = true;
        self
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The field's type as written in the declaration.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    pub const fn is_skipped(&self) -> bool {
        self.skipped
    }
}

/// Compile-time field metadata, implemented by `#[derive(Validate)]`.
pub trait Record {
    const NAME: &'static str;
    const SHAPE: RecordShape;
    /// Fields in declaration order.
    const FIELDS: &'static [FieldDescriptor];
}

/// Accumulates field outcomes for one record.
#[derive(Debug)]
pub struct RecordValidation {
    record: &'static str,
    errors: Vec<ValidationError>,
}

impl RecordValidation {
    pub fn new(record: &'static str) -> Self {
        Self { record, errors: Vec::new() }
    }

    /// Records a field outcome, returning the validated value when valid.
    ///
    /// Errors are annotated with `name` and the type name of `T`.
    pub fn field<T>(&mut self, name: &str, result: ValidationResult<T>) -> Option<T> {
        match result {
            ValidationResult::Valid(value) => Some(value),
            ValidationResult::Invalid(errors) => {
                let annotated = errors.annotate_field(name, &short_type_name::<T>());
                self.errors.extend(annotated);
                None
            }
        }
    }

    /// Runs `validator` on a field value.
    pub fn check<T>(
        &mut self,
        name: &str,
        value: T,
        validator: &Validator<T>,
        config: &ValidationConfig,
    ) -> Option<T> {
        let result = validator.validate_with(value, config);
        self.field(name, result)
    }

    /// Runs the registered [`Validate`] strategy on a field value.
    pub fn validate<T: Validate>(&mut self, name: &str, value: T, config: &ValidationConfig) -> Option<T> {
        let result = value.validate_with(config);
        self.field(name, result)
    }

    /// Records a `missing` error for an absent required `Option<T>` field.
    pub fn missing<T>(&mut self, name: &str) {
        let error = ValidationError::missing(short_type_name::<T>())
            .annotate_field(name, &short_type_name::<Option<T>>());
        self.errors.push(error);
    }

    /// Records the outcome of a required `Option<T>` field.
    ///
    /// `None` means the value was absent and no validator ran; it records a
    /// `missing` error.
    pub fn required_field<T>(&mut self, name: &str, outcome: Option<ValidationResult<T>>) -> Option<Option<T>> {
        match outcome {
            None => {
                self.missing::<T>(name);
                None
            }
            Some(result) => self.field(name, result.map(Some)),
        }
    }

    /// Required `Option<T>` field checked with its [`Validate`] strategy.
    pub fn required<T: Validate>(
        &mut self,
        name: &str,
        value: Option<T>,
        config: &ValidationConfig,
    ) -> Option<Option<T>> {
        let outcome = value.map(|value| value.validate_with(config));
        self.required_field(name, outcome)
    }

    /// Required `Option<T>` field checked with an explicit validator.
    pub fn required_with<T>(
        &mut self,
        name: &str,
        value: Option<T>,
        validator: &Validator<T>,
        config: &ValidationConfig,
    ) -> Option<Option<T>> {
        let outcome = value.map(|value| validator.validate_with(value, config));
        self.required_field(name, outcome)
    }

    #[inline]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Completes the record.
    ///
    /// With no recorded errors, `build` reassembles the record from the values
    /// returned by the field methods. `build` returning `None` while no error
    /// was recorded means a field result was dropped, and is reported as a
    /// programmer error.
    pub fn finish<R>(self, build: impl FnOnce() -> Option<R>) -> ValidationResult<R> {
        crate::log_event!(
            trace,
            record = self.record,
            errors = self.errors.len(),
            "record validation finished"
        );
        match Errors::try_from_vec(self.errors) {
            Some(errors) => ValidationResult::Invalid(errors),
            None => match build() {
                Some(record) => ValidationResult::Valid(record),
                None => ValidationResult::invalid(ValidationError::programmer_error(format!(
                    "record {} could not be rebuilt from valid fields",
                    self.record
                ))),
            },
        }
    }
}
