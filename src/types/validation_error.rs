//! Structured validation error with field path, nested children and optional metadata.
//!
//! [`ValidationError`] keeps its representation private. Values are built with
//! [`ValidationError::new`] and the `with_*` builders, or with one of the
//! kind-specific constructors ([`ValidationError::mismatch`],
//! [`ValidationError::missing`], ...), and inspected through accessors.
//!
//! # Examples
//!
//! ```
//! use valid_rail::ValidationError;
//!
//! let err = ValidationError::new("must not be empty")
//!     .with_code("non_empty")
//!     .prepend_field("name")
//!     .prepend_field("user");
//!
//! assert_eq!(err.path_string(), "user.name");
//! assert_eq!(err.code(), Some("non_empty"));
//! assert_eq!(err.to_string(), "user.name: must not be empty (code: non_empty)");
//! ```

use std::collections::VecDeque;
use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::codes;
use crate::types::error_formatter::{ErrorFormatBuilder, ErrorFormatConfig};

/// Immutable error value produced by validators.
///
/// The field path is stored root-to-leaf; prepending a segment is O(1).
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidationError {
    message: String,
    #[cfg_attr(feature = "serde", serde(default))]
    field_path: VecDeque<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    children: Vec<ValidationError>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    code: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    severity: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    expected: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    actual: Option<String>,
}

impl ValidationError {
    /// Creates an error carrying only a message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_path: VecDeque::new(),
            children: Vec::new(),
            code: None,
            severity: None,
            expected: None,
            actual: None,
        }
    }

    /// A value did not match what the validator expected.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::ValidationError;
    ///
    /// let err = ValidationError::mismatch("must be non-negative", ">= 0", "-1");
    /// assert_eq!(err.expected(), Some(">= 0"));
    /// assert_eq!(err.actual(), Some("-1"));
    /// ```
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(message)
            .with_code(codes::MISMATCH)
            .with_expected(expected)
            .with_actual(actual)
    }

    /// A required value was absent.
    pub fn missing(type_name: impl Into<String>) -> Self {
        Self::new("must not be null")
            .with_code(codes::REQUIRED)
            .with_expected(type_name)
            .with_actual("None")
    }

    /// A collection exceeded the configured `max_collection_size`.
    pub fn collection_too_large(label: &str, size: usize, max: usize) -> Self {
        Self::new(format!(
            "{label} has {size} elements, exceeding the maximum of {max}"
        ))
        .with_code(codes::COLLECTION_SIZE_EXCEEDED)
        .with_severity(codes::SEVERITY_SECURITY)
        .with_expected(format!("at most {max} elements"))
        .with_actual(size.to_string())
    }

    /// A textual pattern could not be compiled.
    pub fn invalid_pattern(pattern: &str, reason: impl Display) -> Self {
        Self::new(format!("invalid pattern `{pattern}`: {reason}"))
            .with_code(codes::INVALID_PATTERN)
            .with_expected("a valid regular expression")
            .with_actual(pattern)
    }

    /// Every branch of a union failed; the branch errors become children.
    pub fn union_exhausted<I>(expected: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = ValidationError>,
    {
        let expected = expected.into();
        Self::new(format!("value did not match any of {expected}"))
            .with_code(codes::UNION_EXHAUSTED)
            .with_expected(expected)
            .with_children(children)
    }

    /// The runtime tag of a value does not fit the branch being attempted.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        let expected = expected.into();
        let actual = actual.into();
        Self::new(format!("expected a value of type {expected}, found {actual}"))
            .with_code(codes::TYPE_MISMATCH)
            .with_expected(expected)
            .with_actual(actual)
    }

    /// An asynchronous validator panicked or failed outside the result algebra.
    pub fn unexpected_async_failure(detail: impl Display) -> Self {
        Self::new(format!("asynchronous validation failed unexpectedly: {detail}"))
            .with_code(codes::ASYNC_FAILURE)
    }

    /// An `Invalid` was requested from an empty error list.
    pub fn programmer_error(detail: impl Display) -> Self {
        Self::new(format!("programmer error: {detail}"))
            .with_code(codes::EMPTY_ERRORS)
            .with_severity(codes::SEVERITY_BUG)
    }

    /// Sets the machine-readable code.
    #[inline]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the severity label.
    #[inline]
    pub fn with_severity(mut self, severity: impl Into<String>) -> Self {
        self.severity = Some(severity.into());
        self
    }

    /// Describes what the validator expected.
    #[inline]
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Describes what the validator found.
    #[inline]
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    /// Appends nested failures.
    #[inline]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = ValidationError>,
    {
        self.children.extend(children);
        self
    }

    /// Replaces the field path, given root-to-leaf.
    pub fn at_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_path = path.into_iter().map(Into::into).collect();
        self
    }

    /// Prepends `segment` to the field path.
    #[inline]
    pub fn prepend_field(mut self, segment: impl Into<String>) -> Self {
        self.field_path.push_front(segment.into());
        self
    }

    /// Prepends `field` to the path and rewraps the message with the field and
    /// the runtime type name of its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use valid_rail::ValidationError;
    ///
    /// let err = ValidationError::new("must not be empty").annotate_field("name", "String");
    /// assert_eq!(err.field_path().collect::<Vec<_>>(), vec!["name"]);
    /// assert_eq!(err.message(), "field 'name' (String): must not be empty");
    /// ```
    pub fn annotate_field(mut self, field: impl Into<String>, type_name: &str) -> Self {
        let field = field.into();
        self.message = format!("field '{field}' ({type_name}): {}", self.message);
        self.field_path.push_front(field);
        self
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the field path root-to-leaf.
    #[inline]
    pub fn field_path(&self) -> impl ExactSizeIterator<Item = &str> + DoubleEndedIterator + '_ {
        self.field_path.iter().map(String::as_str)
    }

    /// Renders the field path as `user.tags[0]`.
    pub fn path_string(&self) -> String {
        let mut rendered = String::new();
        for segment in &self.field_path {
            if !rendered.is_empty() && !segment.starts_with('[') {
                rendered.push('.');
            }
            rendered.push_str(segment);
        }
        rendered
    }

    #[inline]
    pub fn children(&self) -> &[ValidationError] {
        &self.children
    }

    #[inline]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    #[inline]
    pub fn severity(&self) -> Option<&str> {
        self.severity.as_deref()
    }

    #[inline]
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    #[inline]
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// Returns a builder for customizing the rendering.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self)
    }

    /// Indented multi-line rendering including children.
    #[must_use]
    pub fn pretty(&self) -> String {
        self.fmt().pretty().to_string()
    }

    /// Renders with an explicit configuration.
    #[must_use]
    pub fn render(&self, config: &ErrorFormatConfig) -> String {
        self.fmt().with_config(config.clone()).to_string()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt(), f);
        }
        Display::fmt(&self.fmt().pretty(), f)
    }
}

impl std::error::Error for ValidationError {}

impl From<&str> for ValidationError {
    #[inline]
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ValidationError {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
