//! Stable machine-readable error codes attached by the built-in validators.
//!
//! Translators and API layers should match on these constants rather than on
//! rendered messages.

pub const MISMATCH: &str = "mismatch";
pub const REQUIRED: &str = "required";
pub const COLLECTION_SIZE_EXCEEDED: &str = "security.collection_size_exceeded";
pub const INVALID_PATTERN: &str = "invalid_pattern";
pub const PATTERN_MISMATCH: &str = "pattern_mismatch";
pub const UNION_EXHAUSTED: &str = "union_exhausted";
pub const TYPE_MISMATCH: &str = "type_mismatch";
pub const ASYNC_FAILURE: &str = "async_failure";
pub const TIMEOUT: &str = "timeout";
pub const EMPTY_ERRORS: &str = "empty_errors";

pub const NON_NEGATIVE: &str = "non_negative";
pub const POSITIVE: &str = "positive";
pub const OUT_OF_RANGE: &str = "out_of_range";
pub const FINITE: &str = "finite";
pub const NON_EMPTY: &str = "non_empty";
pub const MIN_LENGTH: &str = "min_length";
pub const MAX_LENGTH: &str = "max_length";
pub const PREDICATE: &str = "predicate";

/// Severity attached to errors raised by security limits.
pub const SEVERITY_SECURITY: &str = "security";
/// Severity attached to errors that indicate misuse of the API.
pub const SEVERITY_BUG: &str = "bug";
