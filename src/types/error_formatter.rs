//! Rendering of [`ValidationError`] trees.

use std::fmt::{self, Display, Write};

use crate::types::ValidationError;

/// Configuration-based error formatter.
///
/// [`compact`](Self::compact) renders one line per error, children inlined in
/// brackets. [`pretty`](Self::pretty) renders an indented tree with one line per
/// error and per metadata field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub path_separator: String,
    pub child_separator: String,
    pub multiline: bool,
    pub indent: String,
    pub child_prefix: Option<String>,
    pub last_child_prefix: Option<String>,
    pub show_code: bool,
    pub show_path: bool,
    pub show_details: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            path_separator: ": ".into(),
            child_separator: "; ".into(),
            multiline: false,
            indent: "  ".into(),
            child_prefix: None,
            last_child_prefix: None,
            show_code: true,
            show_path: true,
            show_details: false,
        }
    }
}

impl ErrorFormatConfig {
    #[inline]
    pub fn compact() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pretty() -> Self {
        Self {
            multiline: true,
            child_prefix: Some("├─ ".into()),
            last_child_prefix: Some("└─ ".into()),
            show_details: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn no_code() -> Self {
        Self { show_code: false, ..Default::default() }
    }

    fn write_head(&self, out: &mut String, error: &ValidationError) {
        if self.show_path && error.field_path().len() > 0 {
            out.push_str(&error.path_string());
            out.push_str(&self.path_separator);
        }
        out.push_str(error.message());
        if self.show_code {
            if let Some(code) = error.code() {
                let _ = write!(out, " (code: {code})");
            }
        }
    }

    fn write_compact(&self, out: &mut String, error: &ValidationError) {
        self.write_head(out, error);
        if self.show_details {
            if let Some(expected) = error.expected() {
                let _ = write!(out, " [expected: {expected}]");
            }
            if let Some(actual) = error.actual() {
                let _ = write!(out, " [actual: {actual}]");
            }
        }
        if !error.children().is_empty() {
            out.push_str(" [");
            for (i, child) in error.children().iter().enumerate() {
                if i > 0 {
                    out.push_str(&self.child_separator);
                }
                self.write_compact(out, child);
            }
            out.push(']');
        }
    }

    fn write_tree(&self, out: &mut String, error: &ValidationError, depth: usize) {
        self.write_head(out, error);

        let pad = self.indent.repeat(depth + 1);
        if self.show_details {
            let details = [
                ("severity", error.severity()),
                ("expected", error.expected()),
                ("actual", error.actual()),
            ];
            for (label, value) in details {
                if let Some(value) = value {
                    let _ = write!(out, "\n{pad}{label}: {value}");
                }
            }
        }

        let last = error.children().len().saturating_sub(1);
        for (i, child) in error.children().iter().enumerate() {
            out.push('\n');
            out.push_str(&pad);
            let prefix = if i == last {
                self.last_child_prefix.as_ref().or(self.child_prefix.as_ref())
            } else {
                self.child_prefix.as_ref()
            };
            if let Some(prefix) = prefix {
                out.push_str(prefix);
            }
            self.write_tree(out, child, depth + 1);
        }
    }

    /// Renders `error` according to this configuration.
    pub fn format(&self, error: &ValidationError) -> String {
        let mut out = String::with_capacity(error.message().len() + 32);
        if self.multiline {
            self.write_tree(&mut out, error, 0);
        } else {
            self.write_compact(&mut out, error);
        }
        out
    }
}

/// Builder for customizing error display output.
pub struct ErrorFormatBuilder<'a> {
    pub(crate) error: &'a ValidationError,
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(error: &'a ValidationError) -> Self {
        Self { error, config: ErrorFormatConfig::default() }
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn show_code(mut self, show: bool) -> Self {
        self.config.show_code = show;
        self
    }

    pub fn show_path(mut self, show: bool) -> Self {
        self.config.show_path = show;
        self
    }

    pub fn show_details(mut self, show: bool) -> Self {
        self.config.show_details = show;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ErrorFormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.config.format(self.error))
    }
}
