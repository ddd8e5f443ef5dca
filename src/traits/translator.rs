use std::collections::HashMap;

use crate::types::ValidationError;

/// Maps an error to a display string, typically keyed on its code.
///
/// Closures of type `Fn(&ValidationError) -> String` implement this trait.
pub trait ErrorTranslator {
    fn translate(&self, error: &ValidationError) -> String;
}

impl<F> ErrorTranslator for F
where
    F: Fn(&ValidationError) -> String,
{
    #[inline]
    fn translate(&self, error: &ValidationError) -> String {
        self(error)
    }
}

/// Template lookup by error code, falling back to the rendered error.
///
/// Templates may reference `{message}`, `{path}`, `{code}`, `{expected}` and
/// `{actual}`. Missing values render as empty strings.
///
/// # Examples
///
/// ```
/// use valid_rail::{codes, CodeTranslator, ErrorTranslator, ValidationError};
///
/// let translator = CodeTranslator::new()
///     .with_template(codes::REQUIRED, "Le champ {path} est obligatoire");
///
/// let err = ValidationError::missing("String").prepend_field("email");
/// assert_eq!(translator.translate(&err), "Le champ email est obligatoire");
///
/// let other = ValidationError::new("too short");
/// assert_eq!(translator.translate(&other), "too short");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeTranslator {
    templates: HashMap<String, String>,
}

impl CodeTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_template(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(code.into(), template.into());
        self
    }

    pub fn template(&self, code: &str) -> Option<&str> {
        self.templates.get(code).map(String::as_str)
    }
}

impl ErrorTranslator for CodeTranslator {
    fn translate(&self, error: &ValidationError) -> String {
        let template = error.code().and_then(|code| self.template(code));
        match template {
            Some(template) => template
                .replace("{message}", error.message())
                .replace("{path}", &error.path_string())
                .replace("{code}", error.code().unwrap_or_default())
                .replace("{expected}", error.expected().unwrap_or_default())
                .replace("{actual}", error.actual().unwrap_or_default()),
            None => error.fmt().show_code(false).to_string(),
        }
    }
}
