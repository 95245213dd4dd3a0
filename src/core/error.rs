use std::fmt;

use thiserror::Error;

/// Errors that can occur while building, validating or exporting a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LekhaError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// JSON serialization or parsing error.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LekhaError {
    /// Collapse a list of rule violations into one [`LekhaError::Validation`].
    pub fn from_violations(errors: &[ValidationError]) -> Self {
        let joined = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        LekhaError::Validation(joined)
    }
}

/// A single rule violation, located by field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path to the offending field, e.g. `line_items[1].tax[0].rate`.
    pub field: String,
    pub message: String,
    /// Stable rule code (`LK-06`, `LK-A4`, ...).
    pub rule: Option<&'static str>,
}

impl ValidationError {
    /// Create a violation with no rule code.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a violation tagged with a rule code.
    pub fn with_rule(field: impl Into<String>, message: impl Into<String>, rule: &'static str) -> Self {
        Self {
            rule: Some(rule),
            ..Self::new(field, message)
        }
    }

    /// True for violations raised by [`validate_breakdown`](super::validate_breakdown).
    pub fn is_arithmetic(&self) -> bool {
        self.rule.is_some_and(|r| r.starts_with("LK-A"))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Some(rule) => write!(f, "[{rule}] {}: {}", self.field, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}
