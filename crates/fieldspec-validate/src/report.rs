use thiserror::Error;

/// Structured validation issue with instance and schema locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// JSON pointer to the offending part of the instance.
    pub path: String,
    /// JSON pointer to the schema keyword that rejected it.
    pub schema_path: String,
    /// Engine-provided message, unreinterpreted.
    pub message: String,
}

impl ValidationIssue {
    /// Create a new validation issue.
    pub fn new(
        path: impl Into<String>,
        schema_path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            schema_path: schema_path.into(),
            message: message.into(),
        }
    }
}

/// Aggregated validation outcome for one instance.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error issue.
    pub fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }
}

/// Failures of the engine itself, as opposed to instance validation errors.
///
/// Schema-semantic problems (an unparseable `patternProperties` regex, a
/// malformed keyword value) surface here at compile time with the engine's
/// message unmasked.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("schema error: {0}")]
    Schema(String),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
