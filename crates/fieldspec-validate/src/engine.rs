//! Adapter around the external validation engine.
//!
//! The engine consumes compiled schema documents and judges instances; all
//! schema semantics live there. Documents are always compiled under the
//! 2020-12 dialect, which the emitted `prefixItems` and `dependentRequired`
//! keywords assume; format assertion is opt-in, matching engines that treat
//! `format` as an annotation by default.

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use tracing::debug;

use fieldspec_core::{schema_document, Declared};

use crate::report::{EngineError, Result, ValidationIssue, ValidationReport};

/// Validation engine with fixed dialect and configurable format assertion.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    assert_formats: bool,
}

impl Engine {
    /// Engine that treats `format` keywords as annotations.
    pub fn new() -> Self {
        Self {
            assert_formats: false,
        }
    }

    /// Engine that asserts `format` keywords (email, ipv4, uuid, ...).
    pub fn with_formats() -> Self {
        Self {
            assert_formats: true,
        }
    }

    /// Validate `instance` against `document`, collecting structured issues.
    ///
    /// An `Err` means the document itself was rejected by the engine;
    /// instance problems land in the report.
    pub fn check(&self, document: &Value, instance: &Value) -> Result<ValidationReport> {
        let compiled = self.compile(document)?;

        let mut report = ValidationReport::default();
        if let Err(errors) = compiled.validate(instance) {
            for error in errors {
                let path = normalized_json_pointer(&error.instance_path.to_string());
                let schema_path = normalized_json_pointer(&error.schema_path.to_string());
                report.push_error(ValidationIssue::new(path, schema_path, error.to_string()));
            }
        }

        debug!(errors = report.errors.len(), "instance checked");
        Ok(report)
    }

    /// Boolean validity without issue collection.
    pub fn is_valid(&self, document: &Value, instance: &Value) -> Result<bool> {
        Ok(self.compile(document)?.is_valid(instance))
    }

    /// Validate against the compiled document of a declared type.
    pub fn check_type<T: Declared>(&self, instance: &Value) -> Result<ValidationReport> {
        let document = schema_document::<T>();
        self.check(document.as_value(), instance)
    }

    /// Boolean validity against the compiled document of a declared type.
    pub fn is_valid_type<T: Declared>(&self, instance: &Value) -> Result<bool> {
        let document = schema_document::<T>();
        self.is_valid(document.as_value(), instance)
    }

    fn compile(&self, document: &Value) -> Result<JSONSchema> {
        JSONSchema::options()
            .with_draft(Draft::Draft202012)
            .should_validate_formats(self.assert_formats)
            .compile(document)
            .map_err(|err| EngineError::Schema(err.to_string()))
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}
