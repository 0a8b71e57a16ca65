//! Validation engine adapter for fieldspec schema documents.
//!
//! Compiled documents are plain JSON Schema; this crate hands them to the
//! `jsonschema` engine and converts its verdicts into structured reports.
//! Constraint semantics are entirely the engine's business, so anything it
//! rejects (including schemas it cannot compile) is surfaced unmasked.

pub mod engine;
pub mod report;

pub use engine::Engine;
pub use report::{EngineError, Result, ValidationIssue, ValidationReport};
