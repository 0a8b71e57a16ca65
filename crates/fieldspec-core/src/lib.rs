//! Declaration-driven schema documents.
//!
//! Declare a data shape once, as annotated fields on a type, and compile it
//! into an immutable JSON Schema document ready for any external validation
//! engine. This crate owns the annotation registry, the option normalizer,
//! the schema compiler and its per-type document cache, plus a convenience
//! JSON materializer; actual constraint checking lives with the engine
//! adapter crate.

pub mod compile;
pub mod materialize;
pub mod meta;
mod normalize;
pub mod registry;
pub mod spec;

pub use compile::{schema_document, schema_fragment, SchemaDocument};
pub use materialize::materialize;
pub use meta::{ContentEncoding, Format, Metadata};
pub use registry::{register_field, register_type_options, Declared, TypeDecl, TypeRef};
pub use spec::{AdditionalProperties, PropertySpec, Spec, TypeOptions, TypeTag};
