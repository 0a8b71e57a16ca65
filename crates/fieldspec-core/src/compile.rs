//! Schema Compiler and Schema Document Cache.
//!
//! Compilation turns one declared type's registered annotations into a
//! validator-ready document, exactly once per process. The cache hands out
//! the same document on every later access, so compiled schemas are safe to
//! hold, clone, and compare by pointer.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::normalize;
use crate::registry::{self, Declared, TypeKey, TypeRecord, TypeRef};
use crate::spec::Spec;

/// A compiled, immutable schema document.
///
/// Cheap to clone; all handles for the same declared type share one
/// underlying value. The document is always an object of the form
/// `{type, …type options, properties, required}`.
#[derive(Clone)]
pub struct SchemaDocument(Arc<Value>);

impl SchemaDocument {
    /// The document as JSON.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Owned copy of the document JSON.
    pub fn to_value(&self) -> Value {
        (*self.0).clone()
    }

    /// True when both handles share the same cached document.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl Deref for SchemaDocument {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.0
    }
}

impl AsRef<Value> for SchemaDocument {
    fn as_ref(&self) -> &Value {
        &self.0
    }
}

impl PartialEq for SchemaDocument {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialEq<Value> for SchemaDocument {
    fn eq(&self, other: &Value) -> bool {
        *self.0 == *other
    }
}

impl fmt::Debug for SchemaDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for SchemaDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl Serialize for SchemaDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

static CACHE: LazyLock<RwLock<HashMap<TypeId, SchemaDocument>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Compiled (or cached) schema document for a declared type.
///
/// The first call per type runs `T::declare`, compiles, and caches; every
/// later call returns the identical document without recomputation.
pub fn schema_document<T: Declared>() -> SchemaDocument {
    resolve(&TypeRef::of::<T>())
}

/// Normalized fragment for an ad hoc, non-type-bound specification.
///
/// `None` when the specification is [`Spec::Unset`].
pub fn schema_fragment(spec: &Spec) -> Option<Value> {
    normalize::spec_fragment(spec)
}

/// Owned JSON of the referenced type's document, for embedding into a
/// parent fragment.
pub(crate) fn document_for(reference: &TypeRef) -> Value {
    resolve(reference).to_value()
}

fn resolve(reference: &TypeRef) -> SchemaDocument {
    if let Some(document) = cached(reference.key) {
        return document;
    }
    reference.ensure_declared();
    build(reference.key)
}

fn cached(key: TypeKey) -> Option<SchemaDocument> {
    CACHE.read().get(&key.id).cloned()
}

fn build(key: TypeKey) -> SchemaDocument {
    // snapshot outside any lock: normalizing a reference field recurses into
    // the referenced type's compilation
    let TypeRecord { fields, options } = registry::snapshot(key);
    let options = options.unwrap_or_default();

    let mut document = Map::new();
    let type_value = if options.nullable {
        json!(["object", "null"])
    } else {
        json!("object")
    };
    document.insert("type".to_string(), type_value);
    for (keyword, value) in normalize::type_options_fragment(&options) {
        document.insert(keyword, value);
    }

    let mut properties = Map::new();
    let mut required = Vec::new();
    for (name, spec) in &fields {
        if field_required(spec) {
            required.push(Value::String(name.clone()));
        }
        if let Some(fragment) = normalize::spec_fragment(spec) {
            properties.insert(name.clone(), fragment);
        }
    }
    document.insert("properties".to_string(), Value::Object(properties));
    document.insert("required".to_string(), Value::Array(required));

    debug!(ty = key.name, fields = fields.len(), "schema document compiled");

    let document = SchemaDocument(Arc::new(Value::Object(document)));

    // first write wins; concurrent compilations of one type settle on the
    // earlier document
    CACHE.write().entry(key.id).or_insert(document).clone()
}

/// Whether a field belongs in its parent's `required` array. Read from the
/// raw specification; reference fields follow the referenced type's own
/// type-level flag.
fn field_required(spec: &Spec) -> bool {
    match spec {
        Spec::Inline(property) => property.required,
        Spec::Ref(reference) => registry::ref_required(reference),
        Spec::Unset => false,
    }
}
