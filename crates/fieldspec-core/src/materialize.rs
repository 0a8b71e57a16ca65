//! Best-effort structural copy of JSON data through a declared shape.
//!
//! This is a convenience on top of the registry, not validation: values are
//! copied as-is, nothing is checked against constraints, and unknown keys
//! are simply dropped. Run the document through an engine first when
//! conformance matters.

use serde_json::{Map, Value};

use crate::registry::{self, Declared, TypeRef};
use crate::spec::{PropertySpec, Spec, TypeTag};

/// Copy of `data` shaped by `T`'s declared fields.
///
/// Declared fields present in the input are kept; a field declared as a
/// reference to another type is materialized through that type, and an
/// array field whose `items` is such a reference materializes each element.
/// Undeclared keys are dropped. Non-object input is returned unchanged.
pub fn materialize<T: Declared>(data: &Value) -> Value {
    through_ref(&TypeRef::of::<T>(), data)
}

fn through_ref(reference: &TypeRef, data: &Value) -> Value {
    let Value::Object(input) = data else {
        return data.clone();
    };

    reference.ensure_declared();
    let record = registry::snapshot(reference.key);

    let mut instance = Map::new();
    for (name, spec) in &record.fields {
        if let Some(value) = input.get(name) {
            instance.insert(name.clone(), through_spec(spec, value));
        }
    }
    Value::Object(instance)
}

fn through_spec(spec: &Spec, value: &Value) -> Value {
    match spec {
        Spec::Ref(reference) => through_ref(reference, value),
        Spec::Inline(property) => through_inline(property, value),
        Spec::Unset => value.clone(),
    }
}

fn through_inline(spec: &PropertySpec, value: &Value) -> Value {
    if let (Some(TypeTag::Array), Some(Spec::Ref(item_ref)), Value::Array(elements)) =
        (spec.ty, spec.items.as_ref(), value)
    {
        return Value::Array(
            elements
                .iter()
                .map(|element| through_ref(item_ref, element))
                .collect(),
        );
    }
    value.clone()
}
