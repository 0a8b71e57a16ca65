//! Option Normalizer: the recursive rewrite from raw annotation data to
//! canonical schema-fragment form.
//!
//! Normalization is total. Every input shape produces a fragment (or
//! nothing, for unset positions); whether the resulting document makes
//! semantic sense is judged solely by the consuming engine.

use serde_json::{json, Map, Value};

use crate::compile;
use crate::spec::{AdditionalProperties, PropertySpec, Spec, TypeOptions, TypeTag};

/// Normalize one schema-bearing position.
///
/// `Unset` produces nothing, a reference resolves to the referenced type's
/// compiled document (compiling it first if needed), and an inline
/// specification rewrites keyword by keyword.
pub(crate) fn spec_fragment(spec: &Spec) -> Option<Value> {
    match spec {
        Spec::Unset => None,
        Spec::Ref(reference) => Some(compile::document_for(reference)),
        Spec::Inline(property) => Some(Value::Object(property_fragment(property))),
    }
}

/// Element-wise normalization of an ordered sub-schema list. Unset entries
/// contribute nothing.
fn sequence(specs: &[Spec]) -> Value {
    Value::Array(specs.iter().filter_map(spec_fragment).collect())
}

fn property_fragment(spec: &PropertySpec) -> Map<String, Value> {
    let mut fragment = Map::new();

    if let Some(tag) = spec.ty {
        fragment.insert("type".to_string(), type_keyword(tag, spec.nullable));
    }
    if let Some(format) = &spec.format {
        fragment.insert("format".to_string(), Value::String(format.as_str().to_string()));
    }
    if let Some(limit) = spec.min_length {
        fragment.insert("minLength".to_string(), Value::from(limit));
    }
    if let Some(limit) = spec.max_length {
        fragment.insert("maxLength".to_string(), Value::from(limit));
    }
    if let Some(pattern) = &spec.pattern {
        fragment.insert("pattern".to_string(), Value::String(pattern.clone()));
    }
    if let Some(bound) = &spec.minimum {
        fragment.insert("minimum".to_string(), Value::Number(bound.clone()));
    }
    if let Some(bound) = &spec.maximum {
        fragment.insert("maximum".to_string(), Value::Number(bound.clone()));
    }
    if let Some(bound) = &spec.exclusive_minimum {
        fragment.insert("exclusiveMinimum".to_string(), Value::Number(bound.clone()));
    }
    if let Some(bound) = &spec.exclusive_maximum {
        fragment.insert("exclusiveMaximum".to_string(), Value::Number(bound.clone()));
    }
    if let Some(step) = &spec.multiple_of {
        fragment.insert("multipleOf".to_string(), Value::Number(step.clone()));
    }
    if let Some(limit) = spec.min_items {
        fragment.insert("minItems".to_string(), Value::from(limit));
    }
    if let Some(limit) = spec.max_items {
        fragment.insert("maxItems".to_string(), Value::from(limit));
    }
    if let Some(unique) = spec.unique_items {
        fragment.insert("uniqueItems".to_string(), Value::Bool(unique));
    }
    if let Some(specs) = &spec.prefix_items {
        fragment.insert("prefixItems".to_string(), sequence(specs));
    }
    if let Some(items) = &spec.items {
        if let Some(value) = spec_fragment(items) {
            fragment.insert("items".to_string(), value);
        }
    }
    if let Some(contains) = &spec.contains {
        if let Some(value) = spec_fragment(contains) {
            fragment.insert("contains".to_string(), value);
        }
    }
    if let Some(limit) = spec.min_contains {
        fragment.insert("minContains".to_string(), Value::from(limit));
    }
    if let Some(limit) = spec.max_contains {
        fragment.insert("maxContains".to_string(), Value::from(limit));
    }

    // enum, const, default and meta are opaque: copied verbatim, never
    // recursed into, even when they hold nested objects.
    if let Some(values) = &spec.enum_values {
        fragment.insert("enum".to_string(), values.clone());
    }
    if let Some(value) = &spec.const_value {
        fragment.insert("const".to_string(), value.clone());
    }
    if let Some(value) = &spec.default_value {
        fragment.insert("default".to_string(), value.clone());
    }

    if let Some(not) = &spec.not {
        if let Some(value) = spec_fragment(not) {
            fragment.insert("not".to_string(), value);
        }
    }
    if let Some(specs) = &spec.one_of {
        fragment.insert("oneOf".to_string(), sequence(specs));
    }
    if let Some(specs) = &spec.any_of {
        fragment.insert("anyOf".to_string(), sequence(specs));
    }
    if let Some(specs) = &spec.all_of {
        fragment.insert("allOf".to_string(), sequence(specs));
    }
    if let Some(meta) = &spec.meta {
        if let Ok(value) = serde_json::to_value(meta) {
            fragment.insert("meta".to_string(), value);
        }
    }

    // `required` and `nullable` are control flags, consumed rather than
    // emitted: the first is promoted into the parent's `required` array, the
    // second was folded into the `type` keyword above.
    fragment
}

/// Normalized type-level options: the base keys merged into a compiled
/// document ahead of `properties` and `required`.
pub(crate) fn type_options_fragment(options: &TypeOptions) -> Map<String, Value> {
    let mut fragment = Map::new();

    if let Some(limit) = options.min_properties {
        fragment.insert("minProperties".to_string(), Value::from(limit));
    }
    if let Some(limit) = options.max_properties {
        fragment.insert("maxProperties".to_string(), Value::from(limit));
    }
    if let Some(patterns) = &options.pattern_properties {
        let mut map = Map::new();
        for (pattern, spec) in patterns {
            if let Some(value) = spec_fragment(spec) {
                map.insert(pattern.clone(), value);
            }
        }
        fragment.insert("patternProperties".to_string(), Value::Object(map));
    }
    if let Some(policy) = &options.additional_properties {
        match policy {
            AdditionalProperties::Deny => {
                fragment.insert("additionalProperties".to_string(), Value::Bool(false));
            }
            AdditionalProperties::Schema(spec) => {
                if let Some(value) = spec_fragment(spec) {
                    fragment.insert("additionalProperties".to_string(), value);
                }
            }
        }
    }
    if let Some(dependencies) = &options.dependent_required {
        let mut map = Map::new();
        for (field, requires) in dependencies {
            map.insert(field.clone(), json!(requires));
        }
        fragment.insert("dependentRequired".to_string(), Value::Object(map));
    }
    if let Some(not) = &options.not {
        if let Some(value) = spec_fragment(not) {
            fragment.insert("not".to_string(), value);
        }
    }
    if let Some(specs) = &options.one_of {
        fragment.insert("oneOf".to_string(), sequence(specs));
    }
    if let Some(specs) = &options.any_of {
        fragment.insert("anyOf".to_string(), sequence(specs));
    }
    if let Some(specs) = &options.all_of {
        fragment.insert("allOf".to_string(), sequence(specs));
    }
    if let Some(meta) = &options.meta {
        if let Ok(value) = serde_json::to_value(meta) {
            fragment.insert("meta".to_string(), value);
        }
    }

    // `required` here is read by referencing parents, and `nullable` is
    // folded into the document's own `type` keyword during assembly.
    fragment
}

fn type_keyword(tag: TypeTag, nullable: bool) -> Value {
    if nullable {
        json!([tag.keyword(), "null"])
    } else {
        Value::String(tag.keyword().to_string())
    }
}
