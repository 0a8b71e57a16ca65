//! Raw annotation data: property specifications and type-level options.
//!
//! Values built here are inert. Nothing checks that a constraint suits the
//! declared kind; the data is stored as written and judged only by the
//! consuming validation engine once compiled into a document.

use indexmap::IndexMap;
use serde_json::{Number, Value};

use crate::meta::{Format, Metadata};
use crate::registry::TypeRef;

/// Primitive kind tag for a property specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    String,
    /// Authoring alias for a string constrained by a `format` keyword.
    /// Collapses to `string` in the emitted fragment.
    FormattedString,
    Integer,
    Number,
    Boolean,
    Array,
}

impl TypeTag {
    /// The `type` keyword value emitted for this tag.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeTag::String | TypeTag::FormattedString => "string",
            TypeTag::Integer => "integer",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::Array => "array",
        }
    }
}

/// A schema-bearing position: an inline specification, a reference to another
/// declared type, or a declared-but-unspecified placeholder.
///
/// `Unset` exists so a field can be named without constraining it; it
/// normalizes to nothing and the field stays out of the compiled document.
#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    Inline(Box<PropertySpec>),
    Ref(TypeRef),
    Unset,
}

impl From<PropertySpec> for Spec {
    fn from(spec: PropertySpec) -> Self {
        Spec::Inline(Box::new(spec))
    }
}

impl From<TypeRef> for Spec {
    fn from(reference: TypeRef) -> Self {
        Spec::Ref(reference)
    }
}

/// Annotation data for one field or one nested sub-schema.
///
/// Constraints are free-standing. A specification without a type tag is a
/// bare constraint bag, which composition sub-schemas routinely are; the
/// control flags `required` and `nullable` are consumed during compilation
/// and never appear in the emitted fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertySpec {
    pub(crate) ty: Option<TypeTag>,
    pub(crate) format: Option<Format>,
    pub(crate) min_length: Option<u64>,
    pub(crate) max_length: Option<u64>,
    pub(crate) pattern: Option<String>,
    pub(crate) minimum: Option<Number>,
    pub(crate) maximum: Option<Number>,
    pub(crate) exclusive_minimum: Option<Number>,
    pub(crate) exclusive_maximum: Option<Number>,
    pub(crate) multiple_of: Option<Number>,
    pub(crate) min_items: Option<u64>,
    pub(crate) max_items: Option<u64>,
    pub(crate) unique_items: Option<bool>,
    pub(crate) prefix_items: Option<Vec<Spec>>,
    pub(crate) items: Option<Spec>,
    pub(crate) contains: Option<Spec>,
    pub(crate) min_contains: Option<u64>,
    pub(crate) max_contains: Option<u64>,
    pub(crate) enum_values: Option<Value>,
    pub(crate) const_value: Option<Value>,
    pub(crate) default_value: Option<Value>,
    pub(crate) not: Option<Spec>,
    pub(crate) one_of: Option<Vec<Spec>>,
    pub(crate) any_of: Option<Vec<Spec>>,
    pub(crate) all_of: Option<Vec<Spec>>,
    pub(crate) meta: Option<Metadata>,
    pub(crate) required: bool,
    pub(crate) nullable: bool,
}

impl PropertySpec {
    /// Bare constraint bag with no type tag.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string() -> Self {
        Self {
            ty: Some(TypeTag::String),
            ..Self::default()
        }
    }

    /// The formatted-string alias: a string plus a `format` constraint.
    pub fn formatted(format: Format) -> Self {
        Self {
            ty: Some(TypeTag::FormattedString),
            format: Some(format),
            ..Self::default()
        }
    }

    pub fn integer() -> Self {
        Self {
            ty: Some(TypeTag::Integer),
            ..Self::default()
        }
    }

    pub fn number() -> Self {
        Self {
            ty: Some(TypeTag::Number),
            ..Self::default()
        }
    }

    pub fn boolean() -> Self {
        Self {
            ty: Some(TypeTag::Boolean),
            ..Self::default()
        }
    }

    pub fn array() -> Self {
        Self {
            ty: Some(TypeTag::Array),
            ..Self::default()
        }
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn min_length(mut self, limit: u64) -> Self {
        self.min_length = Some(limit);
        self
    }

    pub fn max_length(mut self, limit: u64) -> Self {
        self.max_length = Some(limit);
        self
    }

    /// Regular expression the value must match. Stored verbatim; an
    /// unparseable pattern surfaces from the engine, not from here.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn minimum(mut self, bound: impl Into<f64>) -> Self {
        self.minimum = json_number(bound.into());
        self
    }

    pub fn maximum(mut self, bound: impl Into<f64>) -> Self {
        self.maximum = json_number(bound.into());
        self
    }

    pub fn exclusive_minimum(mut self, bound: impl Into<f64>) -> Self {
        self.exclusive_minimum = json_number(bound.into());
        self
    }

    pub fn exclusive_maximum(mut self, bound: impl Into<f64>) -> Self {
        self.exclusive_maximum = json_number(bound.into());
        self
    }

    pub fn multiple_of(mut self, step: impl Into<f64>) -> Self {
        self.multiple_of = json_number(step.into());
        self
    }

    pub fn min_items(mut self, limit: u64) -> Self {
        self.min_items = Some(limit);
        self
    }

    pub fn max_items(mut self, limit: u64) -> Self {
        self.max_items = Some(limit);
        self
    }

    pub fn unique_items(mut self, unique: bool) -> Self {
        self.unique_items = Some(unique);
        self
    }

    /// Positional schemas for the leading array elements.
    pub fn prefix_items<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Spec>,
    {
        self.prefix_items = Some(specs.into_iter().map(Into::into).collect());
        self
    }

    /// Schema for array elements (after any `prefixItems`).
    pub fn items(mut self, spec: impl Into<Spec>) -> Self {
        self.items = Some(spec.into());
        self
    }

    pub fn contains(mut self, spec: impl Into<Spec>) -> Self {
        self.contains = Some(spec.into());
        self
    }

    pub fn min_contains(mut self, limit: u64) -> Self {
        self.min_contains = Some(limit);
        self
    }

    pub fn max_contains(mut self, limit: u64) -> Self {
        self.max_contains = Some(limit);
        self
    }

    /// Allowed values, copied into the fragment verbatim.
    pub fn enum_values(mut self, values: impl Into<Value>) -> Self {
        self.enum_values = Some(values.into());
        self
    }

    /// Exact required value, copied into the fragment verbatim.
    pub fn const_value(mut self, value: impl Into<Value>) -> Self {
        self.const_value = Some(value.into());
        self
    }

    /// Default value annotation, copied into the fragment verbatim.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn not(mut self, spec: impl Into<Spec>) -> Self {
        self.not = Some(spec.into());
        self
    }

    pub fn one_of<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Spec>,
    {
        self.one_of = Some(specs.into_iter().map(Into::into).collect());
        self
    }

    pub fn any_of<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Spec>,
    {
        self.any_of = Some(specs.into_iter().map(Into::into).collect());
        self
    }

    pub fn all_of<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Spec>,
    {
        self.all_of = Some(specs.into_iter().map(Into::into).collect());
        self
    }

    pub fn meta(mut self, meta: Metadata) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Mark the field as mandatory in its parent object. Control flag,
    /// promoted into the parent's `required` array.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Allow `null` in addition to the declared kind. Control flag, folded
    /// into the `type` keyword as a `null` union.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}

/// Type-level options for a declared type: object-shape constraints plus the
/// `required`/`nullable` control flags the type carries when embedded as a
/// field of another declared type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeOptions {
    pub(crate) min_properties: Option<u64>,
    pub(crate) max_properties: Option<u64>,
    pub(crate) pattern_properties: Option<IndexMap<String, Spec>>,
    pub(crate) additional_properties: Option<AdditionalProperties>,
    pub(crate) dependent_required: Option<IndexMap<String, Vec<String>>>,
    pub(crate) not: Option<Spec>,
    pub(crate) one_of: Option<Vec<Spec>>,
    pub(crate) any_of: Option<Vec<Spec>>,
    pub(crate) all_of: Option<Vec<Spec>>,
    pub(crate) meta: Option<Metadata>,
    pub(crate) required: bool,
    pub(crate) nullable: bool,
}

impl TypeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_properties(mut self, limit: u64) -> Self {
        self.min_properties = Some(limit);
        self
    }

    pub fn max_properties(mut self, limit: u64) -> Self {
        self.max_properties = Some(limit);
        self
    }

    /// Schema for keys matching `pattern`. Repeated calls accumulate.
    pub fn pattern_property(mut self, pattern: impl Into<String>, spec: impl Into<Spec>) -> Self {
        self.pattern_properties
            .get_or_insert_with(IndexMap::new)
            .insert(pattern.into(), spec.into());
        self
    }

    /// Policy for keys not covered by `properties` or `patternProperties`.
    pub fn additional_properties(mut self, policy: impl Into<AdditionalProperties>) -> Self {
        self.additional_properties = Some(policy.into());
        self
    }

    /// When `field` is present, every name in `requires` must be too.
    /// Repeated calls accumulate.
    pub fn dependent_required<I, S>(mut self, field: impl Into<String>, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependent_required
            .get_or_insert_with(IndexMap::new)
            .insert(field.into(), requires.into_iter().map(Into::into).collect());
        self
    }

    pub fn not(mut self, spec: impl Into<Spec>) -> Self {
        self.not = Some(spec.into());
        self
    }

    pub fn one_of<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Spec>,
    {
        self.one_of = Some(specs.into_iter().map(Into::into).collect());
        self
    }

    pub fn any_of<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Spec>,
    {
        self.any_of = Some(specs.into_iter().map(Into::into).collect());
        self
    }

    pub fn all_of<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Spec>,
    {
        self.all_of = Some(specs.into_iter().map(Into::into).collect());
        self
    }

    pub fn meta(mut self, meta: Metadata) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Whether fields referencing this type are mandatory in their parent.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Allow `null` where this type is expected.
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}

/// Policy for object keys not named in `properties`.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    /// Extra keys are rejected (`additionalProperties: false`).
    Deny,
    /// Extra keys must satisfy this schema.
    Schema(Spec),
}

impl From<PropertySpec> for AdditionalProperties {
    fn from(spec: PropertySpec) -> Self {
        AdditionalProperties::Schema(spec.into())
    }
}

impl From<TypeRef> for AdditionalProperties {
    fn from(reference: TypeRef) -> Self {
        AdditionalProperties::Schema(reference.into())
    }
}

impl From<Spec> for AdditionalProperties {
    fn from(spec: Spec) -> Self {
        AdditionalProperties::Schema(spec)
    }
}

/// JSON numbers keep their integer-ness: whole finite values emit as JSON
/// integers, fractional ones as floats. Keeps `maximum: 3` from compiling to
/// `maximum: 3.0`. Non-finite input has no JSON form and yields no number,
/// so the keyword is omitted.
fn json_number(value: f64) -> Option<Number> {
    if value.is_finite() && value.fract() == 0.0 && (i64::MIN as f64..=i64::MAX as f64).contains(&value)
    {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}
