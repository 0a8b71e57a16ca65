//! Annotation Registry: process-wide storage of raw declaration data.
//!
//! Each declared type owns one record keyed by `TypeId`, holding its field
//! specifications in declaration order plus optional type-level options.
//! Registration is pure storage with last-write-wins semantics; the locks
//! exist only because statics demand `Sync`, and none is ever held while
//! user declaration code runs.

use std::any::{type_name, TypeId};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock};

use crate::spec::{Spec, TypeOptions};

/// A record shape whose fields carry validation intent.
///
/// The `declare` body performs the registration calls for the type. It runs
/// at most once per process, immediately before the type's first
/// compilation, so every registration is visible to every compile.
pub trait Declared: 'static {
    fn declare(ty: &mut TypeDecl);
}

/// Registration collector handed to [`Declared::declare`].
pub struct TypeDecl {
    key: TypeKey,
}

impl TypeDecl {
    /// Declare one named field. Re-declaring a name replaces its
    /// specification but keeps the original position.
    pub fn field(&mut self, name: impl Into<String>, spec: impl Into<Spec>) -> &mut Self {
        insert_field(self.key, name.into(), spec.into());
        self
    }

    /// Set the type-level options, replacing any previous value.
    pub fn options(&mut self, options: TypeOptions) -> &mut Self {
        insert_options(self.key, options);
        self
    }
}

/// Handle to a declared type, usable wherever a specification expects a
/// nested schema. Carries the type identity plus a hook that forces the
/// type's declarations to run before they are read.
#[derive(Clone, Copy)]
pub struct TypeRef {
    pub(crate) key: TypeKey,
    ensure: fn(),
}

impl TypeRef {
    pub fn of<T: Declared>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            ensure: declare_once::<T>,
        }
    }

    /// Diagnostic name of the referenced type.
    pub fn type_name(&self) -> &'static str {
        self.key.name
    }

    /// Run the referenced type's declarations if they have not run yet.
    pub(crate) fn ensure_declared(&self) {
        (self.ensure)()
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRef").field(&self.key.name).finish()
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.key.id == other.key.id
    }
}

impl Eq for TypeRef {}

/// Stable identity for a declared type: `TypeId` plus the type name kept for
/// diagnostics and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TypeKey {
    pub(crate) id: TypeId,
    pub(crate) name: &'static str,
}

impl TypeKey {
    pub(crate) fn of<T: Declared>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }
}

/// Everything registered for one declared type.
#[derive(Debug, Clone, Default)]
pub(crate) struct TypeRecord {
    pub(crate) fields: IndexMap<String, Spec>,
    pub(crate) options: Option<TypeOptions>,
}

static REGISTRY: LazyLock<RwLock<HashMap<TypeId, TypeRecord>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Types whose `declare` body has been started (and, absent a panic there,
/// finished). Marked before the body runs so a self-referential declaration
/// cannot recurse into it.
static DECLARED: LazyLock<Mutex<HashSet<TypeId>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Register (or overwrite) one field specification for `T`.
///
/// Equivalent to [`TypeDecl::field`] for callers driving registration
/// imperatively instead of through [`Declared::declare`].
pub fn register_field<T: Declared>(name: impl Into<String>, spec: impl Into<Spec>) {
    insert_field(TypeKey::of::<T>(), name.into(), spec.into());
}

/// Store the type-level options for `T`, replacing any previous value.
pub fn register_type_options<T: Declared>(options: TypeOptions) {
    insert_options(TypeKey::of::<T>(), options);
}

fn insert_field(key: TypeKey, name: String, spec: Spec) {
    let mut registry = REGISTRY.write();
    let record = registry.entry(key.id).or_default();
    record.fields.insert(name, spec);
}

fn insert_options(key: TypeKey, options: TypeOptions) {
    REGISTRY.write().entry(key.id).or_default().options = Some(options);
}

/// Run `T::declare` if it has not run in this process yet.
pub(crate) fn declare_once<T: Declared>() {
    let fresh = DECLARED.lock().insert(TypeId::of::<T>());
    if fresh {
        let mut decl = TypeDecl {
            key: TypeKey::of::<T>(),
        };
        T::declare(&mut decl);
    }
}

/// Clone out the registered record for a type. A type with no registrations
/// yields an empty record; zero-field types are legal.
pub(crate) fn snapshot(key: TypeKey) -> TypeRecord {
    REGISTRY.read().get(&key.id).cloned().unwrap_or_default()
}

/// The type-level `required` flag of a referenced type, which governs
/// whether fields referencing it are mandatory in their parent.
pub(crate) fn ref_required(reference: &TypeRef) -> bool {
    reference.ensure_declared();
    REGISTRY
        .read()
        .get(&reference.key.id)
        .and_then(|record| record.options.as_ref())
        .is_some_and(|options| options.required)
}
