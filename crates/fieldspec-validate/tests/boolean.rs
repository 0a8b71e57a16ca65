//! Boolean kind.

use fieldspec_core::{Declared, PropertySpec, TypeDecl};
use fieldspec_validate::Engine;
use serde_json::json;

#[test]
fn booleans_accept_only_true_and_false() {
    struct Toggle;
    impl Declared for Toggle {
        fn declare(ty: &mut TypeDecl) {
            ty.field("on", PropertySpec::boolean());
        }
    }

    let engine = Engine::new();
    assert!(engine.is_valid_type::<Toggle>(&json!({ "on": true })).unwrap());
    assert!(engine.is_valid_type::<Toggle>(&json!({ "on": false })).unwrap());
    assert!(!engine.is_valid_type::<Toggle>(&json!({ "on": "true" })).unwrap());
    assert!(!engine.is_valid_type::<Toggle>(&json!({ "on": 1 })).unwrap());
    assert!(!engine.is_valid_type::<Toggle>(&json!({ "on": null })).unwrap());
}

#[test]
fn nullable_booleans_also_accept_null() {
    struct TriState;
    impl Declared for TriState {
        fn declare(ty: &mut TypeDecl) {
            ty.field("state", PropertySpec::boolean().nullable(true).required(true));
        }
    }

    let engine = Engine::new();
    assert!(engine.is_valid_type::<TriState>(&json!({ "state": null })).unwrap());
    assert!(engine.is_valid_type::<TriState>(&json!({ "state": true })).unwrap());
    assert!(!engine.is_valid_type::<TriState>(&json!({ "state": "x" })).unwrap());
    assert!(!engine.is_valid_type::<TriState>(&json!({})).unwrap());
}
