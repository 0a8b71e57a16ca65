//! Integer kind: whole-number checks and numeric bounds.

use fieldspec_core::{Declared, PropertySpec, TypeDecl};
use fieldspec_validate::Engine;
use serde_json::json;

#[test]
fn fractional_numbers_are_not_integers() {
    struct Count;
    impl Declared for Count {
        fn declare(ty: &mut TypeDecl) {
            ty.field("n", PropertySpec::integer());
        }
    }

    let engine = Engine::new();
    assert!(engine.is_valid_type::<Count>(&json!({ "n": 3 })).unwrap());
    assert!(engine.is_valid_type::<Count>(&json!({ "n": -7 })).unwrap());
    assert!(!engine.is_valid_type::<Count>(&json!({ "n": 1.5 })).unwrap());
    assert!(!engine.is_valid_type::<Count>(&json!({ "n": "3" })).unwrap());
}

#[test]
fn inclusive_bounds_admit_their_boundary() {
    struct Percent;
    impl Declared for Percent {
        fn declare(ty: &mut TypeDecl) {
            ty.field("p", PropertySpec::integer().minimum(0).maximum(100));
        }
    }

    let engine = Engine::new();
    assert!(engine.is_valid_type::<Percent>(&json!({ "p": 0 })).unwrap());
    assert!(engine.is_valid_type::<Percent>(&json!({ "p": 100 })).unwrap());
    assert!(!engine.is_valid_type::<Percent>(&json!({ "p": -1 })).unwrap());
    assert!(!engine.is_valid_type::<Percent>(&json!({ "p": 101 })).unwrap());
}

#[test]
fn exclusive_bounds_exclude_their_boundary() {
    struct Port;
    impl Declared for Port {
        fn declare(ty: &mut TypeDecl) {
            ty.field(
                "port",
                PropertySpec::integer().exclusive_minimum(0).exclusive_maximum(65536),
            );
        }
    }

    let engine = Engine::new();
    assert!(engine.is_valid_type::<Port>(&json!({ "port": 1 })).unwrap());
    assert!(engine.is_valid_type::<Port>(&json!({ "port": 65535 })).unwrap());
    assert!(!engine.is_valid_type::<Port>(&json!({ "port": 0 })).unwrap());
    assert!(!engine.is_valid_type::<Port>(&json!({ "port": 65536 })).unwrap());
}

#[test]
fn multiples_must_divide_evenly() {
    struct Step;
    impl Declared for Step {
        fn declare(ty: &mut TypeDecl) {
            ty.field("ms", PropertySpec::integer().multiple_of(5));
        }
    }

    let engine = Engine::new();
    assert!(engine.is_valid_type::<Step>(&json!({ "ms": 10 })).unwrap());
    assert!(engine.is_valid_type::<Step>(&json!({ "ms": 0 })).unwrap());
    assert!(!engine.is_valid_type::<Step>(&json!({ "ms": 7 })).unwrap());
}
