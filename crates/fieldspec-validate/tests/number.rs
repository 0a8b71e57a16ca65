//! Number kind: floats and integers alike, with fractional bounds.

use fieldspec_core::{Declared, PropertySpec, TypeDecl};
use fieldspec_validate::Engine;
use serde_json::json;

#[test]
fn integers_and_floats_are_both_numbers() {
    struct Reading;
    impl Declared for Reading {
        fn declare(ty: &mut TypeDecl) {
            ty.field("value", PropertySpec::number());
        }
    }

    let engine = Engine::new();
    assert!(engine.is_valid_type::<Reading>(&json!({ "value": 5 })).unwrap());
    assert!(engine.is_valid_type::<Reading>(&json!({ "value": 5.5 })).unwrap());
    assert!(!engine.is_valid_type::<Reading>(&json!({ "value": "5" })).unwrap());
}

#[test]
fn fractional_bounds_gate_numbers() {
    struct Temperature;
    impl Declared for Temperature {
        fn declare(ty: &mut TypeDecl) {
            ty.field("celsius", PropertySpec::number().minimum(-273.15).maximum(1000));
        }
    }

    let engine = Engine::new();
    assert!(engine
        .is_valid_type::<Temperature>(&json!({ "celsius": -273.15 }))
        .unwrap());
    assert!(engine.is_valid_type::<Temperature>(&json!({ "celsius": 22.5 })).unwrap());
    assert!(!engine
        .is_valid_type::<Temperature>(&json!({ "celsius": -300 }))
        .unwrap());
    assert!(!engine
        .is_valid_type::<Temperature>(&json!({ "celsius": 1000.5 }))
        .unwrap());
}

#[test]
fn exclusive_bounds_exclude_their_boundary() {
    struct Ratio;
    impl Declared for Ratio {
        fn declare(ty: &mut TypeDecl) {
            ty.field(
                "r",
                PropertySpec::number().exclusive_minimum(0).exclusive_maximum(1),
            );
        }
    }

    let engine = Engine::new();
    assert!(engine.is_valid_type::<Ratio>(&json!({ "r": 0.5 })).unwrap());
    assert!(!engine.is_valid_type::<Ratio>(&json!({ "r": 0 })).unwrap());
    assert!(!engine.is_valid_type::<Ratio>(&json!({ "r": 1 })).unwrap());
    assert!(!engine.is_valid_type::<Ratio>(&json!({ "r": 1.0 })).unwrap());
}

#[test]
fn fractional_multiples_divide_evenly() {
    struct Price;
    impl Declared for Price {
        fn declare(ty: &mut TypeDecl) {
            ty.field("amount", PropertySpec::number().multiple_of(0.5));
        }
    }

    let engine = Engine::new();
    assert!(engine.is_valid_type::<Price>(&json!({ "amount": 2.5 })).unwrap());
    assert!(engine.is_valid_type::<Price>(&json!({ "amount": 3 })).unwrap());
    assert!(!engine.is_valid_type::<Price>(&json!({ "amount": 2.3 })).unwrap());
}
