//! String kind: length bounds, patterns, and type checks.

use fieldspec_core::{Declared, PropertySpec, TypeDecl};
use fieldspec_validate::Engine;
use serde_json::json;

#[test]
fn length_bounds_gate_strings() {
    struct Tag;
    impl Declared for Tag {
        fn declare(ty: &mut TypeDecl) {
            ty.field("label", PropertySpec::string().min_length(2).max_length(5));
        }
    }

    let engine = Engine::new();
    assert!(engine.is_valid_type::<Tag>(&json!({ "label": "ab" })).unwrap());
    assert!(engine.is_valid_type::<Tag>(&json!({ "label": "abcde" })).unwrap());
    assert!(!engine.is_valid_type::<Tag>(&json!({ "label": "a" })).unwrap());
    assert!(!engine.is_valid_type::<Tag>(&json!({ "label": "abcdef" })).unwrap());
}

#[test]
fn patterns_must_match() {
    struct Slug;
    impl Declared for Slug {
        fn declare(ty: &mut TypeDecl) {
            ty.field("slug", PropertySpec::string().pattern("^[a-z]+(-[a-z]+)*$"));
        }
    }

    let engine = Engine::new();
    assert!(engine.is_valid_type::<Slug>(&json!({ "slug": "hello-world" })).unwrap());
    assert!(!engine.is_valid_type::<Slug>(&json!({ "slug": "Hello" })).unwrap());
    assert!(!engine.is_valid_type::<Slug>(&json!({ "slug": "a--b" })).unwrap());
}

#[test]
fn non_strings_are_rejected() {
    struct Name;
    impl Declared for Name {
        fn declare(ty: &mut TypeDecl) {
            ty.field("name", PropertySpec::string());
        }
    }

    let engine = Engine::new();
    assert!(!engine.is_valid_type::<Name>(&json!({ "name": 5 })).unwrap());
    assert!(!engine.is_valid_type::<Name>(&json!({ "name": true })).unwrap());
    assert!(!engine.is_valid_type::<Name>(&json!({ "name": null })).unwrap());
    assert!(engine.is_valid_type::<Name>(&json!({ "name": "" })).unwrap());
}

#[test]
fn violations_report_the_offending_path() {
    struct Form;
    impl Declared for Form {
        fn declare(ty: &mut TypeDecl) {
            ty.field("city", PropertySpec::string().min_length(3));
        }
    }

    let report = Engine::new()
        .check_type::<Form>(&json!({ "city": "ab" }))
        .unwrap();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].path, "/city");
    assert!(report.errors[0].schema_path.contains("minLength"));
}
