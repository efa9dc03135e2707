#![expect(clippy::unwrap_used, reason = "tests build fixed unions")]

use pretty_assertions::assert_eq;

use super::*;
use crate::errors::UnionError;
use crate::value::Value;

fn shape_union() -> Union {
    let schema = UnionSchema::new("Shape")
        .variant("Circle", ["radius"])
        .variant("Rect", ["width", "height"])
        .variant("Point", []);
    Union::build(schema).unwrap()
}

// Compilation

#[test]
fn test_build_compiles_declared_variants() {
    let union = shape_union();
    assert_eq!(union.name(), "Shape");
    assert_eq!(union.variant_count(), 3);
    assert!(union.contains("Circle"));
    assert!(union.contains("Rect"));
    assert!(union.contains("Point"));
    assert!(!union.contains("Triangle"));
}

#[test]
fn test_tags_iterate_in_declaration_order() {
    let union = shape_union();
    let tags: Vec<&str> = union.tags().map(Tag::as_str).collect();
    assert_eq!(tags, vec!["Circle", "Rect", "Point"]);
}

#[test]
fn test_ctor_lookup() {
    let union = shape_union();
    let circle = union.ctor("Circle").unwrap();
    assert_eq!(circle.tag(), "Circle");
    assert_eq!(circle.union_name(), "Shape");
    assert!(union.ctor("Triangle").is_none());
}

#[test]
fn test_build_rejects_duplicate_tag() {
    let schema = UnionSchema::new("Shape")
        .variant("Circle", ["radius"])
        .variant("Circle", ["diameter"]);
    let err = Union::build(schema).unwrap_err();
    assert_eq!(
        err,
        UnionError::DuplicateTag {
            union: "Shape".to_string(),
            tag: "Circle".to_string(),
        }
    );
}

#[test]
fn test_build_rejects_duplicate_field() {
    let schema = UnionSchema::new("Pair").variant("Of", ["x", "x"]);
    let err = Union::build(schema).unwrap_err();
    assert_eq!(
        err,
        UnionError::DuplicateField {
            union: "Pair".to_string(),
            tag: "Of".to_string(),
            field: "x".to_string(),
        }
    );
}

#[test]
fn test_build_rejects_empty_union() {
    let err = Union::build(UnionSchema::new("Never")).unwrap_err();
    assert_eq!(
        err,
        UnionError::EmptyUnion {
            union: "Never".to_string(),
        }
    );
}

// Construction

#[test]
fn test_construct_stamps_tag_and_payload() {
    let union = shape_union();
    let circle = union.ctor("Circle").unwrap();
    let value = circle.construct([("radius", Value::Int(3))]).unwrap();
    assert_eq!(value.tag(), "Circle");
    assert_eq!(value.union_name(), "Shape");
    assert_eq!(value.field("radius"), Some(&Value::Int(3)));
    assert_eq!(value.fields().count(), 1);
}

#[test]
fn test_construct_is_pure() {
    let union = shape_union();
    let circle = union.ctor("Circle").unwrap();
    let a = circle.construct([("radius", Value::Int(3))]).unwrap();
    let b = circle.construct([("radius", Value::Int(3))]).unwrap();
    let c = circle.construct([("radius", Value::Int(4))]).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_construct_normalizes_field_order() {
    let union = shape_union();
    let rect = union.ctor("Rect").unwrap();
    let forward = rect
        .construct([("width", Value::Int(3)), ("height", Value::Int(4))])
        .unwrap();
    let reversed = rect
        .construct([("height", Value::Int(4)), ("width", Value::Int(3))])
        .unwrap();
    assert_eq!(forward, reversed);
    let names: Vec<&str> = forward.fields().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["width", "height"]);
}

#[test]
fn test_construct_fieldless_variant() {
    let union = shape_union();
    let point = union.ctor("Point").unwrap();
    let value = point.construct(Fields::new()).unwrap();
    assert_eq!(value.tag(), "Point");
    assert_eq!(value.fields().count(), 0);
}

#[test]
fn test_construct_rejects_missing_field() {
    let union = shape_union();
    let rect = union.ctor("Rect").unwrap();
    let err = rect.construct([("width", Value::Int(3))]).unwrap_err();
    assert_eq!(
        err,
        UnionError::MissingField {
            union: "Shape".to_string(),
            tag: "Rect".to_string(),
            field: "height".to_string(),
        }
    );
}

#[test]
fn test_construct_rejects_unknown_field() {
    let union = shape_union();
    let circle = union.ctor("Circle").unwrap();
    let err = circle
        .construct([("radius", Value::Int(3)), ("color", Value::string("red"))])
        .unwrap_err();
    assert_eq!(
        err,
        UnionError::UnknownField {
            union: "Shape".to_string(),
            tag: "Circle".to_string(),
            field: "color".to_string(),
        }
    );
}

#[test]
fn test_construct_rejects_field_supplied_twice() {
    let union = shape_union();
    let circle = union.ctor("Circle").unwrap();
    let fields = Fields::new()
        .with("radius", Value::Int(3))
        .with("radius", Value::Int(4));
    let err = circle.construct(fields).unwrap_err();
    assert_eq!(
        err,
        UnionError::DuplicateFieldValue {
            union: "Shape".to_string(),
            tag: "Circle".to_string(),
            field: "radius".to_string(),
        }
    );
}

#[test]
fn test_equality_distinguishes_unions() {
    let a = Union::build(UnionSchema::new("A").variant("X", [])).unwrap();
    let b = Union::build(UnionSchema::new("B").variant("X", [])).unwrap();
    let from_a = a.ctor("X").unwrap().construct(Fields::new()).unwrap();
    let from_b = b.ctor("X").unwrap().construct(Fields::new()).unwrap();
    assert_ne!(from_a, from_b);

    // Separately compiled but identical unions compare structurally.
    let a2 = Union::build(UnionSchema::new("A").variant("X", [])).unwrap();
    let from_a2 = a2.ctor("X").unwrap().construct(Fields::new()).unwrap();
    assert_eq!(from_a, from_a2);
}

// Fields builder

#[test]
fn test_fields_builder() {
    let fields = Fields::new()
        .with("width", Value::Int(3))
        .with("height", Value::Int(4));
    assert_eq!(fields.len(), 2);
    assert!(!fields.is_empty());
    assert!(Fields::new().is_empty());
}

#[test]
fn test_fields_from_iterator() {
    let union = shape_union();
    let rect = union.ctor("Rect").unwrap();
    let entries = vec![
        ("width".to_string(), Value::Int(3)),
        ("height".to_string(), Value::Int(4)),
    ];
    let fields: Fields = entries.into_iter().collect();
    let value = rect.construct(fields).unwrap();
    assert_eq!(value.field("height"), Some(&Value::Int(4)));
}
