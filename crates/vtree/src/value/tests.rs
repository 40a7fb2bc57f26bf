#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn kind_tags() {
    assert_eq!(Value::scalar(1.0).kind(), ValueKind::Scalar);
    assert_eq!(Value::list().kind(), ValueKind::List);
    assert_eq!(Value::dictionary().kind(), ValueKind::Dictionary);
    assert_eq!(Value::grid().kind(), ValueKind::Grid);
}

#[test]
fn predicates() {
    assert!(Value::scalar(0.0).is_scalar());
    assert!(Value::list().is_list());
    assert!(Value::dictionary().is_dictionary());
    assert!(Value::grid().is_grid());
    assert!(!Value::grid().is_scalar());
}

#[test]
fn downcast_to_matching_variant() {
    let value = Value::scalar(2.5);
    assert_eq!(value.as_f64(), Ok(2.5));
    assert_eq!(value.as_scalar().map(|s| s.get()), Ok(2.5));
}

#[test]
fn downcast_to_wrong_variant_is_type_mismatch() {
    let value = Value::scalar(2.5);
    assert_eq!(
        value.as_grid().err(),
        Some(ValueError::TypeMismatch {
            expected: ValueKind::Grid,
            found: Some(ValueKind::Scalar),
        })
    );
    assert!(matches!(
        Value::list().as_dictionary(),
        Err(ValueError::TypeMismatch {
            expected: ValueKind::Dictionary,
            ..
        })
    ));
}

#[test]
fn mutable_downcast() {
    let mut value = Value::list();
    value.as_list_mut().unwrap().add_scalar(1.0);
    assert_eq!(value.as_list().unwrap().len(), 1);
    assert!(value.as_scalar_mut().is_err());
}

#[test]
fn downcast_null_slot() {
    let err = downcast_slot::<Scalar>(None).err();
    assert_eq!(
        err,
        Some(ValueError::TypeMismatch {
            expected: ValueKind::Scalar,
            found: None,
        })
    );
}

#[test]
fn install_replaces_previous_occupant() {
    let mut slot = Some(Value::scalar(1.0));
    let grid = install(&mut slot, Grid::with_shape(1, 1, 1, 1));
    grid.add_scalar(0, 0, 9.0).unwrap();
    assert!(slot.as_ref().is_some_and(Value::is_grid));
}

#[test]
fn conversions() {
    assert_eq!(Value::from(3.0), Value::scalar(3.0));
    assert_eq!(Value::from(List::new()), Value::list());
}

#[test]
fn display_uses_debug_encoding() {
    let list: List = vec![Value::scalar(1.0), Value::scalar(2.0)].into_iter().collect();
    assert_eq!(Value::from(list).to_string(), "(1,2)");
}

#[test]
fn deep_clone_is_independent() {
    let mut root = Dictionary::new();
    root.add_list("items").add_scalar(1.0);
    let original = Value::from(root);

    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.as_dictionary_mut()
        .unwrap()
        .get_list_mut("items")
        .unwrap()
        .add_scalar(2.0);

    assert_ne!(copy, original);
    let items = original.as_dictionary().unwrap().get_list("items").unwrap();
    assert_eq!(items.len(), 1);
}

#[test]
fn deeply_nested_tree_clones_compares_and_drops() {
    let mut root = Value::list();
    let mut cursor = root.as_list_mut().unwrap();
    for _ in 0..50_000 {
        cursor = cursor.add_list();
    }
    cursor.add_scalar(1.0);

    let copy = root.clone();
    assert_eq!(copy, root);
    assert!(root.to_compact_string().ends_with('1'));
}

#[test]
fn tree_holding_nan_equals_its_clone() {
    let list: List = vec![Value::scalar(f64::NAN), Value::scalar(1.0)]
        .into_iter()
        .collect();
    let original = Value::from(list);
    assert_eq!(original.clone(), original);
}
