//! PathDescent integration tests

use dotbag::{
    container::{Mapping, Record, Value},
    descend::{Extension, descend, descend_mut},
    path::split,
};

use crate::helpers::*;

#[test]
fn test_descend_follows_integer_and_named_keys() {
    let root = mixed_tree();
    assert_eq!(descend(&root, &split("three.3.0")), Ok(&Value::from(4)));
    assert_eq!(descend(&root, &split("one")), Ok(&Value::from(1)));
}

#[test]
fn test_descend_deep_records() {
    let root = nested_records(5, "leaf");
    let node = descend(&root, &split("l0.l1.l2.l3.l4")).unwrap();
    assert_eq!(*node, "leaf");
}

#[test]
fn test_descend_mut_extension_creates_whole_chain() {
    let mut root = empty_record();
    let node = descend_mut(&mut root, &split("a.b.c"), Some(&Extension::EmptyRecord)).unwrap();
    *node = Value::from(1);

    assert_eq!(root, nested_records_named(&["a", "b", "c"], 1));
}

#[test]
fn test_descend_mut_mixed_extensions() {
    let mut root = Value::from(Mapping::new());
    descend_mut(&mut root, &split("list"), Some(&Extension::EmptyMapping)).unwrap();
    descend_mut(&mut root, &split("list.0"), Some(&Extension::EmptyRecord)).unwrap();

    let list = root.as_mapping().and_then(|m| m.get("list")).unwrap();
    assert_eq!(list.as_mapping().map(Mapping::len), Some(1));
    assert_eq!(
        list.as_mapping().and_then(|m| m.get(0)),
        Some(&Value::from(Record::new()))
    );
}

#[test]
fn test_extension_is_only_used_for_missing_nodes() {
    let mut root = mixed_tree();
    let before = root.clone();
    descend_mut(&mut root, &split("three.3"), Some(&Extension::EmptyRecord)).unwrap();
    assert_eq!(root, before);
}

fn nested_records_named(names: &[&str], leaf: impl Into<Value>) -> Value {
    let mut value = leaf.into();
    for name in names.iter().rev() {
        value = Value::from(Record::new().with(*name, value));
    }
    value
}
