use dotbag::{
    Error,
    container::{ContainerError, Record, Value},
    mapping, record,
};

// ==========================
// FIXTURES
// ==========================

/// The mixed record/list tree most path tests run against.
///
/// `three` is a list with a gap: keys 0, 1 and 3.
pub fn mixed_tree() -> Value {
    Value::from(record! {
        "one" => 1,
        "three" => mapping! { 0 => 1, 1 => 2, 3 => mapping![4, 5, 6] },
    })
}

/// A record nested `depth` levels deep, ending in `leaf`
pub fn nested_records(depth: usize, leaf: impl Into<Value>) -> Value {
    let mut value = leaf.into();
    for level in (0..depth).rev() {
        value = Value::from(Record::new().with(format!("l{level}"), value));
    }
    value
}

/// An empty record as a container value
pub fn empty_record() -> Value {
    Value::from(Record::new())
}

// ==========================
// ASSERTIONS
// ==========================

/// Assert that an error is a `NoSuchIndex` for `index` after `path`
pub fn assert_no_such_index(err: &Error, index: &str, path: &str) {
    match err {
        Error::Container(ContainerError::NoSuchIndex {
            index: actual_index,
            path: actual_path,
        }) => {
            assert_eq!(actual_index, index, "Index mismatch");
            assert_eq!(actual_path, path, "Path mismatch");
        }
        other => panic!("Expected NoSuchIndex, got: {other:?}"),
    }
}

/// Assert that an error is a `NoSuchProperty` for `property` after `path`
pub fn assert_no_such_property(err: &Error, property: &str, path: &str) {
    match err {
        Error::Container(ContainerError::NoSuchProperty {
            property: actual_property,
            path: actual_path,
        }) => {
            assert_eq!(actual_property, property, "Property mismatch");
            assert_eq!(actual_path, path, "Path mismatch");
        }
        other => panic!("Expected NoSuchProperty, got: {other:?}"),
    }
}

/// Assert that an error is a `CannotDescendPath` through `type_name` at `path`
pub fn assert_cannot_descend(err: &Error, type_name: &str, path: &str) {
    match err {
        Error::Container(ContainerError::CannotDescendPath {
            type_name: actual_type,
            path: actual_path,
        }) => {
            assert_eq!(actual_type, type_name, "Type mismatch");
            assert_eq!(actual_path, path, "Path mismatch");
        }
        other => panic!("Expected CannotDescendPath, got: {other:?}"),
    }
}
