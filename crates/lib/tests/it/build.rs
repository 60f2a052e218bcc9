//! Builder integration tests

use dotbag::{
    build::{build_bag, build_mapping},
    container::{Key, Value},
    mapping, record,
};

#[test]
fn test_build_mapping_wraps_scalars() {
    assert_eq!(build_mapping(Value::Null), mapping![Value::Null]);
    assert_eq!(build_mapping("text"), mapping!["text"]);
    assert_eq!(build_mapping(1.5), mapping![1.5]);
}

#[test]
fn test_build_mapping_converts_records_deeply() {
    let source = record! {
        "name" => "x",
        "7" => record! { "inner" => mapping![record! { "deep" => true }] },
    };

    let built = build_mapping(source);

    assert_eq!(built.get("name"), Some(&Value::from("x")));
    let expected_inner = mapping! {
        "inner" => mapping![mapping! { "deep" => true }],
    };
    assert_eq!(built.get(7), Some(&Value::from(expected_inner)));
    assert!(built.keys().any(|key| *key == Key::Index(7)));
}

#[test]
fn test_build_mapping_leaves_nested_scalars() {
    let built = build_mapping(mapping![1, "two", mapping![3]]);
    assert_eq!(built, mapping![1, "two", mapping![3]]);
}

#[test]
fn test_build_bag_from_record() {
    let bag = build_bag(record! { "a" => record! { "b" => 1 } }).unwrap();
    assert_eq!(*bag.get("a.b").unwrap(), 1);
}

#[test]
fn test_build_bag_from_mapping() {
    let bag = build_bag(mapping! { "x" => mapping![1, 2], 3 => "three" }).unwrap();

    let keys: Vec<&str> = bag.keys().collect();
    assert_eq!(keys, vec!["x", "3"]);
    assert_eq!(*bag.get("x.1").unwrap(), 2);
    assert_eq!(*bag.get("3").unwrap(), "three");
}

#[test]
fn test_build_bag_rejects_scalars() {
    for scalar in [Value::Null, Value::from(1), Value::from("s")] {
        let err = build_bag(scalar).unwrap_err();
        assert!(err.is_type_error());
    }
}
