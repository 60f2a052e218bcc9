//! Value integration tests

use dotbag::{
    container::{ContainerError, Mapping, Record, Value},
    mapping, record,
};

#[test]
fn test_value_accessors() {
    assert_eq!(Value::from(true).as_bool(), Some(true));
    assert_eq!(Value::from(3).as_int(), Some(3));
    assert_eq!(Value::from(2.5).as_float(), Some(2.5));
    assert_eq!(Value::from("s").as_text(), Some("s"));
    assert!(Value::from(mapping![1]).as_mapping().is_some());
    assert!(Value::from(Record::new()).as_record().is_some());

    // Accessors never coerce
    assert_eq!(Value::from("3").as_int(), None);
    assert_eq!(Value::from(3).as_float(), None);
    assert!(Value::Null.as_mapping().is_none());
}

#[test]
fn test_value_try_from() {
    let text = Value::from("hello");
    let as_str: &str = (&text).try_into().unwrap();
    assert_eq!(as_str, "hello");

    let err = bool::try_from(&text).unwrap_err();
    assert_eq!(
        err,
        ContainerError::UnsupportedType {
            type_name: "text".to_string()
        }
    );

    let mapping = Mapping::try_from(Value::from(vec!["a", "b"])).unwrap();
    assert_eq!(mapping, mapping!["a", "b"]);
}

#[test]
fn test_value_display() {
    let value = Value::from(record! {
        "list" => mapping![1, "two"],
        "nothing" => Value::Null,
        "flag" => false,
    });
    assert_eq!(value.to_string(), "{list: [0: 1, 1: two], nothing: null, flag: false}");
}

#[test]
fn test_value_equality_is_structural() {
    let left = Value::from(record! { "a" => mapping![1, 2], "b" => 1 });
    let right = Value::from(record! { "b" => 1, "a" => mapping![1, 2] });
    assert_eq!(left, right);

    // Same entries, different container shape
    assert_ne!(Value::from(mapping! { "a" => 1 }), Value::from(record! { "a" => 1 }));
    // Integers and floats are different values
    assert_ne!(Value::from(1), Value::from(1.0));
}
