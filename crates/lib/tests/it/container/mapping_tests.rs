//! Mapping integration tests

use dotbag::{
    container::{Key, Mapping, Value},
    mapping,
};

// ===== BASIC OPERATIONS =====

#[test]
fn test_mapping_basic_operations() {
    let mut map = Mapping::new();
    assert!(map.is_empty());

    assert!(map.insert("name", "Alice").is_none());
    assert_eq!(map.push(30), Some(Key::Index(0)));
    assert_eq!(map.len(), 2);

    assert!(map.contains_key("name"));
    assert!(map.contains_key(0));
    assert!(map.contains_key("0"));
    assert!(!map.contains_key("missing"));

    assert_eq!(map.get("name").and_then(Value::as_text), Some("Alice"));
    assert_eq!(map.get(0).and_then(Value::as_int), Some(30));
}

#[test]
fn test_mapping_iteration_order() {
    let map = mapping! { "z" => 1, 5 => 2, "a" => 3 };
    let keys: Vec<String> = map.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["z", "5", "a"]);

    let values: Vec<i64> = map.values().filter_map(Value::as_int).collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_mapping_iter_mut() {
    let mut map = mapping![1, 2, 3];
    for (_, value) in map.iter_mut() {
        if let Some(n) = value.as_int() {
            *value = Value::from(n * 10);
        }
    }
    assert_eq!(map, mapping![10, 20, 30]);
}

#[test]
fn test_mapping_clear_keeps_append_index() {
    let mut map = mapping!["a", "b"];
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.push("c"), Some(Key::Index(2)));
}

#[test]
fn test_mapping_push_never_overwrites() {
    let mut map = mapping! { i64::MAX => "keep" };
    assert_eq!(map.push("lost"), None);
    assert_eq!(map.get(i64::MAX), Some(&Value::from("keep")));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_numeric_name_keys_reachable_by_segment() {
    let mut map = Mapping::new();
    map.insert(Key::Name("3".to_string()), "three");
    map.insert(Key::Name("03".to_string()), "padded");

    assert_eq!(map.get("3"), Some(&Value::from("three")));
    assert_eq!(map.get("03"), Some(&Value::from("padded")));
    assert!(map.contains_key(Key::Index(3)));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_mapping_display() {
    let map = mapping! { "a" => 1, 2 => "b" };
    assert_eq!(map.to_string(), "[a: 1, 2: b]");
}
