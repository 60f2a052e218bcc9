//! Property-based tests for the path verbs and structural merge

use dotbag::{
    container::{Mapping, Record, Value, kind},
    descend::Extension,
    merge::{merge_into, merge_value},
    ops::{get_path, has_path, remove_path, set_path},
};
use proptest::prelude::*;

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e6..1.0e6f64).prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ]
}

fn arb_tree() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::vec(("[a-c0-3]{1,2}", inner), 0..4)
                .prop_map(|fields| Value::from(fields.into_iter().collect::<Record>())),
        ]
    })
}

fn arb_container() -> impl Strategy<Value = Value> {
    prop_oneof![
        prop::collection::vec(arb_tree(), 0..4)
            .prop_map(|values| Value::from(Mapping::from_values(values))),
        prop::collection::vec(("[a-c0-3]{1,2}", arb_tree()), 0..4)
            .prop_map(|fields| Value::from(fields.into_iter().collect::<Record>())),
    ]
}

fn arb_path() -> impl Strategy<Value = String> {
    "[a-c0-3]{1,2}(\\.[a-c0-3]{1,2}){0,3}"
}

fn arb_fields(prefix: &'static str) -> impl Strategy<Value = Record> {
    let names = proptest::string::string_regex(&format!("{prefix}[a-z]{{0,3}}")).unwrap();
    prop::collection::vec((names, arb_tree()), 0..5)
        .prop_map(|fields| fields.into_iter().collect())
}

proptest! {
    /// has_path is true exactly when get_path succeeds
    #[test]
    fn prop_has_agrees_with_get(root in arb_container(), path in arb_path()) {
        let found = get_path(&root, &path).is_ok();
        match has_path(&root, &path) {
            Ok(has) => prop_assert_eq!(has, found),
            Err(err) => {
                prop_assert!(!found);
                prop_assert!(!err.is_not_found());
            }
        }
    }

    /// A scalar set at a bare key reads back unchanged
    #[test]
    fn prop_set_then_get_bare_key(
        mut root in arb_container(),
        key in "[a-c0-3]{1,2}",
        value in arb_scalar(),
    ) {
        set_path(&mut root, &key, value.clone(), None).unwrap();
        prop_assert_eq!(get_path(&root, &key).unwrap(), &value);
    }

    /// A value set through auto-extension can be removed again
    #[test]
    fn prop_set_with_extension_then_remove(path in arb_path(), value in arb_scalar()) {
        let mut root = Value::from(Record::new());
        set_path(&mut root, &path, value.clone(), Some(&Extension::EmptyRecord)).unwrap();
        prop_assert!(has_path(&root, &path).unwrap());

        prop_assert_eq!(remove_path(&mut root, &path).unwrap(), Some(value));
        prop_assert!(!has_path(&root, &path).unwrap());
    }

    /// Merging disjoint records gives the same result in either order
    #[test]
    fn prop_disjoint_merge_commutes(left in arb_fields("l"), right in arb_fields("r")) {
        let mut left_first = Value::from(left.clone());
        merge_value(&mut left_first, right.clone()).unwrap();

        let mut right_first = Value::from(right);
        merge_value(&mut right_first, left).unwrap();

        prop_assert_eq!(left_first, right_first);
    }

    /// Merging a scalar under an existing key always replaces what was there
    #[test]
    fn prop_scalar_always_overwrites(existing in arb_tree(), incoming in arb_scalar()) {
        let mut container = Value::from(Record::new().with("key", existing));
        merge_into(&mut container, "key", incoming.clone()).unwrap();

        let stored = container.as_record().and_then(|record| record.get("key"));
        prop_assert_eq!(stored, Some(&incoming));
    }

    /// Merging a container into a container never drops existing keys
    #[test]
    fn prop_merge_keeps_destination_keys(dest in arb_container(), source in arb_container()) {
        let mut merged = dest.clone();
        prop_assume!(merge_value(&mut merged, source).is_ok());

        let names = |value: &Value| -> Vec<String> {
            match value {
                Value::Mapping(mapping) => mapping.keys().map(ToString::to_string).collect(),
                Value::Record(record) => record.names().map(str::to_string).collect(),
                _ => Vec::new(),
            }
        };
        prop_assert!(kind::is_readable(&merged));
        let merged_names = names(&merged);
        for name in names(&dest) {
            prop_assert!(merged_names.contains(&name), "lost key '{}'", name);
        }
    }
}
