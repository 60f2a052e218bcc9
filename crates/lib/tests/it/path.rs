//! Dot-notation path syntax tests

use dotbag::path::{
    is_dot_notation_path, require_dot_notation_path, require_path, slice_parts, split,
    split_last,
};

#[test]
fn test_validity_boundary() {
    assert!(!is_dot_notation_path("a."));
    assert!(is_dot_notation_path("a.b"));
    assert!(!is_dot_notation_path("a"));
    assert_eq!(split_last("a"), (None, "a"));
}

#[test]
fn test_only_first_dot_is_checked() {
    // A later trailing dot or an empty middle segment is accepted
    for path in ["a.b.", "a..b", "a.b..", ".a"] {
        assert!(is_dot_notation_path(path), "path '{path}'");
        assert!(require_dot_notation_path(path).is_ok(), "path '{path}'");
    }
}

#[test]
fn test_require_path_error_message() {
    let err = require_path("a.").unwrap_err();
    assert_eq!(err.to_string(), "Not a dot-notation path: 'a.'");
}

#[test]
fn test_split_and_split_last_agree() {
    for path in ["a", "a.b", "a.b.c", "x..y"] {
        let segments = split(path);
        let (prefix, last) = split_last(path);

        assert_eq!(Some(&last), segments.last(), "path '{path}'");
        match prefix {
            Some(prefix) => assert_eq!(split(prefix), segments[..segments.len() - 1]),
            None => assert_eq!(segments.len(), 1),
        }
    }
}

#[test]
fn test_slice_parts_windows() {
    let path = "user.profile.address.city";
    assert_eq!(slice_parts(path, 0, Some(1)), "user");
    assert_eq!(slice_parts(path, 1, Some(-1)), "profile.address");
    assert_eq!(slice_parts(path, -2, Some(1)), "address");
    assert_eq!(slice_parts("single", 0, None), "single");
}
