//! Dot-notation path syntax.
//!
//! A dot-notation path is a string of `.`-separated segments identifying a
//! location inside a container tree, e.g. `"three.3.1"`. This module validates
//! and splits those strings; it never looks at a container.
//!
//! # Validity
//!
//! A string is a dot-notation path when it contains a `.` and the *first* `.`
//! is not its final character. Only the first dot is checked:
//!
//! ```rust
//! # use dotbag::path::is_dot_notation_path;
//! assert!(is_dot_notation_path("foo.bar"));
//! assert!(!is_dot_notation_path("foo."));
//! assert!(!is_dot_notation_path("foo"));
//!
//! // later dots are not re-validated
//! assert!(is_dot_notation_path("foo.bar."));
//! assert!(is_dot_notation_path("a..b"));
//! ```
//!
//! The path verbs in [`ops`](crate::ops) also accept bare keys (no dot at
//! all), see [`require_path`].

use crate::constants::PATH_SEPARATOR;
use crate::container::ContainerError;

/// Returns true if `path` contains a dot and its first dot is not at the end.
pub fn is_dot_notation_path(path: &str) -> bool {
    match path.find(PATH_SEPARATOR) {
        Some(index) => index + PATH_SEPARATOR.len_utf8() < path.len(),
        None => false,
    }
}

/// Fails with [`ContainerError::NotDotNotationPath`] unless `path` is a
/// dot-notation path.
pub fn require_dot_notation_path(path: &str) -> Result<(), ContainerError> {
    if is_dot_notation_path(path) {
        Ok(())
    } else {
        Err(not_dot_notation(path))
    }
}

/// Validates a path argument for the path verbs.
///
/// Accepts dot-notation paths and non-empty bare keys. Rejects the empty
/// string and strings whose first dot is the final character.
pub fn require_path(path: &str) -> Result<(), ContainerError> {
    if path.is_empty() {
        return Err(not_dot_notation(path));
    }
    if path.contains(PATH_SEPARATOR) {
        require_dot_notation_path(path)
    } else {
        Ok(())
    }
}

/// Splits a path on every dot, keeping empty segments.
pub fn split(path: &str) -> Vec<&str> {
    path.split(PATH_SEPARATOR).collect()
}

/// Splits a path into its parent prefix and final segment.
///
/// The prefix is `None` when the path has no dot, or when everything before
/// the last dot is empty, so that the final segment addresses the root.
///
/// ```rust
/// # use dotbag::path::split_last;
/// assert_eq!(split_last("a"), (None, "a"));
/// assert_eq!(split_last("a.b.c"), (Some("a.b"), "c"));
/// assert_eq!(split_last(".a"), (None, "a"));
/// ```
pub fn split_last(path: &str) -> (Option<&str>, &str) {
    match path.rfind(PATH_SEPARATOR) {
        None => (None, path),
        Some(index) => {
            let prefix = &path[..index];
            let last = &path[index + PATH_SEPARATOR.len_utf8()..];
            if prefix.is_empty() {
                (None, last)
            } else {
                (Some(prefix), last)
            }
        }
    }
}

/// Returns a sub-range of a path's segments, rejoined with dots.
///
/// `start` counts from the front, or from the back when negative. `len` is
/// the number of segments to keep; a negative `len` stops that many segments
/// before the end, and `None` keeps everything up to the end.
///
/// ```rust
/// # use dotbag::path::slice_parts;
/// assert_eq!(slice_parts("a.b.c.d", 1, Some(2)), "b.c");
/// assert_eq!(slice_parts("a.b.c.d", -2, None), "c.d");
/// assert_eq!(slice_parts("a.b.c.d", 0, Some(-1)), "a.b.c");
/// ```
pub fn slice_parts(path: &str, start: isize, len: Option<isize>) -> String {
    let parts = split(path);
    let count = parts.len() as isize;

    let from = if start < 0 {
        (count + start).max(0)
    } else {
        start.min(count)
    };
    let to = match len {
        None => count,
        Some(len) if len < 0 => count + len,
        Some(len) => from.saturating_add(len).min(count),
    };

    if to <= from {
        return String::new();
    }
    join(&parts[from as usize..to as usize])
}

/// Joins segments back into a path.
pub fn join(segments: &[&str]) -> String {
    let mut buf = [0u8; 4];
    let separator = PATH_SEPARATOR.encode_utf8(&mut buf);
    segments.join(&*separator)
}

fn not_dot_notation(path: &str) -> ContainerError {
    ContainerError::NotDotNotationPath {
        path: path.to_string(),
    }
}
