//! The path verbs: has, get, set and remove.
//!
//! Each verb validates the path, walks it with [`descend`](crate::descend) and
//! acts on the node it reaches. A path without a dot is a bare key on the
//! root container.
//!
//! ```
//! use dotbag::container::{Record, Value};
//! use dotbag::descend::Extension;
//! use dotbag::ops::{get_path, has_path, remove_path, set_path};
//!
//! let mut root = Value::from(Record::new());
//! set_path(&mut root, "user.profile.name", "Alice", Some(&Extension::EmptyRecord))?;
//!
//! assert_eq!(get_path(&root, "user.profile.name")?, "Alice");
//! assert!(has_path(&root, "user.profile")?);
//!
//! remove_path(&mut root, "user.profile.name")?;
//! assert!(!has_path(&root, "user.profile.name")?);
//! # Ok::<(), dotbag::Error>(())
//! ```

use tracing::trace;

use crate::container::{ContainerError, Value, kind};
use crate::descend::{Extension, descend, descend_mut, descend_with};
use crate::{merge, path};

/// Returns true if `path` addresses a node inside `container`.
///
/// A missing key or property anywhere along the path gives `Ok(false)`, and
/// so does a slot holding `Null`.
/// Invalid paths, non-container roots and paths that run into a scalar are
/// still errors.
pub fn has_path(container: &Value, path: &str) -> crate::Result<bool> {
    match get_path(container, path) {
        Ok(_) => Ok(true),
        Err(err) if err.is_not_found() => Ok(false),
        Err(err) => Err(err),
    }
}

/// Returns the node at `path`.
pub fn get_path<'a>(container: &'a Value, path: &str) -> crate::Result<&'a Value> {
    validate(container, path)?;
    Ok(descend(container, &path::split(path))?)
}

/// Returns a mutable reference to the node at `path`.
pub fn get_path_mut<'a>(container: &'a mut Value, path: &str) -> crate::Result<&'a mut Value> {
    validate(container, path)?;
    Ok(descend_mut(container, &path::split(path), None)?)
}

/// Merges `value` into `container` at `path`.
///
/// Missing (or null) intermediate nodes are created from `extension`; without
/// one they are an error. The final segment is handled by
/// [`merge_into`](crate::merge::merge_into), so a container value is merged
/// into an existing container instead of replacing it. On any error the tree
/// is left untouched.
pub fn set_path(
    container: &mut Value,
    path: &str,
    value: impl Into<Value>,
    extension: Option<&Extension>,
) -> crate::Result<()> {
    validate(container, path)?;
    match path::split_last(path) {
        (Some(prefix), last) => {
            descend_with(container, &path::split(prefix), extension, |parent| {
                merge::merge_into(parent, last, value)
            })
        }
        (None, last) => merge::merge_into(container, last, value),
    }
}

/// Removes the node at `path` and returns it.
///
/// Intermediate nodes must exist. A missing or null final segment is not an
/// error and returns `None`.
pub fn remove_path(container: &mut Value, path: &str) -> crate::Result<Option<Value>> {
    validate(container, path)?;
    let (prefix, last) = path::split_last(path);
    let parent = match prefix {
        Some(prefix) => descend_mut(container, &path::split(prefix), None)?,
        None => container,
    };
    remove_property(parent, last)
}

/// Removes a single key or field from a container.
///
/// A slot holding `Null` counts as absent and is left in place.
pub fn remove_property(container: &mut Value, key: &str) -> crate::Result<Option<Value>> {
    let removed = match container {
        Value::Mapping(mapping) if mapping.get(key).is_some_and(|v| !v.is_null()) => {
            mapping.remove(key)
        }
        Value::Record(record) if record.get(key).is_some_and(|v| !v.is_null()) => {
            record.remove(key)
        }
        Value::Mapping(_) | Value::Record(_) => None,
        other => return Err(ContainerError::unsupported(other.type_name()).into()),
    };
    trace!(key, removed = removed.is_some(), "Removed property");
    Ok(removed)
}

fn validate(container: &Value, path: &str) -> Result<(), ContainerError> {
    kind::require_readable(container)?;
    path::require_path(path)
}
