//! Walking a path through a container tree.
//!
//! [`descend`] and [`descend_mut`] follow a list of segments from a root value
//! and return a reference to the node they address. Segments are looked up as
//! [`Key`](crate::container::Key)s on a mapping and as field names on a record.
//! A slot holding `Null` counts as missing.
//!
//! The mutable walk can auto-create missing intermediate nodes when given an
//! [`Extension`]. Without one, a missing segment is an error. Created nodes are
//! assembled off-tree and attached only once the whole walk has succeeded, so
//! a failing walk never leaves a partial chain behind.
//!
//! Errors report the segments consumed before the failure:
//!
//! ```
//! use dotbag::container::{ContainerError, Value};
//! use dotbag::{descend::descend, record};
//!
//! let root = Value::from(record! { "one" => record! { "two" => 2 } });
//! assert_eq!(descend(&root, &["one", "two"]), Ok(&Value::from(2)));
//! assert_eq!(
//!     descend(&root, &["one", "three"]),
//!     Err(ContainerError::NoSuchProperty {
//!         property: "three".to_string(),
//!         path: "one".to_string(),
//!     })
//! );
//! ```

use tracing::debug;

use crate::container::{ContainerError, Mapping, Record, Value};
use crate::path;

/// Policy for creating a missing intermediate node during a write.
#[derive(Debug, Clone, Copy)]
pub enum Extension {
    /// Create an empty [`Mapping`]
    EmptyMapping,
    /// Create an empty [`Record`]
    EmptyRecord,
    /// Create whatever the function returns
    Factory(fn() -> Value),
}

impl Extension {
    /// Builds a fresh node according to this policy
    pub fn materialize(&self) -> Value {
        match self {
            Extension::EmptyMapping => Value::Mapping(Mapping::new()),
            Extension::EmptyRecord => Value::Record(Record::new()),
            Extension::Factory(factory) => factory(),
        }
    }
}

/// Follows `segments` from `root` and returns the addressed node.
pub fn descend<'a>(root: &'a Value, segments: &[&str]) -> Result<&'a Value, ContainerError> {
    let mut cursor = root;
    for (depth, segment) in segments.iter().enumerate() {
        cursor = child(cursor, segment, &segments[..depth])?;
    }
    Ok(cursor)
}

/// Returns how many leading segments address existing nodes.
///
/// Fails only when the walk is blocked by a scalar before reaching a missing
/// segment.
pub fn existing_prefix(root: &Value, segments: &[&str]) -> Result<usize, ContainerError> {
    let mut cursor = root;
    for (depth, segment) in segments.iter().enumerate() {
        match child(cursor, segment, &segments[..depth]) {
            Ok(next) => cursor = next,
            Err(err) if err.is_not_found() => return Ok(depth),
            Err(err) => return Err(err),
        }
    }
    Ok(segments.len())
}

/// Follows `segments` from `root` and returns a mutable reference to the
/// addressed node.
///
/// With an extension, every missing segment is created on the way down. On
/// failure the tree is left untouched.
pub fn descend_mut<'a>(
    root: &'a mut Value,
    segments: &[&str],
    extension: Option<&Extension>,
) -> Result<&'a mut Value, ContainerError> {
    if let Some(extension) = extension {
        let present = existing_prefix(root, segments)?;
        if present < segments.len() {
            let branch = grow(segments, present, extension)?;
            attach(root, segments, present, branch)?;
        }
    }
    walk_mut(root, segments, 0)
}

/// Walks to the node at `segments` and runs `apply` on it.
///
/// Missing nodes are created from `extension` as in [`descend_mut`], but they
/// are attached only after `apply` succeeds. A failing `apply` on a new branch
/// therefore leaves `root` exactly as it was.
pub fn descend_with<T, E>(
    root: &mut Value,
    segments: &[&str],
    extension: Option<&Extension>,
    apply: impl FnOnce(&mut Value) -> Result<T, E>,
) -> Result<T, E>
where
    E: From<ContainerError>,
{
    if let Some(extension) = extension {
        let present = existing_prefix(root, segments)?;
        if present < segments.len() {
            let mut branch = grow(segments, present, extension)?;
            let target = walk_mut(&mut branch, segments, present + 1)?;
            let result = apply(target)?;
            attach(root, segments, present, branch)?;
            return Ok(result);
        }
    }
    apply(walk_mut(root, segments, 0)?)
}

/// Walks existing nodes for `segments[start..]`
fn walk_mut<'a>(
    mut cursor: &'a mut Value,
    segments: &[&str],
    start: usize,
) -> Result<&'a mut Value, ContainerError> {
    for (depth, segment) in segments.iter().enumerate().skip(start) {
        cursor = child_mut(cursor, segment, &segments[..depth])?;
    }
    Ok(cursor)
}

/// Builds the detached branch that replaces `segments[present]`.
fn grow(segments: &[&str], present: usize, extension: &Extension) -> Result<Value, ContainerError> {
    let mut branch = extend(extension, segments[present], &segments[..present]);
    let mut cursor = &mut branch;
    for (depth, segment) in segments.iter().enumerate().skip(present + 1) {
        cursor = child_or_extend(cursor, segment, &segments[..depth], extension)?;
    }
    Ok(branch)
}

/// Stores `branch` at `segments[present]`, replacing a missing or null slot.
fn attach(
    root: &mut Value,
    segments: &[&str],
    present: usize,
    branch: Value,
) -> Result<(), ContainerError> {
    let walked = &segments[..present];
    let segment = segments[present];
    let slot = match walk_mut(root, walked, 0)? {
        Value::Mapping(mapping) => mapping.get_or_insert_with(segment, || Value::Null),
        Value::Record(record) => record.get_or_insert_with(segment, || Value::Null),
        other => return Err(cannot_descend(other, walked)),
    };
    *slot = branch;
    Ok(())
}

fn child<'a>(
    cursor: &'a Value,
    segment: &str,
    walked: &[&str],
) -> Result<&'a Value, ContainerError> {
    match cursor {
        Value::Mapping(mapping) => mapping
            .get(segment)
            .filter(|value| !value.is_null())
            .ok_or_else(|| no_such_index(segment, walked)),
        Value::Record(record) => record
            .get(segment)
            .filter(|value| !value.is_null())
            .ok_or_else(|| no_such_property(segment, walked)),
        other => Err(cannot_descend(other, walked)),
    }
}

fn child_mut<'a>(
    cursor: &'a mut Value,
    segment: &str,
    walked: &[&str],
) -> Result<&'a mut Value, ContainerError> {
    match cursor {
        Value::Mapping(mapping) => mapping
            .get_mut(segment)
            .filter(|value| !value.is_null())
            .ok_or_else(|| no_such_index(segment, walked)),
        Value::Record(record) => record
            .get_mut(segment)
            .filter(|value| !value.is_null())
            .ok_or_else(|| no_such_property(segment, walked)),
        other => Err(cannot_descend(other, walked)),
    }
}

fn child_or_extend<'a>(
    cursor: &'a mut Value,
    segment: &str,
    walked: &[&str],
    extension: &Extension,
) -> Result<&'a mut Value, ContainerError> {
    let slot = match cursor {
        Value::Mapping(mapping) => mapping.get_or_insert_with(segment, || Value::Null),
        Value::Record(record) => record.get_or_insert_with(segment, || Value::Null),
        other => return Err(cannot_descend(other, walked)),
    };
    if slot.is_null() {
        *slot = extend(extension, segment, walked);
    }
    Ok(slot)
}

fn extend(extension: &Extension, segment: &str, walked: &[&str]) -> Value {
    let node = extension.materialize();
    debug!(
        segment,
        path = %path::join(walked),
        node = node.type_name(),
        "Creating missing node"
    );
    node
}

fn no_such_index(segment: &str, walked: &[&str]) -> ContainerError {
    ContainerError::NoSuchIndex {
        index: segment.to_string(),
        path: path::join(walked),
    }
}

fn no_such_property(segment: &str, walked: &[&str]) -> ContainerError {
    ContainerError::NoSuchProperty {
        property: segment.to_string(),
        path: path::join(walked),
    }
}

fn cannot_descend(value: &Value, walked: &[&str]) -> ContainerError {
    ContainerError::CannotDescendPath {
        type_name: value.type_name().to_string(),
        path: path::join(walked),
    }
}
