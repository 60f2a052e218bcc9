//! Structural merge of container trees.
//!
//! Merging is decided per key and purely on shape, never on value:
//!
//! - the key is absent, the existing value is a scalar, or the incoming value
//!   is a scalar: the incoming value **overwrites**
//! - both sides are containers: the incoming container is **merged** into the
//!   existing one entry by entry, recursively
//!
//! A mapping can be merged into a record and vice versa. Mapping keys become
//! field names through their text form; field names become mapping keys
//! through [`Key::parse`].
//!
//! ```
//! use dotbag::container::Value;
//! use dotbag::{merge::merge_value, record};
//!
//! let mut dest = Value::from(record! {
//!     "child" => record! { "one" => 1, "two" => 2 },
//! });
//! merge_value(&mut dest, record! { "child" => record! { "one" => 5, "four" => 6 } })?;
//!
//! let expected = record! {
//!     "child" => record! { "one" => 5, "two" => 2, "four" => 6 },
//! };
//! assert_eq!(dest, Value::from(expected));
//! # Ok::<(), dotbag::Error>(())
//! ```

use tracing::trace;

use crate::constants::MAX_MERGE_DEPTH;
use crate::container::{ContainerError, Key, Value, kind};

/// What a merge does with one incoming key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeDecision {
    /// Replace whatever is stored under the key
    Overwrite,
    /// Merge the incoming container into the existing one
    Merge,
}

/// Returns true if merging `incoming` under `key` replaces the stored value.
///
/// Fails with [`ContainerError::UnsupportedType`] if `container` is not a
/// mapping or a record.
pub fn should_overwrite(
    container: &Value,
    key: impl Into<Key>,
    incoming: &Value,
) -> Result<bool, ContainerError> {
    decide(container, key, incoming).map(|decision| decision == MergeDecision::Overwrite)
}

/// Decides how `incoming` is merged under `key`.
pub fn decide(
    container: &Value,
    key: impl Into<Key>,
    incoming: &Value,
) -> Result<MergeDecision, ContainerError> {
    let key = key.into();
    let existing = match container {
        Value::Mapping(mapping) => mapping.get(&key),
        Value::Record(record) => record.get(&key.to_string()),
        other => return Err(ContainerError::unsupported(other.type_name())),
    };

    let decision = match existing {
        Some(existing) if kind::is_readable(existing) && kind::is_traversable(incoming) => {
            MergeDecision::Merge
        }
        _ => MergeDecision::Overwrite,
    };
    Ok(decision)
}

/// Merges `value` into `container` under `key`.
///
/// The whole merge is checked before anything is written, so an error leaves
/// `container` unchanged.
pub fn merge_into(
    container: &mut Value,
    key: impl Into<Key>,
    value: impl Into<Value>,
) -> crate::Result<()> {
    let key = key.into();
    let value = value.into();
    check_entry(container, &key, &value, 0)?;
    merge_entry(container, key, value, 0)?;
    Ok(())
}

/// Merges the whole of `source` into `dest`.
///
/// A container source is merged entry by entry in its iteration order. A
/// scalar source has no keys: it is appended to a mapping destination and
/// rejected by a record destination. On error `dest` is unchanged.
pub fn merge_value(dest: &mut Value, source: impl Into<Value>) -> crate::Result<()> {
    let source = source.into();
    check_merge(dest, &source, 0)?;
    merge_at_depth(dest, source, 0)?;
    Ok(())
}

/// Dry run of [`merge_at_depth`] that reports every failure it would hit
fn check_merge(dest: &Value, source: &Value, depth: usize) -> Result<(), ContainerError> {
    if depth > MAX_MERGE_DEPTH {
        return Err(ContainerError::MergeTooDeep {
            depth: MAX_MERGE_DEPTH,
        });
    }
    kind::require_readable(dest)?;

    match source {
        Value::Mapping(source) => source
            .iter()
            .try_for_each(|(key, value)| check_entry(dest, key, value, depth)),
        Value::Record(source) => source
            .iter()
            .try_for_each(|(name, value)| check_entry(dest, &Key::parse(name), value, depth)),
        scalar => match dest {
            Value::Mapping(mapping) if mapping.contains_key(mapping.next_index()) => {
                Err(ContainerError::IndexOccupied {
                    index: mapping.next_index(),
                })
            }
            Value::Mapping(_) => Ok(()),
            _ => Err(ContainerError::unsupported(scalar.type_name())),
        },
    }
}

fn check_entry(
    container: &Value,
    key: &Key,
    value: &Value,
    depth: usize,
) -> Result<(), ContainerError> {
    if decide(container, key, value)? == MergeDecision::Merge {
        if let Some(existing) = slot(container, key) {
            return check_merge(existing, value, depth + 1);
        }
    }
    Ok(())
}

fn merge_at_depth(dest: &mut Value, source: Value, depth: usize) -> Result<(), ContainerError> {
    match source {
        Value::Mapping(source) => {
            for (key, value) in source {
                merge_entry(dest, key, value, depth)?;
            }
        }
        Value::Record(source) => {
            for (name, value) in source {
                merge_entry(dest, Key::parse(&name), value, depth)?;
            }
        }
        scalar => match dest {
            Value::Mapping(mapping) => {
                let key = mapping
                    .push(scalar)
                    .ok_or_else(|| ContainerError::IndexOccupied {
                        index: mapping.next_index(),
                    })?;
                trace!(%key, depth, "Appended value without key");
            }
            _ => return Err(ContainerError::unsupported(scalar.type_name())),
        },
    }
    Ok(())
}

fn merge_entry(
    container: &mut Value,
    key: Key,
    value: Value,
    depth: usize,
) -> Result<(), ContainerError> {
    let decision = decide(container, &key, &value)?;
    trace!(%key, ?decision, depth, "Merging entry");

    if decision == MergeDecision::Merge {
        if let Some(existing) = slot_mut(container, &key) {
            return merge_at_depth(existing, value, depth + 1);
        }
    }

    match container {
        Value::Mapping(mapping) => {
            mapping.insert(key, value);
        }
        Value::Record(record) => {
            record.set(key.to_string(), value);
        }
        _ => {}
    }
    Ok(())
}

fn slot<'a>(container: &'a Value, key: &Key) -> Option<&'a Value> {
    match container {
        Value::Mapping(mapping) => mapping.get(key),
        Value::Record(record) => record.get(&key.to_string()),
        _ => None,
    }
}

fn slot_mut<'a>(container: &'a mut Value, key: &Key) -> Option<&'a mut Value> {
    match container {
        Value::Mapping(mapping) => mapping.get_mut(key),
        Value::Record(record) => record.get_mut(&key.to_string()),
        _ => None,
    }
}
