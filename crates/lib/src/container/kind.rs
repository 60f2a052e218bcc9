//! Runtime classification of values into container shapes.
//!
//! Every path verb and the merge engine dispatch on [`ContainerKind`] instead
//! of probing a value's capabilities at each call site.

use super::{ContainerError, Value};

/// The container shape of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Addressed by integer or string keys with enumerable order
    Indexable,
    /// Addressed by named fields that can be added dynamically
    Assignable,
    /// A scalar leaf
    Neither,
}

impl ContainerKind {
    /// Returns true for both container shapes
    pub fn is_readable(self) -> bool {
        !matches!(self, ContainerKind::Neither)
    }
}

/// Classifies a value. Assignable is checked before Indexable.
pub fn classify(value: &Value) -> ContainerKind {
    match value {
        Value::Record(_) => ContainerKind::Assignable,
        Value::Mapping(_) => ContainerKind::Indexable,
        _ => ContainerKind::Neither,
    }
}

/// Returns true if the value can be descended into
pub fn is_readable(value: &Value) -> bool {
    classify(value).is_readable()
}

pub fn is_indexable(value: &Value) -> bool {
    classify(value) == ContainerKind::Indexable
}

pub fn is_assignable(value: &Value) -> bool {
    classify(value) == ContainerKind::Assignable
}

/// Returns true if the value yields key/value pairs when iterated.
///
/// Both container shapes are traversable; a list-shaped mapping yields the
/// keys `0..n`.
pub fn is_traversable(value: &Value) -> bool {
    value.is_container()
}

pub fn is_stringy(value: &Value) -> bool {
    matches!(value, Value::Text(_))
}

/// Fails with [`ContainerError::UnsupportedType`] unless the value is readable
pub fn require_readable(value: &Value) -> Result<ContainerKind, ContainerError> {
    match classify(value) {
        ContainerKind::Neither => Err(ContainerError::unsupported(value.type_name())),
        kind => Ok(kind),
    }
}
