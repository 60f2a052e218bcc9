//! Error types for container and path operations.
//!
//! This module defines structured error types for the path verbs, descent and
//! merge algorithms, providing the failing segment and the path walked so far
//! so that callers can report exactly where a lookup stopped.

use thiserror::Error;

/// Structured error types for container operations.
///
/// Every variant that comes out of a descent carries `path`: the segments that
/// were successfully consumed before the failure, joined with `.`. It is empty
/// when the failure happened at the root.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// A value does not have the shape the operation requires
    #[error("Unsupported type: {type_name}")]
    UnsupportedType { type_name: String },

    /// A string failed dot-notation path validation
    #[error("Not a dot-notation path: '{path}'")]
    NotDotNotationPath { path: String },

    /// An indexable container has no entry for the requested key
    #[error("No such index '{index}' (after '{path}')")]
    NoSuchIndex { index: String, path: String },

    /// An assignable container has no field with the requested name
    #[error("No such property '{property}' (after '{path}')")]
    NoSuchProperty { property: String, path: String },

    /// Descent reached a value that is not a container before the path ended
    #[error("Cannot descend into {type_name} at '{path}'")]
    CannotDescendPath { type_name: String, path: String },

    /// An append found its next integer key already in use
    #[error("Cannot append: next index {index} is already occupied")]
    IndexOccupied { index: i64 },

    /// A structural merge recursed deeper than the configured limit
    #[error("Merge exceeded maximum depth of {depth}")]
    MergeTooDeep { depth: usize },
}

impl ContainerError {
    pub(crate) fn unsupported(type_name: impl Into<String>) -> Self {
        ContainerError::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Check if this error means a key or property was missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ContainerError::NoSuchIndex { .. } | ContainerError::NoSuchProperty { .. }
        )
    }

    /// Check if this error is about the shape of a value
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            ContainerError::UnsupportedType { .. } | ContainerError::CannotDescendPath { .. }
        )
    }

    /// Check if this error is about path syntax
    pub fn is_path_error(&self) -> bool {
        matches!(self, ContainerError::NotDotNotationPath { .. })
    }

    /// Get the path walked so far, or the rejected path for syntax errors
    pub fn path(&self) -> Option<&str> {
        match self {
            ContainerError::NotDotNotationPath { path }
            | ContainerError::NoSuchIndex { path, .. }
            | ContainerError::NoSuchProperty { path, .. }
            | ContainerError::CannotDescendPath { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Get the segment that could not be found
    pub fn segment(&self) -> Option<&str> {
        match self {
            ContainerError::NoSuchIndex { index, .. } => Some(index),
            ContainerError::NoSuchProperty { property, .. } => Some(property),
            _ => None,
        }
    }
}

// Conversion from ContainerError to the main Error type
impl From<ContainerError> for crate::Error {
    fn from(err: ContainerError) -> Self {
        crate::Error::Container(err)
    }
}
