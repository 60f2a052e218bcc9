//! Error types for dynamically dispatched value objects.

use thiserror::Error;

/// Errors raised by [`LazyValueObject`](super::LazyValueObject).
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectError {
    /// The method name does not start with a supported verb
    #[error("{type_name} has no method '{method}'")]
    NoSuchMethod {
        type_name: &'static str,
        method: String,
    },

    /// A setter was called without a value
    #[error("Method '{method}' requires an argument")]
    MissingArgument { method: String },

    /// A write was attempted after the object was made read-only
    #[error("Cannot modify '{name}': object is read-only")]
    ReadOnly { name: String },
}

impl ObjectError {
    /// Check if this error is a failed method dispatch
    pub fn is_no_such_method(&self) -> bool {
        matches!(self, ObjectError::NoSuchMethod { .. })
    }

    /// Check if this error is a rejected write
    pub fn is_read_only(&self) -> bool {
        matches!(self, ObjectError::ReadOnly { .. })
    }
}

impl From<ObjectError> for crate::Error {
    fn from(err: ObjectError) -> Self {
        crate::Error::Object(err)
    }
}
