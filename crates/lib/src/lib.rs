//!
//! dotbag: dot-notation paths and structural merging over nested containers.
//!
//! This library addresses values inside trees of mappings and records with
//! paths like `"user.addresses.0.city"`, and merges trees into each other by
//! shape.
//!
//! ## Core Concepts
//!
//! * **Values (`container::Value`)**: A closed enum of scalar leaves and the two container shapes.
//!     * **Mapping (`container::Mapping`)**: Indexable, ordered, addressed by integer or named keys. Doubles as a list.
//!     * **Record (`container::Record`)**: Assignable, ordered, addressed by field name.
//! * **Paths (`path`)**: Validation and splitting of dot-notation strings.
//! * **Descent (`descend`)**: Walks a path through a tree, optionally creating missing nodes from an `Extension`.
//! * **Merge (`merge`)**: Decides per key whether an incoming value overwrites or is merged into what is stored.
//! * **Path verbs (`ops`)**: `has_path`, `get_path`, `set_path` and `remove_path`.
//! * **DataBag (`bag::DataBag`)**: A record-backed store with explicit path-aware accessors.
//! * **LazyValueObject (`lazy::LazyValueObject`)**: A flat value object driven by `getFoo`/`setFoo` style method names.
//!
//! ```
//! use dotbag::container::Value;
//! use dotbag::ops::{get_path, has_path};
//! use dotbag::{mapping, record};
//!
//! let root = Value::from(record! {
//!     "one" => 1,
//!     "three" => mapping! { 0 => 1, 1 => 2, 3 => mapping![4, 5, 6] },
//! });
//!
//! assert_eq!(*get_path(&root, "three.3.1")?, 5);
//! assert!(!has_path(&root, "three.100")?);
//! # Ok::<(), dotbag::Error>(())
//! ```

pub mod bag;
pub mod build;
pub mod constants;
pub mod container;
pub mod descend;
pub mod lazy;
pub mod merge;
pub mod ops;
pub mod path;

/// Re-export the `DataBag` struct for easier access.
pub use bag::DataBag;

/// Result type used throughout the dotbag library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotbag library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured path and container errors from the container module
    #[error(transparent)]
    Container(container::ContainerError),

    /// Structured dispatch errors from the lazy module
    #[error(transparent)]
    Object(lazy::ObjectError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Container(_) => "container",
            Error::Object(_) => "lazy",
        }
    }

    /// Check if this error indicates a key or property was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Container(container_err) => container_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is about the shape of a value.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Container(container_err) => container_err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is a rejected path string.
    pub fn is_path_error(&self) -> bool {
        match self {
            Error::Container(container_err) => container_err.is_path_error(),
            _ => false,
        }
    }
}
