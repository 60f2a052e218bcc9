//! The container data model.
//!
//! A container tree is built from [`Value`] nodes. Two node shapes can hold
//! children:
//!
//! - [`Mapping`]: indexable, addressed by [`Key`] (integer or name), ordered
//! - [`Record`]: assignable, addressed by field name, ordered
//!
//! [`kind`] classifies any value into one of these shapes (or neither) so the
//! path and merge algorithms can dispatch on a closed enum.
//!
//! The [`mapping!`](crate::mapping) and [`record!`](crate::record) macros
//! build literal trees:
//!
//! ```
//! use dotbag::{mapping, record};
//!
//! let tree = record! {
//!     "one" => 1,
//!     "three" => mapping! { 0 => 1, 1 => 2, 3 => mapping![4, 5, 6] },
//! };
//! assert_eq!(tree.len(), 2);
//! ```

pub mod errors;
pub mod key;
pub mod kind;
pub mod mapping;
pub mod record;
pub mod value;

pub use errors::ContainerError;
pub use key::Key;
pub use kind::ContainerKind;
pub use mapping::Mapping;
pub use record::Record;
pub use value::Value;

/// Builds a [`Mapping`].
///
/// `mapping! { k => v, ... }` inserts explicit keys, `mapping![a, b, ...]`
/// builds a list with keys `0..n`.
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::container::Mapping::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut mapping = $crate::container::Mapping::new();
        $(mapping.insert($key, $value);)+
        mapping
    }};
    ($($value:expr),+ $(,)?) => {{
        let mut mapping = $crate::container::Mapping::new();
        $(mapping.push($value);)+
        mapping
    }};
}

/// Builds a [`Record`] from `name => value` pairs.
#[macro_export]
macro_rules! record {
    () => {
        $crate::container::Record::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::container::Record::new();
        $(record.set($name, $value);)+
        record
    }};
}
