//! A record-backed key/value store addressed by dot-notation paths.

use std::fmt;

use crate::container::{Record, Value};
use crate::descend::Extension;
use crate::{ops, path};

/// A bag of named values that understands dot-notation paths.
///
/// The bag is a [`Record`] at the top level. Every method takes either a bare
/// field name or a dot-notation path into the nested values:
///
/// - `get`, `has` and `remove` route through the path verbs in [`ops`]
/// - `set` with a bare name replaces the field outright; with a dot-notation
///   path it merges at the target and creates missing intermediate nodes as
///   empty records
///
/// Cloning a bag copies the whole tree, so a clone never shares nested values
/// with its source.
///
/// ```
/// use dotbag::DataBag;
///
/// let mut bag = DataBag::new();
/// bag.set("name", "Alice")?;
/// bag.set("address.city", "Lisbon")?;
///
/// assert_eq!(bag.get("address.city")?, "Lisbon");
/// assert!(bag.has("name")?);
/// assert!(!bag.has("address.country")?);
/// # Ok::<(), dotbag::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Record", into = "Record")
)]
pub struct DataBag {
    /// Always a `Value::Record`
    root: Value,
}

impl DataBag {
    /// Creates an empty bag
    pub fn new() -> Self {
        Self {
            root: Value::Record(Record::new()),
        }
    }

    /// Returns the value at `path`
    pub fn get(&self, path: &str) -> crate::Result<&Value> {
        ops::get_path(&self.root, path)
    }

    /// Returns a mutable reference to the value at `path`
    pub fn get_mut(&mut self, path: &str) -> crate::Result<&mut Value> {
        ops::get_path_mut(&mut self.root, path)
    }

    /// Stores `value` at `path`.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> crate::Result<()> {
        if path::is_dot_notation_path(path) {
            return ops::set_path(&mut self.root, path, value, Some(&Extension::EmptyRecord));
        }

        path::require_path(path)?;
        if let Value::Record(record) = &mut self.root {
            record.set(path, value);
        }
        Ok(())
    }

    /// Returns true if `path` addresses a value in the bag
    pub fn has(&self, path: &str) -> crate::Result<bool> {
        ops::has_path(&self.root, path)
    }

    /// Removes the value at `path` and returns it
    pub fn remove(&mut self, path: &str) -> crate::Result<Option<Value>> {
        ops::remove_path(&mut self.root, path)
    }

    /// Returns the number of top-level fields
    pub fn len(&self) -> usize {
        self.root.as_record().map_or(0, Record::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the top-level fields in assignment order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.root.as_record().into_iter().flat_map(Record::iter)
    }

    /// Iterates over the top-level field names in assignment order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(name, _)| name)
    }

    /// Returns the bag's contents as a container value
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Consumes the bag, returning its top-level record
    pub fn into_record(self) -> Record {
        match self.root {
            Value::Record(record) => record,
            _ => Record::new(),
        }
    }
}

impl Default for DataBag {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Record> for DataBag {
    fn from(record: Record) -> Self {
        Self {
            root: Value::Record(record),
        }
    }
}

impl From<DataBag> for Record {
    fn from(bag: DataBag) -> Self {
        bag.into_record()
    }
}

impl From<DataBag> for Value {
    fn from(bag: DataBag) -> Self {
        bag.root
    }
}

impl fmt::Display for DataBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
