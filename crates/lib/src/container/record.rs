//! Records with dynamically added named fields.

use std::collections::HashMap;
use std::fmt;

use super::Value;

/// An ordered set of named fields.
///
/// A `Record` is the assignable container shape. Fields can be added and
/// removed freely and iterate in the order they were first assigned.
/// Equality ignores field order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RecordData")
)]
pub struct Record {
    fields: Vec<(String, Value)>,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    positions: HashMap<String, usize>,
}

impl Record {
    /// Creates a new record without fields
    pub fn new() -> Self {
        Self {
            fields: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Returns the number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if the record has a field with this name
    pub fn contains_key(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Gets a field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        let position = *self.positions.get(name)?;
        Some(&self.fields[position].1)
    }

    /// Gets a mutable reference to a field by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        let position = *self.positions.get(name)?;
        Some(&mut self.fields[position].1)
    }

    /// Gets a field, creating it from `f` first if absent
    pub fn get_or_insert_with(&mut self, name: &str, f: impl FnOnce() -> Value) -> &mut Value {
        let position = match self.positions.get(name) {
            Some(position) => *position,
            None => self.append(name.to_string(), f()),
        };
        &mut self.fields[position].1
    }

    /// Assigns a field, returns the previous value if the field existed
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.positions.get(&name) {
            Some(position) => Some(std::mem::replace(&mut self.fields[*position].1, value)),
            None => {
                self.append(name, value);
                None
            }
        }
    }

    /// Removes a field, returns its value if it existed
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let position = self.positions.remove(name)?;
        let (_, value) = self.fields.remove(position);
        for (name, _) in &self.fields[position..] {
            if let Some(shifted) = self.positions.get_mut(name) {
                *shifted -= 1;
            }
        }
        Some(value)
    }

    /// Returns an iterator over all fields in assignment order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Returns a mutable iterator over all fields in assignment order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> {
        self.fields.iter_mut().map(|(n, v)| (n.as_str(), v))
    }

    /// Returns an iterator over all field names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Returns an iterator over all field values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, v)| v)
    }

    /// Builder method to set a field and return self
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    fn append(&mut self, name: String, value: Value) -> usize {
        let position = self.fields.len();
        self.positions.insert(name.clone(), position);
        self.fields.push((name, value));
        position
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .fields
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<N: Into<String>, V: Into<Value>> FromIterator<(N, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.set(name, value);
        }
        record
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Serialized form of a [`Record`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RecordData {
    fields: Vec<(String, Value)>,
}

#[cfg(feature = "serde")]
impl From<RecordData> for Record {
    fn from(data: RecordData) -> Self {
        data.fields.into_iter().collect()
    }
}
