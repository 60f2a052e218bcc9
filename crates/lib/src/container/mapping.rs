//! Ordered, key-addressed containers.
//!
//! A [`Mapping`] is the indexable container shape: entries are addressed by
//! [`Key`] and iterate in insertion order. Besides explicit keys it tracks the
//! next append index so that unkeyed values can be pushed on the end, which is
//! what makes a mapping double as a list.

use std::collections::HashMap;
use std::fmt;

use super::{Key, Value};

/// An ordered map from [`Key`] to [`Value`].
///
/// Replacing the value of an existing key keeps its position; new keys are
/// appended. Equality ignores entry order. Named keys that spell a canonical
/// integer are stored as that integer, so `"3"` and `3` address one entry.
///
/// # Examples
///
/// ```
/// # use dotbag::container::{Key, Mapping};
/// let mut list = Mapping::from_values([10, 20]);
/// assert_eq!(list.push(30), Some(Key::Index(2)));
///
/// let mut map = Mapping::new();
/// map.insert("name", "Alice");
/// map.insert(7, true);
/// assert_eq!(map.push("next"), Some(Key::Index(8)));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "MappingData")
)]
pub struct Mapping {
    entries: Vec<(Key, Value)>,
    /// Position of each key in `entries`
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    positions: HashMap<Key, usize>,
    /// One past the largest non-negative integer key ever inserted
    next_index: i64,
}

impl Mapping {
    /// Creates a new empty mapping
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
            next_index: 0,
        }
    }

    /// Creates a list-shaped mapping with keys `0..n`
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut mapping = Self::new();
        for value in values {
            mapping.push(value);
        }
        mapping
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the key the next [`push`](Self::push) will use
    pub fn next_index(&self) -> i64 {
        self.next_index
    }

    /// Returns true if the mapping contains the given key
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.positions.contains_key(&key.into().normalized())
    }

    /// Gets the value stored under a key
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        let position = *self.positions.get(&key.into().normalized())?;
        Some(&self.entries[position].1)
    }

    /// Gets a mutable reference to the value stored under a key
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        let position = *self.positions.get(&key.into().normalized())?;
        Some(&mut self.entries[position].1)
    }

    /// Gets the value under `key`, inserting the result of `f` first if absent
    pub fn get_or_insert_with(
        &mut self,
        key: impl Into<Key>,
        f: impl FnOnce() -> Value,
    ) -> &mut Value {
        let key = key.into().normalized();
        let position = match self.positions.get(&key) {
            Some(position) => *position,
            None => self.append(key, f()),
        };
        &mut self.entries[position].1
    }

    /// Sets the value under a key, returns the old value if present
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into().normalized();
        let value = value.into();
        match self.positions.get(&key) {
            Some(position) => Some(std::mem::replace(&mut self.entries[*position].1, value)),
            None => {
                self.append(key, value);
                None
            }
        }
    }

    /// Appends a value under the next free integer key, returns that key.
    ///
    /// Returns `None` and leaves the mapping unchanged when that key is
    /// already taken, which happens once `i64::MAX` is in use.
    pub fn push(&mut self, value: impl Into<Value>) -> Option<Key> {
        let key = Key::Index(self.next_index);
        if self.positions.contains_key(&key) {
            return None;
        }
        self.append(key.clone(), value.into());
        Some(key)
    }

    /// Removes a key, returns its value if present
    ///
    /// The append index is not rewound.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        let position = self.positions.remove(&key.into().normalized())?;
        let (_, value) = self.entries.remove(position);
        for (key, _) in &self.entries[position..] {
            if let Some(shifted) = self.positions.get_mut(key) {
                *shifted -= 1;
            }
        }
        Some(value)
    }

    /// Removes every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.positions.clear();
    }

    /// Returns an iterator over all key-value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Returns a mutable iterator over all key-value pairs in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut Value)> {
        self.entries.iter_mut().map(|(k, v)| (&*k, v))
    }

    /// Returns an iterator over all keys
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Returns an iterator over all values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Appends a new entry for a key known to be absent
    fn append(&mut self, key: Key, value: Value) -> usize {
        if let Key::Index(index) = key {
            if index >= self.next_index {
                self.next_index = index.saturating_add(1);
            }
        }
        let position = self.entries.len();
        self.positions.insert(key.clone(), position);
        self.entries.push((key, value));
        position
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "]")
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}

impl IntoIterator for Mapping {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Serialized form of a [`Mapping`]; positions are rebuilt on load
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MappingData {
    entries: Vec<(Key, Value)>,
    next_index: i64,
}

#[cfg(feature = "serde")]
impl From<MappingData> for Mapping {
    fn from(data: MappingData) -> Self {
        let mut mapping: Mapping = data.entries.into_iter().collect();
        mapping.next_index = mapping.next_index.max(data.next_index);
        mapping
    }
}
