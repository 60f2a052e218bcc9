//! Keys for indexable containers.

use std::fmt;

/// A key in a [`Mapping`](super::Mapping).
///
/// Mapping keys are either integers or names. Path segments are always text, so
/// [`Key::parse`] decides which kind a segment addresses: a segment that is the
/// canonical decimal form of an `i64` addresses the integer key, anything else
/// addresses a named key. `"3"` and `"-3"` are indexes; `"03"`, `"+3"` and `"-0"`
/// are names.
///
/// ```
/// # use dotbag::container::Key;
/// assert_eq!(Key::parse("3"), Key::Index(3));
/// assert_eq!(Key::parse("03"), Key::Name("03".to_string()));
/// assert_eq!(Key::from("name").to_string(), "name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Key {
    /// Integer key
    Index(i64),
    /// String key
    Name(String),
}

impl Key {
    /// Parses a path segment into the key it addresses.
    pub fn parse(segment: &str) -> Self {
        match segment.parse::<i64>() {
            Ok(index) if index.to_string() == segment => Key::Index(index),
            _ => Key::Name(segment.to_string()),
        }
    }

    /// Re-parses a named key so that a numeric name becomes the index key it
    /// spells. [`Mapping`](super::Mapping) stores keys in this form.
    ///
    /// ```
    /// # use dotbag::container::Key;
    /// assert_eq!(Key::Name("3".to_string()).normalized(), Key::Index(3));
    /// assert_eq!(Key::Name("03".to_string()).normalized(), Key::Name("03".to_string()));
    /// ```
    pub fn normalized(self) -> Self {
        match self {
            Key::Name(name) => Key::parse(&name),
            index => index,
        }
    }

    /// Returns the integer value of an index key
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    /// Returns the text of a named key
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }

    /// Returns true if this is an integer key
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::Index(index as i64)
    }
}

impl From<u32> for Key {
    fn from(index: u32) -> Self {
        Key::Index(index as i64)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index as i64)
    }
}

impl From<&str> for Key {
    fn from(segment: &str) -> Self {
        Key::parse(segment)
    }
}

impl From<String> for Key {
    fn from(segment: String) -> Self {
        Key::parse(&segment)
    }
}

impl From<&String> for Key {
    fn from(segment: &String) -> Self {
        Key::parse(segment)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}
