//! Value objects with accessors dispatched by method name.
//!
//! A [`LazyValueObject`] stores a flat set of named values and answers calls
//! such as `getFooBar`, `hasFooBar`, `setFooBar` and `resetFooBar`. The method
//! name is split into words before each uppercase letter that follows a
//! non-uppercase one; the first word is the verb and the rest, joined with
//! `_`, name the value. Case is preserved, so `setFooBar` writes `Foo_Bar`.
//!
//! ```
//! use dotbag::container::Value;
//! use dotbag::lazy::LazyValueObject;
//!
//! let mut object = LazyValueObject::new();
//! object.call("setUserName", &[Value::from("alice")])?;
//!
//! assert_eq!(object.call("getUserName", &[])?, "alice");
//! assert_eq!(object.call("hasUserName", &[])?, true);
//! assert_eq!(object.get_data("User_Name"), Some(&Value::from("alice")));
//! # Ok::<(), dotbag::Error>(())
//! ```

pub mod errors;

pub use errors::ObjectError;

use tracing::trace;

use crate::container::{Record, Value};

const TYPE_NAME: &str = "LazyValueObject";

/// The verbs a [`LazyValueObject`] understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Has,
    Set,
    Reset,
}

impl Verb {
    fn parse(word: &str) -> Option<Self> {
        match word {
            "get" => Some(Verb::Get),
            "has" => Some(Verb::Has),
            "set" => Some(Verb::Set),
            "reset" => Some(Verb::Reset),
            _ => None,
        }
    }

    fn writes(self) -> bool {
        matches!(self, Verb::Set | Verb::Reset)
    }
}

/// A flat value object driven by method names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LazyValueObject {
    data: Record,
    read_only: bool,
}

impl LazyValueObject {
    /// Creates an empty, writable object
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the `set` and `reset` verbs. This cannot be undone.
    pub fn make_read_only(&mut self) {
        self.read_only = true;
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Dispatches a method call by name.
    ///
    /// `get` returns the stored value or `Null`, `has` returns a boolean and
    /// `set`/`reset` return `Null`. `set` stores its first argument.
    pub fn call(&mut self, method: &str, args: &[Value]) -> crate::Result<Value> {
        let (verb, name) = split_method_name(method);
        let verb = match Verb::parse(verb) {
            Some(verb) if !(verb.writes() && self.read_only) => verb,
            _ => {
                return Err(ObjectError::NoSuchMethod {
                    type_name: TYPE_NAME,
                    method: method.to_string(),
                }
                .into());
            }
        };
        trace!(method, ?verb, name = %name, "Dispatching call");

        match verb {
            Verb::Get => Ok(self.get_data(&name).cloned().unwrap_or_default()),
            Verb::Has => Ok(Value::Bool(self.has_data(&name))),
            Verb::Set => {
                let value = args
                    .first()
                    .cloned()
                    .ok_or_else(|| ObjectError::MissingArgument {
                        method: method.to_string(),
                    })?;
                self.set_data(name, value)?;
                Ok(Value::Null)
            }
            Verb::Reset => {
                self.reset_data(&name)?;
                Ok(Value::Null)
            }
        }
    }

    /// Returns a stored value
    pub fn get_data(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Returns true if a value is stored under `name`
    pub fn has_data(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Stores a value, failing with [`ObjectError::ReadOnly`] on a read-only
    /// object
    pub fn set_data(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> crate::Result<()> {
        let name = name.into();
        self.check_writable(&name)?;
        self.data.set(name, value);
        Ok(())
    }

    /// Removes a stored value and returns it
    pub fn reset_data(&mut self, name: &str) -> crate::Result<Option<Value>> {
        self.check_writable(name)?;
        Ok(self.data.remove(name))
    }

    /// Returns every stored value
    pub fn get_all_data(&self) -> &Record {
        &self.data
    }

    fn check_writable(&self, name: &str) -> Result<(), ObjectError> {
        if self.read_only {
            Err(ObjectError::ReadOnly {
                name: name.to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl From<Record> for LazyValueObject {
    fn from(data: Record) -> Self {
        Self {
            data,
            read_only: false,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LazyValueObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.data, serializer)
    }
}

/// Splits `getFooBar` into `("get", "Foo_Bar")`.
fn split_method_name(method: &str) -> (&str, String) {
    let mut words = Vec::new();
    let mut start = 0;
    let mut previous: Option<char> = None;

    for (index, c) in method.char_indices() {
        if c.is_ascii_uppercase() && previous.is_some_and(|p| !p.is_ascii_uppercase()) {
            words.push(&method[start..index]);
            start = index;
        }
        previous = Some(c);
    }
    words.push(&method[start..]);

    match words.split_first() {
        Some((verb, rest)) => (*verb, rest.join("_")),
        None => (method, String::new()),
    }
}
