//! JSON value representation.

use std::collections::HashMap;
use std::fmt;

use crate::encode::{encode, Format};
use crate::error::{Error, Result};

/// A parsed JSON value.
///
/// Containers own their children, so dropping a value drops its whole
/// subtree. Equality is structural; object key order does not matter.
#[derive(Clone, PartialEq, Eq)]
pub enum Value {
    /// Signed 64-bit integer.
    Integer(i64),
    /// UTF-8 string.
    String(String),
    /// Array of values.
    Array(Vec<Value>),
    /// Object (key-value map).
    Object(HashMap<String, Value>),
}

impl Value {
    /// Name of this value's variant, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    /// Returns the integer if this is an `Integer`.
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Value::Integer(n) => Ok(*n),
            _ => Err(self.mismatch("integer")),
        }
    }

    /// Returns a reference to the string if this is a `String`.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch("string")),
        }
    }

    /// Returns the elements if this is an `Array`.
    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(arr) => Ok(arr),
            _ => Err(self.mismatch("array")),
        }
    }

    /// Returns the members if this is an `Object`.
    pub fn as_object(&self) -> Result<&HashMap<String, Value>> {
        match self {
            Value::Object(obj) => Ok(obj),
            _ => Err(self.mismatch("object")),
        }
    }

    /// Look up a member of an object.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.as_object()?
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Look up an element of an array.
    pub fn at(&self, position: usize) -> Result<&Value> {
        let arr = self.as_array()?;
        arr.get(position).ok_or(Error::IndexOutOfRange {
            index: position,
            len: arr.len(),
        })
    }

    /// Look up a child by key (objects) or position (arrays).
    ///
    /// ```
    /// let doc = libjsondoc::parse_document(r#"{"ports": [80, 443]}"#).unwrap();
    /// let port = doc.root().index("ports").unwrap().index(1).unwrap();
    /// assert_eq!(port.as_integer().unwrap(), 443);
    /// ```
    pub fn index<I: ValueIndex>(&self, index: I) -> Result<&Value> {
        index.index_into(self)
    }

    /// Follow a dotted path such as `db.host` or `servers.0.name`.
    ///
    /// Numeric segments index arrays; every other segment, and any segment
    /// applied to an object, is a key. An empty path returns `self`.
    pub fn path(&self, path: &str) -> Result<&Value> {
        if path.is_empty() {
            return Ok(self);
        }
        path.split('.').try_fold(self, |value, segment| match value {
            Value::Array(_) => match segment.parse::<usize>() {
                Ok(position) => value.at(position),
                Err(_) => Err(value.mismatch("object")),
            },
            _ => value.get(segment),
        })
    }
}

/// A key or position usable with [`Value::index`].
pub trait ValueIndex {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value>;
}

impl ValueIndex for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        value.at(*self)
    }
}

impl ValueIndex for str {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        value.get(self)
    }
}

impl ValueIndex for String {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        value.get(self)
    }
}

impl<T: ValueIndex + ?Sized> ValueIndex for &T {
    fn index_into<'v>(&self, value: &'v Value) -> Result<&'v Value> {
        (**self).index_into(value)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Array(arr) => f.debug_list().entries(arr).finish(),
            Value::Object(obj) => f.debug_map().entries(obj).finish(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self, Format::Compact))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(obj: HashMap<String, Value>) -> Self {
        Value::Object(obj)
    }
}
